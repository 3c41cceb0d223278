use std::{fmt::Display, mem};

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self { data: Vec::with_capacity((bits + 7) >> 3), len: 0, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }

    pub fn get(&self, pos: usize) -> bool {
        debug_assert!(pos < self.len, "Out of bitstream bounds: Len {}, Pos {pos}", self.len);
        (self.data[pos >> 3] << (pos & 7)) & 0x80 != 0
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(size <= 64, "Cannot push more than 64 bits at once: Size {size}");

        let bits = bits.to_u64().unwrap_or_default();
        for i in (0..size).rev() {
            self.push((bits >> i) & 1 == 1);
        }
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }
        self.len += 1;
    }

    // Appends repetitions of a pattern until the stream holds exactly `target` bits
    pub fn pad_to(&mut self, target: usize, pattern: u8, size: usize) {
        debug_assert!(self.len <= target, "Stream overflows target: Len {}, Target {target}", self.len);

        let mut i = 0;
        while self.len < target {
            self.push((pattern >> (size - 1 - i)) & 1 == 1);
            i = (i + 1) % size;
        }
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    // Takes up to 128 bits as one integer, used for base 928 conversion
    pub fn take_wide(&mut self, n: usize) -> Option<u128> {
        debug_assert!(n <= 128, "Cannot take more than 128 bits: N {n}");

        if self.cursor + n > self.len {
            return None;
        }

        let mut res = 0u128;
        for _ in 0..n {
            res = (res << 1) | self.get(self.cursor) as u128;
            self.cursor += 1;
        }
        Some(res)
    }

    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }
}

#[cfg(test)]
mod bit_stream_take_tests {

    use super::BitStream;

    fn ones(n: usize) -> BitStream {
        let mut bs = BitStream::new();
        (0..n).for_each(|_| bs.push(true));
        bs
    }

    #[test]
    fn test_take_wide() {
        let mut bs = ones(80);
        assert_eq!(bs.take_wide(69), Some((1u128 << 69) - 1));
        assert_eq!(bs.take_wide(12), None);
        assert_eq!(bs.remaining(), 11);
        assert_eq!(bs.take_wide(11), Some((1u128 << 11) - 1));
        assert_eq!(bs.remaining(), 0);
    }

    #[test]
    fn test_take_wide_order() {
        let mut bs = BitStream::new();
        bs.push_bits(0b1011u8, 4);
        bs.push_bits(0b0110_0001u8, 8);
        assert_eq!(bs.take_wide(3), Some(0b101));
        assert_eq!(bs.take_wide(9), Some(0b1_0110_0001));
        assert_eq!(bs.take_wide(0), Some(0));
    }
}
