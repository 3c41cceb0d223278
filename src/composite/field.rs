use super::ai::FNC1;
use crate::common::bit_utils::BitStream;
use crate::common::error::{SymbolError, SymbolResult};

// General purpose field
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum FieldMode {
    Numeric,
    Alphanumeric,
    Iso,
}

const FNC1_NUMERIC: u8 = 10;

const LATCH_ALPHANUMERIC: (u8, usize) = (0b0000, 4);
const LATCH_NUMERIC: (u8, usize) = (0b000, 3);
const LATCH_SWITCH: (u8, usize) = (0b00100, 5);
const FNC1_ALPHANUMERIC: (u8, usize) = (0b01111, 5);
const ALPHA_PAD: (u8, usize) = (0b11111, 5);

const ALPHANUMERIC_DIGIT_RUN: usize = 6;
const TRAILING_DIGITS: std::ops::RangeInclusive<usize> = 4..=5;
const ISO_DIGIT_RUN: usize = 4;
const ISO_ALPHANUMERIC_RUN: usize = 5;
const ISO_LOOKAHEAD: usize = 10;

// State of the field once all characters are consumed
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Tail {
    pub mode: FieldMode,
    // Final digit of an odd numeric run, sized once the target is known
    pub pending: Option<u8>,
    // Alpha encoded AI 90 data with nothing after it ends with an FNC1
    pub alpha_pad: bool,
}

impl Tail {
    pub fn new(mode: FieldMode) -> Self {
        Self { mode, pending: None, alpha_pad: false }
    }

    pub fn min_bits(&self) -> usize {
        if self.pending.is_some() {
            4
        } else {
            0
        }
    }

    // Writes the pending digit and pads the stream to exactly `target` bits
    pub fn finish(&self, target: usize, out: &mut BitStream) {
        debug_assert!(
            out.len() + self.min_bits() <= target,
            "Field overflows target: Len {}, Target {target}",
            out.len()
        );

        let mut mode = self.mode;
        if let Some(d) = self.pending {
            let room = target - out.len();
            if (4..=6).contains(&room) {
                out.push_bits(d + 1, 4);
            } else {
                out.push_bits(11 * d + FNC1_NUMERIC + 8, 7);
            }
            mode = FieldMode::Numeric;
        }

        let truncated = |out: &mut BitStream, (bits, size): (u8, usize)| {
            let n = size.min(target.saturating_sub(out.len()));
            out.push_bits(bits >> (size - n), n);
        };
        if self.alpha_pad {
            truncated(out, ALPHA_PAD);
        }
        if mode == FieldMode::Numeric {
            truncated(out, LATCH_ALPHANUMERIC);
        }
        out.pad_to(target, LATCH_SWITCH.0, LATCH_SWITCH.1);
    }
}

// Character classes; FNC1 counts as numeric
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum CharClass {
    Numeric,
    Alphanumeric,
    Iso,
}

fn class(b: u8) -> Option<CharClass> {
    if b == FNC1 || b.is_ascii_digit() {
        Some(CharClass::Numeric)
    } else if alphanumeric_value(b).is_some() {
        Some(CharClass::Alphanumeric)
    } else if iso_value(b).is_some() {
        Some(CharClass::Iso)
    } else {
        None
    }
}

fn numeric_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        FNC1 => Some(FNC1_NUMERIC),
        _ => None,
    }
}

fn alphanumeric_value(b: u8) -> Option<(u8, usize)> {
    let v = match b {
        b'0'..=b'9' => return Some((b - b'0' + 5, 5)),
        b'A'..=b'Z' => b - b'A' + 32,
        b'*' => 58,
        b',' => 59,
        b'-' => 60,
        b'.' => 61,
        b'/' => 62,
        _ => return None,
    };
    Some((v, 6))
}

fn iso_value(b: u8) -> Option<(u8, usize)> {
    let v = match b {
        b'0'..=b'9' => return Some((b - b'0' + 5, 5)),
        b'A'..=b'Z' => return Some((b - b'A' + 64, 7)),
        b'a'..=b'z' => return Some((b - b'a' + 90, 7)),
        b'!' => 232,
        b'"' => 233,
        b'%' => 234,
        b'&' => 235,
        b'\'' => 236,
        b'(' => 237,
        b')' => 238,
        b'*' => 239,
        b'+' => 240,
        b',' => 241,
        b'-' => 242,
        b'.' => 243,
        b'/' => 244,
        b':' => 245,
        b';' => 246,
        b'<' => 247,
        b'=' => 248,
        b'>' => 249,
        b'?' => 250,
        b'_' => 251,
        b' ' => 252,
        _ => return None,
    };
    Some((v, 8))
}

fn push(out: &mut BitStream, (bits, size): (u8, usize)) {
    out.push_bits(bits, size);
}

fn invalid(b: u8) -> SymbolError {
    SymbolError::InvalidData(format!("Character {:?} cannot be encoded in a composite component", b as char))
}

// Whether the `n` characters at `i` all fall in `classes`
fn next_all(data: &[u8], i: usize, n: usize, classes: &[CharClass]) -> bool {
    i + n <= data.len()
        && data[i..i + n].iter().all(|&b| class(b).is_some_and(|c| classes.contains(&c)))
}

// Whether the data ends in 4 or 5 numeric characters starting at `i`
fn numeric_tail(data: &[u8], i: usize) -> bool {
    TRAILING_DIGITS.contains(&(data.len() - i)) && next_all(data, i, data.len() - i, &[CharClass::Numeric])
}

// Whether no ISO only character occurs in the next characters at `i`
fn plain_ahead(data: &[u8], i: usize) -> bool {
    data[i..].iter().take(ISO_LOOKAHEAD).all(|&b| class(b) != Some(CharClass::Iso))
}

pub fn encode_general(data: &[u8], start: FieldMode, out: &mut BitStream) -> SymbolResult<Tail> {
    if let Some(&b) = data.iter().find(|&&b| class(b).is_none()) {
        return Err(invalid(b));
    }

    let len = data.len();
    let mut mode = start;
    let mut i = 0;
    while i < len {
        let b = data[i];
        match mode {
            FieldMode::Numeric => {
                if i + 1 == len && b.is_ascii_digit() {
                    return Ok(Tail { pending: Some(b - b'0'), ..Tail::new(mode) });
                }
                let pair = (numeric_value(b), data.get(i + 1).and_then(|&n| numeric_value(n)));
                match pair {
                    (Some(x), Some(y)) if !(x == FNC1_NUMERIC && y == FNC1_NUMERIC) => {
                        out.push_bits(11 * x + y + 8, 7);
                        i += 2;
                    }
                    _ => {
                        push(out, LATCH_ALPHANUMERIC);
                        mode = FieldMode::Alphanumeric;
                    }
                }
            }
            FieldMode::Alphanumeric => {
                if b == FNC1 {
                    push(out, FNC1_ALPHANUMERIC);
                    mode = FieldMode::Numeric;
                    i += 1;
                } else if class(b) == Some(CharClass::Iso) {
                    push(out, LATCH_SWITCH);
                    mode = FieldMode::Iso;
                } else if next_all(data, i, ALPHANUMERIC_DIGIT_RUN, &[CharClass::Numeric])
                    || numeric_tail(data, i)
                {
                    push(out, LATCH_NUMERIC);
                    mode = FieldMode::Numeric;
                } else {
                    push(out, alphanumeric_value(b).ok_or_else(|| invalid(b))?);
                    i += 1;
                }
            }
            FieldMode::Iso => {
                let plain = b != FNC1 && plain_ahead(data, i);
                if b == FNC1 {
                    push(out, FNC1_ALPHANUMERIC);
                    mode = FieldMode::Numeric;
                    i += 1;
                } else if plain && next_all(data, i, ISO_DIGIT_RUN, &[CharClass::Numeric]) {
                    push(out, LATCH_NUMERIC);
                    mode = FieldMode::Numeric;
                } else if plain
                    && next_all(data, i, ISO_ALPHANUMERIC_RUN, &[CharClass::Alphanumeric, CharClass::Numeric])
                {
                    push(out, LATCH_SWITCH);
                    mode = FieldMode::Alphanumeric;
                } else {
                    push(out, iso_value(b).ok_or_else(|| invalid(b))?);
                    i += 1;
                }
            }
        }
    }
    Ok(Tail::new(mode))
}

#[cfg(test)]
mod field_tests {
    use test_case::test_case;

    use super::{encode_general, FieldMode, Tail};
    use crate::common::bit_utils::BitStream;
    use crate::common::error::SymbolError;
    use crate::composite::ai::FNC1;

    fn bits_of(bs: &BitStream) -> String {
        (0..bs.len()).map(|i| if bs.get(i) { '1' } else { '0' }).collect()
    }

    fn encode(data: &[u8]) -> (String, Tail) {
        let mut bs = BitStream::new();
        let tail = encode_general(data, FieldMode::Numeric, &mut bs).unwrap();
        (bits_of(&bs), tail)
    }

    #[test]
    fn test_numeric_pairs() {
        let (bits, tail) = encode(b"1234");
        // 11 * 1 + 2 + 8 = 21, 11 * 3 + 4 + 8 = 45
        assert_eq!(bits, "0010101".to_string() + "0101101");
        assert_eq!(tail, Tail::new(FieldMode::Numeric));
    }

    #[test]
    fn test_numeric_fnc1() {
        let (bits, _) = encode(&[b'1', FNC1, b'2', b'3']);
        // 1 then FNC1: 11 + 10 + 8 = 29, then 2 3: 22 + 3 + 8 = 33
        assert_eq!(bits, "0011101".to_string() + "0100001");
    }

    #[test]
    fn test_trailing_digit_pending() {
        let (bits, tail) = encode(b"123");
        assert_eq!(bits.len(), 7);
        assert_eq!(tail.pending, Some(3));
        assert!(!tail.alpha_pad);
    }

    #[test]
    fn test_latch_to_alphanumeric() {
        let (bits, tail) = encode(b"AB");
        // 0000, A = 32, B = 33
        assert_eq!(bits, "0000".to_string() + "100000" + "100001");
        assert_eq!(tail.mode, FieldMode::Alphanumeric);
    }

    #[test]
    fn test_alphanumeric_back_to_numeric() {
        let (bits, tail) = encode(b"A123456");
        assert!(bits.starts_with(&("0000".to_string() + "100000" + "000")));
        assert_eq!(bits.len(), 4 + 6 + 3 + 7 * 3);
        assert_eq!(tail.mode, FieldMode::Numeric);
    }

    #[test]
    fn test_alphanumeric_fnc1_counts_as_digit() {
        let (bits, tail) = encode(&[b'A', b'1', b'2', FNC1, b'3', b'4', b'5']);
        // 6 numeric characters ahead: 12, FNC1 3 = 121, 45
        let exp = "0000".to_string() + "100000" + "000" + "0010101" + "1111001" + "0111001";
        assert_eq!(bits, exp);
        assert_eq!(tail.mode, FieldMode::Numeric);
    }

    #[test_case(b"AB1234", 4; "four trailing digits")]
    #[test_case(b"AB12345", 5; "five trailing digits")]
    fn test_alphanumeric_trailing_digits(data: &[u8], digits: usize) {
        let (bits, tail) = encode(data);
        assert_eq!(&bits[4 + 12..4 + 12 + 3], "000");
        assert_eq!(bits.len(), 4 + 12 + 3 + 7 * (digits / 2));
        assert_eq!(tail.pending, (digits % 2 == 1).then_some(5));
    }

    #[test]
    fn test_alphanumeric_short_digits_stay() {
        let (bits, tail) = encode(b"A12B");
        // Digits are 5 bits each inside the alphanumeric run
        assert_eq!(bits, "0000".to_string() + "100000" + "00110" + "00111" + "100001");
        assert_eq!(tail.mode, FieldMode::Alphanumeric);
    }

    #[test]
    fn test_alphanumeric_punctuation() {
        let (bits, _) = encode(b"A*,-./");
        let exp = "0000".to_string() + "100000" + "111010" + "111011" + "111100" + "111101" + "111110";
        assert_eq!(bits, exp);
    }

    #[test]
    fn test_iso_lowercase() {
        let (bits, tail) = encode(b"ab");
        // 0000 to alphanumeric, 00100 to ISO, a = 90, b = 91
        assert_eq!(bits, "0000".to_string() + "00100" + "1011010" + "1011011");
        assert_eq!(tail.mode, FieldMode::Iso);
    }

    #[test]
    fn test_iso_punctuation() {
        let (bits, _) = encode(b"a!");
        assert!(bits.ends_with("11101000"));
    }

    #[test]
    fn test_iso_back_to_alphanumeric() {
        let (bits, tail) = encode(b"aBCDEFGHIJK");
        assert_eq!(&bits[..4 + 5 + 7], "0000".to_string() + "00100" + "1011010");
        assert_eq!(&bits[16..21], "00100");
        assert_eq!(tail.mode, FieldMode::Alphanumeric);
    }

    #[test]
    fn test_iso_stays_with_lowercase_ahead() {
        let (bits, tail) = encode(b"aBCDEFb");
        // b within the next 10 characters keeps ISO, B = 65
        assert_eq!(&bits[16..23], "1000001");
        assert_eq!(bits.len(), 16 + 7 * 6);
        assert_eq!(tail.mode, FieldMode::Iso);
    }

    #[test_case(b"a1234", "000" ; "numeric latch")]
    #[test_case(b"a1234b", "00110" ; "digits stay in ISO")]
    fn test_iso_digits(data: &[u8], exp: &str) {
        let (bits, _) = encode(data);
        assert_eq!(&bits[16..16 + exp.len()], exp);
    }

    #[test]
    fn test_invalid_char() {
        let mut bs = BitStream::new();
        let res = encode_general(b"AB#", FieldMode::Numeric, &mut bs);
        assert!(matches!(res, Err(SymbolError::InvalidData(_))));
    }

    #[test_case(7 + 4, "0010101".to_string() + "0100"; "short form")]
    #[test_case(7 + 6, "0010101".to_string() + "0100" + "00"; "short form padded")]
    #[test_case(7 + 7, "0010101".to_string() + "0110011"; "long form")]
    #[test_case(7 + 12, "0010101".to_string() + "0110011" + "0000" + "0"; "long form padded")]
    fn test_finish_pending(target: usize, exp: String) {
        let mut bs = BitStream::new();
        let tail = encode_general(b"123", FieldMode::Numeric, &mut bs).unwrap();
        tail.finish(target, &mut bs);
        assert_eq!(bits_of(&bs), exp);
    }

    #[test]
    fn test_finish_padding() {
        let mut bs = BitStream::new();
        let tail = encode_general(b"AB", FieldMode::Numeric, &mut bs).unwrap();
        tail.finish(16 + 12, &mut bs);
        assert_eq!(bits_of(&bs), "0000100000100001".to_string() + "00100" + "00100" + "00");
    }

    #[test_case(12, "111110000001"; "full")]
    #[test_case(3, "111"; "truncated")]
    fn test_finish_alpha_pad(target: usize, exp: &str) {
        let mut bs = BitStream::new();
        let tail = Tail { alpha_pad: true, ..Tail::new(FieldMode::Numeric) };
        tail.finish(target, &mut bs);
        assert_eq!(bits_of(&bs), exp);
    }
}
