use std::sync::LazyLock;

// Error correction over GF(929)
//------------------------------------------------------------------------------

pub const MODULUS: u32 = 929;

const GENERATOR: u32 = 3;

// Largest check codeword count of MicroPDF417 and the composite components
const MAX_SMALL_ECC: usize = 64;

// Coefficients of prod (x - 3^i), i = 1..=k, lowest degree first, leading 1 dropped
static COEFFICIENTS: LazyLock<Vec<Vec<u16>>> = LazyLock::new(|| {
    (0..=512)
        .map(|k: usize| {
            if k > 0 && (k <= MAX_SMALL_ECC || k.is_power_of_two()) {
                generator_poly(k)
            } else {
                Vec::new()
            }
        })
        .collect()
});

fn generator_poly(k: usize) -> Vec<u16> {
    // Highest degree first while multiplying out
    let mut poly = vec![1u32];
    let mut root = 1;
    for _ in 0..k {
        root = root * GENERATOR % MODULUS;
        let mut next = vec![0u32; poly.len() + 1];
        for (j, &c) in poly.iter().enumerate() {
            next[j] = (next[j] + c) % MODULUS;
            next[j + 1] = (next[j + 1] + MODULUS - c * root % MODULUS) % MODULUS;
        }
        poly = next;
    }
    poly.iter().rev().take(k).map(|&c| c as u16).collect()
}

pub fn coefficients(k: usize) -> &'static [u16] {
    let coefs = &COEFFICIENTS[k];
    debug_assert!(coefs.len() == k, "No generator polynomial for {k} check codewords");
    coefs
}

// Check codewords for a PDF417 error correction level
pub fn ecc_len(level: u8) -> usize {
    debug_assert!(level <= 8, "Invalid error correction level {level}");
    2 << level
}

pub fn ecc(data: &[u16], k: usize) -> Vec<u16> {
    let coefs = coefficients(k);
    let mut acc = vec![0u32; k];
    for &d in data {
        let t = (d as u32 + acc[k - 1]) % MODULUS;
        for j in (1..k).rev() {
            acc[j] = (acc[j - 1] + MODULUS - t * coefs[j] as u32 % MODULUS) % MODULUS;
        }
        acc[0] = (MODULUS - t * coefs[0] as u32 % MODULUS) % MODULUS;
    }
    acc.iter().rev().map(|&a| ((MODULUS - a) % MODULUS) as u16).collect()
}
