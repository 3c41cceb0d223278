use crate::common::error::{SymbolError, SymbolResult};

// GS1 element strings
//------------------------------------------------------------------------------

pub const FNC1: u8 = 0x1D;

const MIN_AI_LEN: usize = 2;
const MAX_AI_LEN: usize = 4;
const MAX_DATA_LEN: usize = 90;

// Data length of AIs that need no FNC1 separator, keyed on their first two digits
fn predefined_len(ai: &[u8]) -> Option<usize> {
    match &ai[..2] {
        b"00" => Some(18),
        b"01" | b"02" | b"03" => Some(14),
        b"04" => Some(16),
        b"11" | b"12" | b"13" | b"14" | b"15" | b"16" | b"17" | b"18" | b"19" => Some(6),
        b"20" => Some(2),
        b"31" | b"32" | b"33" | b"34" | b"35" | b"36" => Some(6),
        b"41" => Some(13),
        _ => None,
    }
}

pub fn is_gs1_char(b: u8) -> bool {
    matches!(b, b'!' | b'"' | b'%'..=b'?' | b'A'..=b'Z' | b'_' | b'a'..=b'z')
}

// Flattens bracketed `[AI]data` elements into AI digits and data, separating
// variable length fields with FNC1
pub fn parse(input: &str) -> SymbolResult<Vec<u8>> {
    let invalid = |msg: String| SymbolError::InvalidData(msg);
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Err(invalid("No composite data".to_string()));
    }

    let mut elements: Vec<(&[u8], &[u8])> = vec![];
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            return Err(invalid(format!("Expected '[' at position {i}")));
        }
        let close = bytes[i..]
            .iter()
            .position(|&b| b == b']')
            .map(|p| i + p)
            .ok_or_else(|| invalid(format!("Unterminated AI at position {i}")))?;
        let ai = &bytes[i + 1..close];
        if !(MIN_AI_LEN..=MAX_AI_LEN).contains(&ai.len()) || !ai.iter().all(u8::is_ascii_digit) {
            return Err(invalid(format!("Invalid AI {:?}", String::from_utf8_lossy(ai))));
        }

        let start = close + 1;
        let end = bytes[start..].iter().position(|&b| b == b'[').map_or(bytes.len(), |p| start + p);
        let data = &bytes[start..end];
        if data.is_empty() || data.len() > MAX_DATA_LEN {
            return Err(invalid(format!(
                "AI ({}) data length {} out of range (1 to {MAX_DATA_LEN})",
                String::from_utf8_lossy(ai),
                data.len()
            )));
        }
        if let Some(&b) = data.iter().find(|&&b| !is_gs1_char(b)) {
            return Err(invalid(format!("Invalid character {:?} in AI data", b as char)));
        }
        if let Some(len) = predefined_len(ai).filter(|&len| len != data.len()) {
            return Err(invalid(format!(
                "AI ({}) expects {len} characters, got {}",
                String::from_utf8_lossy(ai),
                data.len()
            )));
        }
        elements.push((ai, data));
        i = end;
    }

    let mut res = Vec::with_capacity(bytes.len());
    let n = elements.len();
    for (k, (ai, data)) in elements.into_iter().enumerate() {
        res.extend_from_slice(ai);
        res.extend_from_slice(data);
        if k + 1 < n && predefined_len(ai).is_none() {
            res.push(FNC1);
        }
    }
    Ok(res)
}

#[cfg(test)]
mod ai_tests {
    use test_case::test_case;

    use super::{is_gs1_char, parse, FNC1};
    use crate::common::error::SymbolError;

    #[test]
    fn test_fixed_length_no_separator() {
        let res = parse("[01]12345678901231[10]ABC123").unwrap();
        assert_eq!(res, b"011234567890123110ABC123");
    }

    #[test]
    fn test_variable_length_separator() {
        let res = parse("[10]ABC[21]XYZ").unwrap();
        let mut exp = b"10ABC".to_vec();
        exp.push(FNC1);
        exp.extend_from_slice(b"21XYZ");
        assert_eq!(res, exp);
    }

    #[test]
    fn test_four_digit_ai() {
        let res = parse("[3103]000189[90]A").unwrap();
        assert_eq!(res, b"310300018990A");
    }

    #[test_case(""; "empty")]
    #[test_case("10ABC"; "missing bracket")]
    #[test_case("[10ABC"; "unterminated")]
    #[test_case("[1]ABC"; "short ai")]
    #[test_case("[12345]ABC"; "long ai")]
    #[test_case("[1A]ABC"; "non digit ai")]
    #[test_case("[10]"; "empty data")]
    #[test_case("[10]AB CD"; "space")]
    #[test_case("[10]AB$"; "dollar")]
    #[test_case("[01]123"; "short gtin")]
    fn test_invalid(input: &str) {
        assert!(matches!(parse(input), Err(SymbolError::InvalidData(_))));
    }

    #[test]
    fn test_data_too_long() {
        let input = format!("[10]{}", "A".repeat(91));
        assert!(matches!(parse(&input), Err(SymbolError::InvalidData(_))));
    }

    #[test]
    fn test_charset() {
        let count = (0..=255u8).filter(|&b| is_gs1_char(b)).count();
        assert_eq!(count, 82);
        assert!(!is_gs1_char(b' '));
        assert!(!is_gs1_char(b'#'));
        assert!(is_gs1_char(b'_'));
    }
}
