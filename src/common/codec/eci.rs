use encoding_rs::{
    Encoding, BIG5, EUC_KR, GB18030, ISO_8859_10, ISO_8859_13, ISO_8859_14, ISO_8859_15,
    ISO_8859_16, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5, ISO_8859_6, ISO_8859_7,
    ISO_8859_8, SHIFT_JIS, WINDOWS_1250, WINDOWS_1251, WINDOWS_1252, WINDOWS_1256, WINDOWS_874,
};

use crate::common::error::{SymbolError, SymbolResult};
use crate::common::metadata::MAX_ECI;

// Segment
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment {
    pub data: Vec<u8>,
    pub eci: Option<u32>,
}

impl Segment {
    pub fn new(data: &[u8]) -> Self {
        Self { data: data.to_vec(), eci: None }
    }

    pub fn with_eci(data: &[u8], eci: u32) -> Self {
        Self { data: data.to_vec(), eci: Some(eci) }
    }

    // Transcodes text into the character set of an ECI
    pub fn from_text(text: &str, eci: u32) -> SymbolResult<Self> {
        let data = match eci {
            3 => to_latin1(text).ok_or_else(|| unmappable(text, eci))?,
            26 => text.as_bytes().to_vec(),
            _ => {
                let enc = eci_encoding(eci).ok_or_else(|| {
                    SymbolError::InvalidOption(format!("ECI {eci} has no supported character set"))
                })?;
                let (bytes, _, had_errors) = enc.encode(text);
                if had_errors {
                    return Err(unmappable(text, eci));
                }
                bytes.into_owned()
            }
        };
        Ok(Self::with_eci(&data, eci))
    }

    // Latin-1 without an ECI when possible, UTF-8 otherwise
    pub fn from_text_auto(text: &str) -> Self {
        match to_latin1(text) {
            Some(data) => Self::new(&data),
            None => Self::with_eci(text.as_bytes(), 26),
        }
    }

    pub fn validate(&self) -> SymbolResult<()> {
        match self.eci {
            Some(e) if e > MAX_ECI => {
                Err(SymbolError::InvalidOption(format!("ECI {e} out of range (0 to {MAX_ECI})")))
            }
            _ => Ok(()),
        }
    }
}

fn to_latin1(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c as u32).ok()).collect()
}

fn unmappable(text: &str, eci: u32) -> SymbolError {
    SymbolError::InvalidData(format!("{text:?} cannot be represented in ECI {eci}"))
}

fn eci_encoding(eci: u32) -> Option<&'static Encoding> {
    let enc = match eci {
        4 => ISO_8859_2,
        5 => ISO_8859_3,
        6 => ISO_8859_4,
        7 => ISO_8859_5,
        8 => ISO_8859_6,
        9 => ISO_8859_7,
        10 => ISO_8859_8,
        12 => ISO_8859_10,
        13 => WINDOWS_874,
        15 => ISO_8859_13,
        16 => ISO_8859_14,
        17 => ISO_8859_15,
        18 => ISO_8859_16,
        20 => SHIFT_JIS,
        21 => WINDOWS_1250,
        22 => WINDOWS_1251,
        23 => WINDOWS_1252,
        24 => WINDOWS_1256,
        28 => BIG5,
        29 => GB18030,
        30 => EUC_KR,
        _ => return None,
    };
    Some(enc)
}

// ECI codewords
//------------------------------------------------------------------------------

pub const ECI_SMALL: u16 = 927;
pub const ECI_MEDIUM: u16 = 926;
pub const ECI_LARGE: u16 = 925;

pub fn eci_codewords(eci: u32, out: &mut Vec<u16>) {
    debug_assert!(eci <= MAX_ECI, "ECI out of range: {eci}");

    match eci {
        0..=899 => out.extend([ECI_SMALL, eci as u16]),
        900..=810899 => out.extend([ECI_MEDIUM, (eci / 900 - 1) as u16, (eci % 900) as u16]),
        _ => out.extend([ECI_LARGE, (eci - 810900) as u16]),
    }
}

#[cfg(test)]
mod eci_tests {
    use test_case::test_case;

    use super::{eci_codewords, Segment};
    use crate::common::error::SymbolError;

    #[test_case(3, vec![927, 3])]
    #[test_case(899, vec![927, 899])]
    #[test_case(900, vec![926, 0, 0])]
    #[test_case(810899, vec![926, 899, 899])]
    #[test_case(810900, vec![925, 0])]
    #[test_case(811799, vec![925, 899])]
    fn test_eci_codewords(eci: u32, exp: Vec<u16>) {
        let mut out = vec![];
        eci_codewords(eci, &mut out);
        assert_eq!(out, exp);
    }

    #[test]
    fn test_latin1() {
        let seg = Segment::from_text("Grüße", 3).unwrap();
        assert_eq!(seg.data, b"Gr\xfc\xdfe");
        assert_eq!(seg.eci, Some(3));
    }

    #[test]
    fn test_cyrillic() {
        let seg = Segment::from_text("Привет", 7).unwrap();
        assert_eq!(seg.data, b"\xbf\xe0\xd8\xd2\xd5\xe2");
    }

    #[test]
    fn test_shift_jis() {
        let seg = Segment::from_text("テスト", 20).unwrap();
        assert_eq!(seg.data, b"\x83\x65\x83\x58\x83\x67");
    }

    #[test]
    fn test_unmappable() {
        let res = Segment::from_text("日本", 3);
        assert!(matches!(res, Err(SymbolError::InvalidData(_))));
        let res = Segment::from_text("abc", 1);
        assert!(matches!(res, Err(SymbolError::InvalidOption(_))));
    }

    #[test]
    fn test_auto() {
        assert_eq!(Segment::from_text_auto("café"), Segment::new(b"caf\xe9"));
        assert_eq!(Segment::from_text_auto("€5"), Segment::with_eci("€5".as_bytes(), 26));
    }

    #[test]
    fn test_validate() {
        assert!(Segment::with_eci(b"a", 811799).validate().is_ok());
        assert!(matches!(
            Segment::with_eci(b"a", 811800).validate(),
            Err(SymbolError::InvalidOption(_))
        ));
    }
}
