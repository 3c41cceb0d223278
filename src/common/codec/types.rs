// Compaction
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Compaction {
    Text,
    Byte,
    Numeric,
}

// Planner key: the four text sub-tables plus the two non-text modes
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Submode {
    Alpha = 0,
    Lower = 1,
    Mixed = 2,
    Punct = 3,
    Byte = 4,
    Numeric = 5,
}

pub const SUBMODES: [Submode; 6] = [
    Submode::Alpha,
    Submode::Lower,
    Submode::Mixed,
    Submode::Punct,
    Submode::Byte,
    Submode::Numeric,
];

pub const TEXT_TABLES: [Submode; 4] =
    [Submode::Alpha, Submode::Lower, Submode::Mixed, Submode::Punct];

impl Submode {
    pub fn is_text(&self) -> bool {
        (*self as usize) < 4
    }

    pub fn bit(&self) -> u8 {
        debug_assert!(self.is_text(), "Only text tables have a class bit: {self:?}");
        1 << *self as u8
    }

    pub fn compaction(&self) -> Compaction {
        match self {
            Self::Byte => Compaction::Byte,
            Self::Numeric => Compaction::Numeric,
            _ => Compaction::Text,
        }
    }

    // Text values needed to latch from one table to another
    pub fn latch(&self, to: Submode) -> &'static [u8] {
        debug_assert!(self.is_text() && to.is_text(), "Latch between text tables only");
        match (self, to) {
            (a, b) if *a == b => &[],
            (Self::Alpha, Self::Lower) => &[LL],
            (Self::Alpha, Self::Mixed) => &[ML],
            (Self::Alpha, Self::Punct) => &[ML, PL],
            (Self::Lower, Self::Alpha) => &[ML, AL],
            (Self::Lower, Self::Mixed) => &[ML],
            (Self::Lower, Self::Punct) => &[ML, PL],
            (Self::Mixed, Self::Alpha) => &[AL],
            (Self::Mixed, Self::Lower) => &[LL],
            (Self::Mixed, Self::Punct) => &[PL],
            (Self::Punct, Self::Alpha) => &[PAL],
            (Self::Punct, Self::Lower) => &[PAL, LL],
            (Self::Punct, Self::Mixed) => &[PAL, ML],
            _ => unreachable!("Invalid latch {self:?} -> {to:?}"),
        }
    }

    // Table a byte of class `mask` can be shifted into for one value
    pub fn shift_for(&self, mask: u8) -> Option<Submode> {
        if *self == Self::Lower && mask & Self::Alpha.bit() != 0 {
            Some(Self::Alpha)
        } else if *self != Self::Punct && mask & Self::Punct.bit() != 0 {
            Some(Self::Punct)
        } else {
            None
        }
    }

    pub fn shift_value(&self) -> u8 {
        match self {
            Self::Alpha => AS,
            Self::Punct => PS,
            _ => unreachable!("No shift into {self:?}"),
        }
    }
}

// How one byte of a text run is written
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TextStep {
    // Latch to the table unless already there, then the value
    Latch(Submode),
    // One-shot shift into the table, the current table is kept
    Shift(Submode),
    // 913 byte shift, the pending value pair is padded first
    Byte,
}

// Text values of the control characters
pub const LL: u8 = 27;
pub const AS: u8 = 27;
pub const ML: u8 = 28;
pub const AL: u8 = 28;
pub const PS: u8 = 29;
pub const PL: u8 = 25;
pub const PAL: u8 = 29;

// Mixed table, values 0 to 24
const MIXED: &[u8; 25] = b"0123456789&\r\t,:#-.$/+%*=^";

// Punctuation table, values 0 to 28
const PUNCT: &[u8; 29] = b";<>@[\\]_`~!\r\t,:\n-.$/\"|*()?{}'";

// Mode classifier
//------------------------------------------------------------------------------

// Bitmask over the text tables (bit i = TEXT_TABLES[i]); zero means byte only
pub fn classify(b: u8) -> u8 {
    let mut mask = 0;
    if b.is_ascii_uppercase() || b == b' ' {
        mask |= Submode::Alpha.bit();
    }
    if b.is_ascii_lowercase() || b == b' ' {
        mask |= Submode::Lower.bit();
    }
    if b == b' ' || MIXED.contains(&b) {
        mask |= Submode::Mixed.bit();
    }
    if PUNCT.contains(&b) {
        mask |= Submode::Punct.bit();
    }
    mask
}

pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

// Value of a byte within a text table
pub fn text_value(table: Submode, b: u8) -> u8 {
    debug_assert!(classify(b) & table.bit() != 0, "Byte {b} not in table {table:?}");
    match (table, b) {
        (_, b' ') if table != Submode::Punct => 26,
        (Submode::Alpha, _) => b - b'A',
        (Submode::Lower, _) => b - b'a',
        (Submode::Mixed, _) => position(MIXED, b),
        (Submode::Punct, _) => position(PUNCT, b),
        _ => unreachable!("Not a text table {table:?}"),
    }
}

// Byte for a text value, inverse of text_value for non-control values
pub fn text_byte(table: Submode, v: u8) -> Option<u8> {
    match (table, v) {
        (Submode::Punct, 0..=28) => Some(PUNCT[v as usize]),
        (Submode::Punct, _) => None,
        (_, 26) => Some(b' '),
        (Submode::Alpha, 0..=25) => Some(b'A' + v),
        (Submode::Lower, 0..=25) => Some(b'a' + v),
        (Submode::Mixed, 0..=24) => Some(MIXED[v as usize]),
        _ => None,
    }
}

fn position(table: &[u8], b: u8) -> u8 {
    table.iter().position(|&t| t == b).unwrap_or_default() as u8
}

#[cfg(test)]
mod classifier_tests {
    use test_case::test_case;

    use super::{classify, text_byte, text_value, Submode, TEXT_TABLES};

    #[test_case(b'A', 0b0001)]
    #[test_case(b'z', 0b0010)]
    #[test_case(b' ', 0b0111)]
    #[test_case(b'7', 0b0100)]
    #[test_case(b',', 0b1100)]
    #[test_case(b'@', 0b1000)]
    #[test_case(b'\n', 0b1000)]
    #[test_case(0x80, 0)]
    #[test_case(b'\0', 0)]
    fn test_classify(b: u8, exp: u8) {
        assert_eq!(classify(b), exp);
    }

    #[test]
    fn test_value_round_trip() {
        for b in 0..=255u8 {
            for t in TEXT_TABLES {
                if classify(b) & t.bit() != 0 {
                    assert_eq!(text_byte(t, text_value(t, b)), Some(b), "byte {b} table {t:?}");
                }
            }
        }
    }

    #[test_case(Submode::Alpha, Submode::Punct, 2)]
    #[test_case(Submode::Lower, Submode::Alpha, 2)]
    #[test_case(Submode::Mixed, Submode::Punct, 1)]
    #[test_case(Submode::Punct, Submode::Lower, 2)]
    #[test_case(Submode::Punct, Submode::Alpha, 1)]
    fn test_latch_len(from: Submode, to: Submode, exp: usize) {
        assert_eq!(from.latch(to).len(), exp);
    }

    #[test_case(Submode::Lower, b'Q', Some(Submode::Alpha))]
    #[test_case(Submode::Lower, b'!', Some(Submode::Punct))]
    #[test_case(Submode::Mixed, b',', Some(Submode::Punct))]
    #[test_case(Submode::Alpha, b'a', None)]
    #[test_case(Submode::Punct, b'!', None)]
    #[test_case(Submode::Mixed, b'A', None)]
    fn test_shift_for(from: Submode, b: u8, exp: Option<Submode>) {
        assert_eq!(from.shift_for(classify(b)), exp);
    }

    #[test]
    fn test_printable_ascii_is_text() {
        for b in 0x20..0x7F_u8 {
            assert_ne!(classify(b), 0, "byte {b}");
        }
    }
}
