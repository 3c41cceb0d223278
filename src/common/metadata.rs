use super::error::{SymbolError, SymbolResult};

// Symbology
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Symbology {
    Pdf417,
    CompactPdf417,
    MicroPdf417,
    Composite(Carrier),
}

impl Symbology {
    // Height of one row in X units before any caller minimum is applied
    pub fn row_height(&self) -> usize {
        match self {
            Self::Pdf417 | Self::CompactPdf417 => 3,
            Self::MicroPdf417 => 2,
            Self::Composite(_) => 2,
        }
    }
}

// Linear carrier of a composite symbol
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carrier {
    Ean13,
    Ean8,
    UpcA,
    UpcE,
    Gs1_128,
    DataBarOmni,
    DataBarLimited,
    DataBarExpanded,
    DataBarStacked,
    DataBarStackedOmni,
    DataBarExpandedStacked,
}

impl Carrier {
    // Data columns of the CC-A/CC-B component sitting on this carrier
    pub fn cc_columns(&self) -> usize {
        match self {
            Self::Ean13 | Self::UpcA | Self::Gs1_128 | Self::DataBarOmni => 4,
            Self::DataBarExpanded | Self::DataBarExpandedStacked => 4,
            Self::Ean8 | Self::DataBarLimited => 3,
            Self::UpcE | Self::DataBarStacked | Self::DataBarStackedOmni => 2,
        }
    }

    pub fn supports_cc_c(&self) -> bool {
        matches!(self, Self::Gs1_128)
    }
}

// Composite component
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub enum CompositeMode {
    CcA,
    CcB,
    CcC,
}

impl CompositeMode {
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::CcA => Some(Self::CcB),
            Self::CcB => Some(Self::CcC),
            Self::CcC => None,
        }
    }
}

// Structured append
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StructuredAppend {
    pub index: usize,
    pub count: usize,
    pub id: Option<String>,
}

impl StructuredAppend {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count, id: None }
    }

    pub fn with_id(index: usize, count: usize, id: &str) -> Self {
        Self { index, count, id: Some(id.to_string()) }
    }

    pub fn is_last(&self) -> bool {
        self.index == self.count
    }

    pub fn validate(&self) -> SymbolResult<()> {
        if !(2..=MAX_SEGMENT_COUNT).contains(&self.count) {
            return Err(SymbolError::InvalidOption(format!(
                "Structured append count {} out of range (2 to {MAX_SEGMENT_COUNT})",
                self.count
            )));
        }
        if !(1..=self.count).contains(&self.index) {
            return Err(SymbolError::InvalidOption(format!(
                "Structured append index {} out of range (1 to {})",
                self.index, self.count
            )));
        }
        if let Some(id) = &self.id {
            if id.len() > MAX_ID_DIGITS {
                return Err(SymbolError::InvalidOption(format!(
                    "Structured append ID has {} digits (maximum {MAX_ID_DIGITS})",
                    id.len()
                )));
            }
            if let Some(c) = id.chars().find(|c| !c.is_ascii_digit()) {
                return Err(SymbolError::InvalidData(format!(
                    "Structured append ID contains non-digit character {c:?}"
                )));
            }
        }
        Ok(())
    }
}

// Global constants
//------------------------------------------------------------------------------

pub const MAX_EC_LEVEL: u8 = 8;

pub const MIN_ROWS: usize = 3;

pub const MAX_ROWS: usize = 90;

pub const MAX_COLUMNS: usize = 30;

pub const MAX_CODEWORDS: usize = 928;

pub const MAX_MICRO_COLUMNS: usize = 4;

pub const MAX_ECI: u32 = 811799;

pub const MAX_SEGMENT_COUNT: usize = 99999;

pub const MAX_ID_DIGITS: usize = 30;

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{Carrier, CompositeMode, StructuredAppend};
    use crate::common::error::SymbolError;

    #[test]
    fn test_composite_mode_order() {
        assert_eq!(CompositeMode::CcA.next(), Some(CompositeMode::CcB));
        assert_eq!(CompositeMode::CcB.next(), Some(CompositeMode::CcC));
        assert_eq!(CompositeMode::CcC.next(), None);
        assert!(CompositeMode::CcA < CompositeMode::CcC);
    }

    #[test_case(Carrier::Ean13, 4)]
    #[test_case(Carrier::Ean8, 3)]
    #[test_case(Carrier::UpcE, 2)]
    #[test_case(Carrier::DataBarLimited, 3)]
    #[test_case(Carrier::DataBarExpandedStacked, 4)]
    fn test_cc_columns(carrier: Carrier, exp: usize) {
        assert_eq!(carrier.cc_columns(), exp);
    }

    #[test_case(StructuredAppend::new(1, 2); "first of two")]
    #[test_case(StructuredAppend::new(99999, 99999); "last of max")]
    #[test_case(StructuredAppend::with_id(2, 3, "007"); "numeric id")]
    fn test_valid_structured_append(sa: StructuredAppend) {
        assert_eq!(sa.validate(), Ok(()));
    }

    #[test_case(StructuredAppend::new(1, 1); "count too small")]
    #[test_case(StructuredAppend::new(1, 100000); "count too large")]
    #[test_case(StructuredAppend::new(0, 3); "index zero")]
    #[test_case(StructuredAppend::new(4, 3); "index above count")]
    #[test_case(StructuredAppend::with_id(1, 3, &"1".repeat(31)); "id too long")]
    fn test_invalid_structured_append_option(sa: StructuredAppend) {
        assert!(matches!(sa.validate(), Err(SymbolError::InvalidOption(_))));
    }

    #[test]
    fn test_non_digit_id() {
        let sa = StructuredAppend::with_id(1, 3, "12A");
        assert!(matches!(sa.validate(), Err(SymbolError::InvalidData(_))));
    }
}
