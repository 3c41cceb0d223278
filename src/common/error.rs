use std::fmt::{Display, Error, Formatter};

use super::metadata::CompositeMode;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum SymbolError {
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Input too long: {0}")]
    TooLong(String),
    #[error("Insufficient memory for segmentation")]
    Memory,
}

pub type SymbolResult<T> = Result<T, SymbolError>;

// Warning
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Warning {
    ColumnsAdjusted { requested: usize, used: usize },
    RowsAdjusted { requested: usize, used: usize },
    MicroColumnsIgnored { requested: usize, used: usize },
    CompositeModeChanged { from: CompositeMode, to: CompositeMode },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::ColumnsAdjusted { requested, used } => {
                write!(f, "Columns adjusted from {requested} to {used}")
            }
            Self::RowsAdjusted { requested, used } => {
                write!(f, "Rows adjusted from {requested} to {used}")
            }
            Self::MicroColumnsIgnored { requested, used } => write!(
                f,
                "Data does not fit in {requested} columns, automatically chose {used} columns"
            ),
            Self::CompositeModeChanged { from, to } => {
                write!(f, "Composite component changed from {from:?} to {to:?}")
            }
        }
    }
}

// Logs every warning as it is recorded
pub(crate) fn record(warnings: &mut Vec<Warning>, w: Warning) {
    log::warn!("{w}");
    warnings.push(w);
}
