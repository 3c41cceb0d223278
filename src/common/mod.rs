pub mod bit_utils;
pub mod codec;
pub mod ec;
pub mod error;
pub mod metadata;
pub mod tables;

pub use bit_utils::*;
pub use error::*;
pub use metadata::*;
