//! # stackism
//!
//! A Rust library for generating PDF417 family stacked barcodes: PDF417, Compact PDF417,
//! MicroPDF417 and the 2D components of GS1 Composite symbols.
//!
//! ## Features
//!
//! - **Optimal Compaction**: Input is split into Text, Numeric and Byte runs by a shortest path
//!   search, or by a fast greedy heuristic
//! - **Error Correction**: Reed-Solomon check codewords over GF(929), levels 0 to 8
//! - **Automatic Sizing**: Error correction level, columns and rows are chosen when not given
//! - **Structured Append**: Messages split across several symbols via macro control blocks
//! - **GS1 Composite**: CC-A, CC-B and CC-C components stacked over a caller supplied linear symbol
//!
//! ## Quick Start
//!
//! ### Simple PDF417 Generation
//!
//! ```rust
//! use stackism::SymbolBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only data, all other settings are automatically chosen
//! let symbol = SymbolBuilder::new(b"Hello, World!").build()?;
//!
//! println!("{}", symbol.to_str(1));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use stackism::{StructuredAppend, SymbolBuilder, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = SymbolBuilder::new(b"Hello, World!")
//!     .symbology(Symbology::CompactPdf417) // If not provided, defaults to Symbology::Pdf417
//!     .ec_level(4)                          // If not provided, chosen from the data length
//!     .columns(5)                           // If not provided, chosen for a roughly square symbol
//!     .structured_append(StructuredAppend::with_id(1, 2, "42"))
//!     .build()?;
//!
//! assert_eq!(symbol.layout().columns, 5);
//! # Ok(())
//! # }
//! ```
//!
//! ### GS1 Composite
//!
//! ```rust
//! use stackism::{Carrier, CompositeBuilder, CompositeMode, LinearSymbol, SymbolResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Linear symbols are drawn by the caller
//! let ean13 = |_: Carrier, _: &str, _: CompositeMode| -> SymbolResult<LinearSymbol> {
//!     Ok(LinearSymbol::new(vec![vec![true; 95]], vec![50]))
//! };
//! let symbol = CompositeBuilder::new(Carrier::Ean13, "331234567890", "[10]ABC123", &ean13)
//!     .build()?;
//!
//! assert_eq!(symbol.layout().composite, Some(CompositeMode::CcA));
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbol Components
//!
//! ### Symbologies
//! - **PDF417**: 1 to 30 data columns and 3 to 90 rows, up to 928 codewords
//! - **Compact PDF417**: PDF417 without the right row indicator, closed by a single bar
//! - **MicroPDF417**: 34 fixed variants of 1 to 4 columns with fixed error correction
//!
//! ### Error Correction Levels
//! - Level `n` adds `2^(n+1)` check codewords, from 2 at level 0 to 512 at level 8
//!
//! ### Warnings
//! Adjustments made while sizing a symbol are reported as [`Warning`] values on the built
//! [`Symbol`] and logged through the `log` facade.

#![allow(clippy::items_after_test_module)]

mod builder;
pub mod common;
pub mod composite;

pub use builder::{Layout, Symbol, SymbolBuilder};
pub use common::codec::Segment;
pub use common::error::{SymbolError, SymbolResult, Warning};
pub use common::metadata::{Carrier, CompositeMode, StructuredAppend, Symbology};
pub use composite::{CompositeBuilder, LinearEncoder, LinearSymbol};
