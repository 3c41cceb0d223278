mod rows;
mod sizer;
mod symbol;

pub(crate) use rows::{cca_rows, micro_rows, pdf417_rows};
pub use symbol::{Layout, Symbol};

use crate::common::{
    codec::{assemble, compact::LATCH_TEXT, Segment, Stream},
    ec::{ecc, ecc_len},
    error::{SymbolError, SymbolResult, Warning},
    metadata::{
        StructuredAppend, Symbology, MAX_COLUMNS, MAX_EC_LEVEL, MAX_MICRO_COLUMNS, MAX_ROWS,
        MIN_ROWS,
    },
};

// Codewords with check codewords, effective layout and module rows
type Built = (Vec<u16>, Layout, Vec<Vec<bool>>);

#[derive(Debug, Clone)]
pub struct SymbolBuilder {
    segments: Vec<Segment>,
    symbology: Symbology,
    ec_level: Option<u8>,
    columns: Option<usize>,
    rows: Option<usize>,
    height: Option<usize>,
    structured_append: Option<StructuredAppend>,
    reader_init: bool,
    fast: bool,
}

impl SymbolBuilder {
    pub fn new(data: &[u8]) -> Self {
        Self::with_segments(vec![Segment::new(data)])
    }

    pub fn with_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            symbology: Symbology::Pdf417,
            ec_level: None,
            columns: None,
            rows: None,
            height: None,
            structured_append: None,
            reader_init: false,
            fast: false,
        }
    }

    pub fn data(&mut self, data: &[u8]) -> &mut Self {
        self.segments = vec![Segment::new(data)];
        self
    }

    pub fn segments(&mut self, segments: Vec<Segment>) -> &mut Self {
        self.segments = segments;
        self
    }

    pub fn symbology(&mut self, symbology: Symbology) -> &mut Self {
        self.symbology = symbology;
        self
    }

    pub fn ec_level(&mut self, ec_level: u8) -> &mut Self {
        self.ec_level = Some(ec_level);
        self
    }

    pub fn unset_ec_level(&mut self) -> &mut Self {
        self.ec_level = None;
        self
    }

    pub fn columns(&mut self, columns: usize) -> &mut Self {
        self.columns = Some(columns);
        self
    }

    pub fn unset_columns(&mut self) -> &mut Self {
        self.columns = None;
        self
    }

    pub fn rows(&mut self, rows: usize) -> &mut Self {
        self.rows = Some(rows);
        self
    }

    pub fn unset_rows(&mut self) -> &mut Self {
        self.rows = None;
        self
    }

    // Minimum symbol height in X units
    pub fn height(&mut self, height: usize) -> &mut Self {
        self.height = Some(height);
        self
    }

    pub fn structured_append(&mut self, sa: StructuredAppend) -> &mut Self {
        self.structured_append = Some(sa);
        self
    }

    pub fn reader_init(&mut self, reader_init: bool) -> &mut Self {
        self.reader_init = reader_init;
        self
    }

    pub fn fast(&mut self, fast: bool) -> &mut Self {
        self.fast = fast;
        self
    }

    // Fixes the options a previous build settled on
    pub fn pin(&mut self, symbol: &Symbol) -> &mut Self {
        let layout = symbol.layout();
        self.symbology = layout.symbology;
        self.columns = Some(layout.columns);
        match layout.symbology {
            Symbology::Pdf417 | Symbology::CompactPdf417 => {
                self.ec_level = layout.ec_level;
                self.rows = Some(layout.rows);
            }
            _ => {
                self.ec_level = None;
                self.rows = None;
            }
        }
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Symbology: {:?}, Ec level: {:?}, Columns: {:?}, Rows: {:?} }}",
            self.symbology, self.ec_level, self.columns, self.rows
        )
    }
}

#[cfg(test)]
mod builder_util_tests {
    use super::SymbolBuilder;
    use crate::common::metadata::Symbology;

    #[test]
    fn test_metadata() {
        let mut builder = SymbolBuilder::new(b"Hello, world!");
        builder.symbology(Symbology::MicroPdf417).columns(2);
        assert_eq!(
            builder.metadata(),
            "{ Symbology: MicroPdf417, Ec level: None, Columns: Some(2), Rows: None }"
        );
        builder.unset_columns().symbology(Symbology::Pdf417).ec_level(3).rows(10);
        assert_eq!(
            builder.metadata(),
            "{ Symbology: Pdf417, Ec level: Some(3), Columns: None, Rows: Some(10) }"
        );
    }
}

impl SymbolBuilder {
    pub fn build(&self) -> SymbolResult<Symbol> {
        log::debug!("Generating symbol {}", self.metadata());
        self.validate()?;

        let stream =
            assemble(&self.segments, self.reader_init, self.fast, self.structured_append.as_ref())?;
        log::debug!("Assembled {} data codewords", stream.len());

        let mut warnings = vec![];
        let (cws, layout, grid) = match self.symbology {
            Symbology::MicroPdf417 => self.build_micro(&stream, &mut warnings)?,
            _ => self.build_pdf417(&stream, &mut warnings)?,
        };
        debug_assert!(cws.len() == layout.capacity(), "Codewords don't fill the symbol");

        let row_height = scaled_row_height(self.symbology.row_height(), self.height, layout.rows);
        let heights = vec![row_height; layout.rows];
        log::debug!("Generated symbol {} with {} warnings", layout_summary(&layout), warnings.len());
        Ok(Symbol::new(grid, heights, cws, layout, warnings))
    }

    fn build_pdf417(&self, stream: &Stream, warnings: &mut Vec<Warning>) -> SymbolResult<Built> {
        // Length descriptor leads the data
        let d = stream.len() + 1;
        let size = sizer::size_pdf417(d, self.ec_level, self.columns, self.rows, warnings)?;
        let ecc_len = ecc_len(size.level);
        let cap = size.capacity() - ecc_len;

        let mut cws = Vec::with_capacity(size.capacity());
        cws.push(cap as u16);
        cws.extend(stream.padded(cap - d, LATCH_TEXT));
        let check = ecc(&cws, ecc_len);
        cws.extend(check);

        let compact = self.symbology == Symbology::CompactPdf417;
        let grid = pdf417_rows(&cws, size.columns, size.rows, size.level, compact);
        let layout = Layout {
            symbology: self.symbology,
            ec_level: Some(size.level),
            ecc: ecc_len,
            columns: size.columns,
            rows: size.rows,
            composite: None,
        };
        Ok((cws, layout, grid))
    }

    fn build_micro(&self, stream: &Stream, warnings: &mut Vec<Warning>) -> SymbolResult<Built> {
        let v = sizer::select_micro(stream.len(), self.columns, warnings)?;
        let mut cws = stream.padded(v.capacity() - stream.len(), LATCH_TEXT);
        let check = ecc(&cws, v.ecc);
        cws.extend(check);

        let grid = micro_rows(&cws, v);
        let layout = Layout {
            symbology: self.symbology,
            ec_level: None,
            ecc: v.ecc,
            columns: v.columns,
            rows: v.rows,
            composite: None,
        };
        Ok((cws, layout, grid))
    }

    fn validate(&self) -> SymbolResult<()> {
        let invalid = |msg: String| Err(SymbolError::InvalidOption(msg));

        if let Symbology::Composite(_) = self.symbology {
            return invalid("Composite symbols are built with CompositeBuilder".to_string());
        }
        if self.segments.iter().all(|s| s.data.is_empty()) {
            return Err(SymbolError::InvalidData("No input data".to_string()));
        }
        if let Some(l) = self.ec_level.filter(|&l| l > MAX_EC_LEVEL) {
            return invalid(format!("Error correction level {l} out of range (0 to {MAX_EC_LEVEL})"));
        }

        let max_columns = match self.symbology {
            Symbology::MicroPdf417 => MAX_MICRO_COLUMNS,
            _ => MAX_COLUMNS,
        };
        if let Some(c) = self.columns.filter(|c| !(1..=max_columns).contains(c)) {
            return invalid(format!("Columns {c} out of range (1 to {max_columns})"));
        }
        match (self.symbology, self.rows) {
            (Symbology::MicroPdf417, Some(_)) => {
                return invalid("Rows apply to PDF417 only".to_string());
            }
            (_, Some(r)) if !(MIN_ROWS..=MAX_ROWS).contains(&r) => {
                return invalid(format!("Rows {r} out of range ({MIN_ROWS} to {MAX_ROWS})"));
            }
            _ => {}
        }
        if self.symbology == Symbology::MicroPdf417 && self.ec_level.is_some() {
            return invalid("MicroPDF417 error correction is fixed by its variant".to_string());
        }
        Ok(())
    }
}

// Per row height in X units, raised so the symbol reaches the minimum height
pub(crate) fn scaled_row_height(default: usize, min_height: Option<usize>, rows: usize) -> usize {
    min_height.map_or(default, |h| default.max(h.div_ceil(rows)))
}

fn layout_summary(layout: &Layout) -> String {
    format!("{:?} {}x{}", layout.symbology, layout.columns, layout.rows)
}
