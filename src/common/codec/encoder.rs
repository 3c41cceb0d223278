use super::compact::{compact_bytes, compact_numeric, compact_text, TextState, LATCH_NUMERIC, LATCH_TEXT};
use super::eci::{eci_codewords, Segment};
use super::planner::plan;
use super::types::Compaction;
use crate::common::error::{SymbolError, SymbolResult};
use crate::common::metadata::StructuredAppend;

// Macro and reader codewords
//------------------------------------------------------------------------------

pub const READER_INIT: u16 = 921;
pub const MACRO_MARKER: u16 = 928;
pub const MACRO_OPTIONAL: u16 = 923;
pub const MACRO_TERMINATOR: u16 = 922;

// Optional field tag of the segment count
const SEGMENT_COUNT_FIELD: u16 = 1;

const MACRO_OFFSET: usize = 100000;

const DEFAULT_FILE_ID: &str = "001";

// Codeword stream
//------------------------------------------------------------------------------

// Data codewords split around the point where padding goes
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Stream {
    pub data: Vec<u16>,
    pub trailer: Vec<u16>,
}

impl Stream {
    pub fn len(&self) -> usize {
        self.data.len() + self.trailer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.trailer.is_empty()
    }

    // Full data codeword sequence with `pad` padding codewords in between
    pub fn padded(&self, pad: usize, pad_cw: u16) -> Vec<u16> {
        let mut res = Vec::with_capacity(self.len() + pad);
        res.extend_from_slice(&self.data);
        res.extend(std::iter::repeat(pad_cw).take(pad));
        res.extend_from_slice(&self.trailer);
        res
    }
}

// Assembler
//------------------------------------------------------------------------------

pub fn assemble(
    segs: &[Segment],
    reader_init: bool,
    fast: bool,
    sa: Option<&StructuredAppend>,
) -> SymbolResult<Stream> {
    let mut stream = Stream::default();
    let out = &mut stream.data;
    if reader_init {
        out.push(READER_INIT);
    }

    // The stream starts in text alpha without a latch
    let mut cur = Compaction::Text;
    let mut state = TextState::default();
    for (si, seg) in segs.iter().enumerate() {
        seg.validate()?;
        if let Some(eci) = seg.eci {
            eci_codewords(eci, out);
        }

        let runs = plan(&seg.data, fast)?;
        log::debug!("Segment {si} runs: {runs:?}");

        let last_seg = si + 1 == segs.len();
        for (ri, r) in runs.iter().enumerate() {
            let last = last_seg && ri + 1 == runs.len();
            let data = &seg.data[r.start..r.end()];
            match r.mode {
                Compaction::Text => {
                    if cur != Compaction::Text {
                        out.push(LATCH_TEXT);
                        state.reset();
                    }
                    compact_text(data, &r.steps, &mut state, last, out);
                    cur = Compaction::Text;
                }
                Compaction::Byte => {
                    compact_bytes(data, out);
                    cur = Compaction::Byte;
                }
                Compaction::Numeric => {
                    out.push(LATCH_NUMERIC);
                    compact_numeric(data, out);
                    cur = Compaction::Numeric;
                }
            }
        }
    }

    if let Some(sa) = sa {
        stream.trailer = macro_block(sa)?;
    }
    Ok(stream)
}

pub fn macro_block(sa: &StructuredAppend) -> SymbolResult<Vec<u16>> {
    sa.validate()?;

    let mut out = vec![MACRO_MARKER];
    push_base900_pair(MACRO_OFFSET + sa.index - 1, &mut out);

    let id = sa.id.as_deref().filter(|id| !id.is_empty()).unwrap_or(DEFAULT_FILE_ID);
    let padded = format!("{id:0>width$}", width = id.len().div_ceil(3) * 3);
    for triplet in padded.as_bytes().chunks(3) {
        let v = triplet.iter().fold(0u16, |acc, d| acc * 10 + (d - b'0') as u16);
        if v >= 900 {
            return Err(SymbolError::InvalidData(format!(
                "Structured append ID triplet {v} out of range (0 to 899)"
            )));
        }
        out.push(v);
    }

    out.extend([MACRO_OPTIONAL, SEGMENT_COUNT_FIELD]);
    push_base900_pair(MACRO_OFFSET + sa.count, &mut out);

    if sa.is_last() {
        out.push(MACRO_TERMINATOR);
    }
    Ok(out)
}

fn push_base900_pair(v: usize, out: &mut Vec<u16>) {
    debug_assert!(v < 900 * 900, "Value too large for two codewords: {v}");
    out.extend([(v / 900) as u16, (v % 900) as u16]);
}
