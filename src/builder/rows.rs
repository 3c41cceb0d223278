use crate::common::tables::{
    centre_rap, codeword_pattern, side_rap, Pattern, Variant, CODEWORD_MODULES, RAP_COUNT,
    RAP_MODULES, START, STOP, STOP_BAR,
};

// Row writer
//------------------------------------------------------------------------------

struct RowWriter {
    row: Vec<bool>,
}

impl RowWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self { row: Vec::with_capacity(capacity) }
    }

    fn push(&mut self, p: Pattern) -> &mut Self {
        self.row.extend(p.modules());
        self
    }

    fn codewords(&mut self, cluster: usize, cws: &[u16]) -> &mut Self {
        for &cw in cws {
            self.push(codeword_pattern(cluster, cw));
        }
        self
    }

    fn finish(self) -> Vec<bool> {
        self.row
    }
}

// PDF417
//------------------------------------------------------------------------------

// Left and right indicator values of a row
fn indicators(row: usize, rows: usize, columns: usize, level: u8) -> (u16, u16) {
    let f = 30 * (row / 3);
    let row_info = (rows - 1) / 3;
    let level_info = 3 * level as usize + (rows - 1) % 3;
    let col_info = columns - 1;
    let (l, r) = match row % 3 {
        0 => (f + row_info, f + col_info),
        1 => (f + level_info, f + row_info),
        _ => (f + col_info, f + level_info),
    };
    (l as u16, r as u16)
}

// Rows of a full or compact PDF417 symbol from its complete codeword sequence
pub fn pdf417_rows(
    cws: &[u16],
    columns: usize,
    rows: usize,
    level: u8,
    compact: bool,
) -> Vec<Vec<bool>> {
    debug_assert!(cws.len() == columns * rows, "{} codewords for {columns}x{rows}", cws.len());

    let width = CODEWORD_MODULES * (columns + 4) + 1;
    cws.chunks_exact(columns)
        .enumerate()
        .map(|(r, chunk)| {
            let cluster = (r % 3) * 3;
            let (left, right) = indicators(r, rows, columns, level);
            let mut w = RowWriter::with_capacity(width);
            w.push(START).codewords(cluster, &[left]).codewords(cluster, chunk);
            if compact {
                w.push(STOP_BAR);
            } else {
                w.codewords(cluster, &[right]).push(STOP);
            }
            w.finish()
        })
        .collect()
}

// MicroPDF417 and composite components
//------------------------------------------------------------------------------

fn rap_at(start: usize, r: usize) -> usize {
    (start - 1 + r) % RAP_COUNT + 1
}

// Rows of a MicroPDF417 symbol or CC-B component
pub fn micro_rows(cws: &[u16], v: &Variant) -> Vec<Vec<bool>> {
    debug_assert!(cws.len() == v.columns * v.rows, "{} codewords for {v:?}", cws.len());

    cws.chunks_exact(v.columns)
        .enumerate()
        .map(|(r, chunk)| {
            let cluster = (v.cluster / 3 + r) % 3 * 3;
            let left = side_rap(rap_at(v.left, r));
            let right = side_rap(rap_at(v.right, r));
            let mut w = RowWriter::with_capacity(RAP_MODULES * 3 + CODEWORD_MODULES * v.columns + 1);
            w.push(left);
            match v.columns {
                3 => {
                    let centre = centre_rap(rap_at(v.centre, r));
                    w.codewords(cluster, &chunk[..1]).push(centre).codewords(cluster, &chunk[1..]);
                }
                4 => {
                    let centre = centre_rap(rap_at(v.centre, r));
                    w.codewords(cluster, &chunk[..2]).push(centre).codewords(cluster, &chunk[2..]);
                }
                _ => {
                    w.codewords(cluster, chunk);
                }
            }
            w.push(right).push(STOP_BAR);
            w.finish()
        })
        .collect()
}

// Rows of a CC-A component; the 3 column layout drops the left pattern
pub fn cca_rows(cws: &[u16], v: &Variant) -> Vec<Vec<bool>> {
    debug_assert!(cws.len() == v.columns * v.rows, "{} codewords for {v:?}", cws.len());

    cws.chunks_exact(v.columns)
        .enumerate()
        .map(|(r, chunk)| {
            let cluster = (v.cluster / 3 + r) % 3 * 3;
            let right = side_rap(rap_at(v.right, r));
            let mut w = RowWriter::with_capacity(RAP_MODULES * 3 + CODEWORD_MODULES * v.columns + 1);
            match v.columns {
                2 => {
                    w.push(side_rap(rap_at(v.left, r))).codewords(cluster, chunk);
                }
                3 => {
                    let centre = centre_rap(rap_at(v.centre, r));
                    w.codewords(cluster, &chunk[..1]).push(centre).codewords(cluster, &chunk[1..]);
                }
                _ => {
                    let centre = centre_rap(rap_at(v.centre, r));
                    w.push(side_rap(rap_at(v.left, r)))
                        .codewords(cluster, &chunk[..2])
                        .push(centre)
                        .codewords(cluster, &chunk[2..]);
                }
            }
            w.push(right).push(STOP_BAR);
            w.finish()
        })
        .collect()
}
