use crate::common::error::Warning;
use crate::common::metadata::{CompositeMode, Symbology};

// Effective options
//------------------------------------------------------------------------------

// Options actually used after auto sizing, pinnable back into the builder
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Layout {
    pub symbology: Symbology,
    // Error correction level; None where the check codeword count comes from a variant
    pub ec_level: Option<u8>,
    pub ecc: usize,
    pub columns: usize,
    pub rows: usize,
    pub composite: Option<CompositeMode>,
}

impl Layout {
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

// Symbol
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Symbol {
    grid: Vec<bool>,
    w: usize,
    heights: Vec<usize>,
    codewords: Vec<u16>,
    layout: Layout,
    warnings: Vec<Warning>,
}

impl Symbol {
    pub(crate) fn new(
        rows: Vec<Vec<bool>>,
        heights: Vec<usize>,
        codewords: Vec<u16>,
        layout: Layout,
        warnings: Vec<Warning>,
    ) -> Self {
        debug_assert!(rows.len() == heights.len(), "{} rows but {} heights", rows.len(), heights.len());
        let w = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == w), "Rows of uneven width");

        let grid = rows.into_iter().flatten().collect();
        Self { grid, w, heights, codewords, layout, warnings }
    }

    pub fn grid(&self) -> &[bool] {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.w
    }

    // Module rows, one per drawn row regardless of its height
    pub fn rows(&self) -> usize {
        self.heights.len()
    }

    pub fn row_heights(&self) -> &[usize] {
        &self.heights
    }

    pub fn height(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn row(&self, r: usize) -> &[bool] {
        &self.grid[r * self.w..(r + 1) * self.w]
    }

    pub fn codewords(&self) -> &[u16] {
        &self.codewords
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn metadata(&self) -> String {
        let l = &self.layout;
        format!(
            "{{ Symbology: {:?}, Ec level: {:?}, Columns: {}, Rows: {}, Composite: {:?} }}",
            l.symbology, l.ec_level, l.columns, l.rows, l.composite
        )
    }

    fn coord_to_index(&self, r: isize, c: isize) -> usize {
        let (h, w) = (self.rows() as isize, self.w as isize);
        debug_assert!(-h <= r && r < h, "Row {r} out of bounds for {h} rows");
        debug_assert!(-w <= c && c < w, "Column {c} out of bounds for width {w}");

        let r = if r < 0 { r + h } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: isize, c: isize) -> bool {
        self.grid[self.coord_to_index(r, c)]
    }
}

// Text rendering
//------------------------------------------------------------------------------

const QUIET_ZONE: usize = 2;

impl Symbol {
    // Draws light modules as blocks, so the symbol reads on a dark terminal
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let total_w = qz_sz + self.w * module_sz + qz_sz;
        let quiet_line = format!("{}\n", "█".repeat(total_w));

        let mut canvas = String::new();
        for _ in 0..QUIET_ZONE {
            canvas.push_str(&quiet_line);
        }
        for (r, &h) in self.heights.iter().enumerate() {
            let mut line = "█".repeat(qz_sz);
            for &m in self.row(r) {
                let c = if m { ' ' } else { '█' };
                line.extend(std::iter::repeat(c).take(module_sz));
            }
            line.push_str(&"█".repeat(qz_sz));
            line.push('\n');
            for _ in 0..h {
                canvas.push_str(&line);
            }
        }
        for _ in 0..QUIET_ZONE {
            canvas.push_str(&quiet_line);
        }
        canvas
    }
}

#[cfg(test)]
mod symbol_tests {
    use super::{Layout, Symbol};
    use crate::common::metadata::Symbology;

    fn sample() -> Symbol {
        let rows = vec![vec![true, false, true], vec![false, false, true]];
        let layout = Layout {
            symbology: Symbology::Pdf417,
            ec_level: Some(0),
            ecc: 2,
            columns: 1,
            rows: 3,
            composite: None,
        };
        Symbol::new(rows, vec![3, 2], vec![], layout, vec![])
    }

    #[test]
    fn test_dimensions() {
        let sym = sample();
        assert_eq!(sym.width(), 3);
        assert_eq!(sym.rows(), 2);
        assert_eq!(sym.height(), 5);
        assert_eq!(sym.row(1), [false, false, true]);
        assert_eq!(sym.grid(), [true, false, true, false, false, true]);
    }

    #[test]
    fn test_index_wrap() {
        let sym = sample();
        assert!(sym.get(-1, -1));
        assert!(sym.get(-2, -3));
        assert!(!sym.get(-1, 1));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        sample().get(2, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_index_overwrap() {
        sample().get(0, -4);
    }

    #[test]
    fn test_to_str() {
        let s = sample().to_str(1);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2 + 3 + 2 + 2);
        assert_eq!(lines[2], "██ █ ██");
        assert_eq!(lines[5], "████ ██");
    }
}
