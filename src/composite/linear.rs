use crate::common::error::SymbolResult;
use crate::common::metadata::{Carrier, CompositeMode};

// Linear component
//------------------------------------------------------------------------------

// Finished module rows of the linear symbol under the 2D component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSymbol {
    rows: Vec<Vec<bool>>,
    heights: Vec<usize>,
}

impl LinearSymbol {
    pub fn new(rows: Vec<Vec<bool>>, heights: Vec<usize>) -> Self {
        debug_assert!(rows.len() == heights.len(), "{} rows but {} heights", rows.len(), heights.len());
        Self { rows, heights }
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn heights(&self) -> &[usize] {
        &self.heights
    }
}

// Encodes the primary message of a carrier. The composite mode selects the
// linkage flag the linear symbol must carry
pub trait LinearEncoder {
    fn encode(&self, carrier: Carrier, primary: &str, mode: CompositeMode) -> SymbolResult<LinearSymbol>;
}

impl<F> LinearEncoder for F
where
    F: Fn(Carrier, &str, CompositeMode) -> SymbolResult<LinearSymbol>,
{
    fn encode(&self, carrier: Carrier, primary: &str, mode: CompositeMode) -> SymbolResult<LinearSymbol> {
        self(carrier, primary, mode)
    }
}

// Alignment
//------------------------------------------------------------------------------

// Light modules inserted left of the 2D (top) or linear (bottom) component
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Shift {
    pub top: usize,
    pub bottom: usize,
}

impl Shift {
    fn top(n: usize) -> Self {
        Self { top: n, bottom: 0 }
    }

    fn bottom(n: usize) -> Self {
        Self { top: 0, bottom: n }
    }
}

// Horizontal alignment of ISO/IEC 24723 section 12.3
pub fn shift(carrier: Carrier, mode: CompositeMode, linear: &LinearSymbol, cc_width: usize) -> Shift {
    let cc_a = mode == CompositeMode::CcA;
    match carrier {
        Carrier::Ean13 | Carrier::UpcA | Carrier::UpcE => Shift::bottom(2),
        Carrier::Ean8 if cc_a => Shift::bottom(3),
        Carrier::Ean8 => Shift::bottom(13),
        Carrier::DataBarOmni => Shift::bottom(4),
        Carrier::DataBarLimited if cc_a => Shift::top(1),
        Carrier::DataBarLimited => Shift::bottom(9),
        Carrier::DataBarStacked | Carrier::DataBarStackedOmni => Shift::top(1),
        Carrier::DataBarExpanded | Carrier::DataBarExpandedStacked => {
            Shift::top(expanded_offset(linear))
        }
        // 12.3 f)
        Carrier::Gs1_128 if mode == CompositeMode::CcC => Shift::bottom(7),
        Carrier::Gs1_128 => gs1_128_shift(linear.width(), cc_width),
    }
}

// Steps past a light module followed by a dark one at the start of the first
// linear row below the separator
fn expanded_offset(linear: &LinearSymbol) -> usize {
    let rows = linear.rows();
    let Some(row) = rows.get(rows.len().saturating_sub(1).min(1)) else {
        return 1;
    };
    let mut k = 1;
    while k < row.len() && !row[k - 1] && row[k] {
        k += 1;
    }
    k
}

// 12.3 g): aligns the 2D component with the last space of the character at
// position (characters - 9) / 2, counted from the stop character
fn gs1_128_shift(linear_width: usize, cc_width: usize) -> Shift {
    let lw = linear_width as isize;
    let chars = (lw - 2) / 11;
    // Truncates towards zero and goes negative for short symbols
    let pos = (chars - 9) / 2;
    let mut calc = lw - 11 * pos - 1 - cc_width as isize;
    if pos != 0 {
        calc -= 2;
    }
    if calc > 0 {
        Shift::top(calc as usize)
    } else {
        Shift::bottom(calc.unsigned_abs())
    }
}

// Stacks the 2D rows over the linear rows, padding both to a common width
pub fn merge(
    cc: Vec<Vec<bool>>,
    cc_heights: Vec<usize>,
    linear: &LinearSymbol,
    shift: Shift,
) -> (Vec<Vec<bool>>, Vec<usize>) {
    let cc_width = cc.first().map_or(0, Vec::len);
    let width = (cc_width + shift.top).max(linear.width() + shift.bottom);

    let place = |row: &[bool], offset: usize| {
        let mut res = vec![false; width];
        res[offset..offset + row.len()].copy_from_slice(row);
        res
    };

    let mut rows = Vec::with_capacity(cc.len() + linear.rows().len());
    rows.extend(cc.iter().map(|r| place(r, shift.top)));
    rows.extend(linear.rows().iter().map(|r| place(r, shift.bottom)));
    let mut heights = cc_heights;
    heights.extend_from_slice(linear.heights());
    (rows, heights)
}

#[cfg(test)]
mod linear_tests {
    use test_case::test_case;

    use super::{gs1_128_shift, merge, shift, LinearEncoder, LinearSymbol, Shift};
    use crate::common::error::SymbolResult;
    use crate::common::metadata::{Carrier, CompositeMode};

    fn bars(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '1').collect()
    }

    fn linear(width: usize) -> LinearSymbol {
        LinearSymbol::new(vec![vec![true; width]], vec![50])
    }

    #[test]
    fn test_closure_encoder() {
        let enc = |_: Carrier, primary: &str, _: CompositeMode| -> SymbolResult<LinearSymbol> {
            Ok(linear(primary.len()))
        };
        let sym = enc.encode(Carrier::Ean13, "12345", CompositeMode::CcA).unwrap();
        assert_eq!(sym.width(), 5);
    }

    #[test_case(Carrier::Ean13, CompositeMode::CcA, Shift { top: 0, bottom: 2 })]
    #[test_case(Carrier::UpcE, CompositeMode::CcB, Shift { top: 0, bottom: 2 })]
    #[test_case(Carrier::Ean8, CompositeMode::CcA, Shift { top: 0, bottom: 3 })]
    #[test_case(Carrier::Ean8, CompositeMode::CcB, Shift { top: 0, bottom: 13 })]
    #[test_case(Carrier::DataBarOmni, CompositeMode::CcA, Shift { top: 0, bottom: 4 })]
    #[test_case(Carrier::DataBarLimited, CompositeMode::CcA, Shift { top: 1, bottom: 0 })]
    #[test_case(Carrier::DataBarLimited, CompositeMode::CcB, Shift { top: 0, bottom: 9 })]
    #[test_case(Carrier::DataBarStacked, CompositeMode::CcA, Shift { top: 1, bottom: 0 })]
    #[test_case(Carrier::Gs1_128, CompositeMode::CcC, Shift { top: 0, bottom: 7 })]
    fn test_fixed_shift(carrier: Carrier, mode: CompositeMode, exp: Shift) {
        assert_eq!(shift(carrier, mode, &linear(100), 80), exp);
    }

    #[test_case(vec![bars("1111"), bars("0100")], 2; "guard after light module")]
    #[test_case(vec![bars("0000"), bars("1010")], 1; "dark first module")]
    #[test_case(vec![bars("0110")], 2; "single row")]
    fn test_expanded_offset(rows: Vec<Vec<bool>>, exp: usize) {
        let heights = vec![1; rows.len()];
        let sym = LinearSymbol::new(rows, heights);
        let s = shift(Carrier::DataBarExpanded, CompositeMode::CcA, &sym, 80);
        assert_eq!(s, Shift { top: exp, bottom: 0 });
    }

    // Start, FNC1, linkage, 2 data, check and stop: (7 - 9) / 2 == -1
    #[test_case(79, 52, Shift { top: 35, bottom: 0 }; "seven characters")]
    // (8 - 9) / 2 truncates to 0, no stop modules are skipped
    #[test_case(90, 52, Shift { top: 37, bottom: 0 }; "eight characters")]
    #[test_case(79, 99, Shift { top: 0, bottom: 12 }; "narrow linear")]
    #[test_case(178, 99, Shift { top: 43, bottom: 0 }; "long linear")]
    fn test_gs1_128_shift(lw: usize, cc_w: usize, exp: Shift) {
        assert_eq!(gs1_128_shift(lw, cc_w), exp);
    }

    #[test]
    fn test_merge() {
        let cc = vec![bars("11"), bars("10")];
        let lin = LinearSymbol::new(vec![bars("101")], vec![5]);
        let (rows, heights) = merge(cc, vec![2, 2], &lin, Shift { top: 2, bottom: 0 });
        assert_eq!(rows, vec![bars("0011"), bars("0010"), bars("1010")]);
        assert_eq!(heights, vec![2, 2, 5]);
    }
}
