use crate::builder::{cca_rows, micro_rows, pdf417_rows};
use crate::common::bit_utils::BitStream;
use crate::common::codec::compact::{byte_len, compact_bytes};
use crate::common::ec::{ecc, ecc_len};
use crate::common::metadata::{Carrier, CompositeMode, MIN_ROWS};
use crate::common::tables::{Variant, CCA_VARIANTS, MICRO_VARIANTS};

// Composite component plan
//------------------------------------------------------------------------------

const CC_MARKER: u16 = 920;

const CCA_CHUNK_BITS: usize = 69;
const CCA_CHUNK_CODEWORDS: usize = 7;
// Bits carried by a trailing group of 0 to 6 codewords
const CCA_PARTIAL_BITS: [usize; 7] = [0, 9, 19, 29, 39, 49, 59];

const MAX_CCC_ROWS: usize = 30;
const MAX_CCC_COLUMNS: usize = 30;
// Linear modules not covered by CC-C data columns: the 7 module left shift and
// 10 module right quiet zone less the start, indicators and stop
const CCC_LINEAR_OVERHEAD: usize = 52;
// Narrowest GS1-128 linear component
const MIN_CCC_LINEAR_WIDTH: usize = 68;

const CCAB_ROW_HEIGHT: usize = 2;
const CCC_ROW_HEIGHT: usize = 3;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CcPlan {
    A(&'static Variant),
    B(&'static Variant),
    C { level: u8, columns: usize, rows: usize },
}

// Bytes that byte compaction packs into `c` codewords
fn bytes_for(c: usize) -> usize {
    6 * (c / 5) + c % 5
}

fn cca_bits(capacity: usize) -> usize {
    CCA_CHUNK_BITS * (capacity / CCA_CHUNK_CODEWORDS)
        + CCA_PARTIAL_BITS[capacity % CCA_CHUNK_CODEWORDS]
}

impl CcPlan {
    pub fn mode(&self) -> CompositeMode {
        match self {
            Self::A(_) => CompositeMode::CcA,
            Self::B(_) => CompositeMode::CcB,
            Self::C { .. } => CompositeMode::CcC,
        }
    }

    pub fn columns(&self) -> usize {
        match self {
            Self::A(v) | Self::B(v) => v.columns,
            Self::C { columns, .. } => *columns,
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            Self::A(v) | Self::B(v) => v.rows,
            Self::C { rows, .. } => *rows,
        }
    }

    pub fn ecc(&self) -> usize {
        match self {
            Self::A(v) | Self::B(v) => v.ecc,
            Self::C { level, .. } => ecc_len(*level),
        }
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Self::C { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn row_height(&self) -> usize {
        match self {
            Self::C { .. } => CCC_ROW_HEIGHT,
            _ => CCAB_ROW_HEIGHT,
        }
    }

    fn capacity(&self) -> usize {
        self.columns() * self.rows() - self.ecc()
    }

    // Bit length the composite data is padded to
    pub fn target_bits(&self) -> usize {
        match self {
            Self::A(v) => cca_bits(v.capacity()),
            // Marker and byte latch
            Self::B(v) => 8 * bytes_for(v.capacity() - 2),
            // Length descriptor, marker and byte latch
            Self::C { .. } => 8 * bytes_for(self.capacity() - 3),
        }
    }

    // Data and check codewords from the padded bit string
    pub fn codewords(&self, bits: &BitStream) -> Vec<u16> {
        debug_assert!(
            bits.len() == self.target_bits(),
            "Bit string of {} bits for a {} bit component",
            bits.len(),
            self.target_bits()
        );

        let mut cws = Vec::with_capacity(self.columns() * self.rows());
        match self {
            Self::A(_) => base928(bits, &mut cws),
            Self::B(_) => {
                cws.push(CC_MARKER);
                compact_bytes(bits.data(), &mut cws);
            }
            Self::C { .. } => {
                cws.push(self.capacity() as u16);
                cws.push(CC_MARKER);
                compact_bytes(bits.data(), &mut cws);
            }
        }
        debug_assert!(cws.len() == self.capacity(), "{} data codewords for {self:?}", cws.len());

        let check = ecc(&cws, self.ecc());
        cws.extend(check);
        cws
    }

    pub fn render(&self, cws: &[u16]) -> Vec<Vec<bool>> {
        match *self {
            Self::A(v) => cca_rows(cws, v),
            Self::B(v) => micro_rows(cws, v),
            Self::C { level, columns, rows } => pdf417_rows(cws, columns, rows, level, false),
        }
    }
}

// 69 bit chunks to 7 base 928 codewords, a trailing partial chunk to fewer
fn base928(bits: &BitStream, out: &mut Vec<u16>) {
    let mut bs = bits.clone();
    while bs.remaining() > 0 {
        let n = bs.remaining().min(CCA_CHUNK_BITS);
        let count = n / 10 + 1;
        let mut v = bs.take_wide(n).unwrap_or_default();
        let mut cws = [0u16; CCA_CHUNK_CODEWORDS];
        for cw in cws[..count].iter_mut().rev() {
            *cw = (v % 928) as u16;
            v /= 928;
        }
        debug_assert!(v == 0, "Chunk of {n} bits overflows {count} codewords");
        out.extend_from_slice(&cws[..count]);
    }
}

// Planning
//------------------------------------------------------------------------------

// Smallest CC-A variant of the carrier's width holding `bits`
pub fn plan_cc_a(carrier: Carrier, bits: usize) -> Option<CcPlan> {
    let columns = carrier.cc_columns();
    CCA_VARIANTS
        .iter()
        .filter(|v| v.columns == columns)
        .map(CcPlan::A)
        .find(|p| p.target_bits() >= bits)
}

pub fn plan_cc_b(carrier: Carrier, bits: usize) -> Option<CcPlan> {
    let columns = carrier.cc_columns();
    MICRO_VARIANTS
        .iter()
        .filter(|v| v.columns == columns)
        .map(CcPlan::B)
        .find(|p| p.target_bits() >= bits)
}

// CC-C spans the linear component; its level follows the codeword count
pub fn plan_cc_c(linear_width: usize, bits: usize) -> Option<CcPlan> {
    let data = byte_len(bits.div_ceil(8));
    let level = match data {
        0..=40 => 2,
        41..=160 => 3,
        161..=320 => 4,
        321..=833 => 5,
        834..=865 => 4,
        _ => return None,
    };
    let total = data + ecc_len(level) + 3;

    let mut columns = if linear_width <= MIN_CCC_LINEAR_WIDTH {
        1
    } else {
        (linear_width.saturating_sub(CCC_LINEAR_OVERHEAD) / 17).clamp(1, MAX_CCC_COLUMNS)
    };
    let mut rows = total.div_ceil(columns);
    while rows > MAX_CCC_ROWS && columns < MAX_CCC_COLUMNS {
        columns += 1;
        rows = total.div_ceil(columns);
    }
    let rows = rows.max(MIN_ROWS);
    if rows > MAX_CCC_ROWS {
        return None;
    }

    let plan = CcPlan::C { level, columns, rows };
    debug_assert!(plan.target_bits() >= bits, "{plan:?} cannot hold {bits} bits");
    Some(plan)
}

pub fn plan(mode: CompositeMode, carrier: Carrier, linear_width: usize, bits: usize) -> Option<CcPlan> {
    match mode {
        CompositeMode::CcA => plan_cc_a(carrier, bits),
        CompositeMode::CcB => plan_cc_b(carrier, bits),
        CompositeMode::CcC => plan_cc_c(linear_width, bits),
    }
}

#[cfg(test)]
mod cc_tests {
    use test_case::test_case;

    use super::{bytes_for, cca_bits, plan_cc_a, plan_cc_b, plan_cc_c, CcPlan};
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::compact::byte_len;
    use crate::common::metadata::{Carrier, CompositeMode};

    #[test_case(6, 59)]
    #[test_case(7, 69)]
    #[test_case(8, 78)]
    #[test_case(14, 138)]
    #[test_case(20, 197)]
    fn test_cca_bits(capacity: usize, exp: usize) {
        assert_eq!(cca_bits(capacity), exp);
    }

    #[test]
    fn test_bytes_for() {
        for c in 1..200 {
            assert_eq!(byte_len(bytes_for(c)), c);
        }
    }

    #[test]
    fn test_plan_cc_a() {
        let p = plan_cc_a(Carrier::Ean13, 60).unwrap();
        assert_eq!((p.columns(), p.rows()), (4, 3));
        assert_eq!(p.target_bits(), 78);
        assert_eq!(p.mode(), CompositeMode::CcA);
        assert_eq!(p.row_height(), 2);
        // 4 column CC-A holds at most 20 codewords
        assert_eq!(plan_cc_a(Carrier::Ean13, 198), None);
    }

    #[test]
    fn test_plan_cc_b() {
        let p = plan_cc_b(Carrier::UpcE, 100).unwrap();
        assert!(matches!(p, CcPlan::B(v) if v.columns == 2));
        assert!(p.target_bits() >= 100);
        assert_eq!(p.level(), None);
    }

    #[test]
    fn test_plan_cc_c() {
        // 20 bytes need 17 codewords at level 2
        let p = plan_cc_c(53 + 17 * 5, 160).unwrap();
        assert_eq!(p, CcPlan::C { level: 2, columns: 5, rows: 6 });
        assert_eq!(p.ecc(), 8);
        assert_eq!(p.row_height(), 3);
        assert!(p.target_bits() >= 160);
    }

    #[test_case(68, 1)]
    #[test_case(69, 1)]
    #[test_case(86, 2)]
    #[test_case(87, 2)]
    #[test_case(1000, 30)]
    fn test_plan_cc_c_columns(linear_width: usize, exp: usize) {
        assert_eq!(plan_cc_c(linear_width, 8).unwrap().columns(), exp);
    }

    #[test]
    fn test_plan_cc_c_narrow_widens() {
        let p = plan_cc_c(60, 8 * 300).unwrap();
        assert!(p.rows() <= 30);
        assert!(p.columns() > 1);
    }

    #[test]
    fn test_plan_cc_c_too_long() {
        assert_eq!(plan_cc_c(1000, 8 * 1100), None);
    }

    #[test]
    fn test_cca_codewords() {
        let p = plan_cc_a(Carrier::UpcE, 0).unwrap();
        let CcPlan::A(v) = p else { panic!("Expected CC-A") };
        let mut bs = BitStream::new();
        bs.pad_to(p.target_bits(), 0b00100, 5);
        let cws = p.codewords(&bs);
        assert_eq!(cws.len(), v.columns * v.rows);
        assert!(cws.iter().all(|&c| c < 929));
        assert_eq!(p.render(&cws).len(), v.rows);
    }

    #[test]
    fn test_ccb_codewords() {
        let p = plan_cc_b(Carrier::Ean13, 40).unwrap();
        let mut bs = BitStream::new();
        bs.pad_to(p.target_bits(), 0b00100, 5);
        let cws = p.codewords(&bs);
        assert_eq!(cws[0], 920);
        assert_eq!(cws.len(), p.columns() * p.rows());
    }

    #[test]
    fn test_ccc_codewords() {
        let p = plan_cc_c(200, 400).unwrap();
        let mut bs = BitStream::new();
        bs.pad_to(p.target_bits(), 0b00100, 5);
        let cws = p.codewords(&bs);
        assert_eq!(cws[0] as usize, p.columns() * p.rows() - p.ecc());
        assert_eq!(cws[1], 920);
        let rows = p.render(&cws);
        assert_eq!(rows.len(), p.rows());
        assert!(rows.iter().all(|r| r.len() == 17 * (p.columns() + 4) + 1));
    }
}
