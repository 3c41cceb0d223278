use super::ai::FNC1;
use super::field::{encode_general, FieldMode, Tail};
use crate::common::bit_utils::BitStream;
use crate::common::error::SymbolResult;

// Encoded composite data
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Encoded {
    pub bits: BitStream,
    pub tail: Tail,
}

impl Encoded {
    // Fewest bits the data can occupy once the pending digit is written
    pub fn min_len(&self) -> usize {
        self.bits.len() + self.tail.min_bits()
    }

    pub fn finish(&self, target: usize) -> BitStream {
        let mut bs = self.bits.clone();
        self.tail.finish(target, &mut bs);
        bs
    }
}

// Encodation method
//------------------------------------------------------------------------------

pub fn encode(data: &[u8]) -> SymbolResult<Encoded> {
    let mut bits = BitStream::with_capacity(data.len() * 8);
    if let Some(tail) = encode_date(data, &mut bits)? {
        log::debug!("Composite data uses the date method");
        return Ok(Encoded { bits, tail });
    }
    if let Some(ai90) = Ai90::parse(data) {
        log::debug!("Composite data uses the AI 90 method");
        let tail = ai90.encode(&mut bits)?;
        return Ok(Encoded { bits, tail });
    }

    bits.push(false);
    let tail = encode_general(data, FieldMode::Numeric, &mut bits)?;
    Ok(Encoded { bits, tail })
}

// Date method
//------------------------------------------------------------------------------

const DATE_METHOD: (u8, usize) = (0b10, 2);
const NO_DATE: (u8, usize) = (0b11, 2);
const DATE_LEN: usize = 8;
// Alphanumeric latch and FNC1 standing in for an FNC1 with no data after it
const LONE_FNC1: (u16, usize) = (0b0000_01111, 9);

fn digits(data: &[u8]) -> Option<u16> {
    data.iter()
        .try_fold(0u16, |acc, &b| b.is_ascii_digit().then(|| acc * 10 + (b - b'0') as u16))
}

// Packed YYMMDD; a day of 00 stands for the last day of the month
fn pack_date(date: &[u8]) -> Option<u16> {
    let (yy, mm, dd) = (digits(&date[..2])?, digits(&date[2..4])?, digits(&date[4..6])?);
    ((1..=12).contains(&mm) && dd <= 31).then(|| yy * 384 + (mm - 1) * 32 + dd)
}

// Packs a leading batch (10), production (11) or expiry (17) element. None
// when the data opens with none of them or with an invalid date
fn encode_date(data: &[u8], out: &mut BitStream) -> SymbolResult<Option<Tail>> {
    if let Some(lot) = data.strip_prefix(b"10") {
        out.push_bits(DATE_METHOD.0, DATE_METHOD.1);
        out.push_bits(NO_DATE.0, NO_DATE.1);
        return encode_general(lot, FieldMode::Numeric, out).map(Some);
    }
    if data.len() < DATE_LEN || !(data.starts_with(b"11") || data.starts_with(b"17")) {
        return Ok(None);
    }
    let Some(date) = pack_date(&data[2..DATE_LEN]) else {
        return Ok(None);
    };

    out.push_bits(DATE_METHOD.0, DATE_METHOD.1);
    out.push_bits(date, 16);
    out.push(data[1] == b'7');

    let rest = &data[DATE_LEN..];
    if let Some(lot) = rest.strip_prefix(b"10") {
        return encode_general(lot, FieldMode::Numeric, out).map(Some);
    }
    if rest.is_empty() {
        out.push_bits(LONE_FNC1.0, LONE_FNC1.1);
        return Ok(Some(Tail::new(FieldMode::Numeric)));
    }
    let mut field = Vec::with_capacity(rest.len() + 1);
    field.push(FNC1);
    field.extend_from_slice(rest);
    encode_general(&field, FieldMode::Numeric, out).map(Some)
}

// AI 90 method
//------------------------------------------------------------------------------

const AI90_METHOD: (u8, usize) = (0b11, 2);
const MAX_AI90_LEN: usize = 30;
const MAX_AI90_DIGITS: usize = 3;
const TABLE_LETTERS: &[u8] = b"BDHIJKLNPQRSTVWZ";
const SHORT_VALUE_LIMIT: u16 = 31;
const LONG_PREFIX: (u8, usize) = (0b11111, 5);
const ALPHA_FNC1: (u8, usize) = (0b11111, 5);

// Encoding of the AI 90 data after its letter
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Ai90Mode {
    Alphanumeric,
    Numeric,
    Alpha,
}

impl Ai90Mode {
    fn indicator(&self) -> (u8, usize) {
        match self {
            Self::Alphanumeric => (0b0, 1),
            Self::Numeric => (0b10, 2),
            Self::Alpha => (0b11, 2),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Ai90<'a> {
    value: u16,
    letter: u8,
    // AI 90 data after the leading digits and letter
    rest: &'a [u8],
    // Data after the FNC1 closing the AI 90 field
    next: Option<&'a [u8]>,
}

impl<'a> Ai90<'a> {
    fn parse(data: &'a [u8]) -> Option<Self> {
        let field = data.strip_prefix(b"90")?;
        let end = field.iter().position(|&b| b == FNC1).unwrap_or(field.len());
        let (ai90, next) = (&field[..end], field.get(end + 1..));
        if ai90.len() > MAX_AI90_LEN || ai90.first() == Some(&b'0') {
            return None;
        }

        let n = ai90.iter().take_while(|b| b.is_ascii_digit()).count();
        if n > MAX_AI90_DIGITS {
            return None;
        }
        let letter = *ai90.get(n).filter(|b| b.is_ascii_uppercase())?;
        let value = if n == 0 { 0 } else { digits(&ai90[..n])? };
        Some(Self { value, letter, rest: &ai90[n + 1..], next })
    }

    // Alpha when only letters and digits follow with letters in the majority,
    // numeric when only digits follow
    fn mode(&self) -> Ai90Mode {
        let letters = self.rest.iter().filter(|b| b.is_ascii_uppercase()).count();
        let digits = self.rest.iter().filter(|b| b.is_ascii_digit()).count();
        let others = self.rest.len() - letters - digits;
        match (others, letters) {
            (0, l) if l > digits => Ai90Mode::Alpha,
            (0, 0) => Ai90Mode::Numeric,
            _ => Ai90Mode::Alphanumeric,
        }
    }

    // Flag for a serial number (21) or shipment ID (8004) directly after the
    // field, and the AI digits it replaces
    fn implied_ai(&self) -> ((u8, usize), usize) {
        match self.next {
            Some(n) if n.len() > 2 && n.starts_with(b"21") => ((0b10, 2), 2),
            Some(n) if n.len() > 4 && n.starts_with(b"8004") => ((0b11, 2), 4),
            _ => ((0b0, 1), 0),
        }
    }

    fn encode(&self, out: &mut BitStream) -> SymbolResult<Tail> {
        out.push_bits(AI90_METHOD.0, AI90_METHOD.1);

        let mode = self.mode();
        let indicator = mode.indicator();
        out.push_bits(indicator.0, indicator.1);
        let (flag, skip) = self.implied_ai();
        out.push_bits(flag.0, flag.1);

        match TABLE_LETTERS.iter().position(|&l| l == self.letter) {
            Some(idx) if self.value < SHORT_VALUE_LIMIT => {
                out.push_bits(self.value, 5);
                out.push_bits(idx as u8, 4);
            }
            _ => {
                out.push_bits(LONG_PREFIX.0, LONG_PREFIX.1);
                out.push_bits(self.value, 10);
                out.push_bits(self.letter - b'A', 5);
            }
        }

        let next = self.next.map(|n| &n[skip..]);
        let start = match mode {
            Ai90Mode::Alpha => {
                for &b in self.rest {
                    match b {
                        b'A'..=b'Z' => out.push_bits(b - b'A', 5),
                        _ => out.push_bits(52 + b - b'0', 6),
                    }
                }
                let Some(next) = next else {
                    return Ok(Tail { alpha_pad: true, ..Tail::new(FieldMode::Numeric) });
                };
                out.push_bits(ALPHA_FNC1.0, ALPHA_FNC1.1);
                return encode_general(next, FieldMode::Numeric, out);
            }
            Ai90Mode::Numeric => FieldMode::Numeric,
            Ai90Mode::Alphanumeric => FieldMode::Alphanumeric,
        };

        // The rest of the field and what follows share one general field
        let mut field = self.rest.to_vec();
        if let Some(next) = next {
            field.push(FNC1);
            field.extend_from_slice(next);
        }
        encode_general(&field, start, out)
    }
}

#[cfg(test)]
mod method_tests {
    use test_case::test_case;

    use super::{encode, Ai90, Ai90Mode, Tail};
    use crate::common::bit_utils::BitStream;
    use crate::composite::ai::{parse, FNC1};
    use crate::composite::field::FieldMode;

    fn bits_of(bs: &BitStream) -> String {
        (0..bs.len()).map(|i| if bs.get(i) { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_general_method() {
        let enc = encode(b"2112").unwrap();
        // Method 0, then pairs 21 and 12
        assert_eq!(bits_of(&enc.bits), "0".to_string() + "0011111" + "0010101");
        assert_eq!(enc.min_len(), 15);
    }

    #[test]
    fn test_date_with_lot() {
        let data = parse("[17]010200[10]AB").unwrap();
        let enc = encode(&data).unwrap();
        let bits = bits_of(&enc.bits);
        // 1 * 384 + 1 * 32 + 0 = 416
        assert_eq!(&bits[..19], "10".to_string() + "0000000110100000" + "1");
        // Lot number opens with a latch to alphanumeric
        assert_eq!(&bits[19..23], "0000");
        assert_eq!(enc.tail.mode, FieldMode::Alphanumeric);
    }

    #[test]
    fn test_date_with_other_ai() {
        let data = parse("[11]991231[21]1").unwrap();
        let enc = encode(&data).unwrap();
        let bits = bits_of(&enc.bits);
        // 99 * 384 + 11 * 32 + 31 = 38399
        assert_eq!(&bits[..19], "10".to_string() + "1001010111111111" + "0");
        // FNC1 then 2: 110 + 2 + 8
        assert_eq!(&bits[19..26], "1111000");
    }

    #[test]
    fn test_date_alone() {
        let enc = encode(&parse("[17]250100").unwrap()).unwrap();
        // 25 * 384 + 0 * 32 + 0 = 9600, then a latch and FNC1 for the missing data
        let exp = "10".to_string() + "0010010110000000" + "1" + "000001111";
        assert_eq!(bits_of(&enc.bits), exp);
        assert_eq!(enc.tail.mode, FieldMode::Numeric);
    }

    #[test]
    fn test_leading_lot() {
        let enc = encode(&parse("[10]1234").unwrap()).unwrap();
        // No date, then pairs 12 and 34
        assert_eq!(bits_of(&enc.bits), "10".to_string() + "11" + "0010101" + "0101101");
    }

    #[test_case("[11]991331"; "bad month")]
    #[test_case("[11]991232"; "bad day")]
    #[test_case("[17]990031"; "zero month")]
    fn test_invalid_date_falls_back(input: &str) {
        let data = parse(input).unwrap();
        let enc = encode(&data).unwrap();
        assert!(!enc.bits.get(0));
    }

    #[test]
    fn test_ai90_parse() {
        let data = parse("[90]12BX9[21]A").unwrap();
        let ai90 = Ai90::parse(&data).unwrap();
        assert_eq!(ai90.value, 12);
        assert_eq!(ai90.letter, b'B');
        assert_eq!(ai90.rest, b"X9");
        assert_eq!(ai90.next, Some(&b"21A"[..]));
    }

    #[test_case(b"900A"; "leading zero")]
    #[test_case(b"901234A"; "four digits")]
    #[test_case(b"90123"; "no letter")]
    #[test_case(b"90aB"; "lowercase letter")]
    #[test_case(b"90"; "empty")]
    fn test_ai90_rejected(data: &[u8]) {
        assert_eq!(Ai90::parse(data), None);
    }

    #[test]
    fn test_ai90_rejects_long_field() {
        let mut data = b"90A".to_vec();
        data.extend(std::iter::repeat(b'B').take(30));
        assert_eq!(Ai90::parse(&data), None);
        data.push(FNC1);
        assert_eq!(Ai90::parse(&data), None);
    }

    #[test_case(b"903B", Ai90Mode::Numeric; "nothing after letter")]
    #[test_case(b"90B123", Ai90Mode::Numeric; "digits")]
    #[test_case(b"90BXY1", Ai90Mode::Alpha; "mostly letters")]
    #[test_case(b"90BX12", Ai90Mode::Alphanumeric; "mostly digits")]
    #[test_case(b"90BXYZ-", Ai90Mode::Alphanumeric; "punctuation")]
    fn test_ai90_mode(data: &[u8], exp: Ai90Mode) {
        assert_eq!(Ai90::parse(data).unwrap().mode(), exp);
    }

    #[test]
    fn test_ai90_short_form() {
        let enc = encode(b"903B").unwrap();
        // Method 11, numeric mode 10, no flag, value 3, B is index 0
        assert_eq!(bits_of(&enc.bits), "11".to_string() + "10" + "0" + "00011" + "0000");
        assert_eq!(enc.tail, Tail::new(FieldMode::Numeric));
    }

    #[test]
    fn test_ai90_long_form() {
        let enc = encode(b"90123AXY").unwrap();
        // Alpha mode 11, no flag, A is not a table letter, X and Y in 5 bits
        let exp = "11".to_string() + "11" + "0" + "11111" + "0001111011" + "00000" + "10111" + "11000";
        assert_eq!(bits_of(&enc.bits), exp);
        assert!(enc.tail.alpha_pad);
        // The pad FNC1 precedes the numeric padding
        let bs = enc.finish(exp.len() + 12);
        assert_eq!(bits_of(&bs)[exp.len()..], *"111110000001");
    }

    #[test]
    fn test_ai90_alphanumeric() {
        let enc = encode(b"903B*X").unwrap();
        // Alphanumeric mode 0, then * = 58 and X = 55 in the general field
        let exp = "11".to_string() + "0" + "0" + "00011" + "0000" + "111010" + "110111";
        assert_eq!(bits_of(&enc.bits), exp);
        assert_eq!(enc.tail.mode, FieldMode::Alphanumeric);
    }

    #[test]
    fn test_ai90_numeric_rest() {
        let enc = encode(b"90B123").unwrap();
        // Pair 12 and a pending 3 in the general field
        assert_eq!(bits_of(&enc.bits), "11".to_string() + "10" + "0" + "00000" + "0000" + "0010101");
        assert_eq!(enc.tail.pending, Some(3));
    }

    #[test]
    fn test_ai90_with_serial() {
        let data = parse("[90]B[21]12").unwrap();
        let enc = encode(&data).unwrap();
        // Numeric mode, flag 10, B short form, then FNC1 1 = 119 with 2 pending
        let exp = "11".to_string() + "10" + "10" + "00000" + "0000" + "1110111";
        assert_eq!(bits_of(&enc.bits), exp);
        assert_eq!(enc.tail.pending, Some(2));
    }

    #[test]
    fn test_ai90_alpha_then_data() {
        let data = parse("[90]1ABC[10]12").unwrap();
        let enc = encode(&data).unwrap();
        // Alpha mode, long form for A, B C, FNC1, then 10 12 as numeric pairs
        let exp = "11".to_string() + "11" + "0" + "11111" + "0000000001" + "00000" + "00001"
            + "00010" + "11111" + "0010011" + "0010101";
        assert_eq!(bits_of(&enc.bits), exp);
        assert!(!enc.tail.alpha_pad);
    }

    #[test]
    fn test_finish_to_target() {
        let enc = encode(b"123").unwrap();
        assert_eq!(enc.min_len(), 1 + 7 + 4);
        let bs = enc.finish(20);
        assert_eq!(bs.len(), 20);
        // Encoded bits stay untouched
        assert_eq!(enc.bits.len(), 8);
    }
}
