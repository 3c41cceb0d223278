use super::types::{classify, text_value, Submode, TextStep, AL, ML, PAL, PS, TEXT_TABLES};

// Control codewords
//------------------------------------------------------------------------------

pub const LATCH_TEXT: u16 = 900;
pub const LATCH_BYTE: u16 = 901;
pub const LATCH_NUMERIC: u16 = 902;
pub const SHIFT_BYTE: u16 = 913;
pub const LATCH_BYTE_6: u16 = 924;

pub const MAX_NUMERIC_GROUP: usize = 44;

// Text compaction
//------------------------------------------------------------------------------

// Current text sub-table, carried across text runs until a 900 latch resets it
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TextState {
    pub table: Submode,
}

impl Default for TextState {
    fn default() -> Self {
        Self { table: Submode::Alpha }
    }
}

impl TextState {
    pub fn reset(&mut self) {
        self.table = Submode::Alpha;
    }
}

// Greedy steps for a text run starting in table `from`
pub fn text_steps(data: &[u8], from: Submode) -> Vec<TextStep> {
    let mut steps = Vec::with_capacity(data.len());
    let mut table = from;
    let mut units = 0;
    for (i, &b) in data.iter().enumerate() {
        let mask = classify(b);
        if mask == 0 {
            // The pad before the shift is PAL in the punctuation table
            if units % 2 == 1 && table == Submode::Punct {
                table = Submode::Alpha;
            }
            units = 0;
            steps.push(TextStep::Byte);
            continue;
        }
        if mask & table.bit() != 0 {
            units += 1;
            steps.push(TextStep::Latch(table));
            continue;
        }

        // Whether the next byte would also want the table we are heading to
        let next_needs = |t: Submode| {
            data.get(i + 1).is_some_and(|&n| {
                let m = classify(n);
                m & t.bit() != 0 && m & table.bit() == 0
            })
        };
        if let Some(t) = table.shift_for(mask).filter(|t| !next_needs(*t)) {
            units += 2;
            steps.push(TextStep::Shift(t));
            continue;
        }

        let to = TEXT_TABLES
            .into_iter()
            .filter(|t| mask & t.bit() != 0)
            .min_by_key(|t| table.latch(*t).len())
            .unwrap_or(Submode::Alpha);
        units += table.latch(to).len() + 1;
        table = to;
        steps.push(TextStep::Latch(to));
    }
    steps
}

fn push_pairs(vals: &[u8], out: &mut Vec<u16>) {
    debug_assert!(vals.len() % 2 == 0, "Unpadded text values: {}", vals.len());
    out.extend(vals.chunks_exact(2).map(|p| p[0] as u16 * 30 + p[1] as u16));
}

pub fn compact_text(
    data: &[u8],
    steps: &[TextStep],
    state: &mut TextState,
    last: bool,
    out: &mut Vec<u16>,
) {
    debug_assert!(steps.len() == data.len(), "{} steps for {} bytes", steps.len(), data.len());

    let mut vals: Vec<u8> = Vec::with_capacity(data.len() * 2);
    for (&b, &step) in data.iter().zip(steps) {
        let mask = classify(b);
        match step {
            TextStep::Byte => {
                if vals.len() % 2 == 1 {
                    vals.push(PS);
                    if state.table == Submode::Punct {
                        state.table = Submode::Alpha;
                    }
                }
                push_pairs(&vals, out);
                vals.clear();
                out.extend([SHIFT_BYTE, b as u16]);
            }
            TextStep::Shift(t) if state.table.shift_for(mask) == Some(t) => {
                vals.extend([t.shift_value(), text_value(t, b)]);
            }
            // A shift planned from another table, at the start of a later segment, latches instead
            TextStep::Shift(t) | TextStep::Latch(t) => {
                debug_assert!(mask & t.bit() != 0, "Byte {b} not in table {t:?}");
                vals.extend_from_slice(state.table.latch(t));
                vals.push(text_value(t, b));
                state.table = t;
            }
        }
    }

    if vals.len() % 2 == 1 {
        if last {
            vals.push(PS);
        } else {
            let (pad, table) = match state.table {
                Submode::Alpha | Submode::Lower => (ML, Submode::Mixed),
                Submode::Mixed => (AL, Submode::Alpha),
                _ => (PAL, Submode::Alpha),
            };
            vals.push(pad);
            state.table = table;
        }
    }
    push_pairs(&vals, out);
}

// Numeric compaction
//------------------------------------------------------------------------------

pub fn compact_numeric(digits: &[u8], out: &mut Vec<u16>) {
    for group in digits.chunks(MAX_NUMERIC_GROUP) {
        debug_assert!(group.iter().all(u8::is_ascii_digit), "Non digit in numeric run");

        // Decimal digits of "1" + group, most significant first
        let mut num: Vec<u8> = Vec::with_capacity(group.len() + 1);
        num.push(1);
        num.extend(group.iter().map(|d| d - b'0'));

        let mut cws = Vec::with_capacity(group.len() / 2 + 1);
        while !num.is_empty() {
            let mut rem = 0u32;
            let mut quot = Vec::with_capacity(num.len());
            for &d in &num {
                let acc = rem * 10 + d as u32;
                let q = acc / 900;
                rem = acc % 900;
                if !quot.is_empty() || q > 0 {
                    quot.push(q as u8);
                }
            }
            cws.push(rem as u16);
            num = quot;
        }
        out.extend(cws.iter().rev());
    }
}

// Codewords a numeric run of `n` digits occupies, excluding the latch
pub fn numeric_len(n: usize) -> usize {
    let full = n / MAX_NUMERIC_GROUP * 15;
    match n % MAX_NUMERIC_GROUP {
        0 => full,
        r => {
            // "1" followed by r digits stays below 2 * 10^r
            let bits = ((r as f64) * 10f64.log2() + 1.0) / 900f64.log2();
            full + bits.floor() as usize + 1
        }
    }
}

// Byte compaction
//------------------------------------------------------------------------------

// Latched byte run; single bytes inside text go through `TextStep::Byte`
pub fn compact_bytes(data: &[u8], out: &mut Vec<u16>) {
    debug_assert!(!data.is_empty(), "Empty byte run");

    out.push(if data.len() % 6 == 0 { LATCH_BYTE_6 } else { LATCH_BYTE });
    pack_bytes(data, out);
}

// Base 900 packing without a latch: 6 bytes to 5 codewords, leftovers as-is
pub fn pack_bytes(data: &[u8], out: &mut Vec<u16>) {
    let mut chunks = data.chunks_exact(6);
    for c in chunks.by_ref() {
        let mut v = c.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        let mut cws = [0u16; 5];
        for cw in cws.iter_mut().rev() {
            *cw = (v % 900) as u16;
            v /= 900;
        }
        out.extend(cws);
    }
    out.extend(chunks.remainder().iter().map(|&b| b as u16));
}

pub fn byte_len(n: usize) -> usize {
    n / 6 * 5 + n % 6
}
