use crate::common::ec::ecc_len;
use crate::common::error::{record, SymbolError, SymbolResult, Warning};
use crate::common::metadata::{MAX_CODEWORDS, MAX_COLUMNS, MAX_EC_LEVEL, MAX_ROWS, MIN_ROWS};
use crate::common::tables::{Variant, MAX_MICRO_CAPACITY, MICRO_VARIANTS};

// Error correction level
//------------------------------------------------------------------------------

// Default level by data codeword count, lowered only when the symbol would overflow
pub fn default_level(d: usize) -> SymbolResult<u8> {
    let preferred = match d {
        0..=40 => 2,
        41..=160 => 3,
        161..=320 => 4,
        _ => 5,
    };
    (0..=preferred)
        .rev()
        .find(|&l| d + ecc_len(l) <= MAX_CODEWORDS)
        .ok_or_else(|| too_long(d))
}

fn too_long(d: usize) -> SymbolError {
    SymbolError::TooLong(format!("{d} data codewords exceed the symbol capacity"))
}

// PDF417 sizing
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Size {
    pub level: u8,
    pub columns: usize,
    pub rows: usize,
}

impl Size {
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

pub fn size_pdf417(
    d: usize,
    level: Option<u8>,
    columns: Option<usize>,
    rows: Option<usize>,
    warnings: &mut Vec<Warning>,
) -> SymbolResult<Size> {
    let level = match level {
        Some(l) => {
            debug_assert!(l <= MAX_EC_LEVEL, "Unvalidated level {l}");
            if d + ecc_len(l) > MAX_CODEWORDS {
                return Err(SymbolError::TooLong(format!(
                    "{d} data codewords exceed the capacity at error correction level {l}"
                )));
            }
            l
        }
        None => default_level(d)?,
    };
    let total = d + ecc_len(level);

    let (mut c, mut r) = match (columns, rows) {
        (Some(c), Some(r)) if c * r >= total && c * r <= MAX_CODEWORDS => (c, r),
        (_, Some(r)) => {
            let c = total.div_ceil(r);
            if c > MAX_COLUMNS {
                (MAX_COLUMNS, total.div_ceil(MAX_COLUMNS).max(MIN_ROWS))
            } else {
                (c, r)
            }
        }
        (Some(c), None) => grow_columns(c, total),
        (None, None) => {
            let c = ((d as f64 / 3.0).sqrt().round() as usize).clamp(1, MAX_COLUMNS);
            grow_columns(c, total)
        }
    };

    if c * r > MAX_CODEWORDS || r > MAX_ROWS {
        (c, r) = closest_fit(c, total).ok_or_else(|| too_long(d))?;
    }
    debug_assert!(c * r >= total, "Size {c}x{r} below {total} codewords");

    if let Some(req) = columns.filter(|&req| req != c) {
        record(warnings, Warning::ColumnsAdjusted { requested: req, used: c });
    }
    if let Some(req) = rows.filter(|&req| req != r) {
        record(warnings, Warning::RowsAdjusted { requested: req, used: r });
    }
    log::debug!("Sized {d} data codewords at level {level}: {c} columns, {r} rows");
    Ok(Size { level, columns: c, rows: r })
}

// Rows for a column count, widening while the row limit is exceeded
fn grow_columns(mut c: usize, total: usize) -> (usize, usize) {
    let mut r = total.div_ceil(c).max(MIN_ROWS);
    while r > MAX_ROWS && c < MAX_COLUMNS {
        c += 1;
        r = total.div_ceil(c).max(MIN_ROWS);
    }
    (c, r)
}

// Smallest fitting grid, nearest to the preferred column count on ties
fn closest_fit(preferred: usize, total: usize) -> Option<(usize, usize)> {
    (1..=MAX_COLUMNS)
        .filter_map(|c| {
            let r = total.div_ceil(c).max(MIN_ROWS);
            (r <= MAX_ROWS && c * r <= MAX_CODEWORDS).then_some((c, r))
        })
        .min_by_key(|&(c, r)| (c * r, c.abs_diff(preferred)))
}

// MicroPDF417 variant selection
//------------------------------------------------------------------------------

pub fn select_micro(
    d: usize,
    columns: Option<usize>,
    warnings: &mut Vec<Warning>,
) -> SymbolResult<&'static Variant> {
    if d > MAX_MICRO_CAPACITY {
        return Err(SymbolError::TooLong(format!(
            "{d} data codewords exceed the MicroPDF417 capacity of {MAX_MICRO_CAPACITY}"
        )));
    }

    if let Some(c) = columns {
        if let Some(v) = MICRO_VARIANTS.iter().find(|v| v.columns == c && v.capacity() >= d) {
            log::debug!("Chose MicroPDF417 variant {}x{}", v.columns, v.rows);
            return Ok(v);
        }
    }

    let v = MICRO_VARIANTS
        .iter()
        .filter(|v| v.capacity() >= d)
        .min_by_key(|v| (v.capacity(), v.columns))
        .ok_or_else(|| too_long(d))?;
    if let Some(c) = columns {
        record(warnings, Warning::MicroColumnsIgnored { requested: c, used: v.columns });
    }
    log::debug!("Chose MicroPDF417 variant {}x{}", v.columns, v.rows);
    Ok(v)
}
