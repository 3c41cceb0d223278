use super::compact::{byte_len, numeric_len, text_steps};
use super::types::{classify, is_digit, Compaction, Submode, TextStep, SUBMODES, TEXT_TABLES};
use crate::common::error::{SymbolError, SymbolResult};

// Mode run
//------------------------------------------------------------------------------

// A text run may carry single bytes as 913 shifts; byte runs are always latched
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Run {
    pub mode: Compaction,
    pub start: usize,
    pub len: usize,
    // One step per byte of a text run, empty otherwise
    pub steps: Vec<TextStep>,
}

impl Run {
    pub fn new(mode: Compaction, start: usize, len: usize) -> Self {
        Self { mode, start, len, steps: vec![] }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

pub fn plan(data: &[u8], fast: bool) -> SymbolResult<Vec<Run>> {
    if data.is_empty() {
        return Ok(vec![]);
    }
    let runs = if fast { plan_fast(data) } else { plan_optimal(data)? };
    debug_assert!(
        runs.windows(2).all(|w| w[0].end() == w[1].start)
            && runs.first().map(|r| r.start) == Some(0)
            && runs.last().map(|r| r.end()) == Some(data.len()),
        "Runs don't partition the input: {runs:?}"
    );
    debug_assert!(
        runs.iter().all(|r| r.steps.len() == if r.mode == Compaction::Text { r.len } else { 0 }),
        "Text steps don't cover their runs: {runs:?}"
    );
    Ok(runs)
}

// Optimal planner
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Edge {
    // Table or mode the stream is in after this edge
    mode: Submode,
    // Compaction that consumes this edge's byte
    run: Compaction,
    // How the byte is written when it goes through text compaction
    step: Option<TextStep>,
    // Values, bytes or digits pending in the current run
    units: usize,
    // Codewords of everything before the current run, latches included
    base: usize,
    prev: Option<usize>,
}

impl Edge {
    fn cost(&self) -> usize {
        self.base
            + match self.mode {
                Submode::Byte => byte_len(self.units),
                Submode::Numeric => numeric_len(self.units),
                _ => self.units.div_ceil(2),
            }
    }

    // Room left in the current run for free packing, higher is better
    fn slack(&self) -> usize {
        match self.mode {
            Submode::Byte => self.units % 6,
            Submode::Numeric => 0,
            _ => self.units % 2,
        }
    }

    // Text edges with an odd value count pad differently, so they keep their own slot
    fn key(&self) -> usize {
        if self.mode.is_text() && self.units % 2 == 1 {
            self.mode as usize + SUBMODES.len()
        } else {
            self.mode as usize
        }
    }

    fn beats(&self, other: &Edge) -> bool {
        let (c, oc) = (self.cost(), other.cost());
        c < oc || (c == oc && self.slack() > other.slack())
    }
}

// One slot per mode, plus the odd counterparts of the four text tables
const KEYS: usize = 10;

// Every text edge costs exactly what `compact_text` writes for its step
fn optimal_path(data: &[u8]) -> SymbolResult<(Vec<Edge>, usize)> {
    let len = data.len();
    let mut arena: Vec<Edge> = vec![];
    arena.try_reserve(len * 4).map_err(|_| SymbolError::Memory)?;
    let mut best: Vec<[Option<usize>; KEYS]> = vec![];
    best.try_reserve(len + 1).map_err(|_| SymbolError::Memory)?;
    best.resize(len + 1, [None; KEYS]);

    // The stream starts in text alpha without any latch
    arena.push(Edge {
        mode: Submode::Alpha,
        run: Compaction::Text,
        step: None,
        units: 0,
        base: 0,
        prev: None,
    });
    best[0][Submode::Alpha as usize] = Some(0);

    for (i, &b) in data.iter().enumerate() {
        let mask = classify(b);
        let live = best[i];
        for idx in live.into_iter().flatten() {
            let e = arena[idx];
            let mut cands: Vec<Edge> = Vec::with_capacity(8);
            let next = |mode, run, step, units, base| Edge {
                mode,
                run,
                step,
                units,
                base,
                prev: Some(idx),
            };

            // Text continues in place, or starts in alpha after a 900 latch
            let (table, units, base) = if e.mode.is_text() {
                (e.mode, e.units, e.base)
            } else {
                (Submode::Alpha, 0, e.cost() + 1)
            };
            for t in TEXT_TABLES.into_iter().filter(|t| mask & t.bit() != 0) {
                let units = units + table.latch(t).len() + 1;
                cands.push(next(t, Compaction::Text, Some(TextStep::Latch(t)), units, base));
            }
            if let Some(t) = table.shift_for(mask) {
                cands.push(next(table, Compaction::Text, Some(TextStep::Shift(t)), units + 2, base));
            }
            if e.mode.is_text() {
                // An odd pad before the shift is PAL in the punctuation table
                let odd_punct = e.mode == Submode::Punct && e.units % 2 == 1;
                let after = if odd_punct { Submode::Alpha } else { e.mode };
                cands.push(next(after, Compaction::Text, Some(TextStep::Byte), 0, e.cost() + 2));
            }

            let (units, base) = match e.mode {
                Submode::Byte => (e.units + 1, e.base),
                _ => (1, e.cost() + 1),
            };
            cands.push(next(Submode::Byte, Compaction::Byte, None, units, base));

            if is_digit(b) {
                let (units, base) = match e.mode {
                    Submode::Numeric => (e.units + 1, e.base),
                    _ => (1, e.cost() + 1),
                };
                cands.push(next(Submode::Numeric, Compaction::Numeric, None, units, base));
            }

            for c in cands {
                let slot = &mut best[i + 1][c.key()];
                match *slot {
                    Some(o) if !c.beats(&arena[o]) => {}
                    _ => {
                        arena.push(c);
                        *slot = Some(arena.len() - 1);
                    }
                }
            }
        }
    }

    let last = best[len]
        .into_iter()
        .flatten()
        .reduce(|a, b| if arena[b].beats(&arena[a]) { b } else { a })
        .unwrap_or(0);
    Ok((arena, last))
}

fn plan_optimal(data: &[u8]) -> SymbolResult<Vec<Run>> {
    let (arena, last) = optimal_path(data)?;
    Ok(trace_optimal_runs(&arena, last, data.len()))
}

// Backtrack the edge chain into runs, keeping the text step of every byte
fn trace_optimal_runs(arena: &[Edge], last: usize, len: usize) -> Vec<Run> {
    let mut picks = Vec::with_capacity(len);
    let mut cur = Some(last);
    while let Some(idx) = cur {
        let e = &arena[idx];
        if e.prev.is_some() {
            picks.push((e.run, e.step));
        }
        cur = e.prev;
    }
    picks.reverse();
    debug_assert!(picks.len() == len, "Trace length {} != {len}", picks.len());

    let mut runs: Vec<Run> = vec![];
    for (i, (mode, step)) in picks.into_iter().enumerate() {
        if runs.last().map_or(true, |r| r.mode != mode) {
            runs.push(Run::new(mode, i, 0));
        }
        if let Some(r) = runs.last_mut() {
            r.len += 1;
            r.steps.extend(step);
        }
    }
    runs
}

fn build_runs(char_modes: &[Compaction]) -> Vec<Run> {
    let mut runs: Vec<Run> = vec![];
    for (i, &m) in char_modes.iter().enumerate() {
        match runs.last_mut() {
            Some(r) if r.mode == m => r.len += 1,
            _ => runs.push(Run::new(m, i, 1)),
        }
    }
    runs
}

// Fast planner
//------------------------------------------------------------------------------

const MIN_NUMERIC_RUN: usize = 13;
const MIN_INNER_NUMERIC_RUN: usize = 11;
const MIN_TEXT_RUN: usize = 5;

fn plan_fast(data: &[u8]) -> Vec<Run> {
    let char_modes: Vec<Compaction> = data
        .iter()
        .map(|&b| match b {
            _ if is_digit(b) => Compaction::Numeric,
            _ if classify(b) != 0 => Compaction::Text,
            _ => Compaction::Byte,
        })
        .collect();
    let mut runs = build_runs(&char_modes);

    // Short digit runs are cheaper inside text, or inside bytes between byte runs
    let n = runs.len();
    for i in 0..n {
        if runs[i].mode != Compaction::Numeric {
            continue;
        }
        let prev = i.checked_sub(1).map(|p| runs[p].mode);
        let next = runs.get(i + 1).map(|r| r.mode);
        let len = runs[i].len;
        let near_text = prev == Some(Compaction::Text) || next == Some(Compaction::Text);
        let keep = len >= MIN_NUMERIC_RUN || (i > 0 && !near_text && len >= MIN_INNER_NUMERIC_RUN);
        if !keep {
            let between_bytes = prev == Some(Compaction::Byte) && next == Some(Compaction::Byte);
            runs[i].mode = if between_bytes && len < MIN_TEXT_RUN {
                Compaction::Byte
            } else {
                Compaction::Text
            };
        }
    }
    let mut runs = regroup(runs);

    // Short text runs after a byte run are absorbed when nothing but bytes follows
    let n = runs.len();
    for i in 1..n {
        let followed_by_bytes = runs.get(i + 1).map_or(true, |r| r.mode == Compaction::Byte);
        if runs[i].mode == Compaction::Text
            && runs[i].len < MIN_TEXT_RUN
            && runs[i - 1].mode == Compaction::Byte
            && followed_by_bytes
        {
            runs[i].mode = Compaction::Byte;
        }
    }
    let mut runs = regroup(runs);

    // A lone byte at the start or after text rides in the text run as a shift
    for i in 0..runs.len() {
        let after_text = i == 0 || runs[i - 1].mode == Compaction::Text;
        if runs[i].mode == Compaction::Byte && runs[i].len == 1 && after_text {
            runs[i].mode = Compaction::Text;
        }
    }
    let mut runs = regroup(runs);

    // Every text run follows a 900 latch or opens the stream, both in alpha
    for r in runs.iter_mut().filter(|r| r.mode == Compaction::Text) {
        r.steps = text_steps(&data[r.start..r.end()], Submode::Alpha);
    }
    runs
}

fn regroup(runs: Vec<Run>) -> Vec<Run> {
    let mut res: Vec<Run> = Vec::with_capacity(runs.len());
    for r in runs {
        match res.last_mut() {
            Some(l) if l.mode == r.mode => l.len += r.len,
            _ => res.push(r),
        }
    }
    res
}
