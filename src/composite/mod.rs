mod ai;
mod cc;
mod field;
mod linear;
mod method;

pub use linear::{LinearEncoder, LinearSymbol};

use crate::builder::{Layout, Symbol};
use crate::common::error::{record, SymbolError, SymbolResult, Warning};
use crate::common::metadata::{Carrier, CompositeMode, Symbology};
use cc::CcPlan;

const MAX_PRIMARY_LEN: usize = 120;

// GS1 Composite builder
//------------------------------------------------------------------------------

// Builds a 2D component over a linear symbol drawn by the caller's encoder
pub struct CompositeBuilder<'a> {
    carrier: Carrier,
    primary: String,
    data: String,
    mode: Option<CompositeMode>,
    linear: &'a dyn LinearEncoder,
}

impl<'a> CompositeBuilder<'a> {
    pub fn new(carrier: Carrier, primary: &str, data: &str, linear: &'a dyn LinearEncoder) -> Self {
        Self {
            carrier,
            primary: primary.to_string(),
            data: data.to_string(),
            mode: None,
            linear,
        }
    }

    pub fn carrier(&mut self, carrier: Carrier) -> &mut Self {
        self.carrier = carrier;
        self
    }

    pub fn primary(&mut self, primary: &str) -> &mut Self {
        self.primary = primary.to_string();
        self
    }

    pub fn data(&mut self, data: &str) -> &mut Self {
        self.data = data.to_string();
        self
    }

    pub fn mode(&mut self, mode: CompositeMode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn unset_mode(&mut self) -> &mut Self {
        self.mode = None;
        self
    }

    // Fixes the composite mode a previous build settled on
    pub fn pin(&mut self, symbol: &Symbol) -> &mut Self {
        self.mode = symbol.layout().composite;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Carrier: {:?}, Mode: {:?} }}", self.carrier, self.mode)
    }
}

impl CompositeBuilder<'_> {
    pub fn build(&self) -> SymbolResult<Symbol> {
        log::debug!("Generating composite symbol {}", self.metadata());
        self.validate()?;

        let flat = ai::parse(&self.data)?;
        let encoded = method::encode(&flat)?;
        let min_len = encoded.min_len();
        log::debug!("Encoded composite data into at least {min_len} bits");

        let mut warnings = vec![];
        let (plan, linear) = self.plan(min_len, &mut warnings)?;
        let mode = plan.mode();
        log::debug!("Chose {mode:?} with {} columns, {} rows", plan.columns(), plan.rows());

        let bits = encoded.finish(plan.target_bits());
        let cws = plan.codewords(&bits);
        let cc = plan.render(&cws);
        let cc_width = cc.first().map_or(0, Vec::len);
        let cc_heights = vec![plan.row_height(); cc.len()];

        let shift = linear::shift(self.carrier, mode, &linear, cc_width);
        let (rows, heights) = linear::merge(cc, cc_heights, &linear, shift);

        let layout = Layout {
            symbology: Symbology::Composite(self.carrier),
            ec_level: plan.level(),
            ecc: plan.ecc(),
            columns: plan.columns(),
            rows: plan.rows(),
            composite: Some(mode),
        };
        debug_assert!(cws.len() == layout.capacity(), "Codewords don't fill the component");
        Ok(Symbol::new(rows, heights, cws, layout, warnings))
    }

    // Picks the component mode and size; automatic selection widens from CC-A
    fn plan(&self, bits: usize, warnings: &mut Vec<Warning>) -> SymbolResult<(CcPlan, LinearSymbol)> {
        if let Some(mode) = self.mode {
            let linear = self.linear.encode(self.carrier, &self.primary, mode)?;
            let plan = cc::plan(mode, self.carrier, linear.width(), bits).ok_or_else(|| {
                SymbolError::TooLong(format!("{bits} bits of composite data exceed {mode:?}"))
            })?;
            return Ok((plan, linear));
        }

        let mut mode = Some(CompositeMode::CcA);
        while let Some(m) = mode.filter(|&m| m != CompositeMode::CcC || self.carrier.supports_cc_c()) {
            // Only CC-C depends on the linear width
            let linear = match m {
                CompositeMode::CcC => Some(self.linear.encode(self.carrier, &self.primary, m)?),
                _ => None,
            };
            let width = linear.as_ref().map_or(0, LinearSymbol::width);
            if let Some(plan) = cc::plan(m, self.carrier, width, bits) {
                if m != CompositeMode::CcA {
                    record(warnings, Warning::CompositeModeChanged { from: CompositeMode::CcA, to: m });
                }
                let linear = match linear {
                    Some(l) => l,
                    None => self.linear.encode(self.carrier, &self.primary, m)?,
                };
                return Ok((plan, linear));
            }
            mode = m.next();
        }
        Err(SymbolError::TooLong(format!(
            "{bits} bits of composite data exceed every component available to {:?}",
            self.carrier
        )))
    }

    fn validate(&self) -> SymbolResult<()> {
        let invalid = |msg: String| Err(SymbolError::InvalidData(msg));

        if self.primary.is_empty() {
            return invalid("No primary message".to_string());
        }
        if self.primary.contains('\0') {
            return invalid("Primary message contains NUL".to_string());
        }
        if self.primary.len() > MAX_PRIMARY_LEN {
            return invalid(format!(
                "Primary message of {} bytes exceeds {MAX_PRIMARY_LEN}",
                self.primary.len()
            ));
        }
        if self.mode == Some(CompositeMode::CcC) && !self.carrier.supports_cc_c() {
            return Err(SymbolError::InvalidOption(format!(
                "CC-C requires a GS1-128 carrier, got {:?}",
                self.carrier
            )));
        }
        Ok(())
    }
}
