//! Fine Collector
//!
//! Validation gate for the optional fine entered alongside an attendance mark.

/// A fine amount: finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FineAmount(f64);

impl FineAmount {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Two decimal places, for notices
    pub fn display(&self) -> String {
        format!("{:.2}", self.0)
    }
}

/// Parse operator input; `None` keeps the pay action disabled
pub fn parse_fine_amount(input: &str) -> Option<FineAmount> {
    input.trim().parse::<f64>().ok().and_then(FineAmount::new)
}
