use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const PRICE_UNAVAILABLE: &str = "—";

/// Display price after the fallback rule has been applied.
///
/// `amount` is the first present value of the primary and fallback price
/// fields; `currency` defaults to EUR. A missing amount renders as the
/// unavailable marker, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Option<f64>,
    pub currency: String,
}

impl Price {
    pub fn coalesce(primary: Option<f64>, fallback: Option<f64>, currency: Option<&str>) -> Self {
        Self {
            amount: primary.or(fallback),
            currency: currency.unwrap_or(DEFAULT_CURRENCY).to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self::coalesce(None, None, None)
    }

    pub fn is_available(&self) -> bool {
        self.amount.is_some()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{:.2} {}", amount, self.currency),
            None => f.write_str(PRICE_UNAVAILABLE),
        }
    }
}
