use super::DiscountPercent;
use crate::shared::VoucherError;
use serde::{Deserialize, Serialize};

/// Monetary amount. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, VoucherError> {
        if !value.is_finite() {
            return Err(VoucherError::validation(format!(
                "Amount must be a finite number, got {}",
                value
            )));
        }
        if value < 0.0 {
            return Err(VoucherError::validation(format!(
                "Amount cannot be negative, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Caller guarantees `value` is finite and non-negative
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Amount left after taking `discount` percent off
    pub fn discounted(&self, discount: DiscountPercent) -> Amount {
        Amount(self.0 - self.0 * discount.as_fraction())
    }
}

impl TryFrom<f64> for Amount {
    type Error = VoucherError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
