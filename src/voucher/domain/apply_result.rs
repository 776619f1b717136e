use super::{Amount, DiscountPercent};
use serde::Serialize;

/// Outcome of applying a voucher to an amount. Computed, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResult {
    amount: Amount,
    discount: DiscountPercent,
    final_amount: Amount,
    applied: bool,
}

impl ApplyResult {
    pub fn new(
        amount: Amount,
        discount: DiscountPercent,
        final_amount: Amount,
        applied: bool,
    ) -> Self {
        Self {
            amount,
            discount,
            final_amount,
            applied,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    pub fn final_amount(&self) -> Amount {
        self.final_amount
    }

    pub fn applied(&self) -> bool {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_result_serializes_camel_case() {
        let result = ApplyResult::new(
            Amount::new(100.0).unwrap(),
            DiscountPercent::new(10).unwrap(),
            Amount::new(90.0).unwrap(),
            true,
        );
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "amount": 100.0,
                "discount": 10,
                "finalAmount": 90.0,
                "applied": true
            })
        );
    }
}
