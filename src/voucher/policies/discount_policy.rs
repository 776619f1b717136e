use crate::voucher::domain::{Amount, ApplyResult, Voucher};

/// Minimum purchase amount required for a voucher discount to apply
pub const MIN_VALUE_FOR_DISCOUNT: f64 = 100.0;

/// DiscountPolicy encodes the rules for redeeming a voucher
///
/// A voucher applies when:
/// 1. it has not been used yet
/// 2. the purchase amount is at least the minimum amount
///
/// When it applies, the final amount is `amount - amount * discount / 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountPolicy {
    min_amount: Amount,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            min_amount: Amount::new_unchecked(MIN_VALUE_FOR_DISCOUNT),
        }
    }
}

impl DiscountPolicy {
    pub fn with_min_amount(min_amount: Amount) -> Self {
        Self { min_amount }
    }

    pub fn min_amount(&self) -> Amount {
        self.min_amount
    }

    /// Whether `voucher` may be redeemed against `amount`
    pub fn is_eligible(&self, voucher: &Voucher, amount: Amount) -> bool {
        !voucher.is_used() && amount >= self.min_amount
    }

    /// Computes the outcome of redeeming `voucher` against `amount`.
    ///
    /// Does not mark the voucher used; callers persist that when
    /// `ApplyResult::applied` is true.
    pub fn evaluate(&self, voucher: &Voucher, amount: Amount) -> ApplyResult {
        let discount = voucher.discount();
        let applied = self.is_eligible(voucher, amount);
        let final_amount = if applied {
            amount.discounted(discount)
        } else {
            amount
        };

        ApplyResult::new(amount, discount, final_amount, applied)
    }
}
