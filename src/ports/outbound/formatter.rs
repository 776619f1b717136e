use crate::shared::Result;
use crate::voucher::domain::{ApplyResult, DiscountPercent, VoucherCode};

/// ResultFormatter port for rendering service outcomes
///
/// Implementations decide the textual representation (JSON, plain text)
/// of what the voucher service returned.
pub trait ResultFormatter {
    /// Formats the outcome of applying a voucher
    fn format_apply(&self, result: &ApplyResult) -> Result<String>;

    /// Formats the confirmation for a newly created voucher
    fn format_created(&self, code: &VoucherCode, discount: DiscountPercent) -> Result<String>;
}
