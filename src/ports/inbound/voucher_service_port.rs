use crate::shared::Result;
use crate::voucher::domain::{Amount, ApplyResult, DiscountPercent, VoucherCode};
use async_trait::async_trait;

/// VoucherServicePort - Inbound port for the voucher service
///
/// This port defines the interface that external adapters (CLI, HTTP, etc.)
/// use to create and redeem vouchers. It represents the application's public API.
#[async_trait]
pub trait VoucherServicePort: Send + Sync {
    /// Creates a new, unused voucher
    ///
    /// # Errors
    /// Returns `VoucherError::Conflict("Voucher already exist.")` if the code
    /// is taken, or the repository error if persisting fails
    async fn create_voucher(&self, code: VoucherCode, discount: DiscountPercent) -> Result<()>;

    /// Applies the voucher `code` to `amount`
    ///
    /// An ineligible voucher (used, or amount below the minimum) is not an
    /// error: the result carries `applied = false` and the amount unchanged.
    ///
    /// # Errors
    /// Returns `VoucherError::Conflict("Voucher does not exist.")` if no voucher
    /// has this code, or the repository error if a lookup or update fails
    async fn apply_voucher(&self, code: &VoucherCode, amount: Amount) -> Result<ApplyResult>;
}
