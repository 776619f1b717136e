use crate::shared::Result;
use crate::voucher::domain::{NewVoucher, Voucher, VoucherCode, VoucherId};
use async_trait::async_trait;
use std::sync::Arc;

/// VoucherRepository port for voucher persistence
///
/// This port abstracts the storage behind the voucher service. It is a plain
/// key-value contract: look a voucher up by code, insert one, flag one as used.
///
/// # Async Support
/// All methods are async. Implementations must be `Send + Sync` so a service
/// can be shared between tasks.
#[async_trait]
pub trait VoucherRepository: Send + Sync {
    /// Fetches the voucher stored under `code`, if any
    async fn get_voucher_by_code(&self, code: &VoucherCode) -> Result<Option<Voucher>>;

    /// Persists a new, unused voucher and assigns its id
    ///
    /// # Errors
    /// Returns an error if the store cannot be written. Implementations may
    /// also reject a code that is already present.
    async fn create_voucher(&self, data: NewVoucher) -> Result<()>;

    /// Marks the voucher with `id` as used
    ///
    /// # Errors
    /// Returns an error if no voucher has that id or the store cannot be written
    async fn use_voucher(&self, id: VoucherId) -> Result<()>;
}

#[async_trait]
impl<R: VoucherRepository + ?Sized> VoucherRepository for Arc<R> {
    async fn get_voucher_by_code(&self, code: &VoucherCode) -> Result<Option<Voucher>> {
        (**self).get_voucher_by_code(code).await
    }

    async fn create_voucher(&self, data: NewVoucher) -> Result<()> {
        (**self).create_voucher(data).await
    }

    async fn use_voucher(&self, id: VoucherId) -> Result<()> {
        (**self).use_voucher(id).await
    }
}
