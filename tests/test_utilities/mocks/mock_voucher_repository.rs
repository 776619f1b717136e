use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use voucher_service::prelude::*;

/// A call received by the mock, in order
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    GetVoucherByCode(String),
    CreateVoucher { code: String, discount: u8 },
    UseVoucher(VoucherId),
}

/// Mock VoucherRepository that answers lookups with a fixed voucher and
/// records every call
#[derive(Default, Clone)]
pub struct MockVoucherRepository {
    pub existing: Option<Voucher>,
    pub fail_writes: bool,
    pub calls: Arc<Mutex<Vec<RepositoryCall>>>,
}

impl MockVoucherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups return `voucher` for any code
    pub fn with_voucher(code: &str, discount: i64, used: bool) -> Self {
        Self {
            existing: Some(Voucher::new(
                VoucherId::new(1),
                VoucherCode::new(code).unwrap(),
                DiscountPercent::new(discount).unwrap(),
                used,
            )),
            ..Self::default()
        }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get_calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn use_calls(&self) -> Vec<VoucherId> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                RepositoryCall::UseVoucher(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VoucherRepository for MockVoucherRepository {
    async fn get_voucher_by_code(&self, code: &VoucherCode) -> Result<Option<Voucher>> {
        self.record(RepositoryCall::GetVoucherByCode(code.to_string()));
        Ok(self.existing.clone())
    }

    async fn create_voucher(&self, data: NewVoucher) -> Result<()> {
        self.record(RepositoryCall::CreateVoucher {
            code: data.code().to_string(),
            discount: data.discount().value(),
        });
        if self.fail_writes {
            anyhow::bail!("Mock voucher repository failure");
        }
        Ok(())
    }

    async fn use_voucher(&self, id: VoucherId) -> Result<()> {
        self.record(RepositoryCall::UseVoucher(id));
        if self.fail_writes {
            anyhow::bail!("Mock voucher repository failure");
        }
        Ok(())
    }
}
