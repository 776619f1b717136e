use crate::application::use_cases::VOUCHER_ALREADY_EXISTS;
use crate::ports::outbound::VoucherRepository;
use crate::shared::{Result, VoucherError};
use crate::voucher::domain::{NewVoucher, Voucher, VoucherCode, VoucherId};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// InMemoryVoucherRepository keeps vouchers in a concurrent map keyed by code.
///
/// Ids are handed out from an atomic counter starting at 1. Nothing is
/// persisted; the store lives as long as the value.
pub struct InMemoryVoucherRepository {
    vouchers: DashMap<VoucherCode, Voucher>,
    next_id: AtomicU64,
}

impl InMemoryVoucherRepository {
    pub fn new() -> Self {
        Self {
            vouchers: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.vouchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vouchers.is_empty()
    }

    /// All stored vouchers, ordered by id
    pub fn snapshot(&self) -> Vec<Voucher> {
        let mut vouchers: Vec<Voucher> = self
            .vouchers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        vouchers.sort_by_key(Voucher::id);
        vouchers
    }
}

impl Default for InMemoryVoucherRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoucherRepository for InMemoryVoucherRepository {
    async fn get_voucher_by_code(&self, code: &VoucherCode) -> Result<Option<Voucher>> {
        Ok(self.vouchers.get(code).map(|entry| entry.value().clone()))
    }

    async fn create_voucher(&self, data: NewVoucher) -> Result<()> {
        match self.vouchers.entry(data.code().clone()) {
            Entry::Occupied(_) => Err(VoucherError::conflict(VOUCHER_ALREADY_EXISTS).into()),
            Entry::Vacant(slot) => {
                let id = VoucherId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
                slot.insert(data.into_voucher(id));
                Ok(())
            }
        }
    }

    async fn use_voucher(&self, id: VoucherId) -> Result<()> {
        for mut entry in self.vouchers.iter_mut() {
            if entry.id() == id {
                if !entry.mark_used() {
                    anyhow::bail!("Voucher {} has already been used", id);
                }
                return Ok(());
            }
        }
        anyhow::bail!("No voucher with id {} in the in-memory store", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voucher::domain::DiscountPercent;

    fn new_voucher(code: &str, discount: i64) -> NewVoucher {
        NewVoucher::new(
            VoucherCode::new(code).unwrap(),
            DiscountPercent::new(discount).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryVoucherRepository::new();
        repo.create_voucher(new_voucher("FIRST", 10)).await.unwrap();
        repo.create_voucher(new_voucher("SECOND", 20)).await.unwrap();

        let first = repo
            .get_voucher_by_code(&VoucherCode::new("FIRST").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.id(), VoucherId::new(1));
        assert_eq!(first.discount().value(), 10);
        assert!(!first.is_used());

        let second = repo
            .get_voucher_by_code(&VoucherCode::new("SECOND").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second.id(), VoucherId::new(2));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_code() {
        let repo = InMemoryVoucherRepository::new();
        let found = repo
            .get_voucher_by_code(&VoucherCode::new("NOPE").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let repo = InMemoryVoucherRepository::new();
        repo.create_voucher(new_voucher("DUP", 10)).await.unwrap();

        let err = repo.create_voucher(new_voucher("DUP", 50)).await.unwrap_err();
        assert_eq!(err.to_string(), VOUCHER_ALREADY_EXISTS);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.snapshot()[0].discount().value(), 10);
    }

    #[tokio::test]
    async fn test_use_voucher() {
        let repo = InMemoryVoucherRepository::new();
        repo.create_voucher(new_voucher("USE_ME", 10)).await.unwrap();

        repo.use_voucher(VoucherId::new(1)).await.unwrap();

        assert!(repo.snapshot()[0].is_used());
    }

    #[tokio::test]
    async fn test_use_voucher_twice_fails() {
        let repo = InMemoryVoucherRepository::new();
        repo.create_voucher(new_voucher("ONCE", 10)).await.unwrap();

        repo.use_voucher(VoucherId::new(1)).await.unwrap();
        let err = repo.use_voucher(VoucherId::new(1)).await.unwrap_err();

        assert!(err.to_string().contains("already been used"));
        assert!(repo.snapshot()[0].is_used());
    }

    #[tokio::test]
    async fn test_use_unknown_voucher() {
        let repo = InMemoryVoucherRepository::new();
        let err = repo.use_voucher(VoucherId::new(42)).await.unwrap_err();
        assert!(err.to_string().contains("No voucher with id 42"));
    }

    #[tokio::test]
    async fn test_snapshot_ordered_by_id() {
        let repo = InMemoryVoucherRepository::new();
        for code in ["C", "A", "B"] {
            repo.create_voucher(new_voucher(code, 5)).await.unwrap();
        }
        let codes: Vec<String> = repo
            .snapshot()
            .iter()
            .map(|v| v.code().to_string())
            .collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }
}
