use crate::ports::inbound::VoucherServicePort;
use crate::ports::outbound::VoucherRepository;
use crate::shared::{Result, VoucherError};
use crate::voucher::domain::{Amount, ApplyResult, DiscountPercent, NewVoucher, VoucherCode};
use crate::voucher::policies::DiscountPolicy;
use async_trait::async_trait;
use tracing::{debug, info};

/// Conflict message for creating a voucher whose code is taken
pub const VOUCHER_ALREADY_EXISTS: &str = "Voucher already exist.";

/// Conflict message for applying a code nobody created
pub const VOUCHER_NOT_FOUND: &str = "Voucher does not exist.";

/// VoucherService - Core use case for creating and redeeming vouchers
///
/// Generic over its repository so adapters are injected at construction.
/// The lookup-then-write sequences are not atomic across concurrent callers;
/// the repository is the place to enforce uniqueness if that matters.
///
/// # Type Parameters
/// * `R` - VoucherRepository implementation
pub struct VoucherService<R> {
    repository: R,
    policy: DiscountPolicy,
}

impl<R: VoucherRepository> VoucherService<R> {
    /// Creates a service using the default minimum amount
    pub fn new(repository: R) -> Self {
        Self::with_policy(repository, DiscountPolicy::default())
    }

    pub fn with_policy(repository: R, policy: DiscountPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> &DiscountPolicy {
        &self.policy
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: VoucherRepository> VoucherServicePort for VoucherService<R> {
    async fn create_voucher(&self, code: VoucherCode, discount: DiscountPercent) -> Result<()> {
        if self.repository.get_voucher_by_code(&code).await?.is_some() {
            debug!(code = %code, "voucher code already taken");
            return Err(VoucherError::conflict(VOUCHER_ALREADY_EXISTS).into());
        }

        self.repository
            .create_voucher(NewVoucher::new(code.clone(), discount))
            .await?;

        info!(code = %code, discount = discount.value(), "voucher created");
        Ok(())
    }

    async fn apply_voucher(&self, code: &VoucherCode, amount: Amount) -> Result<ApplyResult> {
        let voucher = self
            .repository
            .get_voucher_by_code(code)
            .await?
            .ok_or_else(|| VoucherError::conflict(VOUCHER_NOT_FOUND))?;

        let result = self.policy.evaluate(&voucher, amount);

        if result.applied() {
            self.repository.use_voucher(voucher.id()).await?;
            info!(
                code = %code,
                amount = amount.value(),
                final_amount = result.final_amount().value(),
                "voucher applied"
            );
        } else {
            debug!(
                code = %code,
                amount = amount.value(),
                used = voucher.is_used(),
                "voucher not applied"
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voucher::domain::{Voucher, VoucherId};
    use crate::voucher::policies::MIN_VALUE_FOR_DISCOUNT;
    use std::sync::Mutex;

    /// Repository double: answers lookups with a fixed voucher and records writes
    #[derive(Default)]
    struct StubRepository {
        existing: Option<Voucher>,
        created: Mutex<Vec<NewVoucher>>,
        used: Mutex<Vec<VoucherId>>,
    }

    impl StubRepository {
        fn with_voucher(voucher: Voucher) -> Self {
            Self {
                existing: Some(voucher),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl VoucherRepository for StubRepository {
        async fn get_voucher_by_code(&self, _code: &VoucherCode) -> Result<Option<Voucher>> {
            Ok(self.existing.clone())
        }

        async fn create_voucher(&self, data: NewVoucher) -> Result<()> {
            self.created.lock().unwrap().push(data);
            Ok(())
        }

        async fn use_voucher(&self, id: VoucherId) -> Result<()> {
            self.used.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn code() -> VoucherCode {
        VoucherCode::new("CODE_TEST").unwrap()
    }

    fn voucher(discount: i64, used: bool) -> Voucher {
        Voucher::new(
            VoucherId::new(1),
            code(),
            DiscountPercent::new(discount).unwrap(),
            used,
        )
    }

    fn amount(value: f64) -> Amount {
        Amount::new(value).unwrap()
    }

    fn expected_discount(value: f64, discount: f64) -> f64 {
        value - (value * (discount / 100.0))
    }

    fn conflict_message(err: &anyhow::Error) -> String {
        match err.downcast_ref::<VoucherError>() {
            Some(VoucherError::Conflict { message }) => message.clone(),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_voucher_with_new_code() {
        let service = VoucherService::new(StubRepository::default());

        let result = service
            .create_voucher(code(), DiscountPercent::new(10).unwrap())
            .await;

        assert!(result.is_ok());
        let created = service.repository().created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].code().as_str(), "CODE_TEST");
        assert_eq!(created[0].discount().value(), 10);
    }

    #[tokio::test]
    async fn test_create_voucher_with_existing_code() {
        let service = VoucherService::new(StubRepository::with_voucher(voucher(10, false)));

        let err = service
            .create_voucher(code(), DiscountPercent::new(10).unwrap())
            .await
            .unwrap_err();

        assert_eq!(conflict_message(&err), VOUCHER_ALREADY_EXISTS);
        assert!(service.repository().created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_valid_voucher() {
        let service = VoucherService::new(StubRepository::with_voucher(voucher(10, false)));

        let result = service
            .apply_voucher(&code(), amount(MIN_VALUE_FOR_DISCOUNT))
            .await
            .unwrap();

        assert!(result.applied());
        assert_eq!(result.amount().value(), MIN_VALUE_FOR_DISCOUNT);
        assert_eq!(result.discount().value(), 10);
        assert_eq!(
            result.final_amount().value(),
            expected_discount(MIN_VALUE_FOR_DISCOUNT, 10.0)
        );
        assert_eq!(
            *service.repository().used.lock().unwrap(),
            vec![VoucherId::new(1)]
        );
    }

    #[tokio::test]
    async fn test_apply_nonexistent_voucher() {
        let service = VoucherService::new(StubRepository::default());

        let err = service
            .apply_voucher(&code(), amount(MIN_VALUE_FOR_DISCOUNT))
            .await
            .unwrap_err();

        assert_eq!(conflict_message(&err), VOUCHER_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_apply_below_minimum() {
        let service = VoucherService::new(StubRepository::with_voucher(voucher(10, false)));

        let result = service
            .apply_voucher(&code(), amount(MIN_VALUE_FOR_DISCOUNT - 1.0))
            .await
            .unwrap();

        assert!(!result.applied());
        assert_eq!(result.final_amount().value(), MIN_VALUE_FOR_DISCOUNT - 1.0);
        assert!(service.repository().used.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_used_voucher() {
        let service = VoucherService::new(StubRepository::with_voucher(voucher(10, true)));

        let result = service
            .apply_voucher(&code(), amount(MIN_VALUE_FOR_DISCOUNT))
            .await
            .unwrap();

        assert!(!result.applied());
        assert_eq!(result.final_amount().value(), MIN_VALUE_FOR_DISCOUNT);
        assert!(service.repository().used.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_used_voucher_below_minimum() {
        let service = VoucherService::new(StubRepository::with_voucher(voucher(10, true)));

        let result = service
            .apply_voucher(&code(), amount(MIN_VALUE_FOR_DISCOUNT - 1.0))
            .await
            .unwrap();

        assert!(!result.applied());
        assert_eq!(result.final_amount().value(), MIN_VALUE_FOR_DISCOUNT - 1.0);
    }

    #[tokio::test]
    async fn test_apply_with_custom_policy() {
        let policy = DiscountPolicy::with_min_amount(amount(10.0));
        let service =
            VoucherService::with_policy(StubRepository::with_voucher(voucher(50, false)), policy);

        let result = service.apply_voucher(&code(), amount(20.0)).await.unwrap();

        assert!(result.applied());
        assert_eq!(result.final_amount().value(), 10.0);
        assert_eq!(service.policy().min_amount().value(), 10.0);
    }
}
