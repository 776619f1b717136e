//! voucher-service - create discount vouchers and apply them to purchase amounts
//!
//! A voucher is a code granting a one-time percentage discount. Applying it
//! only succeeds while it is unused and the purchase reaches a minimum amount.
//! The crate follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`voucher`): value types, the voucher entity and the discount policy
//! - **Application Layer** (`application`): the voucher service, DTOs and factories
//! - **Ports** (`ports`): interface definitions for the service and its infrastructure
//! - **Adapters** (`adapters`): in-memory and JSON-file stores, formatters, presenters
//! - **Shared** (`shared`): error types and file security helpers
//!
//! # Example
//!
//! ```no_run
//! use voucher_service::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let service = VoucherService::new(InMemoryVoucherRepository::new());
//!
//! let code = VoucherCode::new("WELCOME10")?;
//! service.create_voucher(code.clone(), DiscountPercent::new(10)?).await?;
//!
//! let result = service.apply_voucher(&code, Amount::new(120.0)?).await?;
//! assert!(result.applied());
//! assert_eq!(result.final_amount().value(), 108.0);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod voucher;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileVoucherRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::memory::InMemoryVoucherRepository;
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{
        VoucherService, VOUCHER_ALREADY_EXISTS, VOUCHER_NOT_FOUND,
    };
    pub use crate::ports::inbound::VoucherServicePort;
    pub use crate::ports::outbound::{OutputPresenter, ResultFormatter, VoucherRepository};
    pub use crate::shared::{ExitCode, Result, VoucherError};
    pub use crate::voucher::domain::{
        Amount, ApplyResult, DiscountPercent, NewVoucher, Voucher, VoucherCode, VoucherId,
    };
    pub use crate::voucher::policies::{DiscountPolicy, MIN_VALUE_FOR_DISCOUNT};
}
