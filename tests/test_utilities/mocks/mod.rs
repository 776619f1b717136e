/// Mock implementations for testing
mod mock_voucher_repository;

pub use mock_voucher_repository::{MockVoucherRepository, RepositoryCall};
