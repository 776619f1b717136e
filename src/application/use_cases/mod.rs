/// Use cases module containing application business logic orchestration
mod voucher_service;

pub use voucher_service::{VoucherService, VOUCHER_ALREADY_EXISTS, VOUCHER_NOT_FOUND};
