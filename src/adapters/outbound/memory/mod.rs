/// In-process storage adapters
mod in_memory_voucher_repository;

pub use in_memory_voucher_repository::InMemoryVoucherRepository;
