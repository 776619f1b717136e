/// Application layer - the voucher service, DTOs and adapter factories
///
/// This layer orchestrates the domain policy and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
