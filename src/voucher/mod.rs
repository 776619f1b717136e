/// Voucher domain - value types, the voucher entity and the discount policy.
/// Nothing in here performs I/O.
pub mod domain;
pub mod policies;
