/// Type alias for Result with anyhow::Error as the error type.
/// Business errors travel inside it as `VoucherError` and can be recovered
/// with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
