/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// voucher storage, result formatting and output presentation.
pub mod outbound;
