pub mod amount;
pub mod apply_result;
pub mod voucher;

pub use amount::Amount;
pub use apply_result::ApplyResult;
pub use voucher::{DiscountPercent, NewVoucher, Voucher, VoucherCode, VoucherId};
