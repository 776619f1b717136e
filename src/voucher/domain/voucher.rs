use crate::shared::VoucherError;
use serde::{Deserialize, Serialize};

/// Highest discount a voucher can grant, in percent
pub const MAX_DISCOUNT_PERCENT: u8 = 100;

/// Repository-assigned voucher identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoucherId(u64);

impl VoucherId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VoucherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a voucher code
///
/// Any non-empty string is a code. It is kept exactly as given, so
/// `"CODE"` and `" CODE "` are different vouchers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoucherCode(String);

impl VoucherCode {
    pub fn new(code: impl Into<String>) -> Result<Self, VoucherError> {
        let code = code.into();
        if code.is_empty() {
            return Err(VoucherError::validation("Voucher code cannot be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VoucherCode {
    type Error = VoucherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VoucherCode> for String {
    fn from(code: VoucherCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for VoucherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discount percentage, 0 to 100 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    pub fn new(percent: i64) -> Result<Self, VoucherError> {
        if !(0..=i64::from(MAX_DISCOUNT_PERCENT)).contains(&percent) {
            return Err(VoucherError::validation(format!(
                "Discount must be between 0 and {} percent, got {}",
                MAX_DISCOUNT_PERCENT, percent
            )));
        }
        Ok(Self(percent as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Discount as a fraction of the amount (10% -> 0.1)
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for DiscountPercent {
    type Error = VoucherError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<DiscountPercent> for u8 {
    fn from(discount: DiscountPercent) -> Self {
        discount.0
    }
}

impl std::fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Data handed to the repository when a voucher is created.
/// The repository assigns the id and stores it as unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVoucher {
    code: VoucherCode,
    discount: DiscountPercent,
}

impl NewVoucher {
    pub fn new(code: VoucherCode, discount: DiscountPercent) -> Self {
        Self { code, discount }
    }

    pub fn code(&self) -> &VoucherCode {
        &self.code
    }

    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    /// Materializes the stored voucher under the given id
    pub fn into_voucher(self, id: VoucherId) -> Voucher {
        Voucher::new(id, self.code, self.discount, false)
    }
}

/// A code entitling a single percentage discount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    id: VoucherId,
    code: VoucherCode,
    discount: DiscountPercent,
    used: bool,
}

impl Voucher {
    pub fn new(id: VoucherId, code: VoucherCode, discount: DiscountPercent, used: bool) -> Self {
        Self {
            id,
            code,
            discount,
            used,
        }
    }

    pub fn id(&self) -> VoucherId {
        self.id
    }

    pub fn code(&self) -> &VoucherCode {
        &self.code
    }

    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Flags the voucher as used. Returns false if it already was.
    pub fn mark_used(&mut self) -> bool {
        if self.used {
            return false;
        }
        self.used = true;
        true
    }
}
