mod discount_policy;

pub use discount_policy::{DiscountPolicy, MIN_VALUE_FOR_DISCOUNT};
