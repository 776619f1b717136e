use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use crate::voucher::domain::{ApplyResult, DiscountPercent, VoucherCode};
use serde::Serialize;

/// Confirmation payload for a created voucher
#[derive(Serialize)]
struct CreatedVoucher<'a> {
    code: &'a VoucherCode,
    discount: DiscountPercent,
    created: bool,
}

/// JsonFormatter adapter rendering results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format_apply(&self, result: &ApplyResult) -> Result<String> {
        Self::to_json(result)
    }

    fn format_created(&self, code: &VoucherCode, discount: DiscountPercent) -> Result<String> {
        Self::to_json(&CreatedVoucher {
            code,
            discount,
            created: true,
        })
    }
}
