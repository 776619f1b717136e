use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use crate::voucher::domain::{ApplyResult, DiscountPercent, VoucherCode};
use std::fmt::Write;

/// TextFormatter adapter rendering results as human-readable lines
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for TextFormatter {
    fn format_apply(&self, result: &ApplyResult) -> Result<String> {
        let mut output = String::new();
        if result.applied() {
            writeln!(output, "Voucher applied: {} off", result.discount())?;
        } else {
            writeln!(output, "Voucher not applied")?;
        }
        writeln!(output, "Amount:       {}", result.amount())?;
        writeln!(output, "Final amount: {}", result.final_amount())?;
        Ok(output)
    }

    fn format_created(&self, code: &VoucherCode, discount: DiscountPercent) -> Result<String> {
        Ok(format!("Voucher {} created ({} off)\n", code, discount))
    }
}
