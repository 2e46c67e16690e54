use rust_decimal::Decimal;

/// Decimal scale used for every amount the report displays
pub const REPORT_SCALE: u32 = 2;

/// Rounds an amount to the report's two-decimal display precision
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp(REPORT_SCALE)
}

/// Formats an amount with exactly two decimal places (e.g. "512.00")
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.width$}", amount, width = REPORT_SCALE as usize)
}

/// Validates that a charge amount is representable in the report
///
/// Charges are amounts actually levied on an order, so they are never
/// negative by the time they reach this engine.
pub fn validate_amount(amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("Charge amount cannot be negative, got {}", amount));
    }

    Ok(())
}
