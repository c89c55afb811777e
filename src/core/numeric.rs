use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a raw form input into a decimal, if it is a number at all.
///
/// Accepts plain (`"12.50"`) and scientific (`"1.5e3"`) notation after
/// trimming surrounding whitespace. Digit separators (`_`, `,`) are not
/// numbers on a form.
pub fn parse_numeric(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parse a raw form input for computation purposes.
///
/// Empty, unparsable and negative inputs all count as zero so that a
/// half-typed row never poisons the totals.
pub fn parse_numeric_or_zero(raw: &str) -> Decimal {
    match parse_numeric(raw) {
        Some(value) if value.is_sign_positive() => value,
        _ => Decimal::ZERO,
    }
}
