use rust_decimal::Decimal;

use crate::core::error::AppError;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// TaxCalculator handles per-line-item tax calculations
///
/// Rates are percentages (18 means 18%), as entered on the forms.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate tax amount for a line item
    ///
    /// tax_amount = amount × rate_percent / 100
    ///
    /// Never fails: an out-of-range rate is a validation concern, and a tax
    /// that does not fit in a `Decimal` is treated as no tax at all.
    ///
    /// The rate is scaled down first so large amounts at ordinary rates
    /// never overflow on the intermediate product.
    pub fn calculate_tax(&self, amount: Decimal, rate_percent: Decimal) -> Decimal {
        rate_percent
            .checked_div(ONE_HUNDRED)
            .and_then(|fraction| amount.checked_mul(fraction))
            .unwrap_or_else(|| {
                tracing::warn!(%amount, %rate_percent, "Tax calculation overflowed, using zero");
                Decimal::ZERO
            })
    }

    /// Validate tax rate is within the acceptable percentage range (0-100)
    pub fn validate_tax_rate(&self, rate_percent: Decimal) -> Result<(), AppError> {
        if rate_percent < Decimal::ZERO {
            return Err(AppError::Validation(
                "Tax rate cannot be negative".to_string(),
            ));
        }

        if rate_percent > ONE_HUNDRED {
            return Err(AppError::Validation(
                "Tax rate cannot exceed 100%".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
