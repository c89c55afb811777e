use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default GST rate applied to fresh tax-bearing rows, in percent
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// Per-ledger settings handed down from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSettings {
    /// Prefilled into the tax field of every new tax-bearing row
    pub default_tax_rate: Decimal,
}

impl LedgerSettings {
    pub fn new(default_tax_rate: Decimal) -> Self {
        Self { default_tax_rate }
    }
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}
