use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::RowAmounts;

/// Ledger-wide aggregate, recomputed from the rows on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Σ amount
    pub subtotal: Decimal,
    /// Σ tax_amount
    pub total_tax: Decimal,
    /// Σ total
    pub grand_total: Decimal,
}

impl Totals {
    /// Fold one row's derived amounts into the running totals
    pub fn accumulate(self, row: &RowAmounts) -> Self {
        Self {
            subtotal: self.subtotal.saturating_add(row.amount),
            total_tax: self.total_tax.saturating_add(row.tax_amount),
            grand_total: self.grand_total.saturating_add(row.total),
        }
    }
}

impl<'a> FromIterator<&'a RowAmounts> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a RowAmounts>>(iter: I) -> Self {
        iter.into_iter().fold(Totals::default(), Totals::accumulate)
    }
}
