// Row identity, derived amounts and the row-shape abstraction the ledger is
// generic over.
//
// Every form keeps its raw inputs as strings (what the user typed) and a
// block of derived amounts that is recomputed whenever one of the inputs
// feeding the arithmetic changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::settings::LedgerSettings;
use crate::core::{parse_numeric_or_zero, AppError};
use crate::modules::taxes::TaxCalculator;

/// Opaque row identifier, stable for the lifetime of the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RowId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::validation(format!("Invalid row id: {}", s)))
    }
}

/// Derived per-row values; never edited directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowAmounts {
    /// quantity × unit_price
    pub amount: Decimal,
    /// amount × tax_rate / 100
    pub tax_amount: Decimal,
    /// amount + tax_amount
    pub total: Decimal,
}

impl RowAmounts {
    /// Compute the derived block from already-coerced inputs.
    pub fn compute(quantity: Decimal, unit_price: Decimal, tax_rate: Decimal) -> Self {
        let amount = quantity.checked_mul(unit_price).unwrap_or_else(|| {
            tracing::warn!(%quantity, %unit_price, "Line amount overflowed, using zero");
            Decimal::ZERO
        });
        let tax_amount = TaxCalculator::new().calculate_tax(amount, tax_rate);

        Self {
            amount,
            tax_amount,
            total: amount.saturating_add(tax_amount),
        }
    }
}

/// A row shape the ledger can hold.
///
/// Implementors name which of their fields carry quantity, price and
/// (optionally) tax rate; the ledger uses those to decide when to
/// recompute and what to feed the arithmetic.
pub trait LedgerRow: Clone + fmt::Debug + Serialize {
    type Field: Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = AppError>;

    const QUANTITY: Self::Field;
    const UNIT_PRICE: Self::Field;
    /// `None` for rows that never bear tax
    const TAX_RATE: Option<Self::Field>;

    /// A fresh row with empty inputs
    fn blank(id: RowId, settings: &LedgerSettings) -> Self;

    fn id(&self) -> RowId;

    /// Raw input as typed
    fn get(&self, field: Self::Field) -> &str;

    /// Store a raw input without touching derived amounts
    fn set(&mut self, field: Self::Field, value: String);

    fn amounts(&self) -> &RowAmounts;

    fn amounts_mut(&mut self) -> &mut RowAmounts;

    fn triggers_recompute(field: Self::Field) -> bool {
        field == Self::QUANTITY || field == Self::UNIT_PRICE || Self::TAX_RATE == Some(field)
    }

    /// Recompute this row's derived amounts from its current inputs
    fn recompute(&mut self) {
        let quantity = parse_numeric_or_zero(self.get(Self::QUANTITY));
        let unit_price = parse_numeric_or_zero(self.get(Self::UNIT_PRICE));
        let tax_rate = Self::TAX_RATE
            .map(|field| parse_numeric_or_zero(self.get(field)))
            .unwrap_or(Decimal::ZERO);

        *self.amounts_mut() = RowAmounts::compute(quantity, unit_price, tax_rate);
    }
}
