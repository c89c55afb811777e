// Wholesale invoice row: goods or services billed with GST.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::line_item::{LedgerRow, RowAmounts, RowId};
use super::settings::LedgerSettings;
use crate::core::AppError;

/// Editable fields of an invoice row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceItemField {
    Description,
    HsnCode,
    Quantity,
    Rate,
    GstRate,
}

impl fmt::Display for InvoiceItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceItemField::Description => write!(f, "description"),
            InvoiceItemField::HsnCode => write!(f, "hsn_code"),
            InvoiceItemField::Quantity => write!(f, "quantity"),
            InvoiceItemField::Rate => write!(f, "rate"),
            InvoiceItemField::GstRate => write!(f, "gst_rate"),
        }
    }
}

impl FromStr for InvoiceItemField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(InvoiceItemField::Description),
            "hsn_code" => Ok(InvoiceItemField::HsnCode),
            "quantity" => Ok(InvoiceItemField::Quantity),
            "rate" => Ok(InvoiceItemField::Rate),
            "gst_rate" => Ok(InvoiceItemField::GstRate),
            _ => Err(AppError::validation(format!(
                "Unknown invoice item field: {}",
                s
            ))),
        }
    }
}

/// One billed line on a wholesale invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceItem {
    pub id: RowId,
    pub description: String,
    /// HSN (goods) or SAC (services) classification code
    pub hsn_code: String,
    pub quantity: String,
    pub rate: String,
    pub gst_rate: String,
    #[serde(flatten)]
    pub amounts: RowAmounts,
}

impl LedgerRow for InvoiceItem {
    type Field = InvoiceItemField;

    const QUANTITY: InvoiceItemField = InvoiceItemField::Quantity;
    const UNIT_PRICE: InvoiceItemField = InvoiceItemField::Rate;
    const TAX_RATE: Option<InvoiceItemField> = Some(InvoiceItemField::GstRate);

    fn blank(id: RowId, settings: &LedgerSettings) -> Self {
        Self {
            id,
            description: String::new(),
            hsn_code: String::new(),
            quantity: String::new(),
            rate: String::new(),
            gst_rate: settings.default_tax_rate.to_string(),
            amounts: RowAmounts::default(),
        }
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn get(&self, field: InvoiceItemField) -> &str {
        match field {
            InvoiceItemField::Description => &self.description,
            InvoiceItemField::HsnCode => &self.hsn_code,
            InvoiceItemField::Quantity => &self.quantity,
            InvoiceItemField::Rate => &self.rate,
            InvoiceItemField::GstRate => &self.gst_rate,
        }
    }

    fn set(&mut self, field: InvoiceItemField, value: String) {
        match field {
            InvoiceItemField::Description => self.description = value,
            InvoiceItemField::HsnCode => self.hsn_code = value,
            InvoiceItemField::Quantity => self.quantity = value,
            InvoiceItemField::Rate => self.rate = value,
            InvoiceItemField::GstRate => self.gst_rate = value,
        }
    }

    fn amounts(&self) -> &RowAmounts {
        &self.amounts
    }

    fn amounts_mut(&mut self) -> &mut RowAmounts {
        &mut self.amounts
    }
}
