// Raw-material purchase order row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::line_item::{LedgerRow, RowAmounts, RowId};
use super::settings::LedgerSettings;
use crate::core::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderItemField {
    Material,
    Unit,
    Quantity,
    UnitPrice,
    TaxRate,
}

impl fmt::Display for PurchaseOrderItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseOrderItemField::Material => write!(f, "material"),
            PurchaseOrderItemField::Unit => write!(f, "unit"),
            PurchaseOrderItemField::Quantity => write!(f, "quantity"),
            PurchaseOrderItemField::UnitPrice => write!(f, "unit_price"),
            PurchaseOrderItemField::TaxRate => write!(f, "tax_rate"),
        }
    }
}

impl FromStr for PurchaseOrderItemField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(PurchaseOrderItemField::Material),
            "unit" => Ok(PurchaseOrderItemField::Unit),
            "quantity" => Ok(PurchaseOrderItemField::Quantity),
            "unit_price" => Ok(PurchaseOrderItemField::UnitPrice),
            "tax_rate" => Ok(PurchaseOrderItemField::TaxRate),
            _ => Err(AppError::validation(format!(
                "Unknown purchase order item field: {}",
                s
            ))),
        }
    }
}

/// One material line on a purchase order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderItem {
    pub id: RowId,
    pub material: String,
    /// Unit of measure (kg, tonne, litre, ...)
    pub unit: String,
    pub quantity: String,
    pub unit_price: String,
    pub tax_rate: String,
    #[serde(flatten)]
    pub amounts: RowAmounts,
}

impl LedgerRow for PurchaseOrderItem {
    type Field = PurchaseOrderItemField;

    const QUANTITY: PurchaseOrderItemField = PurchaseOrderItemField::Quantity;
    const UNIT_PRICE: PurchaseOrderItemField = PurchaseOrderItemField::UnitPrice;
    const TAX_RATE: Option<PurchaseOrderItemField> = Some(PurchaseOrderItemField::TaxRate);

    fn blank(id: RowId, settings: &LedgerSettings) -> Self {
        Self {
            id,
            material: String::new(),
            unit: String::new(),
            quantity: String::new(),
            unit_price: String::new(),
            tax_rate: settings.default_tax_rate.to_string(),
            amounts: RowAmounts::default(),
        }
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn get(&self, field: PurchaseOrderItemField) -> &str {
        match field {
            PurchaseOrderItemField::Material => &self.material,
            PurchaseOrderItemField::Unit => &self.unit,
            PurchaseOrderItemField::Quantity => &self.quantity,
            PurchaseOrderItemField::UnitPrice => &self.unit_price,
            PurchaseOrderItemField::TaxRate => &self.tax_rate,
        }
    }

    fn set(&mut self, field: PurchaseOrderItemField, value: String) {
        match field {
            PurchaseOrderItemField::Material => self.material = value,
            PurchaseOrderItemField::Unit => self.unit = value,
            PurchaseOrderItemField::Quantity => self.quantity = value,
            PurchaseOrderItemField::UnitPrice => self.unit_price = value,
            PurchaseOrderItemField::TaxRate => self.tax_rate = value,
        }
    }

    fn amounts(&self) -> &RowAmounts {
        &self.amounts
    }

    fn amounts_mut(&mut self) -> &mut RowAmounts {
        &mut self.amounts
    }
}
