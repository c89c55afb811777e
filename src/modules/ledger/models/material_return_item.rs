// Material return row. Returns are credited at the purchase price and
// carry no tax of their own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::line_item::{LedgerRow, RowAmounts, RowId};
use super::settings::LedgerSettings;
use crate::core::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialReturnItemField {
    Material,
    BatchNumber,
    Reason,
    Quantity,
    UnitPrice,
}

impl fmt::Display for MaterialReturnItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialReturnItemField::Material => write!(f, "material"),
            MaterialReturnItemField::BatchNumber => write!(f, "batch_number"),
            MaterialReturnItemField::Reason => write!(f, "reason"),
            MaterialReturnItemField::Quantity => write!(f, "quantity"),
            MaterialReturnItemField::UnitPrice => write!(f, "unit_price"),
        }
    }
}

impl FromStr for MaterialReturnItemField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(MaterialReturnItemField::Material),
            "batch_number" => Ok(MaterialReturnItemField::BatchNumber),
            "reason" => Ok(MaterialReturnItemField::Reason),
            "quantity" => Ok(MaterialReturnItemField::Quantity),
            "unit_price" => Ok(MaterialReturnItemField::UnitPrice),
            _ => Err(AppError::validation(format!(
                "Unknown material return item field: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialReturnItem {
    pub id: RowId,
    pub material: String,
    pub batch_number: String,
    pub reason: String,
    pub quantity: String,
    pub unit_price: String,
    #[serde(flatten)]
    pub amounts: RowAmounts,
}

impl LedgerRow for MaterialReturnItem {
    type Field = MaterialReturnItemField;

    const QUANTITY: MaterialReturnItemField = MaterialReturnItemField::Quantity;
    const UNIT_PRICE: MaterialReturnItemField = MaterialReturnItemField::UnitPrice;
    const TAX_RATE: Option<MaterialReturnItemField> = None;

    fn blank(id: RowId, _settings: &LedgerSettings) -> Self {
        Self {
            id,
            material: String::new(),
            batch_number: String::new(),
            reason: String::new(),
            quantity: String::new(),
            unit_price: String::new(),
            amounts: RowAmounts::default(),
        }
    }

    fn id(&self) -> RowId {
        self.id
    }

    fn get(&self, field: MaterialReturnItemField) -> &str {
        match field {
            MaterialReturnItemField::Material => &self.material,
            MaterialReturnItemField::BatchNumber => &self.batch_number,
            MaterialReturnItemField::Reason => &self.reason,
            MaterialReturnItemField::Quantity => &self.quantity,
            MaterialReturnItemField::UnitPrice => &self.unit_price,
        }
    }

    fn set(&mut self, field: MaterialReturnItemField, value: String) {
        match field {
            MaterialReturnItemField::Material => self.material = value,
            MaterialReturnItemField::BatchNumber => self.batch_number = value,
            MaterialReturnItemField::Reason => self.reason = value,
            MaterialReturnItemField::Quantity => self.quantity = value,
            MaterialReturnItemField::UnitPrice => self.unit_price = value,
        }
    }

    fn amounts(&self) -> &RowAmounts {
        &self.amounts
    }

    fn amounts_mut(&mut self) -> &mut RowAmounts {
        &mut self.amounts
    }
}
