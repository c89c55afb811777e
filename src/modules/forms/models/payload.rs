use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::schema::FieldErrors;
use crate::core::AppError;
use crate::modules::ledger::models::Totals;

/// The forms that carry a line-item ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Invoice,
    PurchaseOrder,
    MaterialReturn,
}

impl FormKind {
    /// Human-readable name used in notifications
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Invoice => "Invoice",
            FormKind::PurchaseOrder => "Purchase order",
            FormKind::MaterialReturn => "Material return",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Invoice => write!(f, "invoice"),
            FormKind::PurchaseOrder => write!(f, "purchase_order"),
            FormKind::MaterialReturn => write!(f, "material_return"),
        }
    }
}

impl std::str::FromStr for FormKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoice" => Ok(FormKind::Invoice),
            "purchase_order" => Ok(FormKind::PurchaseOrder),
            "material_return" => Ok(FormKind::MaterialReturn),
            _ => Err(AppError::validation(format!("Unknown form: {}", s))),
        }
    }
}

/// Everything a validated form hands to the notification boundary
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload<R> {
    pub form: FormKind,
    pub submitted_at: DateTime<Utc>,
    pub fields: BTreeMap<String, String>,
    pub line_items: Vec<R>,
    pub totals: Totals,
}

/// Result of a submission attempt
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome<R> {
    Submitted { payload: SubmissionPayload<R> },
    Rejected { errors: FieldErrors },
}

impl<R> SubmitOutcome<R> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }

    pub fn payload(&self) -> Option<&SubmissionPayload<R>> {
        match self {
            SubmitOutcome::Submitted { payload } => Some(payload),
            SubmitOutcome::Rejected { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Submitted { .. } => None,
            SubmitOutcome::Rejected { errors } => Some(errors),
        }
    }
}
