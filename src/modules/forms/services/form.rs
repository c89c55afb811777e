use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::core::{parse_numeric, AppError, Currency, Result};
use crate::modules::forms::models::{
    FieldErrors, FormKind, FormSchema, SubmissionPayload, SubmitOutcome,
};
use crate::modules::ledger::models::{LedgerRow, LedgerSettings};
use crate::modules::ledger::services::Ledger;
use crate::modules::notifications::{Notification, Notifier};
use crate::modules::taxes::TaxCalculator;

/// A form made of schema-validated flat fields plus a line-item ledger
///
/// Owns its ledger outright; nothing here is shared between form instances.
#[derive(Debug, Clone)]
pub struct LineItemForm<R: LedgerRow> {
    kind: FormKind,
    schema: FormSchema,
    currency: Currency,
    fields: BTreeMap<String, String>,
    ledger: Ledger<R>,
}

impl<R: LedgerRow> LineItemForm<R> {
    pub fn new(
        kind: FormKind,
        schema: FormSchema,
        settings: LedgerSettings,
        currency: Currency,
    ) -> Self {
        Self {
            kind,
            schema,
            currency,
            fields: BTreeMap::new(),
            ledger: Ledger::new(settings),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn ledger(&self) -> &Ledger<R> {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger<R> {
        &mut self.ledger
    }

    /// Field errors for the flat fields and every ledger row
    ///
    /// Row errors are keyed `line_items[<index>].<field>`.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = self.schema.validate(&self.fields);
        let calculator = TaxCalculator::new();

        for (index, row) in self.ledger.rows().iter().enumerate() {
            let key = |field: R::Field| format!("line_items[{}].{}", index, field);

            match parse_numeric(row.get(R::QUANTITY)) {
                Some(quantity) if quantity > Decimal::ZERO => {}
                Some(_) => errors.add(key(R::QUANTITY), "Quantity must be greater than zero"),
                None if row.get(R::QUANTITY).trim().is_empty() => {
                    errors.add(key(R::QUANTITY), "Quantity is required")
                }
                None => errors.add(key(R::QUANTITY), "Quantity must be a number"),
            }

            match parse_numeric(row.get(R::UNIT_PRICE)) {
                Some(price) if price < Decimal::ZERO => {
                    errors.add(key(R::UNIT_PRICE), "Price cannot be negative")
                }
                Some(_) => {}
                None if row.get(R::UNIT_PRICE).trim().is_empty() => {
                    errors.add(key(R::UNIT_PRICE), "Price is required")
                }
                None => errors.add(key(R::UNIT_PRICE), "Price must be a number"),
            }

            // A cleared tax field means untaxed; only a present value is checked.
            if let Some(tax_field) = R::TAX_RATE {
                let raw = row.get(tax_field);
                if !raw.trim().is_empty() {
                    match parse_numeric(raw).map(|rate| calculator.validate_tax_rate(rate)) {
                        Some(Ok(())) => {}
                        Some(Err(AppError::Validation(message))) => errors.add(key(tax_field), message),
                        Some(Err(other)) => errors.add(key(tax_field), other.to_string()),
                        None => errors.add(key(tax_field), "Tax rate must be a number"),
                    }
                }
            }
        }

        errors
    }

    /// Validate, announce and reset
    ///
    /// A rejected submission leaves the form untouched. A notifier failure is
    /// returned as an error and also leaves the form untouched, so the user
    /// can retry.
    pub async fn submit(&mut self, notifier: &dyn Notifier) -> Result<SubmitOutcome<R>> {
        let errors = self.validate();
        if !errors.is_empty() {
            warn!(form = %self.kind, fields = errors.len(), "Form submission rejected");
            return Ok(SubmitOutcome::Rejected { errors });
        }

        let payload = SubmissionPayload {
            form: self.kind,
            submitted_at: Utc::now(),
            fields: self.fields.clone(),
            line_items: self.ledger.snapshot(),
            totals: self.ledger.aggregate(),
        };

        let body = serde_json::to_value(&payload)?;
        info!(form = %self.kind, rows = payload.line_items.len(), payload = %body, "Form submitted");

        let notification = Notification::success(
            format!("{} submitted", self.kind.title()),
            format!(
                "Grand total {}",
                self.currency.format_amount(payload.totals.grand_total)
            ),
        )
        .with_payload(body);
        notifier.notify(&notification).await?;

        self.reset();
        Ok(SubmitOutcome::Submitted { payload })
    }

    /// Clear every field and return the ledger to a single empty row
    pub fn reset(&mut self) {
        self.fields.clear();
        self.ledger.reset();
    }
}
