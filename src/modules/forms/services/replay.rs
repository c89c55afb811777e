use serde_json::Value;
use tracing::debug;

use crate::core::{AppError, Currency, Result};
use crate::modules::forms::models::{input_text, FormDraft, FormKind};
use crate::modules::ledger::models::{LedgerRow, LedgerSettings};
use crate::modules::notifications::Notifier;

use super::catalog::{invoice_form, material_return_form, purchase_order_form};
use super::form::LineItemForm;

/// Fill `form` from `draft` the way a user would: type the flat fields,
/// then fill the first row and add one row per further line item.
///
/// Flat fields the schema does not know and row fields the row shape does
/// not have are rejected.
pub fn apply_draft<R: LedgerRow>(form: &mut LineItemForm<R>, draft: &FormDraft) -> Result<()> {
    if draft.form != form.kind() {
        return Err(AppError::validation(format!(
            "Draft is for {} but the form is {}",
            draft.form,
            form.kind()
        )));
    }

    for (name, value) in &draft.fields {
        if !form.schema().knows(name) {
            return Err(AppError::validation(format!(
                "Unknown {} field: {}",
                form.kind(),
                name
            )));
        }
        form.set_field(name.clone(), input_text(value));
    }

    for (index, item) in draft.line_items.iter().enumerate() {
        let id = if index == 0 {
            form.ledger().first_id()
        } else {
            form.ledger_mut().add_row()
        };

        for (name, value) in item {
            let field: R::Field = name.parse()?;
            form.ledger_mut().update_row(id, field, input_text(value));
        }
    }

    debug!(
        form = %form.kind(),
        fields = draft.fields.len(),
        rows = form.ledger().len(),
        "Draft applied"
    );
    Ok(())
}

async fn replay<R: LedgerRow>(
    mut form: LineItemForm<R>,
    draft: &FormDraft,
    notifier: &dyn Notifier,
) -> Result<Value> {
    apply_draft(&mut form, draft)?;
    let outcome = form.submit(notifier).await?;
    Ok(serde_json::to_value(&outcome)?)
}

/// Replay a draft into a fresh form of the right kind and submit it
///
/// Returns the serialized outcome (`{"status": "submitted", ...}` or
/// `{"status": "rejected", ...}`).
pub async fn submit_draft(
    draft: &FormDraft,
    settings: LedgerSettings,
    currency: Currency,
    notifier: &dyn Notifier,
) -> Result<Value> {
    match draft.form {
        FormKind::Invoice => replay(invoice_form(settings, currency), draft, notifier).await,
        FormKind::PurchaseOrder => {
            replay(purchase_order_form(settings, currency), draft, notifier).await
        }
        FormKind::MaterialReturn => {
            replay(material_return_form(settings, currency), draft, notifier).await
        }
    }
}
