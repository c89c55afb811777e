// Form shell: validated flat fields wrapped around a line-item ledger

pub mod models;
pub mod services;

pub use models::{
    FieldErrors, FieldRule, FormDraft, FormKind, FormSchema, SubmissionPayload, SubmitOutcome,
};
pub use services::{
    apply_draft, invoice_form, material_return_form, purchase_order_form, submit_draft,
    InvoiceForm, LineItemForm, MaterialReturnForm, PurchaseOrderForm,
};
