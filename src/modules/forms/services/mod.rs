pub mod catalog;
pub mod form;
pub mod replay;

pub use catalog::{
    invoice_form, material_return_form, purchase_order_form, InvoiceForm, MaterialReturnForm,
    PurchaseOrderForm,
};
pub use form::LineItemForm;
pub use replay::{apply_draft, submit_draft};
