use formledger::core::Currency;
use formledger::forms::{
    invoice_form, material_return_form, purchase_order_form, InvoiceForm, MaterialReturnForm,
    PurchaseOrderForm,
};
use formledger::ledger::{
    InvoiceItemField, LedgerSettings, MaterialReturnItemField, PurchaseOrderItemField,
};

pub fn settings() -> LedgerSettings {
    LedgerSettings::default()
}

/// Invoice with valid header fields and one row: 10 × 50 @ 18%
pub fn valid_invoice_form() -> InvoiceForm {
    let mut form = invoice_form(settings(), Currency::INR);
    form.set_field("invoice_number", "INV-2026-0042");
    form.set_field("invoice_date", "2026-10-18");
    form.set_field("supplier_gstin", "27ABCDE1234F1Z5");
    form.set_field("customer_name", "Shree Traders");
    form.set_field("place_of_supply", "Maharashtra");

    let id = form.ledger().first_id();
    let ledger = form.ledger_mut();
    ledger.update_row(id, InvoiceItemField::Description, "Cotton yarn");
    ledger.update_row(id, InvoiceItemField::HsnCode, "5205");
    ledger.update_row(id, InvoiceItemField::Quantity, "10");
    ledger.update_row(id, InvoiceItemField::Rate, "50");
    form
}

/// Purchase order with valid header fields and one row: 4 × 2500 @ 18%
pub fn valid_purchase_order_form() -> PurchaseOrderForm {
    let mut form = purchase_order_form(settings(), Currency::INR);
    form.set_field("po_number", "PO-7781");
    form.set_field("supplier_name", "Deccan Minerals");
    form.set_field("supplier_pan", "ABCDE1234F");
    form.set_field("delivery_date", "2026-11-02");
    form.set_field("delivery_pincode", "411001");

    let id = form.ledger().first_id();
    let ledger = form.ledger_mut();
    ledger.update_row(id, PurchaseOrderItemField::Material, "Bauxite");
    ledger.update_row(id, PurchaseOrderItemField::Unit, "tonne");
    ledger.update_row(id, PurchaseOrderItemField::Quantity, "4");
    ledger.update_row(id, PurchaseOrderItemField::UnitPrice, "2500");
    form
}

/// Material return with valid header fields and one row: 3 × 120
pub fn valid_material_return_form() -> MaterialReturnForm {
    let mut form = material_return_form(settings(), Currency::INR);
    form.set_field("return_number", "RET-19");
    form.set_field("return_date", "2026-10-20");
    form.set_field("supplier_name", "Deccan Minerals");
    form.set_field("original_po_number", "PO-7781");

    let id = form.ledger().first_id();
    let ledger = form.ledger_mut();
    ledger.update_row(id, MaterialReturnItemField::Material, "Bauxite");
    ledger.update_row(id, MaterialReturnItemField::Reason, "Moisture above tolerance");
    ledger.update_row(id, MaterialReturnItemField::Quantity, "3");
    ledger.update_row(id, MaterialReturnItemField::UnitPrice, "120");
    form
}
