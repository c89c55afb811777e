// The three ledger-bearing forms of the catalog.

use crate::core::Currency;
use crate::modules::forms::models::schema::{GSTIN, IFSC, PAN, PHONE, PINCODE};
use crate::modules::forms::models::{FieldRule, FormKind, FormSchema};
use crate::modules::ledger::models::{
    InvoiceItem, LedgerSettings, MaterialReturnItem, PurchaseOrderItem,
};

use super::form::LineItemForm;

pub type InvoiceForm = LineItemForm<InvoiceItem>;
pub type PurchaseOrderForm = LineItemForm<PurchaseOrderItem>;
pub type MaterialReturnForm = LineItemForm<MaterialReturnItem>;

/// Wholesale tax invoice
pub fn invoice_schema() -> FormSchema {
    FormSchema::new()
        .field(
            FieldRule::new("invoice_number", "Invoice number")
                .required()
                .max_len(30),
        )
        .field(FieldRule::new("invoice_date", "Invoice date").required().date())
        .field(
            FieldRule::new("supplier_gstin", "Supplier GSTIN")
                .required()
                .pattern(&GSTIN, "GSTIN"),
        )
        .field(
            FieldRule::new("customer_name", "Customer name")
                .required()
                .min_len(2)
                .max_len(100),
        )
        .field(FieldRule::new("customer_gstin", "Customer GSTIN").pattern(&GSTIN, "GSTIN"))
        .field(FieldRule::new("customer_phone", "Customer phone").pattern(&PHONE, "phone number"))
        .field(
            FieldRule::new("place_of_supply", "Place of supply")
                .required()
                .max_len(50),
        )
}

/// Raw-material purchase order
pub fn purchase_order_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldRule::new("po_number", "PO number").required().max_len(30))
        .field(
            FieldRule::new("supplier_name", "Supplier name")
                .required()
                .min_len(2)
                .max_len(100),
        )
        .field(
            FieldRule::new("supplier_pan", "Supplier PAN")
                .required()
                .pattern(&PAN, "PAN"),
        )
        .field(FieldRule::new("supplier_gstin", "Supplier GSTIN").pattern(&GSTIN, "GSTIN"))
        .field(FieldRule::new("delivery_date", "Delivery date").required().date())
        .field(
            FieldRule::new("delivery_pincode", "Delivery pincode")
                .required()
                .pattern(&PINCODE, "pincode"),
        )
        .field(FieldRule::new("bank_ifsc", "Bank IFSC").pattern(&IFSC, "IFSC code"))
}

/// Return of rejected or surplus material to a supplier
pub fn material_return_schema() -> FormSchema {
    FormSchema::new()
        .field(
            FieldRule::new("return_number", "Return number")
                .required()
                .max_len(30),
        )
        .field(FieldRule::new("return_date", "Return date").required().date())
        .field(
            FieldRule::new("supplier_name", "Supplier name")
                .required()
                .min_len(2)
                .max_len(100),
        )
        .field(
            FieldRule::new("original_po_number", "Original PO number")
                .required()
                .max_len(30),
        )
        .field(FieldRule::new("remarks", "Remarks").max_len(500))
}

pub fn invoice_form(settings: LedgerSettings, currency: Currency) -> InvoiceForm {
    LineItemForm::new(FormKind::Invoice, invoice_schema(), settings, currency)
}

pub fn purchase_order_form(settings: LedgerSettings, currency: Currency) -> PurchaseOrderForm {
    LineItemForm::new(
        FormKind::PurchaseOrder,
        purchase_order_schema(),
        settings,
        currency,
    )
}

pub fn material_return_form(settings: LedgerSettings, currency: Currency) -> MaterialReturnForm {
    LineItemForm::new(
        FormKind::MaterialReturn,
        material_return_schema(),
        settings,
        currency,
    )
}
