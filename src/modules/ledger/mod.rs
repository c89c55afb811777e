// Line-item ledger module

pub mod models;
pub mod services;

pub use models::{
    InvoiceItem, InvoiceItemField, LedgerRow, LedgerSettings, MaterialReturnItem,
    MaterialReturnItemField, PurchaseOrderItem, PurchaseOrderItemField, RowAmounts, RowId,
    Totals,
};
pub use services::Ledger;
