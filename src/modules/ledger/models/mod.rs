mod invoice_item;
mod line_item;
mod material_return_item;
mod purchase_order_item;
mod settings;
mod totals;

pub use invoice_item::{InvoiceItem, InvoiceItemField};
pub use line_item::{LedgerRow, RowAmounts, RowId};
pub use material_return_item::{MaterialReturnItem, MaterialReturnItemField};
pub use purchase_order_item::{PurchaseOrderItem, PurchaseOrderItemField};
pub use settings::{LedgerSettings, DEFAULT_TAX_RATE};
pub use totals::Totals;
