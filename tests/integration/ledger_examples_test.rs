// Worked examples for the line-item ledger, across all three row shapes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use formledger::ledger::{
    InvoiceItem, InvoiceItemField, Ledger, LedgerRow, LedgerSettings, MaterialReturnItem,
    MaterialReturnItemField, PurchaseOrderItem, PurchaseOrderItemField, Totals,
};

fn totals(subtotal: Decimal, total_tax: Decimal, grand_total: Decimal) -> Totals {
    Totals {
        subtotal,
        total_tax,
        grand_total,
    }
}

#[test]
fn test_invoice_ledger_walkthrough() {
    let mut ledger: Ledger<InvoiceItem> = Ledger::new(LedgerSettings::default());
    let first = ledger.first_id();

    // One row: 10 × 50 at 18%
    ledger.update_row(first, InvoiceItemField::Quantity, "10");
    ledger.update_row(first, InvoiceItemField::Rate, "50");
    ledger.update_row(first, InvoiceItemField::GstRate, "18");

    let row = ledger.row(first).unwrap();
    assert_eq!(row.amounts.amount, dec!(500));
    assert_eq!(row.amounts.tax_amount, dec!(90));
    assert_eq!(row.amounts.total, dec!(590));
    let single = ledger.aggregate();
    assert_eq!(single, totals(dec!(500), dec!(90), dec!(590)));

    // Second row: 2 × 25 at 0%
    let second = ledger.add_row();
    ledger.update_row(second, InvoiceItemField::Quantity, "2");
    ledger.update_row(second, InvoiceItemField::Rate, "25");
    ledger.update_row(second, InvoiceItemField::GstRate, "0");

    let row = ledger.row(second).unwrap();
    assert_eq!(row.amounts.amount, dec!(50));
    assert_eq!(row.amounts.total, dec!(50));
    assert_eq!(ledger.aggregate(), totals(dec!(550), dec!(90), dec!(640)));

    // Remove it again
    assert!(ledger.remove_row(second));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.aggregate(), single);
}

#[test]
fn test_partial_entry_counts_as_zero() {
    let mut ledger: Ledger<InvoiceItem> = Ledger::default();
    let id = ledger.first_id();

    ledger.update_row(id, InvoiceItemField::Quantity, "10");
    assert_eq!(ledger.aggregate(), Totals::default());

    ledger.update_row(id, InvoiceItemField::Rate, "5");
    assert_eq!(ledger.aggregate().subtotal, dec!(50));

    ledger.update_row(id, InvoiceItemField::Rate, "");
    assert_eq!(ledger.aggregate(), Totals::default());
    assert_eq!(ledger.row(id).unwrap().rate, "");
}

#[test]
fn test_purchase_order_mixed_rates() {
    let mut ledger: Ledger<PurchaseOrderItem> = Ledger::new(LedgerSettings::new(dec!(18)));
    let steel = ledger.first_id();
    ledger.update_row(steel, PurchaseOrderItemField::Quantity, "2.5");
    ledger.update_row(steel, PurchaseOrderItemField::UnitPrice, "48000");

    let coal = ledger.add_row();
    ledger.update_row(coal, PurchaseOrderItemField::Quantity, "10");
    ledger.update_row(coal, PurchaseOrderItemField::UnitPrice, "6200");
    ledger.update_row(coal, PurchaseOrderItemField::TaxRate, "5");

    // 120000 + 21600 tax; 62000 + 3100 tax
    assert_eq!(
        ledger.aggregate(),
        totals(dec!(182000), dec!(24700), dec!(206700))
    );
}

#[test]
fn test_material_return_is_untaxed() {
    let mut ledger: Ledger<MaterialReturnItem> = Ledger::default();
    let id = ledger.first_id();
    ledger.update_row(id, MaterialReturnItemField::Quantity, "3");
    ledger.update_row(id, MaterialReturnItemField::UnitPrice, "120");
    let other = ledger.add_row();
    ledger.update_row(other, MaterialReturnItemField::Quantity, "1");
    ledger.update_row(other, MaterialReturnItemField::UnitPrice, "40.50");

    assert_eq!(
        ledger.aggregate(),
        totals(dec!(400.50), Decimal::ZERO, dec!(400.50))
    );
}

#[test]
fn test_ids_survive_neighbour_removal() {
    let mut ledger: Ledger<InvoiceItem> = Ledger::default();
    let a = ledger.first_id();
    let b = ledger.add_row();
    let c = ledger.add_row();
    ledger.update_row(c, InvoiceItemField::Quantity, "1");
    ledger.update_row(c, InvoiceItemField::Rate, "100");

    ledger.remove_row(a);
    ledger.remove_row(b);

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.rows()[0].id(), c);
    assert_eq!(ledger.aggregate().grand_total, dec!(118));

    // c is now the last row and stays
    assert!(!ledger.remove_row(c));
    assert_eq!(ledger.rows()[0].id(), c);
}

#[test]
fn test_snapshot_serializes_rows_with_derived_values() {
    let mut ledger: Ledger<InvoiceItem> = Ledger::default();
    let id = ledger.first_id();
    ledger.update_row(id, InvoiceItemField::Quantity, "10");
    ledger.update_row(id, InvoiceItemField::Rate, "50");

    let json = serde_json::to_value(ledger.snapshot()).unwrap();
    let row = &json[0];
    assert_eq!(row["id"], id.to_string());
    assert_eq!(row["quantity"], "10");
    assert_eq!(row["gst_rate"], "18");
    let decimal = |key: &str| row[key].as_str().unwrap().parse::<Decimal>().unwrap();
    assert_eq!(decimal("amount"), dec!(500));
    assert_eq!(decimal("tax_amount"), dec!(90));
    assert_eq!(decimal("total"), dec!(590));
}
