// Property-based tests for the line-item ledger
//
// Properties tested:
// 1. amount = quantity × unit_price after every update (0 for unparsable input)
// 2. tax_amount = amount × tax_rate / 100 and total = amount + tax_amount
// 3. aggregate() is the sum over rows and grand_total = subtotal + total_tax
// 4. removing the only row is a no-op; add_row grows the ledger by exactly one

use proptest::prelude::*;
use rust_decimal::Decimal;

use formledger::core::parse_numeric_or_zero;
use formledger::ledger::{
    InvoiceItem, InvoiceItemField, Ledger, LedgerRow, LedgerSettings, RowAmounts,
};

/// Something a user might have typed into a numeric box
fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000u32).prop_map(|n| n.to_string()),
        (0u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2).to_string()),
        Just(String::new()),
        Just("abc".to_string()),
        Just("-7".to_string()),
        Just(" 12 ".to_string()),
    ]
}

fn arb_rate() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..=100u8).prop_map(|n| n.to_string()),
        Just("2.5".to_string()),
        Just(String::new()),
        Just("gst".to_string()),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Update(usize, InvoiceItemField, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Remove),
        (0usize..8, arb_input()).prop_map(|(i, v)| Op::Update(i, InvoiceItemField::Quantity, v)),
        (0usize..8, arb_input()).prop_map(|(i, v)| Op::Update(i, InvoiceItemField::Rate, v)),
        (0usize..8, arb_rate()).prop_map(|(i, v)| Op::Update(i, InvoiceItemField::GstRate, v)),
        (0usize..8, "[a-z ]{0,12}")
            .prop_map(|(i, v)| Op::Update(i, InvoiceItemField::Description, v)),
    ]
}

fn apply(ledger: &mut Ledger<InvoiceItem>, op: &Op) {
    match op {
        Op::Add => {
            ledger.add_row();
        }
        Op::Remove(index) => {
            let id = ledger.rows()[index % ledger.len()].id();
            ledger.remove_row(id);
        }
        Op::Update(index, field, value) => {
            let id = ledger.rows()[index % ledger.len()].id();
            ledger.update_row(id, *field, value.clone());
        }
    }
}

fn expected_amounts(row: &InvoiceItem) -> RowAmounts {
    let quantity = parse_numeric_or_zero(&row.quantity);
    let rate = parse_numeric_or_zero(&row.rate);
    let gst = parse_numeric_or_zero(&row.gst_rate);

    let amount = quantity * rate;
    let tax_amount = amount * (gst / Decimal::ONE_HUNDRED);
    RowAmounts {
        amount,
        tax_amount,
        total: amount + tax_amount,
    }
}

proptest! {
    /// Property: derived fields always match the raw inputs
    #[test]
    fn test_derived_fields_are_never_stale(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ledger: Ledger<InvoiceItem> = Ledger::new(LedgerSettings::default());
        for op in &ops {
            apply(&mut ledger, op);

            for row in ledger.rows() {
                prop_assert_eq!(row.amounts, expected_amounts(row));
            }
        }
    }

    /// Property: aggregates are exact sums over the rows
    #[test]
    fn test_aggregate_is_sum_of_rows(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ledger: Ledger<InvoiceItem> = Ledger::new(LedgerSettings::default());
        for op in &ops {
            apply(&mut ledger, op);
        }

        let totals = ledger.aggregate();
        let subtotal: Decimal = ledger.rows().iter().map(|r| r.amounts.amount).sum();
        let total_tax: Decimal = ledger.rows().iter().map(|r| r.amounts.tax_amount).sum();
        let grand_total: Decimal = ledger.rows().iter().map(|r| r.amounts.total).sum();

        prop_assert_eq!(totals.subtotal, subtotal);
        prop_assert_eq!(totals.total_tax, total_tax);
        prop_assert_eq!(totals.grand_total, grand_total);
        prop_assert_eq!(totals.grand_total, totals.subtotal + totals.total_tax);
    }

    /// Property: the ledger never drops below one row
    #[test]
    fn test_ledger_never_empty(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ledger: Ledger<InvoiceItem> = Ledger::new(LedgerSettings::default());
        for op in &ops {
            apply(&mut ledger, op);
            prop_assert!(ledger.len() >= 1);
        }
    }

    /// Property: add_row grows by exactly one with zeroed derived fields
    #[test]
    fn test_add_row_appends_zeroed_row(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut ledger: Ledger<InvoiceItem> = Ledger::new(LedgerSettings::default());
        for op in &ops {
            apply(&mut ledger, op);
        }

        let before = ledger.len();
        let id = ledger.add_row();
        prop_assert_eq!(ledger.len(), before + 1);

        let row = ledger.row(id).unwrap();
        prop_assert_eq!(row.amounts, RowAmounts::default());
        prop_assert_eq!(ledger.rows().last().unwrap().id(), id);
    }

    /// Property: removing the last remaining row leaves it in place
    #[test]
    fn test_single_row_survives_removal(
        quantity in arb_input(),
        rate in arb_input(),
    ) {
        let mut ledger: Ledger<InvoiceItem> = Ledger::new(LedgerSettings::default());
        let id = ledger.first_id();
        ledger.update_row(id, InvoiceItemField::Quantity, quantity);
        ledger.update_row(id, InvoiceItemField::Rate, rate);
        let before = ledger.rows().to_vec();

        prop_assert!(!ledger.remove_row(id));
        prop_assert_eq!(ledger.rows(), before.as_slice());
    }
}
