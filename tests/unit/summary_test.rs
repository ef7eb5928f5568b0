//! Tests for the summary calculator

use tabsplit::core::models::{BillTotals, PersonName};
use tabsplit::core::services::summarize;

use crate::common::fixtures::{ReceiptBuilder, approx, assign, burger_and_fries, ledger_for};

#[test]
fn burger_and_fries_split() {
    let receipt = burger_and_fries();
    let mut ledger = ledger_for(&receipt);
    ledger.apply(&[assign("David", "Burger"), assign("Jane", "Fries"), assign("John", "Fries")]);

    let summary = summarize(&ledger, receipt.totals());

    let david = &summary[&PersonName::new("David")];
    assert!(approx(david.subtotal, 10.0));
    assert!(approx(david.proportion, 10.0 / 14.0));
    assert!(approx(david.tax, 0.714));
    assert!(approx(david.tip, 1.429));

    for name in ["Jane", "John"] {
        let share = &summary[&PersonName::new(name)];
        assert!(approx(share.subtotal, 2.0));
        assert!(approx(share.proportion, 2.0 / 14.0));
        assert!(approx(share.tax, 0.143));
        assert!(approx(share.tip, 0.286));
        assert!(approx(share.total, 2.0 + 0.143 + 0.286));
    }

    let grand: f64 = summary.values().map(|s| s.total).sum();
    assert!(approx(grand, 17.0));
}

#[test]
fn item_shared_three_ways() {
    let receipt = ReceiptBuilder::new().item("Pizza", 30.0).build();
    let mut ledger = ledger_for(&receipt);
    ledger.apply(&[assign("a", "pizza"), assign("b", "pizza"), assign("c", "pizza")]);

    let summary = summarize(&ledger, BillTotals::default());
    assert_eq!(summary.len(), 3);
    assert!(summary.values().all(|s| approx(s.subtotal, 10.0)));
}

#[test]
fn all_free_items_give_empty_summary() {
    let receipt = ReceiptBuilder::new().item("Water", 0.0).item("Bread", 0.0).tax(1.0).build();
    let mut ledger = ledger_for(&receipt);
    ledger.apply(&[assign("ana", "water")]);

    assert!(summarize(&ledger, receipt.totals()).is_empty());
}

#[test]
fn summary_tracks_unassignment() {
    let receipt = burger_and_fries();
    let mut ledger = ledger_for(&receipt);
    ledger.apply(&[assign("jane", "fries"), assign("john", "fries")]);

    ledger.unassign("john", tabsplit::core::models::ItemId(2)).unwrap();

    let summary = summarize(&ledger, receipt.totals());
    assert_eq!(summary.len(), 1);
    assert!(approx(summary[&PersonName::new("jane")].subtotal, 4.0));
}
