//! Property-based tests for reconciliation and summary
//!
//! Uses proptest to verify properties that should hold for all receipts.

use proptest::prelude::*;

use tabsplit::core::models::{Assignment, BillTotals, LineItem};
use tabsplit::core::services::{Ledger, summarize};

const PEOPLE: [&str; 4] = ["ana", "bo", "cy", "dee"];

fn receipt_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(0u32..5_000, 1..8).prop_map(|prices| {
        prices
            .into_iter()
            .enumerate()
            .map(|(i, cents)| LineItem::new(format!("item{i}"), f64::from(cents) / 100.0))
            .collect()
    })
}

fn assignments(item_count: usize) -> impl Strategy<Value = Vec<Assignment>> {
    prop::collection::vec((0..PEOPLE.len(), 0..item_count), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(p, i)| Assignment::new(PEOPLE[p], format!("item{i}")))
            .collect()
    })
}

fn receipt_with_assignments() -> impl Strategy<Value = (Vec<LineItem>, Vec<Assignment>)> {
    receipt_items().prop_flat_map(|items| {
        let count = items.len();
        (Just(items), assignments(count))
    })
}

proptest! {
    /// People never owe more than the receipt, and owe all of it once everything is assigned
    #[test]
    fn subtotals_never_exceed_receipt((items, batch) in receipt_with_assignments()) {
        let mut ledger = Ledger::from_line_items(&items);
        ledger.apply(&batch);

        let summary = summarize(&ledger, BillTotals { tax: 3.0, tip: 5.0 });
        let assigned: f64 = summary.values().map(|s| s.subtotal).sum();
        let overall = ledger.subtotal();

        prop_assert!(assigned <= overall + 1e-6);
        if ledger.is_fully_assigned() && overall > 0.0 {
            prop_assert!((assigned - overall).abs() < 1e-6);
        }
        if overall > 0.0 {
            prop_assert!((assigned + ledger.unassigned_total() - overall).abs() < 1e-6);
        }
    }

    /// Each assignee of an item gets exactly price / k of it
    #[test]
    fn shared_items_split_evenly(price in 1u32..10_000, k in 1usize..=4) {
        let price = f64::from(price) / 100.0;
        let mut ledger = Ledger::from_line_items(&[LineItem::new("Dish", price)]);
        let batch: Vec<_> = PEOPLE[..k].iter().map(|p| Assignment::new(*p, "dish")).collect();
        ledger.apply(&batch);

        let summary = summarize(&ledger, BillTotals::default());
        prop_assert_eq!(summary.len(), k);
        for share in summary.values() {
            prop_assert!((share.subtotal - price / k as f64).abs() < 1e-9);
        }
    }

    /// Reconciliation keeps both sides of the assignment relation in sync
    #[test]
    fn ledger_stays_consistent((items, batch) in receipt_with_assignments()) {
        let mut ledger = Ledger::from_line_items(&items);
        ledger.apply(&batch);
        prop_assert!(ledger.is_consistent());

        let people = ledger.people();
        if let Some(person) = people.first() {
            let item = *person.items.iter().next().unwrap();
            ledger.unassign(person.name.as_str(), item).unwrap();
            prop_assert!(ledger.is_consistent());
        }
    }

    /// Applying an empty batch is the identity
    #[test]
    fn empty_batch_is_identity(items in receipt_items()) {
        let mut ledger = Ledger::from_line_items(&items);
        let before = ledger.clone();
        ledger.apply(&[]);
        prop_assert_eq!(ledger, before);
    }
}
