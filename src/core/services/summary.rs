//! Summary service - each person's share of the bill
//!
//! Pure function of the ledger and the bill totals. Nothing here is cached;
//! callers recompute after every change.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::models::{BillTotals, PersonName};

use super::ledger::Ledger;

/// One person's share of the bill
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PersonShare {
    /// Sum of this person's slices of item prices
    pub subtotal: f64,
    /// Fraction of the overall subtotal this person covers
    pub proportion: f64,
    /// Share of tax
    pub tax: f64,
    /// Share of tip
    pub tip: f64,
    /// subtotal + tax + tip
    pub total: f64,
}

/// Compute every person's share
///
/// A shared item is split evenly among its assignees. Tax and tip are
/// split in proportion to each person's subtotal against the whole
/// receipt, so unassigned items are paid by nobody rather than spread over
/// the people present. Returns an empty map when the receipt subtotal is
/// zero.
#[must_use]
pub fn summarize(ledger: &Ledger, totals: BillTotals) -> BTreeMap<PersonName, PersonShare> {
    let overall = ledger.subtotal();
    if overall <= 0.0 {
        return BTreeMap::new();
    }

    ledger
        .people()
        .into_iter()
        .map(|person| {
            let subtotal: f64 = ledger
                .items_for(&person.name)
                .into_iter()
                .filter_map(|item| item.share())
                .sum();
            let proportion = subtotal / overall;
            let tax = totals.tax * proportion;
            let tip = totals.tip * proportion;

            let share = PersonShare {
                subtotal,
                proportion,
                tax,
                tip,
                total: subtotal + tax + tip,
            };
            (person.name, share)
        })
        .collect()
}
