//! Ledger service - reconciles assignments with receipt items
//!
//! The ledger is the single source of truth for who is on which item.
//! Items live in one table keyed by [`ItemId`]; people hold item ids only,
//! so there is never a stale copy of an item to re-sync.
//!
//! Invariant: an item id is in a person's set exactly when that person is
//! in the item's `assigned_to` list, and no person has an empty set.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use thiserror::Error;

use crate::core::models::{Assignment, ItemId, LineItem, Person, PersonName, ReceiptItem};

/// Errors from ledger mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No item has this id
    #[error("no item {0} on this receipt")]
    UnknownItem(ItemId),

    /// The person is not on the item
    #[error("{person} is not assigned to {item}")]
    NotAssigned {
        /// Person that was named
        person: String,
        /// Item that was named
        item: ItemId,
    },
}

/// An assignment that changed the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedAssignment {
    /// Who was added
    pub person: PersonName,
    /// Which item they were added to
    pub item: ItemId,
    /// The item's receipt name, for messages
    pub item_name: String,
}

/// Outcome of applying one batch of assignments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Assignments that were applied, one entry per (person, item id)
    pub accepted: Vec<AcceptedAssignment>,
    /// Assignments that matched no unassigned item or named nobody
    pub rejected: Vec<Assignment>,
}

impl Reconciliation {
    /// Whether the batch assigned nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Outcome of removing a person from an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unassignment {
    /// Person that was removed
    pub person: PersonName,
    /// Item they were removed from
    pub item: ItemId,
    /// True when that was the person's last item and they left the bill
    pub person_removed: bool,
}

/// Items, people, and the assignments between them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    items: BTreeMap<ItemId, ReceiptItem>,
    people: BTreeMap<PersonName, BTreeSet<ItemId>>,
}

impl Ledger {
    /// Build a ledger from extracted lines, numbering items from 1
    #[must_use]
    pub fn from_line_items(lines: &[LineItem]) -> Self {
        let items = (1..)
            .zip(lines)
            .map(|(n, line)| {
                let id = ItemId(n);
                (id, ReceiptItem::new(id, line.name.trim(), line.price))
            })
            .collect();

        Self {
            items,
            people: BTreeMap::new(),
        }
    }

    /// All items in receipt order
    pub fn items(&self) -> impl Iterator<Item = &ReceiptItem> {
        self.items.values()
    }

    /// Look up an item by id
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ReceiptItem> {
        self.items.get(&id)
    }

    /// Items nobody is on yet
    pub fn unassigned_items(&self) -> impl Iterator<Item = &ReceiptItem> {
        self.items.values().filter(|item| item.is_unassigned())
    }

    /// Everyone on the bill, ordered by name
    #[must_use]
    pub fn people(&self) -> Vec<Person> {
        self.people
            .iter()
            .map(|(name, items)| Person {
                name: name.clone(),
                items: items.clone(),
            })
            .collect()
    }

    /// Look up a person by name (case-insensitive)
    #[must_use]
    pub fn person(&self, name: &str) -> Option<Person> {
        self.people
            .get_key_value(&PersonName::new(name))
            .map(|(name, items)| Person {
                name: name.clone(),
                items: items.clone(),
            })
    }

    /// Display names of everyone on the bill
    #[must_use]
    pub fn person_names(&self) -> Vec<String> {
        self.people.keys().map(ToString::to_string).collect()
    }

    /// The items a person is on, resolved against the item table
    #[must_use]
    pub fn items_for(&self, name: &PersonName) -> Vec<&ReceiptItem> {
        self.people
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|id| self.items.get(id))
            .collect()
    }

    /// Sum of all item prices
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.items.values().map(|item| item.price).sum()
    }

    /// Sum of prices of items nobody is on
    #[must_use]
    pub fn unassigned_total(&self) -> f64 {
        self.unassigned_items().map(|item| item.price).sum()
    }

    /// Whether every item has at least one person
    #[must_use]
    pub fn is_fully_assigned(&self) -> bool {
        self.items.values().all(|item| !item.is_unassigned())
    }

    /// Apply a batch of assignments
    ///
    /// Only items that were unassigned when the batch started are eligible,
    /// so naming an already-claimed item again changes nothing. Several
    /// assignments to the same eligible item accumulate, which is how
    /// shared items are expressed. A batch that matches nothing leaves the
    /// ledger untouched.
    pub fn apply(&mut self, assignments: &[Assignment]) -> Reconciliation {
        let eligible: Vec<ItemId> = self.unassigned_items().map(|item| item.id).collect();
        let mut outcome = Reconciliation::default();

        for assignment in assignments {
            let person = PersonName::new(&assignment.person);
            let targets: Vec<ItemId> = eligible
                .iter()
                .copied()
                .filter(|id| self.items.get(id).is_some_and(|item| item.name_matches(&assignment.item)))
                .collect();

            if person.is_empty() || targets.is_empty() {
                debug!("Rejected assignment {:?} -> {:?}", assignment.person, assignment.item);
                outcome.rejected.push(assignment.clone());
                continue;
            }

            let person = self.canonical(person);
            for id in targets {
                let Some(item) = self.items.get_mut(&id) else {
                    continue;
                };
                if !item.add_assignee(&person) {
                    continue;
                }
                self.people.entry(person.clone()).or_default().insert(id);
                debug!("Assigned {} ({id}) to {person}", item.name);
                outcome.accepted.push(AcceptedAssignment {
                    person: person.clone(),
                    item: id,
                    item_name: item.name.clone(),
                });
            }
        }

        outcome
    }

    /// Remove one person from one item
    ///
    /// The item always stays on the receipt. A person left with no items is
    /// dropped from the bill.
    pub fn unassign(&mut self, person: &str, item: ItemId) -> Result<Unassignment, LedgerError> {
        let name = PersonName::new(person);
        let entry = self.items.get_mut(&item).ok_or(LedgerError::UnknownItem(item))?;

        if !entry.remove_assignee(&name) {
            return Err(LedgerError::NotAssigned {
                person: name.to_string(),
                item,
            });
        }

        let name = self.canonical(name);
        let person_removed = match self.people.get_mut(&name) {
            Some(items) => {
                items.remove(&item);
                items.is_empty()
            },
            None => true,
        };
        if person_removed {
            self.people.remove(&name);
        }
        debug!("Unassigned {name} from {item} (removed: {person_removed})");

        Ok(Unassignment {
            person: name,
            item,
            person_removed,
        })
    }

    /// Check the item/person invariant
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let people_agree = self.people.iter().all(|(name, ids)| {
            !ids.is_empty()
                && ids
                    .iter()
                    .all(|id| self.items.get(id).is_some_and(|item| item.is_assigned_to(name)))
        });
        let items_agree = self.items.values().all(|item| {
            item.assigned_to
                .iter()
                .all(|name| self.people.get(name).is_some_and(|ids| ids.contains(&item.id)))
        });
        people_agree && items_agree
    }

    /// Resolve a name to the spelling already on the bill, if any
    fn canonical(&self, name: PersonName) -> PersonName {
        self.people.get_key_value(&name).map_or(name, |(existing, _)| existing.clone())
    }
}
