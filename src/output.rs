//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeMap;
use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{BillTotals, PersonName};
use crate::core::services::{Ledger, PersonShare};
use crate::session::{ChatMessage, Role};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// An amount with a currency symbol, always two decimals
#[derive(Debug, Clone, Copy)]
pub struct Money<'a> {
    amount: f64,
    currency: &'a str,
}

impl<'a> Money<'a> {
    /// Wrap an amount for display
    #[must_use]
    pub const fn new(amount: f64, currency: &'a str) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}{:.2}", self.currency, self.amount);
        f.pad(&text)
    }
}

/// One row of the item table
#[derive(Debug, Serialize)]
pub struct ItemRow {
    /// Item id as shown to the user
    pub id: u32,
    /// Item name
    pub name: String,
    /// Full price
    pub price: f64,
    /// Who is on it
    pub assigned_to: Vec<String>,
}

/// The receipt as currently assigned
#[derive(Debug, Serialize)]
pub struct ItemsReport {
    /// Items in receipt order
    pub items: Vec<ItemRow>,
    /// Sum of all item prices
    pub subtotal: f64,
    /// Bill tax
    pub tax: f64,
    /// Bill tip
    pub tip: f64,
    /// Sum of prices nobody is on yet
    pub unassigned: f64,
}

impl ItemsReport {
    /// Build the report from session state
    #[must_use]
    pub fn new(ledger: &Ledger, totals: BillTotals) -> Self {
        Self {
            items: ledger
                .items()
                .map(|item| ItemRow {
                    id: item.id.0,
                    name: item.name.clone(),
                    price: item.price,
                    assigned_to: item.assigned_to.iter().map(ToString::to_string).collect(),
                })
                .collect(),
            subtotal: ledger.subtotal(),
            tax: totals.tax,
            tip: totals.tip,
            unassigned: ledger.unassigned_total(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode, currency: &str) {
        match mode {
            OutputMode::Human => self.render_human(currency),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self, currency: &str) {
        let width = self.items.iter().map(|i| i.name.chars().count()).max().unwrap_or(4).max(4);

        println!("{}", "Receipt".bold());
        for item in &self.items {
            let who = if item.assigned_to.is_empty() {
                "unassigned".dimmed().to_string()
            } else {
                item.assigned_to.join(", ")
            };
            println!(
                "  {:>4}  {:<width$}  {:>10}  {}",
                format!("#{}", item.id),
                item.name,
                Money::new(item.price, currency),
                who
            );
        }
        println!();
        println!("  Subtotal {}", Money::new(self.subtotal, currency));
        println!("  Tax      {}", Money::new(self.tax, currency));
        println!("  Tip      {}", Money::new(self.tip, currency));
        if self.unassigned > 0.0 {
            println!(
                "  {}",
                format!("Unassigned {}", Money::new(self.unassigned, currency)).yellow()
            );
        }
    }
}

/// One person's line in the summary
#[derive(Debug, Serialize)]
pub struct ShareRow {
    /// Person name
    pub person: String,
    /// Their share of item prices
    pub subtotal: f64,
    /// Fraction of the receipt subtotal
    pub proportion: f64,
    /// Their share of tax
    pub tax: f64,
    /// Their share of tip
    pub tip: f64,
    /// What they owe
    pub total: f64,
}

/// Who owes what
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// One row per person, by name
    pub people: Vec<ShareRow>,
    /// Sum of all item prices
    pub subtotal: f64,
    /// Bill tax
    pub tax: f64,
    /// Bill tip
    pub tip: f64,
    /// Item value nobody is paying for yet
    pub unassigned: f64,
}

impl SummaryReport {
    /// Build the report from a computed summary
    #[must_use]
    pub fn new(
        shares: &BTreeMap<PersonName, PersonShare>,
        ledger: &Ledger,
        totals: BillTotals,
    ) -> Self {
        Self {
            people: shares
                .iter()
                .map(|(name, share)| ShareRow {
                    person: name.to_string(),
                    subtotal: share.subtotal,
                    proportion: share.proportion,
                    tax: share.tax,
                    tip: share.tip,
                    total: share.total,
                })
                .collect(),
            subtotal: ledger.subtotal(),
            tax: totals.tax,
            tip: totals.tip,
            unassigned: ledger.unassigned_total(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode, currency: &str) {
        match mode {
            OutputMode::Human => self.render_human(currency),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self, currency: &str) {
        if self.people.is_empty() {
            println!("Nobody has been assigned anything yet.");
            return;
        }

        let width = self.people.iter().map(|p| p.person.chars().count()).max().unwrap_or(6).max(6);
        println!("{}", "Summary".bold());
        println!(
            "  {:<width$}  {:>10}  {:>10}  {:>10}  {:>10}",
            "Person", "Items", "Tax", "Tip", "Total"
        );
        for row in &self.people {
            println!(
                "  {:<width$}  {:>10}  {:>10}  {:>10}  {}",
                row.person,
                Money::new(row.subtotal, currency),
                Money::new(row.tax, currency),
                Money::new(row.tip, currency),
                format!("{:>10}", Money::new(row.total, currency)).green().bold()
            );
        }
        if self.unassigned > 0.0 {
            println!();
            println!(
                "  {}",
                format!(
                    "{} of items are still unassigned and not included above.",
                    Money::new(self.unassigned, currency)
                )
                .yellow()
            );
        }
    }
}

/// Print one chat message
pub fn render_message(message: &ChatMessage, mode: OutputMode) {
    match mode {
        OutputMode::Human => match message.role {
            Role::Assistant => println!("{} {}", "tabsplit:".cyan().bold(), message.text),
            Role::User => println!("{} {}", "you:".bold(), message.text),
        },
        OutputMode::Json => render_json(message),
    }
}

fn render_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize output: {e}"),
    }
}
