//! Per-row monetary computation and running totals.
//!
//! This is the numeric core of the pipeline. The row arithmetic deliberately
//! reproduces the reference output: unit prices are rounded to cents *before*
//! being multiplied by the quantity, so per-row rounding error compounds into
//! the totals. Changing the step order changes the output of real invoices.

use serde::Serialize;

use crate::model::{CurrencyBalance, LineItem};

/// Round to 2 fractional digits, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fixed-point display format with exactly 2 fractional digits.
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// A formatted (main, secondary) money pair, ready for the template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyPair {
    pub main: String,
    pub secondary: String,
}

/// Running sum of row amounts in both currencies.
///
/// Accumulated as unrounded numbers; formatted to 2 decimals exactly once,
/// after the last row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub main: f64,
    pub secondary: f64,
}

impl Totals {
    pub fn formatted(&self) -> MoneyPair {
        MoneyPair {
            main: format_fixed2(self.main),
            secondary: format_fixed2(self.secondary),
        }
    }
}

/// Immutable per-row view derived from a [`LineItem`] during rendering.
///
/// The source line item is left untouched; rendering the same invoice twice
/// therefore produces identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRow {
    /// 1-based row number, in input order.
    pub index: usize,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    pub unit_price: MoneyPair,
    pub amount: MoneyPair,
}

/// Compute one row's derived fields and add its amounts to `totals`.
///
/// Step order matters for output parity:
/// 1. split a plain unit price into (main, secondary) via the balance;
/// 2. round both components to cents;
/// 3. multiply the *rounded* components by the quantity;
/// 4. accumulate the unrounded products into the totals;
/// 5. format this row's amounts for display.
///
/// The caller must have validated the balance first; see
/// [`CurrencyBalance::validate`].
pub fn compute_row(
    index: usize,
    item: &LineItem,
    balance: &CurrencyBalance,
    totals: &mut Totals,
) -> ComputedRow {
    let (raw_main, raw_secondary) = item.unit_price.split(balance);

    let unit_main = round2(raw_main);
    let unit_secondary = round2(raw_secondary);

    let amount_main = unit_main * item.quantity;
    let amount_secondary = unit_secondary * item.quantity;

    totals.main += amount_main;
    totals.secondary += amount_secondary;

    ComputedRow {
        index,
        description: item.description.clone(),
        unit: item.unit.clone(),
        quantity: item.quantity,
        tax: item.tax,
        unit_price: MoneyPair {
            main: format_fixed2(unit_main),
            secondary: format_fixed2(unit_secondary),
        },
        amount: MoneyPair {
            main: format_fixed2(amount_main),
            secondary: format_fixed2(amount_secondary),
        },
    }
}

/// Compute every row in input order, returning the rows and final totals.
pub fn compute_rows(
    items: &[LineItem],
    balance: &CurrencyBalance,
) -> (Vec<ComputedRow>, Totals) {
    let mut totals = Totals::default();
    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| compute_row(i + 1, item, balance, &mut totals))
        .collect();
    (rows, totals)
}
