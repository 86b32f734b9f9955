//! Invoice data model.
//!
//! All types deserialize from the camelCase JSON shape accepted by the CLI
//! (`unitPrice`, `dueDate`, `currencyBalance`, …). The renderer treats
//! seller/buyer data as opaque: it is passed through to the templates
//! unchanged and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Exchange ratio between the invoice's two display currencies.
///
/// A converted value is `input * secondary / main`; e.g. `{main: 1,
/// secondary: 3.67}` converts 2.00 into 7.34.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub main: f64,
    pub secondary: f64,
}

impl CurrencyBalance {
    /// Ratio with no conversion (secondary mirrors main).
    pub fn unity() -> Self {
        Self {
            main: 1.0,
            secondary: 1.0,
        }
    }

    /// Convert a main-currency value into the secondary currency.
    pub fn to_secondary(&self, input: f64) -> f64 {
        input * self.secondary / self.main
    }

    /// Reject ratios that would divide by zero or produce non-finite
    /// amounts. Checked once, before any row computation.
    pub fn validate(&self) -> Result<()> {
        if self.main == 0.0 {
            return Err(Error::invalid_configuration(
                "currency balance main value must be non-zero",
            ));
        }
        if !self.main.is_finite() || !self.secondary.is_finite() {
            return Err(Error::invalid_configuration(
                "currency balance values must be finite",
            ));
        }
        Ok(())
    }
}

/// Per-unit price of a line item: a plain number in the main currency, or a
/// pre-split pair when the caller already did the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitPrice {
    Single(f64),
    Split { main: f64, secondary: f64 },
}

impl UnitPrice {
    /// Resolve into a (main, secondary) pair using the given ratio.
    pub fn split(&self, balance: &CurrencyBalance) -> (f64, f64) {
        match *self {
            UnitPrice::Single(main) => (main, balance.to_secondary(main)),
            UnitPrice::Split { main, secondary } => (main, secondary),
        }
    }
}

impl From<f64> for UnitPrice {
    fn from(main: f64) -> Self {
        UnitPrice::Single(main)
    }
}

/// One billable row of the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: UnitPrice,
    /// Tax fraction, displayed only; not part of the totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}

/// Structured invoice number, e.g. series "PREFIX", separator "-", id 1
/// renders as "PREFIX-1".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceNumber {
    pub series: String,
    pub separator: String,
    pub id: u64,
}

impl std::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.series, self.separator, self.id)
    }
}

/// Display labels for the two currencies (e.g. "USD" / "AED").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyLabels {
    pub main: String,
    pub secondary: String,
}

/// Invoice header block: number, dates, free-text explanation, labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMeta {
    pub number: InvoiceNumber,
    pub date: String,
    pub due_date: String,
    pub explanation: String,
    pub currency: CurrencyLabels,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub zip: String,
    pub city: String,
    pub region: String,
    pub country: String,
}

/// Banking details of a party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub name: String,
    pub swift: String,
    pub currency: String,
    pub iban: String,
}

/// Seller or buyer identity. Pure data, opaque to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub tax_id: String,
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
}

/// A complete invoice: header, ratio, ordered line items, and both parties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub currency_balance: CurrencyBalance,
    pub invoice: InvoiceMeta,
    pub items: Vec<LineItem>,
    pub seller: Party,
    pub buyer: Party,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_price_accepts_plain_number_json() {
        let item: LineItem = serde_json::from_str(
            r#"{"description": "Work", "unit": "Hours", "quantity": 5, "unitPrice": 2}"#,
        )
        .unwrap();
        assert_eq!(item.unit_price, UnitPrice::Single(2.0));
        assert_eq!(item.tax, None);
    }

    #[test]
    fn unit_price_accepts_split_json() {
        let item: LineItem = serde_json::from_str(
            r#"{"description": "Work", "unit": "Hours", "quantity": 1,
                "unitPrice": {"main": 2.0, "secondary": 7.34}, "tax": 0.33}"#,
        )
        .unwrap();
        assert_eq!(
            item.unit_price,
            UnitPrice::Split {
                main: 2.0,
                secondary: 7.34
            }
        );
        assert_eq!(item.tax, Some(0.33));
    }

    #[test]
    fn split_converts_via_balance() {
        let balance = CurrencyBalance {
            main: 1.0,
            secondary: 3.67,
        };
        let (main, secondary) = UnitPrice::Single(2.0).split(&balance);
        assert_eq!(main, 2.0);
        assert_eq!(secondary, 7.34);
    }

    #[test]
    fn split_pair_passes_through_unconverted() {
        let balance = CurrencyBalance {
            main: 1.0,
            secondary: 3.67,
        };
        let price = UnitPrice::Split {
            main: 2.0,
            secondary: 9.99,
        };
        assert_eq!(price.split(&balance), (2.0, 9.99));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let balance = CurrencyBalance {
            main: 0.0,
            secondary: 3.67,
        };
        assert!(balance.validate().is_err());
    }

    #[test]
    fn invoice_number_display() {
        let number = InvoiceNumber {
            series: "PREFIX".into(),
            separator: "-".into(),
            id: 1,
        };
        assert_eq!(number.to_string(), "PREFIX-1");
    }
}
