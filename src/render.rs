//! Document renderer: row computation plus two-pass template substitution.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde_json::json;

use crate::amounts::compute_rows;
use crate::error::Result;
use crate::model::Invoice;
use crate::template::{TemplateConfig, TemplateEngine, Templates};

/// Renders [`Invoice`] documents to HTML.
///
/// Template texts are loaded lazily on the first render and cached on the
/// instance. Two concurrent first renders may both read the template files;
/// only one result is kept and the cache is never corrupted.
pub struct Renderer {
    config: TemplateConfig,
    engine: TemplateEngine,
    cache: OnceLock<Templates>,
}

impl Renderer {
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            config,
            engine: TemplateEngine::new(),
            cache: OnceLock::new(),
        }
    }

    /// Renderer using the built-in sample templates.
    pub fn with_default_templates() -> Self {
        Self::new(TemplateConfig::default())
    }

    /// Replace the template configuration, discarding any cached texts.
    pub fn set_templates(&mut self, config: TemplateConfig) {
        self.config = config;
        self.cache = OnceLock::new();
    }

    fn templates(&self) -> Result<&Templates> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }
        let loaded = Templates::load(&self.config)?;
        Ok(self.cache.get_or_init(|| loaded))
    }

    /// Render the invoice to an HTML string.
    ///
    /// Inner pass: the row block is rendered once per line item, in input
    /// order, and the results concatenated. Outer pass: the root template
    /// is rendered once with the parties, the header, the concatenated rows
    /// and the formatted grand totals. The invoice itself is never mutated.
    pub fn render_html(&self, invoice: &Invoice) -> Result<String> {
        invoice.currency_balance.validate()?;
        let templates = self.templates()?;

        let (computed, totals) = compute_rows(&invoice.items, &invoice.currency_balance);

        let mut rows = String::new();
        for row in &computed {
            rows.push_str(&self.engine.render(&templates.row_block, row)?);
        }
        log::debug!(
            "rendered {} row(s) for invoice {}",
            computed.len(),
            invoice.invoice.number
        );

        let data = json!({
            "seller": invoice.seller,
            "buyer": invoice.buyer,
            "invoice": invoice.invoice,
            "rows": rows,
            "total": totals.formatted(),
        });
        self.engine.render(&templates.root, &data)
    }

    /// Render to HTML, write it to `path`, and return the string as well.
    ///
    /// Rendering happens before the file is touched, so a template or
    /// substitution failure leaves no partial output behind.
    pub fn render_html_to_file(&self, invoice: &Invoice, path: impl AsRef<Path>) -> Result<String> {
        let html = self.render_html(invoice)?;
        fs::write(path.as_ref(), &html)?;
        Ok(html)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::with_default_templates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Address, CurrencyBalance, CurrencyLabels, Invoice, InvoiceMeta, InvoiceNumber, LineItem,
        Party, UnitPrice,
    };
    use crate::template::TemplateSource;
    use crate::templates;

    fn sample_invoice() -> Invoice {
        let task = |description: &str, quantity: f64, unit_price: f64| LineItem {
            description: description.into(),
            unit: "Hours".into(),
            quantity,
            unit_price: UnitPrice::Single(unit_price),
            tax: None,
        };
        Invoice {
            currency_balance: CurrencyBalance {
                main: 1.0,
                secondary: 3.67,
            },
            invoice: InvoiceMeta {
                number: InvoiceNumber {
                    series: "PREFIX".into(),
                    separator: "-".into(),
                    id: 1,
                },
                date: "01/02/2014".into(),
                due_date: "11/02/2014".into(),
                explanation: "Thank you for your business!".into(),
                currency: CurrencyLabels {
                    main: "XXX".into(),
                    secondary: "ZZZ".into(),
                },
            },
            items: vec![
                task("Some interesting task", 5.0, 2.0),
                task("Another interesting task", 10.0, 3.0),
                task("The most interesting one", 3.0, 5.0),
            ],
            seller: Party {
                company: "My Company Inc.".into(),
                tax_id: "00000000".into(),
                address: Address {
                    street: "The Street Name".into(),
                    city: "Some City".into(),
                    ..Address::default()
                },
                ..Party::default()
            },
            buyer: Party {
                company: "Another Company GmbH".into(),
                tax_id: "00000000".into(),
                ..Party::default()
            },
        }
    }

    fn minimal_renderer() -> Renderer {
        Renderer::new(TemplateConfig {
            root: TemplateSource::Inline(templates::minimal_root_template().into()),
            row_block: TemplateSource::Inline(templates::minimal_row_template().into()),
        })
    }

    #[test]
    fn rows_appear_in_input_order() {
        let html = minimal_renderer().render_html(&sample_invoice()).unwrap();
        let first = html.find("[1:Some interesting task").unwrap();
        let second = html.find("[2:Another interesting task").unwrap();
        let third = html.find("[3:The most interesting one").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn totals_are_rendered_once_formatted() {
        let html = minimal_renderer().render_html(&sample_invoice()).unwrap();
        assert!(html.contains("total 55.00|201.85"), "html: {html}");
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let renderer = minimal_renderer();
        let invoice = sample_invoice();
        let first = renderer.render_html(&invoice).unwrap();
        let second = renderer.render_html(&invoice).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn default_templates_produce_full_document() {
        let html = Renderer::with_default_templates()
            .render_html(&sample_invoice())
            .unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Invoice PREFIX-1"));
        assert!(html.contains("My Company Inc."));
        assert!(html.contains("Another Company GmbH"));
        assert!(html.contains("<td>7.34</td>"));
        assert!(html.contains("201.85"));
    }

    #[test]
    fn missing_template_file_fails_before_output_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("invoice.html");
        let renderer = Renderer::new(TemplateConfig::from_files(
            dir.path().join("missing-root.html"),
            dir.path().join("missing-row.html"),
        ));
        let result = renderer.render_html_to_file(&sample_invoice(), &output);
        assert!(matches!(
            result,
            Err(crate::error::Error::TemplateLoad { .. })
        ));
        assert!(!output.exists(), "no partial output file expected");
    }

    #[test]
    fn set_templates_discards_cache() {
        let mut renderer = minimal_renderer();
        let invoice = sample_invoice();
        assert!(renderer.render_html(&invoice).unwrap().starts_with("<div>"));

        renderer.set_templates(TemplateConfig {
            root: TemplateSource::Inline("only totals: {{total.main}}".into()),
            row_block: TemplateSource::Inline(String::new()),
        });
        assert_eq!(
            renderer.render_html(&invoice).unwrap(),
            "only totals: 55.00"
        );
    }

    #[test]
    fn zero_balance_denominator_is_invalid_configuration() {
        let mut invoice = sample_invoice();
        invoice.currency_balance = CurrencyBalance {
            main: 0.0,
            secondary: 3.67,
        };
        let result = minimal_renderer().render_html(&invoice);
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidConfiguration(_))
        ));
    }
}
