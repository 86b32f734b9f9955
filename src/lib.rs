//! # invoice-mill – template-driven invoice → HTML → PDF pipeline
//!
//! This crate turns structured invoice data (seller, buyer, line items,
//! currency balances) into an HTML document via template substitution, and
//! optionally into a PDF. The pipeline stages are:
//!
//! 1. **Model** – invoice data and configuration ([`model`])
//! 2. **Amounts** – per-row monetary computation and totals ([`amounts`])
//! 3. **Render** – two-pass template substitution into HTML ([`render`])
//! 4. **Export** – HTML → PDF via a headless-browser backend ([`export`])
//!
//! Templates are handlebars documents; built-in samples live in
//! [`templates`].

pub mod amounts;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod template;
pub mod templates;

// Re-exports for convenience
pub use error::{Error, Result};
pub use export::{ChromiumConverter, HtmlToPdf, PdfExporter, PdfSettings};
pub use model::{CurrencyBalance, Invoice, LineItem, Party, UnitPrice};
pub use render::Renderer;
pub use template::{TemplateConfig, TemplateSource};
