//! Crate error model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the rendering and export pipeline.
///
/// Every stage forwards its failure to the caller; nothing retries
/// internally. Partial output (e.g. a half-written PDF) is not cleaned up.
#[derive(Debug, Error)]
pub enum Error {
    /// A template file was missing or unreadable.
    #[error("failed to load template '{path}': {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The invoice configuration cannot produce meaningful output
    /// (e.g. a zero currency-balance denominator).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The template engine rejected a template or data mapping.
    #[error("template substitution failed: {0}")]
    Substitution(#[from] handlebars::RenderError),

    /// The headless-browser backend failed to produce a PDF.
    #[error("PDF conversion failed: {0}")]
    PdfConversion(String),

    /// Writing the rendered output to a file or stream failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn pdf_conversion(msg: impl Into<String>) -> Self {
        Self::PdfConversion(msg.into())
    }
}
