//! Template sources and the substitution engine.
//!
//! Substitution is delegated to handlebars: `{{field}}` placeholders with
//! nested dotted paths, unresolved paths rendering as empty strings
//! (non-strict mode), and `{{{...}}}` for unescaped injection.

use std::fs;
use std::path::PathBuf;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::templates;

/// Where a template's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Read from a file on first use.
    File(PathBuf),
    /// Supplied directly as a string.
    Inline(String),
}

impl TemplateSource {
    /// Fetch the template text. A missing or unreadable file is a
    /// [`Error::TemplateLoad`] carrying the offending path.
    pub fn load(&self) -> Result<String> {
        match self {
            TemplateSource::File(path) => {
                fs::read_to_string(path).map_err(|source| Error::TemplateLoad {
                    path: path.clone(),
                    source,
                })
            }
            TemplateSource::Inline(text) => Ok(text.clone()),
        }
    }
}

/// The two template fragments a renderer needs: the root document and the
/// per-line-item row block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    pub root: TemplateSource,
    pub row_block: TemplateSource,
}

impl TemplateConfig {
    /// Both fragments loaded from files.
    pub fn from_files(root: impl Into<PathBuf>, row_block: impl Into<PathBuf>) -> Self {
        Self {
            root: TemplateSource::File(root.into()),
            row_block: TemplateSource::File(row_block.into()),
        }
    }
}

impl Default for TemplateConfig {
    /// The built-in sample templates from [`crate::templates`].
    fn default() -> Self {
        Self {
            root: TemplateSource::Inline(templates::default_root_template().to_string()),
            row_block: TemplateSource::Inline(templates::default_row_template().to_string()),
        }
    }
}

/// Loaded template texts, cached on the renderer after the first render.
#[derive(Debug, Clone)]
pub struct Templates {
    pub root: String,
    pub row_block: String,
}

impl Templates {
    /// Load both fragments of a [`TemplateConfig`].
    pub fn load(config: &TemplateConfig) -> Result<Self> {
        Ok(Self {
            root: config.root.load()?,
            row_block: config.row_block.load()?,
        })
    }
}

/// Thin wrapper over the handlebars registry.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Unresolved placeholders render as empty output.
        registry.set_strict_mode(false);
        Self { registry }
    }

    /// Render a template string against a data mapping.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.registry.render_template(template, data)?)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
