//! PDF export adapter: rendered HTML → external HTML-to-PDF backend →
//! file, writer, or byte buffer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::model::Invoice;
use crate::render::Renderer;

/// Conversion backend settings.
///
/// Defaults match A3 portrait at roughly 300 dpi: a 2480×3508 viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSettings {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub paper_format: String,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            viewport_width: 2480,
            viewport_height: 3508,
            paper_format: "A3".to_string(),
        }
    }
}

/// The HTML→PDF conversion collaborator.
///
/// Implementations take a complete HTML document and page settings and
/// return PDF bytes. The default implementation drives a headless Chromium;
/// tests substitute a fake.
pub trait HtmlToPdf {
    fn convert(&self, html: &str, settings: &PdfSettings) -> Result<Vec<u8>>;
}

/// Headless-Chromium conversion backend.
///
/// The HTML is written to a scratch file, the browser is invoked with
/// `--headless --print-to-pdf`, and the resulting bytes are read back.
/// The scratch directory (and any partial output in it) is removed when the
/// call returns.
#[derive(Debug, Clone)]
pub struct ChromiumConverter {
    binary: PathBuf,
}

impl ChromiumConverter {
    /// Candidate binary names probed by [`ChromiumConverter::default`].
    const CANDIDATES: &'static [&'static str] =
        &["chromium", "chromium-browser", "google-chrome", "chrome"];

    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for ChromiumConverter {
    fn default() -> Self {
        for candidate in Self::CANDIDATES {
            let found = Command::new(candidate)
                .arg("--version")
                .output()
                .map(|out| out.status.success())
                .unwrap_or(false);
            if found {
                return Self::new(candidate);
            }
        }
        // Fall through to the first candidate; conversion will report the
        // spawn failure if it is genuinely absent.
        Self::new(Self::CANDIDATES[0])
    }
}

impl HtmlToPdf for ChromiumConverter {
    fn convert(&self, html: &str, settings: &PdfSettings) -> Result<Vec<u8>> {
        let scratch = tempfile::tempdir()?;
        let html_path = scratch.path().join("document.html");
        let pdf_path = scratch.path().join("document.pdf");
        fs::write(&html_path, html)?;

        log::debug!(
            "converting {} bytes of HTML via '{}' ({}x{}, {})",
            html.len(),
            self.binary.display(),
            settings.viewport_width,
            settings.viewport_height,
            settings.paper_format,
        );

        let output = Command::new(&self.binary)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg(format!(
                "--window-size={},{}",
                settings.viewport_width, settings.viewport_height
            ))
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg("--no-pdf-header-footer")
            .arg(format!("file://{}", html_path.display()))
            .output()
            .map_err(|e| {
                Error::pdf_conversion(format!(
                    "failed to launch '{}': {e}",
                    self.binary.display()
                ))
            })?;

        if !output.status.success() {
            return Err(Error::pdf_conversion(format!(
                "'{}' exited with {}: {}",
                self.binary.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim(),
            )));
        }

        let bytes = fs::read(&pdf_path).map_err(|e| {
            Error::pdf_conversion(format!("browser produced no PDF output: {e}"))
        })?;
        if bytes.is_empty() {
            return Err(Error::pdf_conversion("browser produced an empty PDF"));
        }
        Ok(bytes)
    }
}

/// Exports invoices as PDF: render HTML, convert, deliver.
///
/// The sequencing is strictly ordered and single-flight; each stage consumes
/// the previous stage's output. Any stage failure is forwarded to the caller
/// unchanged, and nothing is retried.
pub struct PdfExporter<C: HtmlToPdf = ChromiumConverter> {
    converter: C,
    settings: PdfSettings,
}

impl Default for PdfExporter<ChromiumConverter> {
    fn default() -> Self {
        Self::new(ChromiumConverter::default(), PdfSettings::default())
    }
}

impl<C: HtmlToPdf> PdfExporter<C> {
    pub fn new(converter: C, settings: PdfSettings) -> Self {
        Self {
            converter,
            settings,
        }
    }

    pub fn settings(&self) -> &PdfSettings {
        &self.settings
    }

    /// Render and convert, returning the PDF bytes.
    pub fn export(&self, renderer: &Renderer, invoice: &Invoice) -> Result<Vec<u8>> {
        let html = renderer.render_html(invoice)?;
        self.converter.convert(&html, &self.settings)
    }

    /// Render, convert, and write the PDF to `path`. Returns the bytes as
    /// well. A failed write may leave a partial file behind; it is not
    /// cleaned up.
    pub fn export_to_file(
        &self,
        renderer: &Renderer,
        invoice: &Invoice,
        path: impl AsRef<Path>,
    ) -> Result<Vec<u8>> {
        let bytes = self.export(renderer, invoice)?;
        fs::write(path.as_ref(), &bytes)?;
        Ok(bytes)
    }

    /// Render, convert, and pipe the PDF into `output`. Write and flush
    /// errors are surfaced to the caller, never swallowed.
    pub fn export_to_writer(
        &self,
        renderer: &Renderer,
        invoice: &Invoice,
        output: &mut dyn Write,
    ) -> Result<()> {
        let bytes = self.export(renderer, invoice)?;
        output.write_all(&bytes)?;
        output.flush()?;
        Ok(())
    }
}
