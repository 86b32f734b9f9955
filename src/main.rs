//! imill – command-line invoice renderer.
//!
//! Usage:
//!   imill <invoice.json> [output] [--pdf] [--root FILE] [--row-block FILE]
//!
//! If `output` is omitted the document is written next to the input file
//! with the same stem (e.g. `march.json` → `march.html`, or `march.pdf`
//! with `--pdf`).

use std::{env, fs, path::PathBuf, process};

use invoice_mill::export::{ChromiumConverter, PdfExporter, PdfSettings};
use invoice_mill::model::Invoice;
use invoice_mill::render::Renderer;
use invoice_mill::template::{TemplateConfig, TemplateSource};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut pdf = false;
    let mut root_template: Option<PathBuf> = None;
    let mut row_template: Option<PathBuf> = None;
    let mut chromium: Option<PathBuf> = None;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pdf" | "-p" => pdf = true,
            "--root" | "-r" => match iter.next() {
                Some(v) => root_template = Some(PathBuf::from(v)),
                None => {
                    eprintln!("--root requires a file argument");
                    process::exit(1);
                }
            },
            "--row-block" | "-b" => match iter.next() {
                Some(v) => row_template = Some(PathBuf::from(v)),
                None => {
                    eprintln!("--row-block requires a file argument");
                    process::exit(1);
                }
            },
            "--chromium" | "-c" => match iter.next() {
                Some(v) => chromium = Some(PathBuf::from(v)),
                None => {
                    eprintln!("--chromium requires a binary path argument");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    input_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    let input = match input_path {
        Some(p) => p,
        None => {
            eprintln!("Error: no invoice JSON file specified.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    // Default output: same directory + same stem as input.
    let output = output_path.unwrap_or_else(|| {
        let mut o = input.clone();
        o.set_extension(if pdf { "pdf" } else { "html" });
        o
    });

    let json = match fs::read_to_string(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", input.display());
            process::exit(1);
        }
    };

    let invoice: Invoice = match serde_json::from_str(&json) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Error parsing '{}': {e}", input.display());
            process::exit(1);
        }
    };

    // Both template flags or neither; mixing built-ins with a custom
    // fragment rarely lines up.
    let config = match (root_template, row_template) {
        (Some(root), Some(row)) => TemplateConfig {
            root: TemplateSource::File(root),
            row_block: TemplateSource::File(row),
        },
        (None, None) => TemplateConfig::default(),
        _ => {
            eprintln!("Error: --root and --row-block must be given together.");
            process::exit(1);
        }
    };

    let renderer = Renderer::new(config);

    let result = if pdf {
        let converter = match chromium {
            Some(bin) => ChromiumConverter::new(bin),
            None => ChromiumConverter::default(),
        };
        let exporter = PdfExporter::new(converter, PdfSettings::default());
        exporter
            .export_to_file(&renderer, &invoice, &output)
            .map(|bytes| bytes.len())
    } else {
        renderer
            .render_html_to_file(&invoice, &output)
            .map(|html| html.len())
    };

    match result {
        Ok(len) => {
            eprintln!("Wrote '{}' ({len} bytes)", output.display());
        }
        Err(e) => {
            eprintln!("Error generating invoice: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("imill – invoice to HTML/PDF renderer (invoice-mill)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <invoice.json> [output] [--pdf] [--root FILE --row-block FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <invoice.json>  Invoice data (seller, buyer, items, currencyBalance)");
    eprintln!("  [output]        Output path (default: same stem as input, .html or .pdf)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --pdf, -p        Convert the rendered HTML to PDF (needs a Chromium binary)");
    eprintln!("  --root, -r       Root document template file (default: built-in)");
    eprintln!("  --row-block, -b  Per-line-item row template file (default: built-in)");
    eprintln!("  --chromium, -c   Path to the headless browser binary");
    eprintln!("  --help           Print this message");
}
