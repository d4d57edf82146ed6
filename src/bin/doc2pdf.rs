//! CLI binary for doc2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, picks the Gotenberg route from the file extension,
//! and writes the resulting PDF.

use anyhow::{bail, Context, Result};
use clap::Parser;
use doc2pdf::{
    convert_html, convert_office, health, ConversionConfig, ConversionProgressCallback,
    DocumentSource, ProgressCallback, PROGRESS_FAILED,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a spinner that relays the library's progress
/// messages while the upload and remote rendering are in flight.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_progress(&self, progress: f32, message: &str) {
        if progress <= PROGRESS_FAILED {
            // Keep the error visible above the final message.
            self.bar.println(format!("{} {}", red("✗"), message));
        } else {
            self.bar.set_message(message.to_string());
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a Word document (route picked from the extension)
  doc2pdf report.docx

  # Explicit output path
  doc2pdf slides.pptx -o deck.pdf

  # HTML via the Chromium route
  doc2pdf landing-page.html

  # Remote Gotenberg with request correlation
  doc2pdf --url http://gotenberg.internal:3000 --trace-id job-42 report.docx

  # Machine-readable summary
  doc2pdf --json report.docx > summary.json

  # Check the service is up (no conversion)
  doc2pdf --health-check report.docx

ROUTES:
  .html / .htm / .xhtml        Chromium route (/forms/chromium/convert/html)
  everything else              LibreOffice route (/forms/libreoffice/convert)
  Override with --route office|html.

ENVIRONMENT VARIABLES:
  GOTENBERG_URL      Base URL of the Gotenberg service (default http://localhost:3000)
  DOC2PDF_TIMEOUT    Request timeout in seconds (default 120)

SETUP:
  1. Run Gotenberg:   docker run --rm -p 3000:3000 gotenberg/gotenberg:8
  2. Convert:         doc2pdf report.docx
"#;

/// Convert Office and HTML documents to PDF via a Gotenberg service.
#[derive(Parser, Debug)]
#[command(
    name = "doc2pdf",
    version,
    about = "Convert Office and HTML documents to PDF via a Gotenberg service",
    long_about = "Convert Office documents (Word, Excel, PowerPoint, OpenDocument) and HTML \
pages to PDF by uploading them to a Gotenberg service. Gotenberg runs LibreOffice and \
headless Chromium behind a stateless HTTP API; this tool is the client side.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Document to convert.
    input: PathBuf,

    /// Write the PDF to this path instead of next to the input.
    #[arg(short, long, env = "DOC2PDF_OUTPUT")]
    output: Option<PathBuf>,

    /// Gotenberg base URL.
    #[arg(long, env = "GOTENBERG_URL", default_value = doc2pdf::DEFAULT_BASE_URL)]
    url: String,

    /// Conversion route: office or html. Default: by file extension.
    #[arg(long, value_enum)]
    route: Option<RouteArg>,

    /// Request timeout in seconds.
    #[arg(long, env = "DOC2PDF_TIMEOUT", default_value_t = 120)]
    timeout: u64,

    /// Trace id forwarded as the Gotenberg-Trace header.
    #[arg(long, env = "DOC2PDF_TRACE_ID")]
    trace_id: Option<String>,

    /// Print a JSON summary instead of human-readable output.
    #[arg(long, env = "DOC2PDF_JSON")]
    json: bool,

    /// Disable the spinner.
    #[arg(long, env = "DOC2PDF_NO_PROGRESS")]
    no_progress: bool,

    /// Probe the Gotenberg health endpoint and exit.
    #[arg(long)]
    health_check: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOC2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "DOC2PDF_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum RouteArg {
    Office,
    Html,
}

/// Pick the route from the file extension when not set explicitly.
fn route_for(input: &Path, explicit: Option<RouteArg>) -> RouteArg {
    if let Some(r) = explicit {
        return r;
    }
    match input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("html") | Some("htm") | Some("xhtml") => RouteArg::Html,
        _ => RouteArg::Office,
    }
}

/// JSON summary printed with --json.
#[derive(Serialize)]
struct Summary {
    input: String,
    output: String,
    bytes: usize,
    route: &'static str,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the spinner is active; the
    // spinner relays the same messages.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let spinner = if show_progress {
        Some(CliProgressCallback::new())
    } else {
        None
    };

    let mut builder = ConversionConfig::builder()
        .base_url(&cli.url)
        .timeout_secs(cli.timeout);
    if let Some(ref id) = cli.trace_id {
        builder = builder.trace_id(id);
    }
    if let Some(ref cb) = spinner {
        builder = builder.progress_callback(Arc::clone(cb) as ProgressCallback);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Health-check mode ────────────────────────────────────────────────
    if cli.health_check {
        if let Some(ref s) = spinner {
            s.finish();
        }
        match health(&config).await {
            Ok(()) => {
                if !cli.quiet {
                    eprintln!("{} Gotenberg at {} is healthy", green("✔"), config.base_url);
                }
                return Ok(());
            }
            Err(e) => bail!("Gotenberg health check failed: {e}"),
        }
    }

    // ── Run conversion ───────────────────────────────────────────────────
    let route = route_for(&cli.input, cli.route);
    let source = DocumentSource::path(&cli.input);

    let result = match route {
        RouteArg::Office => convert_office(source, &config).await,
        RouteArg::Html => convert_html(source, &config).await,
    };

    if let Some(ref s) = spinner {
        s.finish();
    }

    let pdf = result.with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&pdf.filename));

    let mut file = std::fs::File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    file.write_all(&pdf.bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if cli.json {
        let summary = Summary {
            input: cli.input.display().to_string(),
            output: output_path.display().to_string(),
            bytes: pdf.bytes.len(),
            route: match route {
                RouteArg::Office => "office",
                RouteArg::Html => "html",
            },
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        eprintln!(
            "{} {} {} ({} bytes)",
            green("✔"),
            bold("wrote"),
            output_path.display(),
            pdf.bytes.len()
        );
    }

    Ok(())
}
