//! # doc2pdf
//!
//! Convert Office and HTML documents to PDF via a [Gotenberg] service.
//!
//! ## Why this crate?
//!
//! Rendering a faithful PDF out of a docx or an HTML page means running
//! LibreOffice or a headless Chromium — neither of which belongs inside your
//! application process. Gotenberg packages both behind a stateless HTTP API;
//! this crate is the typed client side: it builds the multipart upload, maps
//! Gotenberg's status codes onto a tagged error enum, and hands back the PDF
//! bytes together with a derived `.pdf` filename.
//!
//! ## Request Overview
//!
//! ```text
//! DocumentSource (path | bytes)
//!  │
//!  ├─ 1. Load     read the file, or use the in-memory buffer as-is
//!  ├─ 2. Upload   multipart POST, field "files", optional Gotenberg-Trace
//!  ├─ 3. Status   200 → bytes; 400/503/other → tagged error with body
//!  └─ 4. Output   PdfOutput { bytes, filename with .pdf extension }
//! ```
//!
//! One call is one synchronous round trip: no retries, no shared state, no
//! coordination. Run calls on separate tasks freely.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc2pdf::{convert_office, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Base URL from GOTENBERG_URL, default http://localhost:3000
//!     let config = ConversionConfig::from_env();
//!     let pdf = convert_office("report.docx".into(), &config).await?;
//!     tokio::fs::write(&pdf.filename, &pdf.bytes).await?;
//!     eprintln!("wrote {} ({} bytes)", pdf.filename, pdf.bytes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc2pdf` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! doc2pdf = { version = "0.1", default-features = false }
//! ```
//!
//! [Gotenberg]: https://gotenberg.dev/docs/routes

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod progress;
pub mod source;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_BASE_URL};
pub use convert::{
    convert_html, convert_html_sync, convert_html_to_file, convert_office, convert_office_sync,
    convert_office_to_file, health,
};
pub use error::Doc2PdfError;
pub use output::PdfOutput;
pub use progress::{
    ConversionProgressCallback, NoopProgressCallback, ProgressCallback, PROGRESS_DONE,
    PROGRESS_FAILED, PROGRESS_STARTED,
};
pub use source::DocumentSource;
