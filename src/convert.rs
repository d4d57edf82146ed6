//! Conversion entry points: one multipart upload per call, PDF bytes back.
//!
//! ## Route selection
//!
//! Gotenberg exposes one route per rendering engine. Office formats (docx,
//! xlsx, pptx, odt, …) go through LibreOffice; HTML goes through headless
//! Chromium. The two public functions differ only in the route path and the
//! upload name, so both delegate to one internal request helper.
//!
//! Reference: <https://gotenberg.dev/docs/routes>
//!
//! ## No retries
//!
//! A failed conversion surfaces immediately as a [`Doc2PdfError`]. Retry
//! policy belongs to the caller, who knows whether the document came from an
//! interactive user (fail fast) or a batch queue (requeue later).

use crate::config::ConversionConfig;
use crate::error::Doc2PdfError;
use crate::output::{pdf_filename, PdfOutput};
use crate::progress::{PROGRESS_DONE, PROGRESS_FAILED, PROGRESS_STARTED};
use crate::source::DocumentSource;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

/// Header Gotenberg echoes into its own logs for request correlation.
const TRACE_HEADER: &str = "Gotenberg-Trace";

/// Multipart field name Gotenberg reads uploads from.
const FILES_FIELD: &str = "files";

/// Which Gotenberg rendering engine handles the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// LibreOffice route for Office formats.
    Office,
    /// Chromium route for HTML; the upload must be named `index.html`.
    Html,
}

impl Route {
    fn path(self) -> &'static str {
        match self {
            Route::Office => "/forms/libreoffice/convert",
            Route::Html => "/forms/chromium/convert/html",
        }
    }

    fn upload_name(self, source: &DocumentSource) -> String {
        match self {
            Route::Office => source.basename(),
            // Chromium treats the upload as a page root and only renders
            // a file named index.html.
            Route::Html => "index.html".to_string(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Route::Office => "Office document",
            Route::Html => "HTML document",
        }
    }
}

/// Convert an Office document (Word, Excel, PowerPoint, OpenDocument) to PDF
/// via the Gotenberg LibreOffice route.
///
/// # Arguments
/// * `source` — file path or in-memory bytes; paths convert implicitly
///   (`"report.docx".into()` / `DocumentSource::bytes(..)`)
/// * `config` — service URL, timeout, trace id, progress callback
///
/// # Returns
/// The PDF bytes exactly as returned by Gotenberg, plus the input filename
/// with its extension swapped to `.pdf`.
///
/// # Errors
/// * [`Doc2PdfError::BadRequest`] / [`Doc2PdfError::ServiceUnavailable`] /
///   [`Doc2PdfError::UnexpectedStatus`] — Gotenberg answered non-200; the
///   variant carries the response body
/// * [`Doc2PdfError::Network`] / [`Doc2PdfError::Timeout`] — the request
///   never completed
/// * [`Doc2PdfError::FileNotFound`] and friends — the source file could not
///   be read
///
/// # Example
/// ```rust,no_run
/// use doc2pdf::{convert_office, ConversionConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConversionConfig::default();
/// let pdf = convert_office("report.docx".into(), &config).await?;
/// tokio::fs::write(&pdf.filename, &pdf.bytes).await?;
/// # Ok(())
/// # }
/// ```
pub async fn convert_office(
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<PdfOutput, Doc2PdfError> {
    convert_route(Route::Office, source, config).await
}

/// Convert an HTML document to PDF via the Gotenberg Chromium route.
///
/// The upload is always named `index.html` — the Chromium route renders
/// exactly that file — regardless of the source filename. The derived output
/// filename still follows the source name (`page.html` → `page.pdf`).
///
/// Arguments, return value, and errors match [`convert_office`].
pub async fn convert_html(
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<PdfOutput, Doc2PdfError> {
    convert_route(Route::Html, source, config).await
}

/// Convert an Office document and write the PDF next to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
/// Returns the number of bytes written.
pub async fn convert_office_to_file(
    source: DocumentSource,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<u64, Doc2PdfError> {
    let output = convert_office(source, config).await?;
    write_atomic(output_path.as_ref(), &output.bytes).await?;
    Ok(output.bytes.len() as u64)
}

/// Convert an HTML document and write the PDF to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
/// Returns the number of bytes written.
pub async fn convert_html_to_file(
    source: DocumentSource,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<u64, Doc2PdfError> {
    let output = convert_html(source, config).await?;
    write_atomic(output_path.as_ref(), &output.bytes).await?;
    Ok(output.bytes.len() as u64)
}

/// Synchronous wrapper around [`convert_office`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_office_sync(
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<PdfOutput, Doc2PdfError> {
    blocking_runtime()?.block_on(convert_office(source, config))
}

/// Synchronous wrapper around [`convert_html`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_html_sync(
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<PdfOutput, Doc2PdfError> {
    blocking_runtime()?.block_on(convert_html(source, config))
}

/// Probe the Gotenberg health endpoint.
///
/// Does not upload anything; useful at startup to fail fast on a
/// misconfigured URL before accepting conversion work.
pub async fn health(config: &ConversionConfig) -> Result<(), Doc2PdfError> {
    let url = format!("{}/health", config.base_url);
    let client = http_client(config)?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| transport_error(&url, config, e))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), body))
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// The shared request path for both routes.
async fn convert_route(
    route: Route,
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<PdfOutput, Doc2PdfError> {
    report(
        config,
        PROGRESS_STARTED,
        &format!("Converting {} to PDF...", route.label()),
    );

    match try_convert(route, source, config).await {
        Ok(output) => {
            report(
                config,
                PROGRESS_DONE,
                &format!("{} converted to PDF successfully", route.label()),
            );
            Ok(output)
        }
        Err(e) => {
            let msg = e.to_string();
            error!("{msg}");
            report(config, PROGRESS_FAILED, &msg);
            Err(e)
        }
    }
}

async fn try_convert(
    route: Route,
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<PdfOutput, Doc2PdfError> {
    let url = format!("{}{}", config.base_url, route.path());
    let input_filename = source.filename();
    let upload_name = route.upload_name(&source);

    info!(
        "Converting {} to PDF via Gotenberg: {}",
        route.label(),
        input_filename
    );

    // Bytes sources never touch the disk; path sources are read in full
    // here, and the handle is closed before the request is built.
    let bytes = source.load().await?;

    let form = Form::new().part(FILES_FIELD, Part::bytes(bytes).file_name(upload_name));

    let client = http_client(config)?;
    let mut request = client.post(&url).multipart(form);
    if let Some(ref trace_id) = config.trace_id {
        request = request.header(TRACE_HEADER, trace_id);
    }

    let response = request
        .send()
        .await
        .map_err(|e| transport_error(&url, config, e))?;

    let status = response.status();
    if status.as_u16() == 200 {
        let pdf_bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, config, e))?
            .to_vec();
        let filename = pdf_filename(&input_filename);
        info!(
            "Successfully converted {} to PDF ({} bytes)",
            input_filename,
            pdf_bytes.len()
        );
        return Ok(PdfOutput {
            bytes: pdf_bytes,
            filename,
        });
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), body))
}

/// Map a non-200 status to its tagged error variant.
fn status_error(status: u16, body: String) -> Doc2PdfError {
    match status {
        400 => Doc2PdfError::BadRequest { body },
        503 => Doc2PdfError::ServiceUnavailable { body },
        _ => Doc2PdfError::UnexpectedStatus { status, body },
    }
}

/// Map a reqwest transport failure, splitting timeouts out.
fn transport_error(url: &str, config: &ConversionConfig, e: reqwest::Error) -> Doc2PdfError {
    if e.is_timeout() {
        Doc2PdfError::Timeout {
            url: url.to_string(),
            secs: config.timeout_secs,
        }
    } else {
        Doc2PdfError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

fn http_client(config: &ConversionConfig) -> Result<reqwest::Client, Doc2PdfError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| Doc2PdfError::Internal(format!("HTTP client: {e}")))
}

fn report(config: &ConversionConfig, progress: f32, message: &str) {
    if let Some(ref cb) = config.progress_callback {
        cb.on_progress(progress, message);
    }
}

/// Atomic write: write to temp, then rename.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Doc2PdfError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Doc2PdfError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("pdf.tmp");
    tokio::fs::write(&tmp_path, bytes)
        .await
        .map_err(|e| Doc2PdfError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Doc2PdfError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
}

fn blocking_runtime() -> Result<tokio::runtime::Runtime, Doc2PdfError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Doc2PdfError::Internal(format!("Failed to create tokio runtime: {e}")))
}
