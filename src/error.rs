//! Error types for the doc2pdf library.
//!
//! The taxonomy keeps business failures and transport failures apart:
//!
//! * HTTP-status variants ([`Doc2PdfError::BadRequest`],
//!   [`Doc2PdfError::ServiceUnavailable`], [`Doc2PdfError::UnexpectedStatus`])
//!   mean Gotenberg received the request and answered with a non-200 status.
//!   Each carries the response body so callers (and logs) see what the
//!   service actually said.
//!
//! * Transport variants ([`Doc2PdfError::Network`], [`Doc2PdfError::Timeout`])
//!   mean the request never completed — connection refused, DNS failure, or
//!   the configured timeout elapsed.
//!
//! * Source variants ([`Doc2PdfError::FileNotFound`],
//!   [`Doc2PdfError::PermissionDenied`], [`Doc2PdfError::ReadFailed`]) happen
//!   before any network I/O when the input file cannot be read.
//!
//! The separation lets callers decide their own handling: surface a 400 to
//! the user as-is, alert on 503, and treat transport errors as
//! infrastructure problems.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the doc2pdf library.
#[derive(Debug, Error)]
pub enum Doc2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Document not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed for another reason.
    #[error("Failed to read document '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Gotenberg HTTP errors ─────────────────────────────────────────────
    /// Gotenberg answered HTTP 400 — the uploaded document was rejected.
    #[error("Gotenberg conversion failed: Bad Request - {body}")]
    BadRequest { body: String },

    /// Gotenberg answered HTTP 503 — the service (or LibreOffice behind it)
    /// is saturated or restarting.
    #[error("Gotenberg conversion failed: Service Unavailable - {body}")]
    ServiceUnavailable { body: String },

    /// Gotenberg answered a status this client does not know how to handle.
    #[error("Gotenberg conversion failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    // ── Transport errors ──────────────────────────────────────────────────
    /// The request never completed (connection refused, DNS failure, reset).
    #[error("Failed to reach Gotenberg at '{url}' (network error): {reason}")]
    Network { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("Request to '{url}' timed out after {secs}s\nIncrease timeout_secs if the document is large.")]
    Timeout { url: String, secs: u64 },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output PDF file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Doc2PdfError {
    /// True when the request reached Gotenberg but came back with a
    /// non-200 status.
    pub fn is_http_status(&self) -> bool {
        matches!(
            self,
            Doc2PdfError::BadRequest { .. }
                | Doc2PdfError::ServiceUnavailable { .. }
                | Doc2PdfError::UnexpectedStatus { .. }
        )
    }

    /// True when the request never completed at the transport level.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Doc2PdfError::Network { .. } | Doc2PdfError::Timeout { .. }
        )
    }
}
