//! Configuration types for document-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across threads and to diff two runs to
//! understand why their outcomes differ.
//!
//! # Design choice: builder over constructor
//! Optional parameters (trace id, callback, timeout) belong in a builder, not
//! in an ever-growing positional argument list. Callers set only what they
//! care about and rely on documented defaults for the rest.

use crate::error::Doc2PdfError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::sync::Arc;

/// Default Gotenberg base URL when neither the builder nor the environment
/// supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable consulted by [`ConversionConfig::from_env`].
pub const BASE_URL_ENV: &str = "GOTENBERG_URL";

/// Configuration for a document-to-PDF conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use doc2pdf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .base_url("http://gotenberg.internal:3000")
///     .timeout_secs(60)
///     .trace_id("job-42")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Base URL of the Gotenberg service. Default: `http://localhost:3000`.
    ///
    /// Trailing slashes are trimmed by the builder so route paths can be
    /// appended unconditionally.
    pub base_url: String,

    /// Request timeout in seconds. Default: 120.
    ///
    /// Covers the whole round trip: upload, LibreOffice/Chromium rendering
    /// inside Gotenberg, and the PDF download. Large spreadsheets and
    /// JavaScript-heavy HTML can legitimately take more than a minute.
    pub timeout_secs: u64,

    /// Opaque identifier forwarded verbatim as the `Gotenberg-Trace` header.
    ///
    /// When `None`, the header is not sent at all. Gotenberg echoes the
    /// value in its own logs, which makes cross-service request correlation
    /// a grep away.
    pub trace_id: Option<String>,

    /// Observer for conversion lifecycle events. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            trace_id: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("trace_id", &self.trace_id)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a config whose base URL comes from the `GOTENBERG_URL`
    /// environment variable, falling back to [`DEFAULT_BASE_URL`] when the
    /// variable is unset or empty.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// Builder for [`ConversionConfig`].
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn trace_id(mut self, id: impl Into<String>) -> Self {
        self.config.trace_id = Some(id.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(Arc::clone(&cb));
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Doc2PdfError> {
        let c = &self.config;
        if c.base_url.is_empty() {
            return Err(Doc2PdfError::InvalidConfig(
                "base_url must not be empty".into(),
            ));
        }
        if !c.base_url.starts_with("http://") && !c.base_url.starts_with("https://") {
            return Err(Doc2PdfError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got '{}'",
                c.base_url
            )));
        }
        if c.timeout_secs == 0 {
            return Err(Doc2PdfError::InvalidConfig(
                "timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = ConversionConfig::default();
        assert_eq!(c.base_url, "http://localhost:3000");
        assert_eq!(c.timeout_secs, 120);
        assert!(c.trace_id.is_none());
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let c = ConversionConfig::builder()
            .base_url("http://gotenberg:3000///")
            .build()
            .unwrap();
        assert_eq!(c.base_url, "http://gotenberg:3000");
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let err = ConversionConfig::builder()
            .timeout_secs(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, Doc2PdfError::InvalidConfig(_)));
    }

    #[test]
    fn builder_rejects_bare_host() {
        let err = ConversionConfig::builder()
            .base_url("gotenberg:3000")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn trace_id_is_stored() {
        let c = ConversionConfig::builder()
            .trace_id("req-7")
            .build()
            .unwrap();
        assert_eq!(c.trace_id.as_deref(), Some("req-7"));
    }

    #[test]
    fn debug_omits_callback_internals() {
        let c = ConversionConfig::default();
        let dbg = format!("{c:?}");
        assert!(dbg.contains("base_url"));
        assert!(!dbg.contains("dyn ConversionProgressCallback"));
    }
}
