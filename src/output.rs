//! Conversion output: the PDF bytes and their derived filename.

use serde::Serialize;
use std::path::Path;

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct PdfOutput {
    /// The PDF document exactly as Gotenberg returned it.
    #[serde(skip)]
    pub bytes: Vec<u8>,

    /// The input filename with its extension swapped to `.pdf`.
    ///
    /// The directory prefix of a path source is preserved, so
    /// `/srv/in/report.docx` yields `/srv/in/report.pdf`.
    pub filename: String,
}

impl PdfOutput {
    /// Byte length of the PDF.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when Gotenberg returned an empty body (never expected on 200,
    /// but callers writing files may want to check).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Derive the output filename: swap the extension for `.pdf`, appending it
/// when the input has no extension.
pub fn pdf_filename(input: &str) -> String {
    Path::new(input)
        .with_extension("pdf")
        .to_string_lossy()
        .into_owned()
}
