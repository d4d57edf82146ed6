//! Document sources: a file on disk or bytes already in memory.
//!
//! ## Why an enum?
//!
//! Callers hold documents in two shapes: a path (CLI, batch jobs walking a
//! directory) or raw bytes (documents pulled from object storage or a
//! database, where writing a temp file just to re-read it would be wasted
//! I/O). [`DocumentSource`] carries both; the bytes variant never touches
//! the filesystem. For the path variant the file is opened, read, and closed
//! inside [`DocumentSource::load`] — the handle cannot leak past it on any
//! exit path.

use crate::error::Doc2PdfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The document to convert.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Read the document from disk when the request is built.
    Path(PathBuf),
    /// Use in-memory content; `filename` exists only to name the upload and
    /// to derive the output filename.
    Bytes { filename: String, bytes: Vec<u8> },
}

impl DocumentSource {
    /// Source backed by a file on disk.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        DocumentSource::Path(path.into())
    }

    /// Source backed by an in-memory buffer.
    pub fn bytes(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        DocumentSource::Bytes {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// The caller-supplied filename (full path for [`DocumentSource::Path`]).
    pub fn filename(&self) -> String {
        match self {
            DocumentSource::Path(p) => p.to_string_lossy().into_owned(),
            DocumentSource::Bytes { filename, .. } => filename.clone(),
        }
    }

    /// The final path component, used to name the multipart upload.
    pub fn basename(&self) -> String {
        let name = self.filename();
        Path::new(&name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(name)
    }

    /// Resolve the source to raw bytes.
    ///
    /// For [`DocumentSource::Bytes`] this is a move with no disk access.
    /// For [`DocumentSource::Path`] the file is read in full; `tokio::fs`
    /// closes the handle before returning, on success and on error alike.
    pub async fn load(self) -> Result<Vec<u8>, Doc2PdfError> {
        match self {
            DocumentSource::Bytes { bytes, .. } => Ok(bytes),
            DocumentSource::Path(path) => {
                debug!("Reading document from disk: {}", path.display());
                tokio::fs::read(&path).await.map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => Doc2PdfError::FileNotFound { path },
                    std::io::ErrorKind::PermissionDenied => {
                        Doc2PdfError::PermissionDenied { path }
                    }
                    _ => Doc2PdfError::ReadFailed { path, source: e },
                })
            }
        }
    }
}

impl From<&str> for DocumentSource {
    fn from(path: &str) -> Self {
        DocumentSource::Path(PathBuf::from(path))
    }
}

impl From<&Path> for DocumentSource {
    fn from(path: &Path) -> Self {
        DocumentSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_directories() {
        let s = DocumentSource::path("/srv/uploads/q3/report.docx");
        assert_eq!(s.basename(), "report.docx");
        assert_eq!(s.filename(), "/srv/uploads/q3/report.docx");
    }

    #[test]
    fn bytes_source_keeps_given_filename() {
        let s = DocumentSource::bytes("slides.pptx", vec![1, 2, 3]);
        assert_eq!(s.basename(), "slides.pptx");
    }

    #[tokio::test]
    async fn bytes_source_loads_without_disk() {
        let s = DocumentSource::bytes("a.docx", b"content".to_vec());
        assert_eq!(s.load().await.unwrap(), b"content");
    }

    #[tokio::test]
    async fn missing_file_maps_to_file_not_found() {
        let s = DocumentSource::path("/definitely/not/here.docx");
        let err = s.load().await.unwrap_err();
        assert!(matches!(err, Doc2PdfError::FileNotFound { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn path_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.html");
        std::fs::write(&path, b"<html></html>").unwrap();

        let s = DocumentSource::path(&path);
        assert_eq!(s.load().await.unwrap(), b"<html></html>");
    }
}
