//! Text extraction from uploaded resume documents.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {message}")]
    Parse { path: String, message: String },
}

/// Turns a document on disk into plain text.
///
/// Implementations are blocking; callers run them off the async runtime.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// PDF extractor backed by `pdf-extract`. Pages are concatenated in page order
/// with whatever separators the library emits between them.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractionError::Open {
            path: path.display().to_string(),
            source,
        })?;

        // pdf-extract panics on some malformed inputs instead of returning an error.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractionError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
            Err(_) => Err(ExtractionError::Parse {
                path: path.display().to_string(),
                message: "document structure is corrupt or unsupported".to_string(),
            }),
        }
    }
}
