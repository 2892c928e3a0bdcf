mod detect;
mod extract;

pub use detect::{is_pdf, sniff_mime, FALLBACK_MIME, SNIFF_LEN};
pub use extract::extract_text;

use crate::error::{DocqaError, Result};
use std::fs;
use std::path::Path;

/// File extensions accepted for upload.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "md", "pdf"];

/// A loaded document and the plain text extracted from it.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub mime: String,
    pub text: String,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(DocqaError::Extraction(format!(
                "unsupported file type '{}' (expected one of: {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| DocqaError::Extraction(format!("{}: {}", path.display(), e)))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Self::from_bytes(name, &bytes)
    }

    /// Build a document from raw bytes, choosing the extraction path from
    /// the sniffed content type rather than the file name.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        let mime = sniff_mime(bytes);
        let text = extract_text(bytes, mime)?;

        if text.trim().is_empty() {
            return Err(DocqaError::Extraction(format!(
                "no text could be extracted from {}",
                name
            )));
        }

        Ok(Self {
            name,
            mime: mime.to_string(),
            text,
        })
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Text placed in the system instruction so the document stays in the
    /// pinned message for the whole conversation.
    pub fn prompt_context(&self) -> String {
        format!("Here's an article: {}", self.text)
    }
}
