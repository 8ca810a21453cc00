//! Document text extraction
//!
//! Plain text and PDF only. Word documents are rejected as unsupported.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type '{0}'. Supported: txt, pdf")]
    UnsupportedFileType(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),
}

/// Text pulled out of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub text: String,
    pub file_extension: String,
}

/// Lowercased extension of `filename`, without the dot
fn extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Extract text from a file on disk
pub fn extract_text(path: &Path) -> Result<ExtractedFile, ExtractionError> {
    if !path.is_file() {
        return Err(ExtractionError::FileNotFound(path.to_path_buf()));
    }

    let filename = path.to_string_lossy();
    // Reject before reading the whole file
    check_supported(&extension(&filename))?;

    let bytes = fs::read(path)?;
    extract_bytes(&filename, &bytes)
}

/// Extract text from uploaded bytes; the type comes from `filename`
pub fn extract_bytes(filename: &str, bytes: &[u8]) -> Result<ExtractedFile, ExtractionError> {
    let file_extension = extension(filename);
    check_supported(&file_extension)?;

    let text = match file_extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    debug!(filename, chars = text.chars().count(), "Extracted document text");

    Ok(ExtractedFile {
        text,
        file_extension,
    })
}

fn check_supported(file_extension: &str) -> Result<(), ExtractionError> {
    match file_extension {
        "txt" | "pdf" => Ok(()),
        other => Err(ExtractionError::UnsupportedFileType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extracts_plain_text_bytes() {
        let extracted = extract_bytes("contract.TXT", "Salary: 5000".as_bytes()).unwrap();
        assert_eq!(extracted.text, "Salary: 5000");
        assert_eq!(extracted.file_extension, "txt");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let extracted = extract_bytes("a.txt", &[0x61, 0xff, 0x62]).unwrap();
        assert_eq!(extracted.text, "a\u{fffd}b");
    }

    #[test]
    fn test_docx_is_unsupported() {
        let err = extract_bytes("contract.docx", b"PK").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFileType(ext) if ext == "docx"));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        assert!(matches!(
            extract_bytes("contract", b"text"),
            Err(ExtractionError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        assert!(matches!(
            extract_bytes("broken.pdf", b"not a pdf"),
            Err(ExtractionError::Pdf(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = extract_text(Path::new("/nonexistent/contract.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::FileNotFound(_)));
    }

    #[test]
    fn test_reads_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "عقد عمل").unwrap();

        let extracted = extract_text(file.path()).unwrap();
        assert_eq!(extracted.text, "عقد عمل");
    }
}
