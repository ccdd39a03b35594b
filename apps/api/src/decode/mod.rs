//! Document decoding collaborator: upload bytes in, plain text out.
//!
//! The assessment pipeline never touches binary formats; it consumes the
//! plain text this seam produces.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// File extensions accepted at the upload boundary.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".doc"];

#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    async fn decode(&self, content: Bytes, filename: &str) -> Result<String, AppError>;
}

/// Default decoder backed by `pdf-extract`. Word documents pass extension
/// validation but are decoded by an external service in deployments that
/// need them; this backend reports them as unsupported.
pub struct PdfTextDecoder;

#[async_trait]
impl DocumentDecoder for PdfTextDecoder {
    async fn decode(&self, content: Bytes, filename: &str) -> Result<String, AppError> {
        match extension(filename).as_deref() {
            Some("pdf") => {
                // pdf-extract is CPU-bound and synchronous; move it off the
                // async worker so concurrent requests keep making progress.
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&content)
                })
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("decode task failed: {e}")))?
                .map_err(|e| {
                    AppError::UnsupportedDocument(format!("Failed to extract PDF text: {e}"))
                })?;
                Ok(text)
            }
            Some("docx") | Some("doc") => Err(AppError::UnsupportedDocument(
                "Word document decoding is not available in this deployment; \
                 please upload a PDF."
                    .to_string(),
            )),
            _ => Err(AppError::UnsupportedDocument(format!(
                "No decoder available for '{filename}'"
            ))),
        }
    }
}

/// Lower-cased extension of `filename`, without the dot.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// True if the filename carries one of the accepted upload extensions.
pub fn has_allowed_extension(filename: &str) -> bool {
    match extension(filename) {
        Some(ext) => ALLOWED_EXTENSIONS.contains(&format!(".{ext}").as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension("Resume.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension("cv.tar.docx").as_deref(), Some("docx"));
    }

    #[test]
    fn test_extension_missing() {
        assert_eq!(extension("resume"), None);
        assert_eq!(extension("resume."), None);
    }

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("cv.pdf"));
        assert!(has_allowed_extension("cv.DOCX"));
        assert!(has_allowed_extension("cv.doc"));
        assert!(!has_allowed_extension("cv.txt"));
        assert!(!has_allowed_extension("cv"));
    }

    #[tokio::test]
    async fn test_word_documents_report_unsupported() {
        let decoder = PdfTextDecoder;
        let result = decoder.decode(Bytes::from_static(b"stub"), "cv.docx").await;
        assert!(matches!(result, Err(AppError::UnsupportedDocument(_))));
    }

    #[tokio::test]
    async fn test_garbage_pdf_bytes_fail_cleanly() {
        let decoder = PdfTextDecoder;
        let result = decoder
            .decode(Bytes::from_static(b"not a pdf"), "cv.pdf")
            .await;
        assert!(matches!(result, Err(AppError::UnsupportedDocument(_))));
    }
}
