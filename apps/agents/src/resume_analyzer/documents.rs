//! Resume documents: base64 PDF bodies, PDF text extraction and Google Drive share links.

use std::sync::LazyLock;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};

use crate::errors::AppError;

pub const DRIVE_BASE_URL: &str = "https://drive.google.com";

static DRIVE_FILE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"drive\.google\.com/file/d/([a-zA-Z0-9_-]+)").expect("drive pattern is valid")
});

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid base64 encoded PDF data")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("No text could be extracted from the PDF")]
    NoText,

    #[error("Invalid Google Drive file URL")]
    InvalidDriveUrl,

    #[error("Drive download failed: {status} - {message}")]
    Download { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<DocumentError> for AppError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::InvalidBase64(_) | DocumentError::InvalidDriveUrl => {
                AppError::Validation(e.to_string())
            }
            DocumentError::Pdf(_) | DocumentError::NoText => {
                AppError::UnprocessableEntity(e.to_string())
            }
            DocumentError::Download { .. } | DocumentError::Http(_) => {
                AppError::Upstream(e.to_string())
            }
            DocumentError::Join(_) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

pub fn decode_base64_pdf(encoded: &str) -> Result<Vec<u8>, DocumentError> {
    Ok(STANDARD.decode(encoded.trim())?)
}

/// Extracts the text layer of a PDF. Blank output is an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(DocumentError::NoText);
    }
    Ok(text)
}

/// Runs [`extract_pdf_text`] on the blocking pool.
pub async fn extract_pdf_text_blocking(bytes: Vec<u8>) -> Result<String, DocumentError> {
    tokio::task::spawn_blocking(move || extract_pdf_text(&bytes)).await?
}

/// The file id of the first `drive.google.com/file/d/<id>` link in `text`.
pub fn drive_file_id(text: &str) -> Option<&str> {
    DRIVE_FILE_ID
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[derive(Clone)]
pub struct DriveFetcher {
    client: Client,
    base_url: String,
}

impl DriveFetcher {
    pub fn new(base_url: &str) -> Result<Self, DocumentError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Downloads the publicly shared PDF linked in `text` and extracts its text.
    pub async fn fetch_pdf_text(&self, text: &str) -> Result<String, DocumentError> {
        let file_id = drive_file_id(text).ok_or(DocumentError::InvalidDriveUrl)?;
        info!("Downloading Google Drive file {file_id}");

        let response = self
            .client
            .get(format!("{}/uc", self.base_url))
            .query(&[("export", "download"), ("id", file_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Drive download failed: {status} - {message}");
            return Err(DocumentError::Download {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        extract_pdf_text_blocking(bytes.to_vec()).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Builds a one-page PDF showing `text` in Helvetica, with a correct xref table.
    pub fn sample_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }

        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sample_pdf;
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_drive_file_id_from_share_link() {
        let text = "My resume: https://drive.google.com/file/d/1AbC-d_9/view?usp=sharing thanks";
        assert_eq!(drive_file_id(text), Some("1AbC-d_9"));
        assert_eq!(drive_file_id("https://example.com/file/d/123"), None);
    }

    #[test]
    fn test_decode_base64() {
        assert_eq!(decode_base64_pdf(" JVBERi0= ").unwrap(), b"%PDF-");
        assert!(matches!(
            decode_base64_pdf("not base64!"),
            Err(DocumentError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_extracts_text_from_pdf() {
        let text = extract_pdf_text(&sample_pdf("Jane Doe Rust Engineer")).unwrap();
        assert!(text.contains("Jane Doe Rust Engineer"));
    }

    #[test]
    fn test_garbage_bytes_are_not_a_pdf() {
        assert!(extract_pdf_text(b"definitely not a pdf").is_err());
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            AppError::from(DocumentError::NoText),
            AppError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            AppError::from(DocumentError::InvalidDriveUrl),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(DocumentError::Download {
                status: 404,
                message: String::new()
            }),
            AppError::Upstream(_)
        ));
    }

    #[tokio::test]
    async fn test_fetch_rejects_link_without_file_id() {
        let fetcher = DriveFetcher::new("http://127.0.0.1:9").unwrap();
        let err = fetcher
            .fetch_pdf_text("https://drive.google.com/drive/folders/abc")
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidDriveUrl));
    }

    #[tokio::test]
    async fn test_fetch_reports_download_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uc"))
            .and(query_param("export", "download"))
            .and(query_param("id", "FILE123"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = DriveFetcher::new(&server.uri()).unwrap();
        let err = fetcher
            .fetch_pdf_text("https://drive.google.com/file/d/FILE123/view")
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Download { status: 403, .. }));
    }
}
