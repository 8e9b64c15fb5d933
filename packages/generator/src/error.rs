//! Error types for the generator.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the generator library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Invalid Drive file id format.
    #[error("Invalid document id: '{0}'. Expected a Drive file id (letters, digits, '-' and '_')")]
    InvalidDocumentId(String),

    /// Service-account credentials missing or unreadable.
    #[error("Service account credentials unavailable: {message}")]
    Credentials { message: String },

    /// Signing the JWT assertion failed.
    #[error("Failed to sign service account assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The OAuth token endpoint rejected the assertion.
    #[error("Token exchange failed ({status}): {body}")]
    TokenExchange { status: u16, body: String },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// All retry attempts exhausted.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Failed to fetch a document from the Docs API.
    #[error("Failed to fetch document {document_id}: {source}")]
    DocumentFetch {
        document_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Document content was malformed beyond tolerance.
    #[error("Failed to parse document {document_id}: {source}")]
    DocumentParse {
        document_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to list templates in a Drive folder.
    #[error("Failed to list templates in folder {folder_id}: {source}")]
    TemplateList {
        folder_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to copy a template document.
    #[error("Failed to copy document {document_id}: {source}")]
    CopyDocument {
        document_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to apply placeholder replacements.
    #[error("Failed to update document {document_id}: {source}")]
    BatchUpdate {
        document_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to export a filled document as PDF.
    #[error("Failed to export document {document_id} as PDF: {source}")]
    ExportPdf {
        document_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to delete an intermediate document copy.
    #[error("Failed to delete document {document_id}: {source}")]
    DeleteDocument {
        document_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// Placeholder cache file unreadable or unwritable.
    #[error("Placeholder cache {} unavailable: {source}", path.display())]
    CachePersistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Placeholder cache file holds invalid JSON.
    #[error("Placeholder cache {} is not valid JSON: {source}", path.display())]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No template folder configured.
    #[error("No template folder specified: pass --folder or set TEMPLATE_FOLDER_ID")]
    MissingTemplateFolder,

    /// No field data supplied for generation.
    #[error("No field data: pass --csv <path> or --set FIELD=VALUE")]
    MissingFieldData,

    /// CSV record file unreadable or malformed.
    #[error("Failed to read CSV records: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
