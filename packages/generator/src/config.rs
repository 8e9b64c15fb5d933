//! Configuration constants and validation functions for the generator.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GeneratorError, Result};

/// Base URL for the Google Docs API.
pub const DOCS_API_BASE_URL: &str = "https://docs.googleapis.com";

/// Base URL for the Google Drive API.
pub const DRIVE_API_BASE_URL: &str = "https://www.googleapis.com";

/// OAuth scopes requested for the service-account token.
///
/// Drive access is needed for listing, copying, exporting and deleting
/// files; Docs access for reading template content and batch updates.
pub const OAUTH_SCOPES: &str =
    "https://www.googleapis.com/auth/drive https://www.googleapis.com/auth/documents";

/// HTTP timeout in seconds.
///
/// Set to 30 seconds to accommodate PDF exports of large documents.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default path of the placeholder cache file.
pub const PLACEHOLDER_FILE: &str = "placeholders.json";

/// MIME type of native Google Docs files.
pub const GOOGLE_DOC_MIME_TYPE: &str = "application/vnd.google-apps.document";

/// MIME type used when exporting a filled contract.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Logical placeholder for the free-form legal description field.
///
/// Part of the wire contract with the document templates; renaming it
/// requires coordinated template changes.
pub const LEGAL_DESCRIPTION: &str = "legal_description";

/// Physical per-segment template markers the split legal description is
/// written into. Write targets only, never input placeholders.
pub const LEGAL_DESCRIPTION_SEGMENTS: [&str; 3] = [
    "legal_description_1",
    "legal_description_2",
    "legal_description_3",
];

/// Character limits of the three legal-description segments, matching the
/// field widths in the contract templates.
pub const LEGAL_DESCRIPTION_LIMITS: [usize; 3] = [65, 91, 91];

/// Drive file id pattern: URL-safe base64-ish identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{10,128}$").expect("valid regex"));

/// Validate a Drive file identifier (document, template or folder id).
///
/// # Arguments
/// * `document_id` - The identifier to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(GeneratorError::InvalidDocumentId)` if invalid
///
/// # Examples
/// ```
/// use deedmill_generator::config::validate_document_id;
///
/// assert!(validate_document_id("1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI").is_ok());
/// assert!(validate_document_id("not a file id").is_err());
/// ```
pub fn validate_document_id(document_id: &str) -> Result<()> {
    if DOCUMENT_ID_PATTERN.is_match(document_id) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidDocumentId(document_id.to_string()))
    }
}

/// Build the Docs API URL for fetching a document.
///
/// # Panics
/// Debug builds panic if `document_id` doesn't match the expected format.
pub fn document_url(base_url: &str, document_id: &str) -> String {
    debug_assert!(
        DOCUMENT_ID_PATTERN.is_match(document_id),
        "document_id should be validated before calling document_url"
    );
    format!("{base_url}/v1/documents/{document_id}")
}

/// Build the Docs API batchUpdate URL for a document.
///
/// # Panics
/// Debug builds panic if `document_id` doesn't match the expected format.
pub fn batch_update_url(base_url: &str, document_id: &str) -> String {
    debug_assert!(
        DOCUMENT_ID_PATTERN.is_match(document_id),
        "document_id should be validated before calling batch_update_url"
    );
    format!("{base_url}/v1/documents/{document_id}:batchUpdate")
}

/// Build the Drive API file listing URL.
pub fn files_url(base_url: &str) -> String {
    format!("{base_url}/drive/v3/files")
}

/// Build the Drive API URL for one file (used for deletion).
pub fn file_url(base_url: &str, file_id: &str) -> String {
    debug_assert!(
        DOCUMENT_ID_PATTERN.is_match(file_id),
        "file_id should be validated before calling file_url"
    );
    format!("{base_url}/drive/v3/files/{file_id}")
}

/// Build the Drive API copy URL for a file.
pub fn copy_url(base_url: &str, file_id: &str) -> String {
    debug_assert!(
        DOCUMENT_ID_PATTERN.is_match(file_id),
        "file_id should be validated before calling copy_url"
    );
    format!("{base_url}/drive/v3/files/{file_id}/copy")
}

/// Build the Drive API export URL for a file.
pub fn export_url(base_url: &str, file_id: &str) -> String {
    debug_assert!(
        DOCUMENT_ID_PATTERN.is_match(file_id),
        "file_id should be validated before calling export_url"
    );
    format!("{base_url}/drive/v3/files/{file_id}/export")
}

/// Build the Drive search query matching Google Docs inside a folder.
///
/// # Examples
/// ```
/// use deedmill_generator::config::template_query;
///
/// assert_eq!(
///     template_query("folder123abc"),
///     "'folder123abc' in parents and mimeType = 'application/vnd.google-apps.document'"
/// );
/// ```
pub fn template_query(folder_id: &str) -> String {
    format!("'{folder_id}' in parents and mimeType = '{GOOGLE_DOC_MIME_TYPE}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_document_id_valid() {
        assert!(validate_document_id("1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI").is_ok());
        assert!(validate_document_id("abcdefghij").is_ok()); // Minimum length
        assert!(validate_document_id("a-b_c-d_e-f_g-h_i-j").is_ok());
    }

    #[test]
    fn test_validate_document_id_invalid() {
        assert!(validate_document_id("").is_err());
        assert!(validate_document_id("short").is_err());
        assert!(validate_document_id("has spaces in it").is_err());
        assert!(validate_document_id("slash/inside/path").is_err());
        assert!(validate_document_id(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_document_url() {
        assert_eq!(
            document_url(DOCS_API_BASE_URL, "1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI"),
            "https://docs.googleapis.com/v1/documents/1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI"
        );
    }

    #[test]
    fn test_batch_update_url() {
        assert_eq!(
            batch_update_url(DOCS_API_BASE_URL, "1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI"),
            "https://docs.googleapis.com/v1/documents/1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI:batchUpdate"
        );
    }

    #[test]
    fn test_drive_urls() {
        assert_eq!(
            files_url(DRIVE_API_BASE_URL),
            "https://www.googleapis.com/drive/v3/files"
        );
        assert_eq!(
            copy_url(DRIVE_API_BASE_URL, "template-id-1"),
            "https://www.googleapis.com/drive/v3/files/template-id-1/copy"
        );
        assert_eq!(
            export_url(DRIVE_API_BASE_URL, "template-id-1"),
            "https://www.googleapis.com/drive/v3/files/template-id-1/export"
        );
        assert_eq!(
            file_url(DRIVE_API_BASE_URL, "template-id-1"),
            "https://www.googleapis.com/drive/v3/files/template-id-1"
        );
    }

    #[test]
    fn test_reserved_names_are_stable() {
        // Wire contract with the templates; a rename here must be caught.
        assert_eq!(LEGAL_DESCRIPTION, "legal_description");
        assert_eq!(
            LEGAL_DESCRIPTION_SEGMENTS,
            [
                "legal_description_1",
                "legal_description_2",
                "legal_description_3"
            ]
        );
        assert_eq!(LEGAL_DESCRIPTION_LIMITS, [65, 91, 91]);
    }
}
