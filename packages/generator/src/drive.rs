//! Google Drive API service: template listing, copying, export, cleanup.

use reqwest::blocking::Client;

use crate::config::{
    copy_url, export_url, file_url, files_url, template_query, DRIVE_API_BASE_URL, PDF_MIME_TYPE,
};
use crate::error::{GeneratorError, Result};
use crate::http::send_with_retry;
use crate::types::{CopyMetadata, DriveFile, FileList};

/// Client for the Drive API.
pub struct DriveClient {
    http: Client,
    token: String,
    base_url: String,
}

impl DriveClient {
    /// Create a client against the production Drive API.
    #[must_use]
    pub fn new(http: Client, token: impl Into<String>) -> Self {
        Self::with_base_url(http, token, DRIVE_API_BASE_URL)
    }

    /// Create a client against an alternative endpoint.
    #[must_use]
    pub fn with_base_url(http: Client, token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    /// List the Google Docs templates inside a folder.
    pub fn list_templates(&self, folder_id: &str) -> Result<Vec<DriveFile>> {
        let url = files_url(&self.base_url);
        let query = template_query(folder_id);

        let response = send_with_retry(|| {
            self.http
                .get(&url)
                .bearer_auth(&self.token)
                .query(&[("q", query.as_str()), ("fields", "files(id, name)")])
        })
        .map_err(|e| wrap_drive_error(e, folder_id, DriveOperation::TemplateList))?;

        let listing: FileList = response
            .json()
            .map_err(|source| GeneratorError::TemplateList {
                folder_id: folder_id.to_string(),
                source,
            })?;

        Ok(listing.files)
    }

    /// Copy a template, returning the new file's id.
    pub fn copy_document(&self, template_id: &str, name: &str) -> Result<String> {
        let url = copy_url(&self.base_url, template_id);
        let metadata = CopyMetadata {
            name: name.to_string(),
        };

        let response =
            send_with_retry(|| self.http.post(&url).bearer_auth(&self.token).json(&metadata))
                .map_err(|e| wrap_drive_error(e, template_id, DriveOperation::Copy))?;

        let copy: DriveFile = response
            .json()
            .map_err(|source| GeneratorError::CopyDocument {
                document_id: template_id.to_string(),
                source,
            })?;

        Ok(copy.id)
    }

    /// Export a document as PDF bytes.
    pub fn export_pdf(&self, document_id: &str) -> Result<Vec<u8>> {
        let url = export_url(&self.base_url, document_id);

        let response = send_with_retry(|| {
            self.http
                .get(&url)
                .bearer_auth(&self.token)
                .query(&[("mimeType", PDF_MIME_TYPE)])
        })
        .map_err(|e| wrap_drive_error(e, document_id, DriveOperation::Export))?;

        let bytes = response.bytes().map_err(|source| GeneratorError::ExportPdf {
            document_id: document_id.to_string(),
            source,
        })?;

        Ok(bytes.to_vec())
    }

    /// Delete a file (the filled intermediate copy).
    pub fn delete_file(&self, document_id: &str) -> Result<()> {
        let url = file_url(&self.base_url, document_id);

        send_with_retry(|| self.http.delete(&url).bearer_auth(&self.token))
            .map_err(|e| wrap_drive_error(e, document_id, DriveOperation::Delete))?;

        Ok(())
    }
}

/// Which Drive call failed, for error wrapping.
enum DriveOperation {
    TemplateList,
    Copy,
    Export,
    Delete,
}

/// Wrap a transport failure into the operation's error kind.
fn wrap_drive_error(e: GeneratorError, id: &str, operation: DriveOperation) -> GeneratorError {
    let GeneratorError::Http(source) = e else {
        return e;
    };
    match operation {
        DriveOperation::TemplateList => GeneratorError::TemplateList {
            folder_id: id.to_string(),
            source,
        },
        DriveOperation::Copy => GeneratorError::CopyDocument {
            document_id: id.to_string(),
            source,
        },
        DriveOperation::Export => GeneratorError::ExportPdf {
            document_id: id.to_string(),
            source,
        },
        DriveOperation::Delete => GeneratorError::DeleteDocument {
            document_id: id.to_string(),
            source,
        },
    }
}
