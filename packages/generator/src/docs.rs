//! Google Docs API service: document fetching and batch updates.

use reqwest::blocking::Client;

use crate::config::{batch_update_url, document_url, DOCS_API_BASE_URL};
use crate::error::{GeneratorError, Result};
use crate::http::send_with_retry;
use crate::placeholders::extract_placeholders;
use crate::types::{BatchUpdateBody, Document, UpdateRequest};

/// Client for the Docs API.
///
/// Holds its collaborators explicitly (HTTP client, bearer token, base
/// URL) instead of reaching for ambient state; tests point `base_url` at
/// a local mock server.
pub struct DocsClient {
    http: Client,
    token: String,
    base_url: String,
}

impl DocsClient {
    /// Create a client against the production Docs API.
    #[must_use]
    pub fn new(http: Client, token: impl Into<String>) -> Self {
        Self::with_base_url(http, token, DOCS_API_BASE_URL)
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

    /// Fetch a document's structured content.
    ///
    /// # Arguments
    /// * `document_id` - Id of the document (validate first)
    ///
    /// # Returns
    /// The parsed document model. Partial structures inside the body are
    /// tolerated by the model itself; a response that isn't a document at
    /// all fails with `DocumentParse`.
    pub fn fetch_document(&self, document_id: &str) -> Result<Document> {
        let url = document_url(&self.base_url, document_id);

        let response = send_with_retry(|| self.http.get(&url).bearer_auth(&self.token))
            .map_err(|e| wrap_fetch_error(e, document_id))?;

        let body = response
            .text()
            .map_err(|source| GeneratorError::DocumentFetch {
                document_id: document_id.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| GeneratorError::DocumentParse {
            document_id: document_id.to_string(),
            source,
        })
    }

    /// Fetch a document and extract its placeholder tokens.
    pub fn fetch_placeholders(&self, document_id: &str) -> Result<Vec<String>> {
        let document = self.fetch_document(document_id)?;
        Ok(extract_placeholders(&document))
    }

    /// Apply text replacements to a document.
    ///
    /// An empty request list is a no-op; the API rejects empty batches.
    pub fn apply_replacements(&self, document_id: &str, requests: &[UpdateRequest]) -> Result<()> {
        if requests.is_empty() {
            return Ok(());
        }

        let url = batch_update_url(&self.base_url, document_id);
        let body = BatchUpdateBody {
            requests: requests.to_vec(),
        };

        send_with_retry(|| self.http.post(&url).bearer_auth(&self.token).json(&body)).map_err(
            |e| match e {
                GeneratorError::Http(source) => GeneratorError::BatchUpdate {
                    document_id: document_id.to_string(),
                    source,
                },
                other => other,
            },
        )?;

        Ok(())
    }
}

/// Wrap a transport failure into the document-fetch error kind.
fn wrap_fetch_error(e: GeneratorError, document_id: &str) -> GeneratorError {
    match e {
        GeneratorError::Http(source) => GeneratorError::DocumentFetch {
            document_id: document_id.to_string(),
            source,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    // API round-trips are covered against a mock server in tests/api_test.rs.
}
