//! Contract generation: placeholder lookup, substitution, PDF export.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::PlaceholderCache;
use crate::config::{validate_document_id, LEGAL_DESCRIPTION, LEGAL_DESCRIPTION_SEGMENTS};
use crate::docs::DocsClient;
use crate::drive::DriveClient;
use crate::error::Result;
use crate::splitting::split_legal_description_default;
use crate::types::UpdateRequest;

/// Field values for one contract, keyed by placeholder token.
pub type FieldValues = HashMap<String, String>;

/// Get a document's placeholders, preferring the cache.
///
/// On a cache miss (or when `refresh` is set) the document is fetched,
/// extracted and the entry overwritten. The cache never expires entries
/// on its own; `refresh` is how a caller declares an entry stale.
pub fn load_or_fetch_placeholders(
    docs: &DocsClient,
    cache: &PlaceholderCache,
    document_id: &str,
    refresh: bool,
) -> Result<Vec<String>> {
    validate_document_id(document_id)?;

    if !refresh {
        if let Some(placeholders) = cache.get(document_id)? {
            tracing::debug!(document_id, "Using cached placeholders");
            return Ok(placeholders);
        }
    }

    let placeholders = docs.fetch_placeholders(document_id)?;
    cache.put(document_id, &placeholders)?;
    Ok(placeholders)
}

/// Build the replacement requests for one contract.
///
/// Placeholders are visited in extraction order; a token repeated in the
/// document gets a single request (replaceAllText already rewrites every
/// occurrence). Fields absent from `data` are written as empty strings.
/// The legal description expands into its full-text marker plus the
/// three fixed-width segment markers; markers a template doesn't contain
/// are no-ops on the API side.
#[must_use]
pub fn build_replace_requests(placeholders: &[String], data: &FieldValues) -> Vec<UpdateRequest> {
    let mut requests = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in placeholders {
        if !seen.insert(token.as_str()) {
            continue;
        }

        let value = data.get(token).cloned().unwrap_or_default();

        if token == LEGAL_DESCRIPTION {
            let segments = split_legal_description_default(&value);
            requests.push(UpdateRequest::replace_token(LEGAL_DESCRIPTION, value));
            for (marker, segment) in LEGAL_DESCRIPTION_SEGMENTS.iter().zip(segments) {
                requests.push(UpdateRequest::replace_token(marker, segment));
            }
        } else {
            requests.push(UpdateRequest::replace_token(token, value));
        }
    }

    requests
}

/// Generate one contract PDF from a template.
///
/// Copies the template, fills the copy, exports it as PDF into
/// `output_dir`, and deletes the intermediate copy. The copy is deleted
/// even when filling or export fails; a failed cleanup is logged and the
/// original error wins.
///
/// # Arguments
/// * `docs` - Docs API client
/// * `drive` - Drive API client
/// * `template_id` - Id of the template document
/// * `placeholders` - The template's extracted placeholder sequence
/// * `data` - Field values for this contract
/// * `file_name` - Output name without extension
/// * `output_dir` - Directory the PDF is written into
///
/// # Returns
/// Path of the written PDF.
pub fn generate_contract(
    docs: &DocsClient,
    drive: &DriveClient,
    template_id: &str,
    placeholders: &[String],
    data: &FieldValues,
    file_name: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    validate_document_id(template_id)?;
    fs::create_dir_all(output_dir)?;

    let copy_id = drive.copy_document(template_id, file_name)?;
    tracing::debug!(template_id, %copy_id, "Copied template");

    let result = fill_and_export(docs, drive, &copy_id, placeholders, data);

    // Cleanup runs regardless of the outcome above.
    if let Err(e) = drive.delete_file(&copy_id) {
        tracing::warn!(%copy_id, error = %e, "Failed to delete intermediate copy");
    }

    let pdf = result?;
    let output_path = output_dir.join(format!("{file_name}.pdf"));
    fs::write(&output_path, pdf)?;

    Ok(output_path)
}

/// Fill the copy and export it, returning the PDF bytes.
fn fill_and_export(
    docs: &DocsClient,
    drive: &DriveClient,
    copy_id: &str,
    placeholders: &[String],
    data: &FieldValues,
) -> Result<Vec<u8>> {
    let requests = build_replace_requests(placeholders, data);
    docs.apply_replacements(copy_id, &requests)?;
    drive.export_pdf(copy_id)
}
