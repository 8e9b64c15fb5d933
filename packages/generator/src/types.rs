//! Core data types for the generator.
//!
//! The document model mirrors the subset of the Google Docs API response
//! the extractor consumes. Every level is optional or defaulted: a block
//! missing an expected key contributes no text instead of failing the
//! whole document.

use serde::{Deserialize, Serialize};

/// A Google Docs document, reduced to its body content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Body of the document. Absent for empty responses.
    pub body: Option<Body>,
}

/// Document body: an ordered sequence of block elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// One top-level block: a paragraph, a table, or something else entirely
/// (section breaks and the like), in which case both fields are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    pub paragraph: Option<Paragraph>,
    pub table: Option<Table>,
}

/// A paragraph: an ordered sequence of inline elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

/// One inline element. Only text runs carry text; inline objects,
/// page breaks and footnote references are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    pub text_run: Option<TextRun>,
}

/// A run of literal text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub content: Option<String>,
}

/// A table: rows of cells, each cell holding nested paragraph blocks.
/// Tables are not nested further in this model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

/// One table row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

/// One table cell, containing nested block elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A file as returned by the Drive listing endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

/// Response envelope of the Drive file listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Metadata sent along with a Drive copy request.
#[derive(Debug, Clone, Serialize)]
pub struct CopyMetadata {
    pub name: String,
}

/// Body of a Docs batchUpdate call.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateBody {
    pub requests: Vec<UpdateRequest>,
}

/// One update request. Only text replacement is used here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub replace_all_text: ReplaceAllTextRequest,
}

/// Replace every occurrence of a marker with the given text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAllTextRequest {
    pub contains_text: SubstringMatchCriteria,
    pub replace_text: String,
}

/// The marker to search for.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatchCriteria {
    pub text: String,
    pub match_case: bool,
}

impl UpdateRequest {
    /// Build a replacement of the brace-delimited marker for `token`.
    ///
    /// Matching is case-insensitive: extraction lowercases tokens, while
    /// live templates may capitalize them.
    #[must_use]
    pub fn replace_token(token: &str, value: impl Into<String>) -> Self {
        Self {
            replace_all_text: ReplaceAllTextRequest {
                contains_text: SubstringMatchCriteria {
                    text: format!("{{{token}}}"),
                    match_case: false,
                },
                replace_text: value.into(),
            },
        }
    }
}
