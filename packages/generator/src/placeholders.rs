//! Placeholder extraction from document content.
//!
//! Templates mark substitution points with brace-delimited tokens like
//! `{buyer_name}`. Extraction walks the document in reading order and
//! returns every token it sees, lowercased, duplicates included - the
//! form layer presents fields in this order and tolerates repeats.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{LEGAL_DESCRIPTION, LEGAL_DESCRIPTION_SEGMENTS};
use crate::types::{Document, Paragraph, ParagraphElement};

/// Placeholder pattern: a brace, one or more non-brace characters, a
/// closing brace. Interior text is the token.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("valid regex"));

/// Concatenate the literal text of a paragraph's runs.
///
/// Non-text elements (inline objects, page breaks) contribute nothing.
/// Matches never cross run boundaries in spirit because concatenation
/// happens before scanning.
#[must_use]
pub fn paragraph_text(elements: &[ParagraphElement]) -> String {
    let mut text = String::new();
    for element in elements {
        if let Some(content) = element.text_run.as_ref().and_then(|run| run.content.as_deref()) {
            text.push_str(content);
        }
    }
    text
}

/// Scan one paragraph for placeholder tokens, in left-to-right order.
fn scan_paragraph(paragraph: &Paragraph, found: &mut Vec<String>) {
    let text = paragraph_text(&paragraph.elements).to_lowercase();
    for capture in PLACEHOLDER_PATTERN.captures_iter(&text) {
        found.push(capture[1].to_string());
    }
}

/// Extract the placeholder tokens of a document, in reading order.
///
/// Top-level paragraphs and tables are walked in document order; within a
/// table, rows then cells then the cells' nested paragraphs. The three
/// reserved legal-description segment markers are write targets, not
/// input placeholders, and are filtered out; `legal_description` itself
/// is appended once when the document doesn't spell it out, so every
/// template using the split-description mechanism presents exactly one
/// field for it.
#[must_use]
pub fn extract_placeholders(document: &Document) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    let content = document
        .body
        .as_ref()
        .map(|body| body.content.as_slice())
        .unwrap_or_default();

    for element in content {
        if let Some(paragraph) = &element.paragraph {
            scan_paragraph(paragraph, &mut found);
        }
        if let Some(table) = &element.table {
            for row in &table.table_rows {
                for cell in &row.table_cells {
                    for nested in &cell.content {
                        if let Some(paragraph) = &nested.paragraph {
                            scan_paragraph(paragraph, &mut found);
                        }
                    }
                }
            }
        }
    }

    found.retain(|token| !LEGAL_DESCRIPTION_SEGMENTS.contains(&token.as_str()));

    if !found.iter().any(|token| token == LEGAL_DESCRIPTION) {
        found.push(LEGAL_DESCRIPTION.to_string());
    }

    found
}
