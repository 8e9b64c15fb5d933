//! Deedmill Generator - Fill Google Docs contract templates and export PDFs.
//!
//! This crate fills Google Docs contract templates with structured data
//! (CSV rows or single key=value sets), exports each filled document to
//! PDF, and deletes the intermediate Drive copy.
//!
//! # Example
//!
//! ```
//! use deedmill_generator::config;
//! use deedmill_generator::splitting::split_legal_description;
//!
//! // Validate a template id
//! assert!(config::validate_document_id("1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI").is_ok());
//!
//! // Pack a legal description into the template's three fixed-width fields
//! let parts = split_legal_description("Lot 4 Block 2", &config::LEGAL_DESCRIPTION_LIMITS);
//! assert_eq!(parts, vec!["Lot 4 Block 2", "", ""]);
//! ```
//!
//! # Architecture
//!
//! The generator is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Document model and API request/response bodies
//! - [`error`]: Error types and Result alias
//! - [`http`]: Shared HTTP client with retry
//! - [`auth`]: Service-account token exchange
//! - [`placeholders`]: Placeholder extraction from document content
//! - [`splitting`]: Legal-description splitting across template fields
//! - [`cache`]: File-backed placeholder cache
//! - [`docs`]: Google Docs API service
//! - [`drive`]: Google Drive API service
//! - [`generator`]: Contract generation orchestration
//! - [`records`]: CSV record loading
//! - [`cli`]: Command-line interface

pub mod auth;
pub mod cache;
pub mod cli;
pub mod config;
pub mod docs;
pub mod drive;
pub mod error;
pub mod generator;
pub mod http;
pub mod placeholders;
pub mod records;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use generator::{build_replace_requests, generate_contract, load_or_fetch_placeholders};

// Re-export commonly used items
pub use cache::PlaceholderCache;
pub use config::validate_document_id;
pub use error::{GeneratorError, Result};
pub use placeholders::{extract_placeholders, paragraph_text};
pub use splitting::split_legal_description;
pub use types::Document;
