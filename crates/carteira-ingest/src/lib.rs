//! CSV ingestion for Carteira imports.
//!
//! This crate turns raw CSV text into typed records on a best-effort basis.
//!
//! # Features
//!
//! - **Line splitting**: quote-aware splitting shared with the validators
//! - **Format detection**: ordered header rules mapping a file to a [`SchemaTag`]
//! - **Schema parsers**: positional column tables per schema
//! - **Dispatch**: detect, parse, and fall back to the "ativos" layout
//! - **Source loading**: size limit and UTF-8/Windows-1252 decoding
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use carteira_ingest::{parse_any, read_source};
//!
//! let text = read_source(Path::new("exports/clientes.csv"))?;
//! let imported = parse_any(&text);
//! if imported.total_imported == 0 {
//!     // nothing usable in this file
//! }
//! ```
//!
//! [`SchemaTag`]: carteira_model::SchemaTag

pub mod csv;
pub mod detect;
mod dispatch;
mod error;
pub mod parsers;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Detection & Dispatch ===
pub use detect::{DETECTION_RULES, DetectionRule, detect, normalize_header};
pub use dispatch::{header_fields, parse_any};

// === Schema Parsers ===
pub use parsers::{
    LayoutInfo, layouts, parse_ativos, parse_checklist, parse_clientes, parse_kanban,
    parse_portfolio, parse_schema,
};

// === Source Loading ===
pub use source::{MAX_SOURCE_FILE_SIZE, decode_source, read_source, read_source_with_limit};
