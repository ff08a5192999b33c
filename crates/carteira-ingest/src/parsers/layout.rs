//! Positional layout engine shared by all schema parsers.
//!
//! A layout is pure configuration: delimiter, how many leading lines to skip,
//! which column index feeds which record field, and the rule deciding whether
//! a parsed row is kept. Column indices are part of the exported file
//! formats and must not be renumbered.

use sha2::Digest;
use tracing::{debug, trace};

use carteira_model::{ImportedRecord, RecordId, SchemaTag};

use crate::csv::{clean_field, data_lines, split_line};

/// A record type that can be filled from a positional layout.
pub trait LayoutRecord: Default {
    fn set_id(&mut self, id: RecordId);
    fn into_imported(self) -> ImportedRecord;
}

/// Maps one column index onto one record field.
pub struct ColumnSpec<T> {
    pub index: usize,
    pub field: &'static str,
    /// Stores a non-empty, cleaned cell value.
    pub assign: fn(&mut T, String),
}

/// Fixed positional description of one CSV schema.
pub struct Layout<T: 'static> {
    pub schema: SchemaTag,
    pub delimiter: char,
    /// Non-blank lines dropped before the first data row.
    pub skip_lines: usize,
    /// Rows with fewer values are dropped.
    pub min_columns: usize,
    pub columns: &'static [ColumnSpec<T>],
    pub keep: fn(&T) -> bool,
}

/// Column table of a layout, without the record type.
#[derive(Debug, Clone)]
pub struct LayoutInfo {
    pub schema: SchemaTag,
    pub delimiter: char,
    pub skip_lines: usize,
    pub min_columns: usize,
    pub columns: Vec<(usize, &'static str)>,
}

impl<T: LayoutRecord> Layout<T> {
    /// Parses `text`, silently dropping rows that are too short or fail the
    /// keep rule.
    pub fn parse(&self, text: &str) -> Vec<T> {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (line_number, line) in data_lines(text).into_iter().skip(self.skip_lines) {
            match self.parse_line(line_number, line) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    trace!(schema = %self.schema, line_number, "row dropped");
                }
            }
        }

        debug!(
            schema = %self.schema,
            kept = records.len(),
            dropped,
            "positional parse finished"
        );
        records
    }

    fn parse_line(&self, line_number: usize, line: &str) -> Option<T> {
        let values = split_line(line, self.delimiter);
        if values.len() < self.min_columns {
            return None;
        }

        let mut record = T::default();
        for column in self.columns {
            let Some(raw) = values.get(column.index) else {
                continue;
            };
            let value = clean_field(raw);
            if !value.is_empty() {
                (column.assign)(&mut record, value);
            }
        }

        if !(self.keep)(&record) {
            return None;
        }
        record.set_id(derive_record_id(self.schema, line_number, line));
        Some(record)
    }

    pub fn info(&self) -> LayoutInfo {
        LayoutInfo {
            schema: self.schema,
            delimiter: self.delimiter,
            skip_lines: self.skip_lines,
            min_columns: self.min_columns,
            columns: self
                .columns
                .iter()
                .map(|column| (column.index, column.field))
                .collect(),
        }
    }
}

/// Deterministic record id: sha256("<schema>\0<line_number>\0<line>"), first
/// 16 bytes.
pub fn derive_record_id(schema: SchemaTag, line_number: usize, line: &str) -> RecordId {
    let mut hasher = sha2::Sha256::new();
    hasher.update(schema.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(line_number.to_string().as_bytes());
    hasher.update([0u8]);
    hasher.update(line.as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    RecordId::from_first_16_bytes_of_sha256(digest)
}

/// Builds a [`ColumnSpec`] that stores the cell into an `Option<String>`
/// field of the same name.
macro_rules! column {
    ($record:ty, $index:expr, $field:ident) => {
        $crate::parsers::layout::ColumnSpec {
            index: $index,
            field: stringify!($field),
            assign: |record: &mut $record, value: String| record.$field = Some(value),
        }
    };
}

pub(crate) use column;
