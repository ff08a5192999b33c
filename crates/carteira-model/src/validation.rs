use serde::{Deserialize, Serialize};

/// Field tag used for errors that concern the whole file.
pub const FILE_FIELD: &str = "file";
/// Field tag used for missing-header errors.
pub const HEADERS_FIELD: &str = "headers";
/// Field tag used for rows whose column count does not match the header.
pub const ROW_FIELD: &str = "row";

/// A single validation failure.
///
/// `row` is the 1-based position among the non-blank lines of the file, so
/// the header is row 1 and the first data row is 2. Row 0 marks file-level
/// problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: usize,
    pub field: String,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        row: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row,
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn file(message: impl Into<String>) -> Self {
        Self::new(0, FILE_FIELD, "", message)
    }

    pub fn is_file_level(&self) -> bool {
        self.row == 0
    }
}

/// Outcome of a strict validation pass.
///
/// `is_valid` is true exactly when `errors` is empty. Every data row either
/// produced at least one error or exactly one entry in `valid_rows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult<T> {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub valid_rows: Vec<T>,
    pub total_rows: usize,
}

impl<T> ValidationResult<T> {
    pub fn new(errors: Vec<ValidationError>, valid_rows: Vec<T>, total_rows: usize) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            valid_rows,
            total_rows,
        }
    }

    /// Result for a file that could not be read as a table at all.
    pub fn file_error(message: impl Into<String>) -> Self {
        Self::new(vec![ValidationError::file(message)], Vec::new(), 0)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of distinct data rows with at least one error.
    pub fn rejected_rows(&self) -> usize {
        let mut rows: Vec<usize> = self
            .errors
            .iter()
            .filter(|error| !error.is_file_level())
            .map(|error| error.row)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows.len()
    }
}
