//! Header-driven row validation shared by the client and contract importers.
//!
//! Each importer supplies a [`RowSchema`]: the headers that must be present,
//! a table of per-field rules, and a promotion step that turns a clean row
//! into its typed form. The engine does the rest:
//!
//! 1. split the text into a header and data rows (`,`, quote-aware)
//! 2. report all missing required headers as one row-0 error
//! 3. reject rows whose column count differs from the header's
//! 4. run every rule whose field is a header of the file
//! 5. promote rows without errors
//!
//! Every data row ends up either in `valid_rows` or with at least one error.

use tracing::debug;

use carteira_ingest::csv::{data_lines, split_clean};
use carteira_model::{HEADERS_FIELD, ROW_FIELD, TaxIdMode, ValidationError, ValidationResult};

use crate::domains::LIST_SEPARATOR;
use crate::error::{Result, ValidateError};
use crate::fields::{
    validate_boolean, validate_contract_tag, validate_cpf_cnpj, validate_date, validate_email,
    validate_estado, validate_nota_potencial, validate_phone, validate_porte,
    validate_tipo_contrato,
};

/// Delimiter of the strict import files.
pub const DELIMITER: char = ',';

/// The check a [`FieldRule`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// Value must be non-empty.
    Required,
    Email,
    Date,
    Boolean,
    Phone,
    /// CPF/CNPJ, with the schema's [`TaxIdMode`].
    TaxId,
    Estado,
    Porte,
    TipoContrato,
    ContractTag,
    NotaPotencial,
}

impl FieldCheck {
    pub fn passes(self, value: &str, tax_id_mode: TaxIdMode) -> bool {
        match self {
            FieldCheck::Required => !value.is_empty(),
            FieldCheck::Email => validate_email(value),
            FieldCheck::Date => validate_date(value),
            FieldCheck::Boolean => validate_boolean(value),
            FieldCheck::Phone => validate_phone(value),
            FieldCheck::TaxId => validate_cpf_cnpj(value, tax_id_mode),
            FieldCheck::Estado => validate_estado(value),
            FieldCheck::Porte => validate_porte(value),
            FieldCheck::TipoContrato => validate_tipo_contrato(value),
            FieldCheck::ContractTag => validate_contract_tag(value),
            FieldCheck::NotaPotencial => validate_nota_potencial(value),
        }
    }
}

/// One field-level rule. A field may carry several; the first failing one
/// is reported.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: FieldCheck,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, check: FieldCheck, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Values of one structurally sound data row, addressed by header name.
pub struct RowValues<'a> {
    pub row: usize,
    headers: &'a [String],
    values: Vec<String>,
}

impl RowValues<'_> {
    /// Cell under `header`, or `None` when the header is absent.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|name| name == header)
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }

    /// Non-empty cell under `header`.
    pub fn text(&self, header: &str) -> Option<String> {
        self.get(header)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// An importer's row contract.
pub trait RowSchema {
    type Row;

    /// Name used in log events.
    const NAME: &'static str;
    const REQUIRED_HEADERS: &'static [&'static str];
    const RULES: &'static [FieldRule];

    fn tax_id_mode(&self) -> TaxIdMode {
        TaxIdMode::Lenient
    }

    /// Builds the typed row from a row that passed every field rule.
    ///
    /// Returning `None` rejects the row; an error must have been pushed.
    fn promote(&self, row: &RowValues<'_>, errors: &mut Vec<ValidationError>) -> Option<Self::Row>;
}

struct Table {
    headers: Vec<String>,
    /// `(row number, raw line)`; the header is row 1.
    rows: Vec<(usize, String)>,
}

fn read_table(text: &str) -> Result<Table> {
    let lines = data_lines(text);
    let Some((_, header_line)) = lines.first() else {
        return Err(ValidateError::EmptyFile);
    };

    let headers: Vec<String> = split_clean(header_line, DELIMITER)
        .into_iter()
        .map(|header| header.to_lowercase())
        .collect();

    let rows = lines
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, (_, line))| (index + 1, (*line).to_string()))
        .collect();
    Ok(Table { headers, rows })
}

/// Validates `text` against `schema`. Never fails: problems reading the
/// table become a single file-level error.
pub fn validate_rows<S: RowSchema>(schema: &S, text: &str) -> ValidationResult<S::Row> {
    match try_validate_rows(schema, text) {
        Ok(result) => result,
        Err(error) => {
            debug!(schema = S::NAME, %error, "file rejected");
            ValidationResult::file_error(error.to_string())
        }
    }
}

fn try_validate_rows<S: RowSchema>(schema: &S, text: &str) -> Result<ValidationResult<S::Row>> {
    let table = read_table(text)?;
    let mut errors = Vec::new();

    let missing: Vec<&str> = S::REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !table.headers.iter().any(|header| header == *required))
        .collect();
    if !missing.is_empty() {
        errors.push(ValidationError::new(
            0,
            HEADERS_FIELD,
            missing.join(", "),
            format!("Cabeçalhos obrigatórios ausentes: {}", missing.join(", ")),
        ));
    }

    let tax_id_mode = schema.tax_id_mode();
    let mut valid_rows = Vec::new();
    for (row, line) in &table.rows {
        let values = split_clean(line, DELIMITER);
        if values.len() != table.headers.len() {
            errors.push(ValidationError::new(
                *row,
                ROW_FIELD,
                values.len().to_string(),
                format!(
                    "Número de colunas incorreto: esperado {}, encontrado {}",
                    table.headers.len(),
                    values.len()
                ),
            ));
            continue;
        }

        let values = RowValues {
            row: *row,
            headers: &table.headers,
            values,
        };
        let before = errors.len();
        check_fields::<S>(&values, tax_id_mode, &mut errors);
        if errors.len() > before {
            continue;
        }
        if let Some(promoted) = schema.promote(&values, &mut errors) {
            valid_rows.push(promoted);
        }
    }

    debug!(
        schema = S::NAME,
        total_rows = table.rows.len(),
        valid_rows = valid_rows.len(),
        errors = errors.len(),
        "rows validated"
    );
    Ok(ValidationResult::new(errors, valid_rows, table.rows.len()))
}

fn check_fields<S: RowSchema>(
    values: &RowValues<'_>,
    tax_id_mode: TaxIdMode,
    errors: &mut Vec<ValidationError>,
) {
    for (header, value) in values.headers.iter().zip(&values.values) {
        let failed = S::RULES
            .iter()
            .filter(|rule| rule.field == header.as_str())
            .find(|rule| !rule.check.passes(value, tax_id_mode));
        if let Some(rule) = failed {
            errors.push(ValidationError::new(
                values.row,
                rule.field,
                value.as_str(),
                rule.message,
            ));
        }
    }
}

/// Splits a multi-valued cell on `|`, trimming and dropping empty entries.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
