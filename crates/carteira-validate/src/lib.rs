//! Strict validation for Carteira imports.
//!
//! Unlike the best-effort parsers in `carteira-ingest`, nothing here is
//! dropped silently: every data row is either promoted to a typed record
//! or reported with at least one [`ValidationError`], and the whole file is
//! checked before anything is returned.
//!
//! # Example
//!
//! ```ignore
//! use carteira_validate::{validate_clients_csv, write_error_report};
//!
//! let result = validate_clients_csv("nome_cliente,estado\n\"Acme Ltda\",\"XX\"\n");
//! assert!(!result.is_valid);
//! write_error_report(&result.errors, std::io::stdout())?;
//! ```
//!
//! [`ValidationError`]: carteira_model::ValidationError

mod clients;
mod contracts;
pub mod domains;
mod engine;
mod error;
pub mod fields;
mod report;

pub use clients::{
    CLIENT_OPTIONAL_HEADERS, CLIENT_REQUIRED_HEADERS, validate_clients_csv,
    validate_clients_csv_with,
};
pub use contracts::{
    CLIENT_NOT_FOUND, CONTRACT_OPTIONAL_HEADERS, CONTRACT_REQUIRED_HEADERS,
    validate_contracts_csv,
};
pub use engine::{DELIMITER, FieldCheck, FieldRule};
pub use error::{Result, ValidateError};
pub use fields::{
    validate_boolean, validate_contract_tag, validate_cpf_cnpj, validate_date, validate_email,
    validate_estado, validate_nota_potencial, validate_phone, validate_porte,
    validate_tipo_contrato,
};
pub use report::{REPORT_HEADERS, write_error_report};
