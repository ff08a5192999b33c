//! Configuration options for strict validation.

use serde::{Deserialize, Serialize};

/// How national tax ids (CPF/CNPJ) are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaxIdMode {
    /// Length and official check digits.
    #[default]
    Strict,
    /// Length only (11 or 14 digits).
    Lenient,
}

/// Options for the client import validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientValidationOptions {
    /// Defaults to [`TaxIdMode::Lenient`].
    pub tax_id_mode: TaxIdMode,
}

impl Default for ClientValidationOptions {
    fn default() -> Self {
        Self {
            tax_id_mode: TaxIdMode::Lenient,
        }
    }
}

impl ClientValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tax_id_mode(mut self, mode: TaxIdMode) -> Self {
        self.tax_id_mode = mode;
        self
    }
}
