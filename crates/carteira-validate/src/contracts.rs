//! Strict validation of contract import files against existing entities.
//!
//! Contract rows name their client by email and their area, service and
//! product by name. The client must exist; the catalog references are
//! optional and a name that matches nothing leaves the id empty.

use tracing::warn;

use carteira_model::{
    CatalogEntry, ContractReferences, ContratoImport, ValidationError, ValidationResult,
};

use crate::engine::{FieldCheck, FieldRule, RowSchema, RowValues, validate_rows};

/// Headers a contract file must have.
pub const CONTRACT_REQUIRED_HEADERS: &[&str] = &["email_cliente"];

/// Optional headers understood by the contract importer.
pub const CONTRACT_OPTIONAL_HEADERS: &[&str] = &[
    "area",
    "servico",
    "produto",
    "tipo_contrato",
    "valor_contrato",
    "data_inicio",
    "data_fim",
    "quem_trouxe",
];

/// Message for a contract whose client email is not registered.
pub const CLIENT_NOT_FOUND: &str = "Cliente não encontrado: cadastre o cliente primeiro";

const CONTRACT_RULES: &[FieldRule] = &[
    FieldRule::new(
        "email_cliente",
        FieldCheck::Required,
        "Email do cliente é obrigatório",
    ),
    FieldRule::new("email_cliente", FieldCheck::Email, "Email do cliente inválido"),
    FieldRule::new(
        "tipo_contrato",
        FieldCheck::ContractTag,
        "Tipo de contrato inválido: use recorrente, projeto, consultoria, exito ou hora",
    ),
    FieldRule::new(
        "data_inicio",
        FieldCheck::Date,
        "Data de início inválida: use AAAA-MM-DD",
    ),
    FieldRule::new(
        "data_fim",
        FieldCheck::Date,
        "Data de término inválida: use AAAA-MM-DD",
    ),
];

struct ContractSchema<'a> {
    references: &'a ContractReferences,
}

impl ContractSchema<'_> {
    /// Resolves an optional catalog reference. Unknown names are not an
    /// error.
    fn resolve(
        &self,
        row: &RowValues<'_>,
        field: &'static str,
        lookup: for<'r> fn(&'r ContractReferences, &str) -> Option<&'r CatalogEntry>,
    ) -> Option<String> {
        let name = row.text(field)?;
        match lookup(self.references, &name) {
            Some(entry) => Some(entry.id.clone()),
            None => {
                warn!(row = row.row, field, "reference not found, id left empty");
                None
            }
        }
    }
}

impl RowSchema for ContractSchema<'_> {
    type Row = ContratoImport;

    const NAME: &'static str = "contratos";
    const REQUIRED_HEADERS: &'static [&'static str] = CONTRACT_REQUIRED_HEADERS;
    const RULES: &'static [FieldRule] = CONTRACT_RULES;

    fn promote(
        &self,
        row: &RowValues<'_>,
        errors: &mut Vec<ValidationError>,
    ) -> Option<ContratoImport> {
        let email = row.get("email_cliente").unwrap_or_default();
        let Some(client) = self.references.client_by_email(email) else {
            errors.push(ValidationError::new(
                row.row,
                "email_cliente",
                email,
                CLIENT_NOT_FOUND,
            ));
            return None;
        };

        Some(ContratoImport {
            cliente_id: client.id.clone(),
            email_cliente: client.email.clone(),
            area_id: self.resolve(row, "area", ContractReferences::area_by_name),
            servico_id: self.resolve(row, "servico", ContractReferences::servico_by_name),
            produto_id: self.resolve(row, "produto", ContractReferences::produto_by_name),
            tipo_contrato: row
                .get("tipo_contrato")
                .and_then(|value| value.parse().ok()),
            valor_contrato: row.text("valor_contrato"),
            data_inicio: row.text("data_inicio"),
            data_fim: row.text("data_fim"),
            quem_trouxe: row.text("quem_trouxe"),
        })
    }
}

/// Validates a contract file and resolves its references.
///
/// Never fails; an unreadable file yields a single row-0 error.
/// `references` must not change during the call.
pub fn validate_contracts_csv(
    text: &str,
    references: &ContractReferences,
) -> ValidationResult<ContratoImport> {
    validate_rows(&ContractSchema { references }, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_targets_a_known_header() {
        for rule in CONTRACT_RULES {
            assert!(
                CONTRACT_REQUIRED_HEADERS.contains(&rule.field)
                    || CONTRACT_OPTIONAL_HEADERS.contains(&rule.field),
                "{}",
                rule.field
            );
        }
    }

    #[test]
    fn format_errors_come_before_lookup() {
        let result = validate_contracts_csv(
            "email_cliente\nnot-an-email\n",
            &ContractReferences::default(),
        );
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "Email do cliente inválido");
    }
}
