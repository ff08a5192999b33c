//! Strict validation of client import files.

use carteira_model::{
    ClientValidationOptions, ClienteCsvTemplate, TaxIdMode, ValidationError, ValidationResult,
};

use crate::engine::{FieldCheck, FieldRule, RowSchema, RowValues, split_list, validate_rows};

/// Headers a client file must have.
pub const CLIENT_REQUIRED_HEADERS: &[&str] = &["nome_cliente"];

/// Optional headers understood by the client importer. Other columns are
/// ignored.
pub const CLIENT_OPTIONAL_HEADERS: &[&str] = &[
    "contato_principal",
    "grupo_economico",
    "cpf_cnpj",
    "segmento_economico",
    "cidade",
    "estado",
    "pais",
    "relacionamento_exterior",
    "porte_empresa",
    "whatsapp",
    "email",
    "area",
    "servico_prestado",
    "produtos_vendidos",
    "potencial",
    "nota_potencial",
    "data_inicio",
    "tipo_contrato",
    "ocupacao_cliente",
];

const CLIENT_RULES: &[FieldRule] = &[
    FieldRule::new(
        "nome_cliente",
        FieldCheck::Required,
        "Nome do cliente é obrigatório",
    ),
    FieldRule::new("email", FieldCheck::Email, "Email inválido"),
    FieldRule::new("cpf_cnpj", FieldCheck::TaxId, "CPF/CNPJ inválido"),
    FieldRule::new(
        "estado",
        FieldCheck::Estado,
        "Estado inválido: use a sigla da UF (ex.: SP)",
    ),
    FieldRule::new(
        "porte_empresa",
        FieldCheck::Porte,
        "Porte da empresa inválido: use MEI, Micro, Pequena, Média, Grande ou Multinacional",
    ),
    FieldRule::new(
        "whatsapp",
        FieldCheck::Phone,
        "WhatsApp inválido: use o formato (11) 91234-5678",
    ),
    FieldRule::new(
        "relacionamento_exterior",
        FieldCheck::Boolean,
        "Relacionamento exterior deve ser true ou false",
    ),
    FieldRule::new(
        "data_inicio",
        FieldCheck::Date,
        "Data de início inválida: use AAAA-MM-DD",
    ),
    FieldRule::new(
        "tipo_contrato",
        FieldCheck::TipoContrato,
        "Tipo de contrato inválido",
    ),
    FieldRule::new(
        "nota_potencial",
        FieldCheck::NotaPotencial,
        "Nota de potencial deve ser um número inteiro entre 1 e 10",
    ),
];

struct ClientSchema {
    options: ClientValidationOptions,
}

impl RowSchema for ClientSchema {
    type Row = ClienteCsvTemplate;

    const NAME: &'static str = "clientes";
    const REQUIRED_HEADERS: &'static [&'static str] = CLIENT_REQUIRED_HEADERS;
    const RULES: &'static [FieldRule] = CLIENT_RULES;

    fn tax_id_mode(&self) -> TaxIdMode {
        self.options.tax_id_mode
    }

    fn promote(
        &self,
        row: &RowValues<'_>,
        _errors: &mut Vec<ValidationError>,
    ) -> Option<ClienteCsvTemplate> {
        Some(ClienteCsvTemplate {
            nome_cliente: row.text("nome_cliente").unwrap_or_default(),
            contato_principal: row.text("contato_principal"),
            grupo_economico: row.text("grupo_economico"),
            cpf_cnpj: row.text("cpf_cnpj"),
            segmento_economico: row.text("segmento_economico"),
            cidade: row.text("cidade"),
            estado: row.text("estado").map(|uf| uf.to_uppercase()),
            pais: row.text("pais"),
            relacionamento_exterior: row
                .get("relacionamento_exterior")
                .is_some_and(|value| value.eq_ignore_ascii_case("true")),
            porte_empresa: row.text("porte_empresa"),
            whatsapp: row.text("whatsapp"),
            email: row.text("email"),
            area: split_list(row.get("area")),
            servico_prestado: split_list(row.get("servico_prestado")),
            produtos_vendidos: split_list(row.get("produtos_vendidos")),
            potencial: row.text("potencial"),
            nota_potencial: row
                .get("nota_potencial")
                .and_then(|value| value.parse::<u8>().ok()),
            data_inicio: row.text("data_inicio"),
            tipo_contrato: row.text("tipo_contrato"),
            ocupacao_cliente: row.text("ocupacao_cliente"),
        })
    }
}

/// Validates a client file with the import defaults (lenient CPF/CNPJ).
pub fn validate_clients_csv(text: &str) -> ValidationResult<ClienteCsvTemplate> {
    validate_clients_csv_with(text, ClientValidationOptions::default())
}

/// Validates a client file.
///
/// Never fails; an unreadable file yields a single row-0 error. Rows are
/// promoted only when all of their fields pass.
pub fn validate_clients_csv_with(
    text: &str,
    options: ClientValidationOptions,
) -> ValidationResult<ClienteCsvTemplate> {
    validate_rows(&ClientSchema { options }, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_targets_a_known_header() {
        for rule in CLIENT_RULES {
            assert!(
                CLIENT_REQUIRED_HEADERS.contains(&rule.field)
                    || CLIENT_OPTIONAL_HEADERS.contains(&rule.field),
                "{}",
                rule.field
            );
        }
    }

    #[test]
    fn promotes_typed_fields() {
        let text = "nome_cliente,estado,relacionamento_exterior,nota_potencial,produtos_vendidos\n\
                    Acme,sp,TRUE,8,\n";
        let result = validate_clients_csv(text);
        assert!(result.is_valid, "{:?}", result.errors);
        let client = &result.valid_rows[0];
        assert_eq!(client.estado.as_deref(), Some("SP"));
        assert!(client.relacionamento_exterior);
        assert_eq!(client.nota_potencial, Some(8));
        assert!(client.produtos_vendidos.is_empty());
    }

    #[test]
    fn tax_id_mode_is_configurable() {
        let text = "nome_cliente,cpf_cnpj\nAcme,111.111.111-11\n";
        assert!(validate_clients_csv(text).is_valid);

        let strict = ClientValidationOptions::new().with_tax_id_mode(TaxIdMode::Strict);
        let result = validate_clients_csv_with(text, strict);
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].field, "cpf_cnpj");
    }
}
