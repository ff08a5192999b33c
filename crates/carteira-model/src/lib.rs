pub mod client;
pub mod contract;
pub mod error;
pub mod ids;
pub mod options;
pub mod records;
pub mod schema;
pub mod validation;

pub use client::ClienteCsvTemplate;
pub use contract::{CatalogEntry, ClientRef, ContractReferences, ContractTypeTag, ContratoImport};
pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use options::{ClientValidationOptions, TaxIdMode};
pub use records::{
    AtivoClient, ChecklistFocal, ImportedData, ImportedRecord, KanbanTask, PortfolioItem,
    PortfolioStatus, SimpleClient,
};
pub use schema::SchemaTag;
pub use validation::{FILE_FIELD, HEADERS_FIELD, ROW_FIELD, ValidationError, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_result_tracks_validity() {
        let ok: ValidationResult<ClienteCsvTemplate> = ValidationResult::new(vec![], vec![], 0);
        assert!(ok.is_valid);

        let failed: ValidationResult<ClienteCsvTemplate> = ValidationResult::new(
            vec![
                ValidationError::new(2, "estado", "XX", "Estado inválido"),
                ValidationError::new(2, "email", "x", "Email inválido"),
                ValidationError::new(4, "email", "y", "Email inválido"),
            ],
            vec![],
            3,
        );
        assert!(!failed.is_valid);
        assert_eq!(failed.error_count(), 3);
        assert_eq!(failed.rejected_rows(), 2);
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result: ValidationResult<ClienteCsvTemplate> =
            ValidationResult::file_error("Arquivo CSV vazio");
        let json = serde_json::to_value(&result).expect("serialize result");
        assert_eq!(json["isValid"], false);
        assert_eq!(json["totalRows"], 0);
        assert_eq!(json["errors"][0]["field"], FILE_FIELD);
        assert!(json["validRows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn envelope_serializes_type_key() {
        let data = ImportedData::new(
            SchemaTag::Kanban,
            vec![ImportedRecord::Kanban(KanbanTask {
                tarefa: Some("Enviar proposta".to_string()),
                ..KanbanTask::default()
            })],
        );
        let json = serde_json::to_value(&data).expect("serialize envelope");
        assert_eq!(json["type"], "kanban");
        assert_eq!(json["totalImported"], 1);
        assert_eq!(json["data"][0]["type"], "kanban");
        assert_eq!(json["data"][0]["tarefa"], "Enviar proposta");

        let round: ImportedData = serde_json::from_value(json).expect("deserialize envelope");
        assert_eq!(round, data);
    }
}
