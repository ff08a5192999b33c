//! Contract import shapes and the reference lists they are resolved against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Contract-type tag accepted by the contract importer.
///
/// This is a different vocabulary from the client sheet's contract-type
/// labels; both are in use and must not be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractTypeTag {
    Recorrente,
    Projeto,
    Consultoria,
    Exito,
    Hora,
}

impl ContractTypeTag {
    pub const ALL: [ContractTypeTag; 5] = [
        ContractTypeTag::Recorrente,
        ContractTypeTag::Projeto,
        ContractTypeTag::Consultoria,
        ContractTypeTag::Exito,
        ContractTypeTag::Hora,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractTypeTag::Recorrente => "recorrente",
            ContractTypeTag::Projeto => "projeto",
            ContractTypeTag::Consultoria => "consultoria",
            ContractTypeTag::Exito => "exito",
            ContractTypeTag::Hora => "hora",
        }
    }
}

impl fmt::Display for ContractTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractTypeTag {
    type Err = ModelError;

    /// Exact, case-sensitive match against the tag strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractTypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ModelError::UnknownContractType(s.to_string()))
    }
}

/// An existing client, as known to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub nome: Option<String>,
}

/// An existing area, service or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub nome: String,
}

/// Reference data a contract file is checked against.
///
/// Supplied by the caller; lookups must stay stable for the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReferences {
    #[serde(default)]
    pub clientes: Vec<ClientRef>,
    #[serde(default)]
    pub areas: Vec<CatalogEntry>,
    #[serde(default)]
    pub servicos: Vec<CatalogEntry>,
    #[serde(default)]
    pub produtos: Vec<CatalogEntry>,
}

impl ContractReferences {
    /// Exact email match.
    pub fn client_by_email(&self, email: &str) -> Option<&ClientRef> {
        self.clientes.iter().find(|client| client.email == email)
    }

    pub fn area_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        find_by_name(&self.areas, name)
    }

    pub fn servico_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        find_by_name(&self.servicos, name)
    }

    pub fn produto_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        find_by_name(&self.produtos, name)
    }
}

fn find_by_name<'a>(entries: &'a [CatalogEntry], name: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| entry.nome == name)
}

/// Contract row accepted by the referenced-entity validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContratoImport {
    pub cliente_id: String,
    pub email_cliente: String,
    /// `None` when the area column was empty or named no known area.
    pub area_id: Option<String>,
    pub servico_id: Option<String>,
    pub produto_id: Option<String>,
    pub tipo_contrato: Option<ContractTypeTag>,
    pub valor_contrato: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub quem_trouxe: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_tags_are_case_sensitive() {
        assert_eq!(
            "exito".parse::<ContractTypeTag>().unwrap(),
            ContractTypeTag::Exito
        );
        assert!("Exito".parse::<ContractTypeTag>().is_err());
        assert!("mensal".parse::<ContractTypeTag>().is_err());
    }

    #[test]
    fn lookups_use_exact_names() {
        let refs = ContractReferences {
            areas: vec![CatalogEntry {
                id: "a1".to_string(),
                nome: "Tributário".to_string(),
            }],
            ..ContractReferences::default()
        };
        assert!(refs.area_by_name("Tributário").is_some());
        assert!(refs.area_by_name("tributário").is_none());
    }
}
