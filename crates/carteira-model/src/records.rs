//! Typed records produced by the best-effort schema parsers.
//!
//! Every schema gets its own record type; [`ImportedRecord`] joins them so a
//! caller never has to guess which "type" or "status" column a field came
//! from. Empty cells are stored as `None`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{RecordId, SchemaTag};

/// Lifecycle status of a portfolio offering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortfolioStatus {
    Ativo,
    EmDesenvolvimento,
    Pausado,
    Descontinuado,
    /// Label that is not one of the known statuses, kept verbatim.
    Outro(String),
}

impl PortfolioStatus {
    /// Maps a spreadsheet label onto a status. Matching ignores case and
    /// surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "ativo" => PortfolioStatus::Ativo,
            "em desenvolvimento" | "desenvolvimento" => PortfolioStatus::EmDesenvolvimento,
            "pausado" => PortfolioStatus::Pausado,
            "descontinuado" | "inativo" => PortfolioStatus::Descontinuado,
            _ => PortfolioStatus::Outro(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PortfolioStatus::Ativo => "Ativo",
            PortfolioStatus::EmDesenvolvimento => "Em desenvolvimento",
            PortfolioStatus::Pausado => "Pausado",
            PortfolioStatus::Descontinuado => "Descontinuado",
            PortfolioStatus::Outro(label) => label,
        }
    }
}

impl fmt::Display for PortfolioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PortfolioStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PortfolioStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(PortfolioStatus::from_label(&label))
    }
}

/// A sellable offering: area/service/product triple with market sizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: Option<RecordId>,
    pub area: Option<String>,
    pub servico: Option<String>,
    pub produto: Option<String>,
    pub descricao: Option<String>,
    pub categoria: Option<String>,
    pub publico_alvo: Option<String>,
    /// TAM, free-form.
    pub tamanho_mercado: Option<String>,
    /// SAM, free-form.
    pub mercado_enderecavel: Option<String>,
    /// SOM, free-form.
    pub mercado_obtenivel: Option<String>,
    pub preco_minimo: Option<String>,
    pub preco_maximo: Option<String>,
    pub ticket_medio: Option<String>,
    pub receita_estimada: Option<String>,
    pub responsavel_vendas: Option<String>,
    pub status: Option<PortfolioStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanTask {
    pub id: Option<RecordId>,
    pub categoria: Option<String>,
    pub tarefa: Option<String>,
    pub responsavel: Option<String>,
    pub prazo: Option<String>,
    pub status: Option<String>,
    pub comentarios: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistFocal {
    pub id: Option<RecordId>,
    pub campo: Option<String>,
    pub status: Option<String>,
    pub valor: Option<String>,
}

/// Client row from the full "ativos" spreadsheet.
///
/// Only `nome_cliente` is required for a row to be kept; every other column
/// is carried as-is without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtivoClient {
    pub id: Option<RecordId>,
    pub identificador: Option<String>,
    pub grupo_economico: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub nome_cliente: Option<String>,
    pub contato_principal: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub pais: Option<String>,
    pub porte_empresa: Option<String>,
    pub segmento_economico: Option<String>,
    pub ocupacao_cliente: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub area: Option<String>,
    pub servico_prestado: Option<String>,
    pub produtos_vendidos: Option<String>,
    pub tipo_contrato: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub valor_contrato: Option<String>,
    pub valor_hora: Option<String>,
    pub taxa_exito: Option<String>,
    pub fee_mensal: Option<String>,
    pub potencial: Option<String>,
    pub nota_potencial: Option<String>,
    pub relacionamento_exterior: Option<String>,
    pub quem_trouxe: Option<String>,
    pub historico_relacionamento: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleClient {
    pub id: Option<RecordId>,
    pub cliente: Option<String>,
    /// Contract-type label as written in the sheet.
    pub tipo: Option<String>,
}

/// One parsed record of any known schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportedRecord {
    #[serde(rename = "portfolio")]
    Portfolio(PortfolioItem),
    #[serde(rename = "kanban")]
    Kanban(KanbanTask),
    #[serde(rename = "checklist")]
    Checklist(ChecklistFocal),
    #[serde(rename = "ativos")]
    Ativo(AtivoClient),
    #[serde(rename = "clientes")]
    Cliente(SimpleClient),
}

impl ImportedRecord {
    pub fn schema(&self) -> SchemaTag {
        match self {
            ImportedRecord::Portfolio(_) => SchemaTag::Portfolio,
            ImportedRecord::Kanban(_) => SchemaTag::Kanban,
            ImportedRecord::Checklist(_) => SchemaTag::Checklist,
            ImportedRecord::Ativo(_) => SchemaTag::Ativos,
            ImportedRecord::Cliente(_) => SchemaTag::Clientes,
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        match self {
            ImportedRecord::Portfolio(item) => item.id,
            ImportedRecord::Kanban(task) => task.id,
            ImportedRecord::Checklist(item) => item.id,
            ImportedRecord::Ativo(client) => client.id,
            ImportedRecord::Cliente(client) => client.id,
        }
    }
}

/// Result envelope of the dispatching parser.
///
/// This is the only shape handed to persistence and UI collaborators.
/// `total_imported` always equals `data.len()`; zero means nothing usable
/// was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedData {
    #[serde(rename = "type")]
    pub kind: SchemaTag,
    pub data: Vec<ImportedRecord>,
    pub total_imported: usize,
}

impl ImportedData {
    pub fn new(kind: SchemaTag, data: Vec<ImportedRecord>) -> Self {
        let total_imported = data.len();
        Self {
            kind,
            data,
            total_imported,
        }
    }

    pub fn empty() -> Self {
        Self::new(SchemaTag::Unknown, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.total_imported == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_status_labels() {
        assert_eq!(PortfolioStatus::from_label(" ATIVO "), PortfolioStatus::Ativo);
        assert_eq!(
            PortfolioStatus::from_label("Em desenvolvimento"),
            PortfolioStatus::EmDesenvolvimento
        );
        assert_eq!(
            PortfolioStatus::from_label("Em análise"),
            PortfolioStatus::Outro("Em análise".to_string())
        );
    }

    #[test]
    fn envelope_counts_records() {
        let data = ImportedData::new(
            SchemaTag::Clientes,
            vec![ImportedRecord::Cliente(SimpleClient {
                cliente: Some("Acme".to_string()),
                ..SimpleClient::default()
            })],
        );
        assert_eq!(data.total_imported, 1);
        assert!(!data.is_empty());
        assert!(ImportedData::empty().is_empty());
    }
}
