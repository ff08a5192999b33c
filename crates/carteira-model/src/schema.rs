//! Schema tags for the known CSV layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Classification label for a CSV file.
///
/// Each named tag corresponds to one fixed positional layout. `Unknown` is
/// returned when no layout rule matched the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaTag {
    /// Product/service catalog with market sizing.
    Portfolio,
    /// Task board export.
    Kanban,
    /// Qualification checklist (PF/PJ forms, call scripts).
    Checklist,
    /// Rich client sheet with 29 positional columns.
    Ativos,
    /// Two-column client list (name, contract type).
    Clientes,
    Unknown,
}

impl SchemaTag {
    /// All tags that name a concrete layout, in detection order.
    pub const KNOWN: [SchemaTag; 5] = [
        SchemaTag::Portfolio,
        SchemaTag::Kanban,
        SchemaTag::Checklist,
        SchemaTag::Ativos,
        SchemaTag::Clientes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaTag::Portfolio => "portfolio",
            SchemaTag::Kanban => "kanban",
            SchemaTag::Checklist => "checklist",
            SchemaTag::Ativos => "ativos",
            SchemaTag::Clientes => "clientes",
            SchemaTag::Unknown => "unknown",
        }
    }

    /// Human-readable description used in CLI listings.
    pub fn description(&self) -> &'static str {
        match self {
            SchemaTag::Portfolio => "Portfólio de áreas, serviços e produtos",
            SchemaTag::Kanban => "Tarefas do quadro kanban",
            SchemaTag::Checklist => "Checklist de qualificação",
            SchemaTag::Ativos => "Clientes ativos (planilha completa)",
            SchemaTag::Clientes => "Lista simples de clientes",
            SchemaTag::Unknown => "Formato não reconhecido",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SchemaTag::Unknown)
    }
}

impl fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaTag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portfolio" => Ok(SchemaTag::Portfolio),
            "kanban" => Ok(SchemaTag::Kanban),
            "checklist" => Ok(SchemaTag::Checklist),
            "ativos" => Ok(SchemaTag::Ativos),
            "clientes" => Ok(SchemaTag::Clientes),
            "unknown" => Ok(SchemaTag::Unknown),
            _ => Err(ModelError::UnknownSchemaTag(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for tag in SchemaTag::KNOWN {
            assert_eq!(tag.to_string().parse::<SchemaTag>().unwrap(), tag);
        }
        assert_eq!("UNKNOWN".parse::<SchemaTag>().unwrap(), SchemaTag::Unknown);
        assert!("planilha".parse::<SchemaTag>().is_err());
    }
}
