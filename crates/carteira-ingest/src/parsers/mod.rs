//! Best-effort positional parsers, one per schema.
//!
//! These feed dashboards: malformed or incomplete rows are dropped without
//! being reported. The strict path lives in `carteira-validate`.

pub mod layout;

mod ativos;
mod checklist;
mod clientes;
mod kanban;
mod portfolio;

pub use ativos::{ATIVOS_LAYOUT, parse_ativos};
pub use checklist::{CHECKLIST_LAYOUT, parse_checklist};
pub use clientes::{CLIENTES_LAYOUT, parse_clientes};
pub use kanban::{KANBAN_LAYOUT, parse_kanban};
pub use layout::{ColumnSpec, Layout, LayoutInfo, LayoutRecord, derive_record_id};
pub use portfolio::{PORTFOLIO_LAYOUT, parse_portfolio};

use carteira_model::{ImportedRecord, SchemaTag};

/// Runs the parser for `schema` and wraps its records.
///
/// Returns an empty list for [`SchemaTag::Unknown`].
pub fn parse_schema(schema: SchemaTag, text: &str) -> Vec<ImportedRecord> {
    match schema {
        SchemaTag::Portfolio => wrap(PORTFOLIO_LAYOUT.parse(text)),
        SchemaTag::Kanban => wrap(KANBAN_LAYOUT.parse(text)),
        SchemaTag::Checklist => wrap(CHECKLIST_LAYOUT.parse(text)),
        SchemaTag::Ativos => wrap(ATIVOS_LAYOUT.parse(text)),
        SchemaTag::Clientes => wrap(CLIENTES_LAYOUT.parse(text)),
        SchemaTag::Unknown => Vec::new(),
    }
}

/// Column tables of every known layout, in detection order.
pub fn layouts() -> Vec<LayoutInfo> {
    vec![
        PORTFOLIO_LAYOUT.info(),
        KANBAN_LAYOUT.info(),
        CHECKLIST_LAYOUT.info(),
        ATIVOS_LAYOUT.info(),
        CLIENTES_LAYOUT.info(),
    ]
}

fn wrap<T: LayoutRecord>(records: Vec<T>) -> Vec<ImportedRecord> {
    records.into_iter().map(LayoutRecord::into_imported).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_follow_detection_order() {
        let schemas: Vec<SchemaTag> = layouts().iter().map(|layout| layout.schema).collect();
        assert_eq!(
            schemas,
            vec![
                SchemaTag::Portfolio,
                SchemaTag::Kanban,
                SchemaTag::Checklist,
                SchemaTag::Ativos,
                SchemaTag::Clientes,
            ]
        );
        let clientes = &layouts()[4];
        assert_eq!(clientes.delimiter, ',');
        assert_eq!(clientes.columns, vec![(1, "cliente"), (2, "tipo")]);
    }

    #[test]
    fn unknown_schema_parses_nothing() {
        assert!(parse_schema(SchemaTag::Unknown, "a;b;c\n1;2;3\n").is_empty());
    }
}
