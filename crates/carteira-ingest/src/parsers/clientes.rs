//! Two-column client list.
//!
//! Exported with a title line and a header line, and with an empty first
//! column, so names live in column 1. Unlike the other schema parsers this
//! format is comma-delimited.

use carteira_model::{ImportedRecord, RecordId, SchemaTag, SimpleClient};

use super::layout::{ColumnSpec, Layout, LayoutRecord, column};

static COLUMNS: [ColumnSpec<SimpleClient>; 2] = [
    column!(SimpleClient, 1, cliente),
    column!(SimpleClient, 2, tipo),
];

pub static CLIENTES_LAYOUT: Layout<SimpleClient> = Layout {
    schema: SchemaTag::Clientes,
    delimiter: ',',
    skip_lines: 2,
    min_columns: 2,
    columns: &COLUMNS,
    keep: |client: &SimpleClient| client.cliente.is_some(),
};

impl LayoutRecord for SimpleClient {
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn into_imported(self) -> ImportedRecord {
        ImportedRecord::Cliente(self)
    }
}

pub fn parse_clientes(text: &str) -> Vec<SimpleClient> {
    CLIENTES_LAYOUT.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_name_from_second_column() {
        let text = "Lista de clientes,,\n\
                    ,Cliente,Tipo\n\
                    ,\"Silva, Souza & Cia\",Mensal\n\
                    Acme,,Anual\n\
                    ,Beta Ltda\n";
        let clients = parse_clientes(text);
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].cliente.as_deref(), Some("Silva, Souza & Cia"));
        assert_eq!(clients[0].tipo.as_deref(), Some("Mensal"));
        assert_eq!(clients[1].cliente.as_deref(), Some("Beta Ltda"));
        assert!(clients[1].tipo.is_none());
    }
}
