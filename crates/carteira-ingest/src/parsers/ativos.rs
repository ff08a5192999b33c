//! Full client sheet ("ativos"): 29 `;`-delimited columns, one header line.

use carteira_model::{AtivoClient, ImportedRecord, RecordId, SchemaTag};

use super::layout::{ColumnSpec, Layout, LayoutRecord, column};

static COLUMNS: [ColumnSpec<AtivoClient>; 29] = [
    column!(AtivoClient, 0, identificador),
    column!(AtivoClient, 1, grupo_economico),
    column!(AtivoClient, 2, cpf_cnpj),
    column!(AtivoClient, 3, nome_cliente),
    column!(AtivoClient, 4, contato_principal),
    column!(AtivoClient, 5, cidade),
    column!(AtivoClient, 6, estado),
    column!(AtivoClient, 7, pais),
    column!(AtivoClient, 8, porte_empresa),
    column!(AtivoClient, 9, segmento_economico),
    column!(AtivoClient, 10, ocupacao_cliente),
    column!(AtivoClient, 11, whatsapp),
    column!(AtivoClient, 12, email),
    column!(AtivoClient, 13, area),
    column!(AtivoClient, 14, servico_prestado),
    column!(AtivoClient, 15, produtos_vendidos),
    column!(AtivoClient, 16, tipo_contrato),
    column!(AtivoClient, 17, data_inicio),
    column!(AtivoClient, 18, data_fim),
    column!(AtivoClient, 19, valor_contrato),
    column!(AtivoClient, 20, valor_hora),
    column!(AtivoClient, 21, taxa_exito),
    column!(AtivoClient, 22, fee_mensal),
    column!(AtivoClient, 23, potencial),
    column!(AtivoClient, 24, nota_potencial),
    column!(AtivoClient, 25, relacionamento_exterior),
    column!(AtivoClient, 26, quem_trouxe),
    column!(AtivoClient, 27, historico_relacionamento),
    column!(AtivoClient, 28, observacoes),
];

pub static ATIVOS_LAYOUT: Layout<AtivoClient> = Layout {
    schema: SchemaTag::Ativos,
    delimiter: ';',
    skip_lines: 1,
    min_columns: 4,
    columns: &COLUMNS,
    keep: |client: &AtivoClient| client.nome_cliente.is_some(),
};

impl LayoutRecord for AtivoClient {
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn into_imported(self) -> ImportedRecord {
        ImportedRecord::Ativo(self)
    }
}

pub fn parse_ativos(text: &str) -> Vec<AtivoClient> {
    ATIVOS_LAYOUT.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_table_covers_every_index_once() {
        let indices: Vec<usize> = COLUMNS.iter().map(|column| column.index).collect();
        assert_eq!(indices, (0..29).collect::<Vec<_>>());
    }

    #[test]
    fn requires_client_name_in_fourth_column() {
        let text = "Identificador;Grupo Econômico;CPF/CNPJ;Nome do Cliente;Contato\n\
                    C-001;Grupo Alfa;12.345.678/0001-90;Alfa Indústria;Maria\n\
                    C-002;Grupo Beta;;;João\n\
                    C-003;Grupo Gama\n";
        let clients = parse_ativos(text);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].identificador.as_deref(), Some("C-001"));
        assert_eq!(clients[0].nome_cliente.as_deref(), Some("Alfa Indústria"));
        assert_eq!(clients[0].contato_principal.as_deref(), Some("Maria"));
        assert!(clients[0].observacoes.is_none());
    }

    #[test]
    fn maps_trailing_columns() {
        let mut cells: Vec<String> = (0..29).map(|idx| format!("v{idx}")).collect();
        cells[3] = "Cliente X".to_string();
        let text = format!("cabecalho\n{}\n", cells.join(";"));
        let clients = parse_ativos(&text);
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].nota_potencial.as_deref(), Some("v24"));
        assert_eq!(clients[0].observacoes.as_deref(), Some("v28"));
    }
}
