//! Portfolio sheet: `;`-delimited, four-line title/header block.

use carteira_model::{ImportedRecord, PortfolioItem, PortfolioStatus, RecordId, SchemaTag};

use super::layout::{ColumnSpec, Layout, LayoutRecord, column};

static COLUMNS: [ColumnSpec<PortfolioItem>; 15] = [
    column!(PortfolioItem, 0, area),
    column!(PortfolioItem, 1, servico),
    column!(PortfolioItem, 2, produto),
    column!(PortfolioItem, 3, descricao),
    column!(PortfolioItem, 4, categoria),
    column!(PortfolioItem, 5, publico_alvo),
    column!(PortfolioItem, 6, tamanho_mercado),
    column!(PortfolioItem, 7, mercado_enderecavel),
    column!(PortfolioItem, 8, mercado_obtenivel),
    column!(PortfolioItem, 9, preco_minimo),
    column!(PortfolioItem, 10, preco_maximo),
    column!(PortfolioItem, 11, ticket_medio),
    column!(PortfolioItem, 12, receita_estimada),
    column!(PortfolioItem, 13, responsavel_vendas),
    ColumnSpec {
        index: 14,
        field: "status",
        assign: |record: &mut PortfolioItem, value: String| {
            record.status = Some(PortfolioStatus::from_label(&value));
        },
    },
];

pub static PORTFOLIO_LAYOUT: Layout<PortfolioItem> = Layout {
    schema: SchemaTag::Portfolio,
    delimiter: ';',
    skip_lines: 4,
    min_columns: 3,
    columns: &COLUMNS,
    keep: |item: &PortfolioItem| {
        item.area.is_some() || item.servico.is_some() || item.produto.is_some()
    },
};

impl LayoutRecord for PortfolioItem {
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn into_imported(self) -> ImportedRecord {
        ImportedRecord::Portfolio(self)
    }
}

pub fn parse_portfolio(text: &str) -> Vec<PortfolioItem> {
    PORTFOLIO_LAYOUT.parse(text)
}
