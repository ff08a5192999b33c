//! Terminal tables for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use carteira_ingest::LayoutInfo;
use carteira_model::{ImportedData, ImportedRecord, ValidationError, ValidationResult};

/// Rows shown by the `parse` preview.
pub const PREVIEW_ROWS: usize = 10;

/// One-line outcome of a validation run.
pub fn validation_outcome<T>(result: &ValidationResult<T>) -> String {
    let verdict = if result.is_valid {
        "arquivo válido"
    } else {
        "arquivo com erros"
    };
    format!(
        "{verdict}: {} linhas, {} válidas, {} rejeitadas, {} erros",
        result.total_rows,
        result.valid_rows.len(),
        result.rejected_rows(),
        result.error_count()
    )
}

pub fn import_summary_table(data: &ImportedData) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tipo"),
        header_cell("Descrição"),
        header_cell("Registros"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let count = if data.total_imported > 0 {
        Cell::new(data.total_imported)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(0).fg(Color::Red).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![
        Cell::new(data.kind.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(data.kind.description()),
        count,
    ]);
    table
}

/// First [`PREVIEW_ROWS`] records with their identifying fields.
pub fn record_preview_table(records: &[ImportedRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Registro"),
        header_cell("Detalhe"),
    ]);
    apply_table_style(&mut table);
    for record in records.iter().take(PREVIEW_ROWS) {
        let (label, detail) = record_label(record);
        let id = record
            .id()
            .map(|id| id.to_hex()[..8].to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![dim_cell(id), Cell::new(label), optional_cell(detail)]);
    }
    if records.len() > PREVIEW_ROWS {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("mais {} registros", records.len() - PREVIEW_ROWS)),
            dim_cell(""),
        ]);
    }
    table
}

fn record_label(record: &ImportedRecord) -> (String, Option<String>) {
    match record {
        ImportedRecord::Portfolio(item) => (
            first_present([&item.produto, &item.servico, &item.area]),
            item.status.as_ref().map(|status| status.label().to_string()),
        ),
        ImportedRecord::Kanban(task) => (
            first_present([&task.tarefa, &task.categoria]),
            task.responsavel.clone(),
        ),
        ImportedRecord::Checklist(item) => (
            first_present([&item.campo]),
            item.status.clone().or_else(|| item.valor.clone()),
        ),
        ImportedRecord::Ativo(client) => (
            first_present([&client.nome_cliente]),
            match (&client.cidade, &client.estado) {
                (Some(cidade), Some(estado)) => Some(format!("{cidade}/{estado}")),
                (cidade, estado) => cidade.clone().or_else(|| estado.clone()),
            },
        ),
        ImportedRecord::Cliente(client) => {
            (first_present([&client.cliente]), client.tipo.clone())
        }
    }
}

fn first_present<const N: usize>(values: [&Option<String>; N]) -> String {
    values
        .into_iter()
        .find_map(|value| value.clone())
        .unwrap_or_default()
}

pub fn error_table(errors: &[ValidationError]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Linha"),
        header_cell("Campo"),
        header_cell("Valor"),
        header_cell("Mensagem"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in errors {
        let row = if error.is_file_level() {
            dim_cell("-")
        } else {
            Cell::new(error.row)
        };
        table.add_row(vec![
            row,
            Cell::new(&error.field).fg(Color::Yellow),
            optional_cell(Some(error.value.clone()).filter(|value| !value.is_empty())),
            Cell::new(&error.message).fg(Color::Red),
        ]);
    }
    table
}

pub fn layouts_table(layouts: &[LayoutInfo]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tipo"),
        header_cell("Descrição"),
        header_cell("Separador"),
        header_cell("Linhas ignoradas"),
        header_cell("Mín. colunas"),
        header_cell("Colunas"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for layout in layouts {
        let columns = layout
            .columns
            .iter()
            .map(|(index, field)| format!("{index}:{field}"))
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(layout.schema.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(layout.schema.description()),
            Cell::new(layout.delimiter),
            Cell::new(layout.skip_lines),
            Cell::new(layout.min_columns),
            Cell::new(columns),
        ]);
    }
    table
}

/// Required and optional headers of a strict importer.
pub fn import_headers_table(rows: &[(&str, &[&str], &[&str])]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Importação"),
        header_cell("Obrigatórios"),
        header_cell("Opcionais"),
    ]);
    apply_table_style(&mut table);
    for (name, required, optional) in rows {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(required.join(", ")).fg(Color::Yellow),
            Cell::new(optional.join(", ")),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(26)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carteira_model::{KanbanTask, SchemaTag};

    #[test]
    fn outcome_line() {
        let result: ValidationResult<()> = ValidationResult::new(
            vec![
                ValidationError::new(2, "estado", "XX", "Estado inválido"),
                ValidationError::new(2, "email", "x", "Email inválido"),
            ],
            vec![(), ()],
            3,
        );
        insta::assert_snapshot!(
            validation_outcome(&result),
            @"arquivo com erros: 3 linhas, 2 válidas, 1 rejeitadas, 2 erros"
        );
    }

    #[test]
    fn preview_is_truncated() {
        let records: Vec<ImportedRecord> = (0..12)
            .map(|n| {
                ImportedRecord::Kanban(KanbanTask {
                    tarefa: Some(format!("tarefa {n}")),
                    ..KanbanTask::default()
                })
            })
            .collect();
        let mut table = record_preview_table(&records);
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("tarefa 9"));
        assert!(!rendered.contains("tarefa 10"));
        assert!(rendered.contains("mais 2 registros"));
    }

    #[test]
    fn empty_import_summary() {
        let mut table = import_summary_table(&ImportedData::empty());
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains(SchemaTag::Unknown.as_str()));
        assert!(rendered.contains('0'));
    }

    #[test]
    fn file_level_errors_have_no_row() {
        let mut table = error_table(&[ValidationError::file("Arquivo vazio")]);
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("Arquivo vazio"));
        assert!(rendered.contains("file"));
    }
}
