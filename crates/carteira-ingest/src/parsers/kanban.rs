use carteira_model::{ImportedRecord, KanbanTask, RecordId, SchemaTag};

use super::layout::{ColumnSpec, Layout, LayoutRecord, column};

static COLUMNS: [ColumnSpec<KanbanTask>; 6] = [
    column!(KanbanTask, 0, categoria),
    column!(KanbanTask, 1, tarefa),
    column!(KanbanTask, 2, responsavel),
    column!(KanbanTask, 3, prazo),
    column!(KanbanTask, 4, status),
    column!(KanbanTask, 5, comentarios),
];

pub static KANBAN_LAYOUT: Layout<KanbanTask> = Layout {
    schema: SchemaTag::Kanban,
    delimiter: ';',
    skip_lines: 1,
    min_columns: 1,
    columns: &COLUMNS,
    keep: |task: &KanbanTask| task.tarefa.is_some() || task.categoria.is_some(),
};

impl LayoutRecord for KanbanTask {
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn into_imported(self) -> ImportedRecord {
        ImportedRecord::Kanban(self)
    }
}

pub fn parse_kanban(text: &str) -> Vec<KanbanTask> {
    KANBAN_LAYOUT.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_task_columns() {
        let text = "Categoria;Tarefa;Responsável;Prazo;Status;Comentários\n\
                    Comercial;Enviar proposta;Bruno;2024-05-10;Em andamento;\"Aguardando; retorno\"\n\
                    ;;Carla;;;\n";
        let tasks = parse_kanban(text);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].tarefa.as_deref(), Some("Enviar proposta"));
        assert_eq!(tasks[0].prazo.as_deref(), Some("2024-05-10"));
        assert_eq!(tasks[0].comentarios.as_deref(), Some("Aguardando; retorno"));
    }

    #[test]
    fn category_alone_is_enough() {
        let tasks = parse_kanban("Categoria;Tarefa\nFinanceiro\n");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].categoria.as_deref(), Some("Financeiro"));
        assert!(tasks[0].tarefa.is_none());
    }
}
