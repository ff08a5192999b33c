use carteira_model::{ChecklistFocal, ImportedRecord, RecordId, SchemaTag};

use super::layout::{ColumnSpec, Layout, LayoutRecord, column};

static COLUMNS: [ColumnSpec<ChecklistFocal>; 3] = [
    column!(ChecklistFocal, 0, campo),
    column!(ChecklistFocal, 1, status),
    column!(ChecklistFocal, 2, valor),
];

/// Checklists have no header skip; the header line itself usually survives
/// as a record.
pub static CHECKLIST_LAYOUT: Layout<ChecklistFocal> = Layout {
    schema: SchemaTag::Checklist,
    delimiter: ';',
    skip_lines: 0,
    min_columns: 1,
    columns: &COLUMNS,
    keep: |item: &ChecklistFocal| item.campo.is_some(),
};

impl LayoutRecord for ChecklistFocal {
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn into_imported(self) -> ImportedRecord {
        ImportedRecord::Checklist(self)
    }
}

pub fn parse_checklist(text: &str) -> Vec<ChecklistFocal> {
    CHECKLIST_LAYOUT.parse(text)
}
