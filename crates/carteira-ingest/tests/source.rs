//! Integration tests for reading import files from disk.

use std::io::Write;

use carteira_ingest::{IngestError, parse_any, read_source, read_source_with_limit};
use carteira_model::SchemaTag;
use tempfile::NamedTempFile;

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_utf8_file_with_bom() {
    let file = write_temp("\u{feff}Categoria;Tarefa\nComercial;Ligar\n".as_bytes());
    let text = read_source(file.path()).unwrap();
    assert!(text.starts_with("Categoria"));
    assert_eq!(parse_any(&text).kind, SchemaTag::Kanban);
}

#[test]
fn reads_windows_1252_export() {
    // "Responsável;Prazo" with á as 0xE1
    let file = write_temp(b"Respons\xE1vel;Prazo\nAna;2024-01-10\n");
    let text = read_source(file.path()).unwrap();
    assert!(text.starts_with("Responsável"));
    assert_eq!(parse_any(&text).kind, SchemaTag::Kanban);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let file = write_temp(b"Cliente,Tipo\n,Acme,Mensal\n");
    let err = read_source_with_limit(file.path(), 8).unwrap_err();
    assert!(matches!(
        err,
        IngestError::FileTooLarge { max_size: 8, .. }
    ));
}
