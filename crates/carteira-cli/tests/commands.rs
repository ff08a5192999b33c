//! Integration tests for the command implementations.

use std::fs;
use std::path::PathBuf;

use carteira_cli::commands::{
    ReportOptions, load_references, run_detect, run_parse, run_validate_clients,
    run_validate_contracts,
};
use carteira_model::SchemaTag;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn detect_reads_the_header() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tarefas.csv", "Categoria;Tarefa;Responsável\nA;B;C\n");
    assert_eq!(run_detect(&path).unwrap(), SchemaTag::Kanban);
}

#[test]
fn parse_reports_empty_imports() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "lixo.csv", "foo;bar\n1;2\n");
    let data = run_parse(&path, false).unwrap();
    assert!(data.is_empty());
    assert_eq!(data.kind, SchemaTag::Unknown);
}

#[test]
fn parse_missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let error = run_parse(&dir.path().join("nada.csv"), true).unwrap_err();
    assert!(format!("{error:#}").contains("nada.csv"));
}

#[test]
fn validate_clients_writes_error_report() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "clientes.csv",
        "nome_cliente,cpf_cnpj\nAcme,111.111.111-11\nBeta,111.444.777-35\n",
    );
    let report_path = dir.path().join("erros.csv");
    let report = ReportOptions {
        json: false,
        errors_csv: Some(&report_path),
    };

    assert!(run_validate_clients(&input, false, &report).unwrap());
    assert!(!run_validate_clients(&input, true, &report).unwrap());

    let written = fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "linha,campo,valor,mensagem");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2,cpf_cnpj,111.111.111-11,"));
}

#[test]
fn validate_contracts_uses_reference_file() {
    let dir = TempDir::new().unwrap();
    let references = write(
        &dir,
        "refs.json",
        r#"{"clientes": [{"id": "c1", "email": "a@acme.com"}]}"#,
    );
    let input = write(
        &dir,
        "contratos.csv",
        "email_cliente,tipo_contrato\na@acme.com,projeto\n",
    );
    let report = ReportOptions {
        json: true,
        ..ReportOptions::default()
    };
    assert!(run_validate_contracts(&input, &references, &report).unwrap());

    let other = write(&dir, "outros.csv", "email_cliente\nb@acme.com\n");
    assert!(!run_validate_contracts(&other, &references, &report).unwrap());
}

#[test]
fn malformed_references_are_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "refs.json", "{ not json");
    let error = load_references(&path).unwrap_err();
    assert!(format!("{error:#}").contains("parse references"));
}
