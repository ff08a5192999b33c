//! Command implementations. Each returns what `main` needs to pick an exit
//! code; output goes to stdout.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use carteira_ingest::{detect, header_fields, layouts, parse_any, read_source};
use carteira_model::{
    ClientValidationOptions, ContractReferences, ImportedData, SchemaTag, TaxIdMode,
    ValidationError, ValidationResult,
};
use carteira_validate::{
    CLIENT_OPTIONAL_HEADERS, CLIENT_REQUIRED_HEADERS, CONTRACT_OPTIONAL_HEADERS,
    CONTRACT_REQUIRED_HEADERS, validate_clients_csv_with, validate_contracts_csv,
    write_error_report,
};

use crate::logging::redact_value;
use crate::summary::{
    error_table, import_headers_table, import_summary_table, layouts_table, record_preview_table,
    validation_outcome,
};

/// How validation results are presented.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions<'a> {
    pub json: bool,
    pub errors_csv: Option<&'a Path>,
}

fn load(path: &Path) -> Result<String> {
    read_source(path).with_context(|| format!("read {}", path.display()))
}

pub fn run_detect(path: &Path) -> Result<SchemaTag> {
    let span = info_span!("detect", path = %path.display());
    let _guard = span.enter();

    let text = load(path)?;
    let schema = detect(&header_fields(&text));
    info!(schema = %schema, "detected");
    println!("{schema}\t{}", schema.description());
    Ok(schema)
}

/// Best-effort import. The caller treats an empty result as failure.
pub fn run_parse(path: &Path, json: bool) -> Result<ImportedData> {
    let span = info_span!("parse", path = %path.display());
    let _guard = span.enter();

    let text = load(path)?;
    let data = parse_any(&text);
    if data.is_empty() {
        warn!("no usable rows");
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&data).context("serialize import")?
        );
    } else {
        println!("{}", import_summary_table(&data));
        if data.is_empty() {
            println!("nenhuma linha válida encontrada");
        } else {
            println!("{}", record_preview_table(&data.data));
        }
    }
    Ok(data)
}

/// Returns whether the file is valid.
pub fn run_validate_clients(
    path: &Path,
    strict_tax_id: bool,
    report: &ReportOptions<'_>,
) -> Result<bool> {
    let span = info_span!("validate_clients", path = %path.display());
    let _guard = span.enter();

    let text = load(path)?;
    let mode = if strict_tax_id {
        TaxIdMode::Strict
    } else {
        TaxIdMode::Lenient
    };
    let options = ClientValidationOptions::new().with_tax_id_mode(mode);
    let result = validate_clients_csv_with(&text, options);
    present(&result, report)?;
    Ok(result.is_valid)
}

/// Returns whether the file is valid.
pub fn run_validate_contracts(
    path: &Path,
    references_path: &Path,
    report: &ReportOptions<'_>,
) -> Result<bool> {
    let span = info_span!("validate_contracts", path = %path.display());
    let _guard = span.enter();

    let references = load_references(references_path)?;
    let text = load(path)?;
    let result = validate_contracts_csv(&text, &references);
    present(&result, report)?;
    Ok(result.is_valid)
}

pub fn load_references(path: &Path) -> Result<ContractReferences> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let references: ContractReferences = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parse references {}", path.display()))?;
    info!(
        clientes = references.clientes.len(),
        areas = references.areas.len(),
        servicos = references.servicos.len(),
        produtos = references.produtos.len(),
        "references loaded"
    );
    Ok(references)
}

fn present<T: serde::Serialize>(
    result: &ValidationResult<T>,
    report: &ReportOptions<'_>,
) -> Result<()> {
    for error in &result.errors {
        trace!(
            row = error.row,
            field = %error.field,
            value = redact_value(&error.value),
            "validation error"
        );
    }
    info!(
        total_rows = result.total_rows,
        valid_rows = result.valid_rows.len(),
        errors = result.error_count(),
        "validation finished"
    );

    if let Some(path) = report.errors_csv {
        write_report_file(&result.errors, path)?;
    }

    if report.json {
        println!(
            "{}",
            serde_json::to_string_pretty(result).context("serialize validation result")?
        );
        return Ok(());
    }

    println!("{}", validation_outcome(result));
    if !result.errors.is_empty() {
        println!("{}", error_table(&result.errors));
    }
    Ok(())
}

fn write_report_file(errors: &[ValidationError], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_error_report(errors, BufWriter::new(file))
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), errors = errors.len(), "error report written");
    Ok(())
}

pub fn run_schemas() -> Result<()> {
    println!("{}", layouts_table(&layouts()));
    println!();
    println!(
        "{}",
        import_headers_table(&[
            ("clientes", CLIENT_REQUIRED_HEADERS, CLIENT_OPTIONAL_HEADERS),
            (
                "contratos",
                CONTRACT_REQUIRED_HEADERS,
                CONTRACT_OPTIONAL_HEADERS
            ),
        ])
    );
    Ok(())
}
