//! Header-based format detection.
//!
//! Detection is an ordered table of rules evaluated top to bottom; the first
//! rule whose predicate holds decides the schema. The order matters: a sheet
//! with "Nome do cliente" and "Tipo" columns could match both the `ativos`
//! and `clientes` rules, and `ativos` must win.

use carteira_model::SchemaTag;
use tracing::debug;

/// One entry of the detection table.
#[derive(Debug, Clone, Copy)]
pub struct DetectionRule {
    pub schema: SchemaTag,
    /// Short description of what the rule looks for.
    pub description: &'static str,
    /// Predicate over normalized (trimmed, lower-cased) headers.
    pub matches: fn(&[String]) -> bool,
}

/// Detection rules in priority order.
pub static DETECTION_RULES: [DetectionRule; 5] = [
    DetectionRule {
        schema: SchemaTag::Portfolio,
        description: "área/serviço/produto + categoria",
        matches: is_portfolio,
    },
    DetectionRule {
        schema: SchemaTag::Kanban,
        description: "categoria + tarefa, or responsável + prazo",
        matches: is_kanban,
    },
    DetectionRule {
        schema: SchemaTag::Checklist,
        description: "form + qualificação, script, or pf + pj",
        matches: is_checklist,
    },
    DetectionRule {
        schema: SchemaTag::Ativos,
        description: "identificador + grupo econômico + nome do cliente",
        matches: is_ativos,
    },
    DetectionRule {
        schema: SchemaTag::Clientes,
        description: "cliente + tipo, at most 5 columns",
        matches: is_clientes,
    },
];

/// Trims and lower-cases a header. Accented characters are preserved.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classifies a header row. Always returns a tag; unmatched input is
/// [`SchemaTag::Unknown`].
pub fn detect<S: AsRef<str>>(headers: &[S]) -> SchemaTag {
    let normalized: Vec<String> = headers
        .iter()
        .map(|header| normalize_header(header.as_ref()))
        .collect();

    match DETECTION_RULES
        .iter()
        .find(|rule| (rule.matches)(&normalized))
    {
        Some(rule) => {
            debug!(schema = %rule.schema, rule = rule.description, "format detected");
            rule.schema
        }
        None => {
            debug!(columns = normalized.len(), "no detection rule matched");
            SchemaTag::Unknown
        }
    }
}

fn any_contains(headers: &[String], needle: &str) -> bool {
    headers.iter().any(|header| header.contains(needle))
}

fn has_exact(headers: &[String], name: &str) -> bool {
    headers.iter().any(|header| header == name)
}

fn is_portfolio(headers: &[String]) -> bool {
    ["área", "serviço", "produto"]
        .iter()
        .any(|needle| any_contains(headers, needle))
        && any_contains(headers, "categoria")
}

fn is_kanban(headers: &[String]) -> bool {
    (any_contains(headers, "categoria") && any_contains(headers, "tarefa"))
        || (any_contains(headers, "responsável") && any_contains(headers, "prazo"))
}

fn is_checklist(headers: &[String]) -> bool {
    (any_contains(headers, "form") && any_contains(headers, "qualificação"))
        || any_contains(headers, "script")
        || (has_exact(headers, "pf") && has_exact(headers, "pj"))
}

fn is_ativos(headers: &[String]) -> bool {
    any_contains(headers, "identificador")
        && any_contains(headers, "grupo econômico")
        && any_contains(headers, "nome do cliente")
}

fn is_clientes(headers: &[String]) -> bool {
    any_contains(headers, "cliente") && any_contains(headers, "tipo") && headers.len() <= 5
}
