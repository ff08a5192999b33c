//! Detect-then-parse entry point.

use tracing::{debug, info, warn};

use carteira_model::{ImportedData, SchemaTag};

use crate::csv::{data_lines, sniff_delimiter, split_clean};
use crate::detect::detect;
use crate::parsers::parse_schema;

/// Header fields of the first non-blank line, split on `;` when the line
/// contains one and on `,` otherwise.
pub fn header_fields(text: &str) -> Vec<String> {
    data_lines(text)
        .first()
        .map(|(_, line)| split_clean(line, sniff_delimiter(line)))
        .unwrap_or_default()
}

/// Detects the schema of `text` and parses it.
///
/// Never fails. Files no rule recognizes are tried as an "ativos" sheet,
/// the most common unlabeled export; if that finds nothing the result is
/// `{unknown, [], 0}`. Callers should treat `total_imported == 0` as "no
/// usable rows".
pub fn parse_any(text: &str) -> ImportedData {
    let headers = header_fields(text);
    let schema = detect(&headers);

    if schema.is_known() {
        let data = ImportedData::new(schema, parse_schema(schema, text));
        info!(schema = %schema, total = data.total_imported, "import parsed");
        return data;
    }

    debug!("unknown header, trying the ativos layout");
    let fallback = parse_schema(SchemaTag::Ativos, text);
    if fallback.is_empty() {
        warn!(columns = headers.len(), "no usable rows found");
        return ImportedData::empty();
    }

    info!(
        total = fallback.len(),
        "import parsed with the ativos fallback"
    );
    ImportedData::new(SchemaTag::Ativos, fallback)
}
