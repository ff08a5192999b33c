//! Quote-aware line splitting.
//!
//! The import files are not RFC 4180: a `"` simply toggles the "inside quotes"
//! state and there is no `""` escape. Quote characters are kept in the
//! returned fields; callers strip them with [`clean_field`] where needed.

/// Splits one line on `delimiter`, ignoring delimiters inside quotes.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    fields.push(current);
    fields
}

/// Trims a raw field and removes its surrounding quotes.
pub fn clean_field(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

/// Splits and cleans a line in one go.
pub fn split_clean(line: &str, delimiter: char) -> Vec<String> {
    split_line(line, delimiter)
        .iter()
        .map(|field| clean_field(field))
        .collect()
}

/// Non-blank lines of `text` with their 1-based source line numbers.
///
/// Handles both `\n` and `\r\n` line endings.
pub fn data_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect()
}

/// Delimiter used by a header line: `;` when present, otherwise `,`.
pub fn sniff_delimiter(header_line: &str) -> char {
    if header_line.contains(';') { ';' } else { ',' }
}
