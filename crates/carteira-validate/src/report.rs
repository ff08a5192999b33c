//! CSV export of validation errors.

use std::io::Write;

use carteira_model::ValidationError;

use crate::error::Result;

/// Column names of the error report.
pub const REPORT_HEADERS: [&str; 4] = ["linha", "campo", "valor", "mensagem"];

/// Writes `errors` as a `linha,campo,valor,mensagem` CSV.
pub fn write_error_report<W: Write>(errors: &[ValidationError], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(REPORT_HEADERS)?;
    for error in errors {
        out.write_record([
            error.row.to_string().as_str(),
            error.field.as_str(),
            error.value.as_str(),
            error.message.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_values_with_delimiters() {
        let errors = vec![
            ValidationError::file("Arquivo vazio"),
            ValidationError::new(2, "estado", "X,Y", "Estado inválido"),
        ];
        let mut buffer = Vec::new();
        write_error_report(&errors, &mut buffer).unwrap();
        insta::assert_snapshot!(String::from_utf8(buffer).unwrap(), @r#"
        linha,campo,valor,mensagem
        0,file,,Arquivo vazio
        2,estado,"X,Y",Estado inválido
        "#);
    }
}
