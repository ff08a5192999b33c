//! Error report export from a real validation run.

use carteira_validate::{REPORT_HEADERS, validate_clients_csv, write_error_report};

#[test]
fn report_has_one_line_per_error() {
    let result = validate_clients_csv("nome_cliente,estado,email\nAcme,XX,nope\n,SP,\n");
    let mut buffer = Vec::new();
    write_error_report(&result.errors, &mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), REPORT_HEADERS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), result.errors.len());
    assert_eq!(&rows[0][0], "2");
    assert_eq!(&rows[0][1], "estado");
    assert_eq!(&rows[2][0], "3");
    assert_eq!(&rows[2][1], "nome_cliente");
}
