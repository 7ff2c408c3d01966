// ABOUTME: CSV serialisation of extracted records with the fixed column header.
// ABOUTME: Always writes the header row, so an empty result is still a valid table.

use std::io::Write;

use csv::{Terminator, WriterBuilder};

use crate::error::ExportError;
use crate::models::{Record, COLUMNS};

/// Writes the header and one row per record to `writer`.
pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the records as a CSV string.
pub fn to_csv_string(records: &[Record]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_records_write_header_only() {
        assert_eq!(
            to_csv_string(&[]).unwrap(),
            "Hotel Name,Location,Price,Rating,Score,Review,Link\n"
        );
    }

    #[test]
    fn quotes_fields_with_commas_and_quotes() {
        let record = Record {
            name: "Hotel \"Harbour\" View".into(),
            location: "Viaduct, Auckland".into(),
            price: "1,250".into(),
            rating: "9.1".into(),
            score: "Superb".into(),
            review: "Loved it".into(),
            link: "https://example.com/h?x=1".into(),
        };
        let csv = to_csv_string(&[record]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Hotel Name,Location,Price,Rating,Score,Review,Link")
        );
        assert_eq!(
            lines.next(),
            Some(r#""Hotel ""Harbour"" View","Viaduct, Auckland","1,250",9.1,Superb,Loved it,https://example.com/h?x=1"#)
        );
        assert_eq!(lines.next(), None);
    }
}
