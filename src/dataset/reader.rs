use std::{fs::File, io::Read, path::Path, time::Instant};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use super::{DatasetError, COLUMNS};
use crate::PrefixRecord;

/// Rejects rows whose stored lengths or prefix disagree with their own
/// country code. The index trusts these fields, so they are never repaired.
fn check_consistency(record: &PrefixRecord, line: u64) -> Result<(), DatasetError> {
    let reason = if record.country_code.len() != record.country_code_len {
        "has a country code that does not match cc_len"
    } else if record.number_prefix.len() != record.prefix_len {
        "does not match prefix_len"
    } else if !record.number_prefix.starts_with(&record.country_code) {
        "does not start with its country code"
    } else {
        return Ok(());
    };
    Err(DatasetError::InconsistentRecord {
        line,
        number_prefix: record.number_prefix.clone(),
        reason,
    })
}

fn check_header(headers: &StringRecord) -> Result<(), DatasetError> {
    if headers.is_empty() {
        return Err(DatasetError::MissingHeader);
    }
    match COLUMNS.into_iter().find(|column| !headers.iter().any(|header| header == *column)) {
        Some(column) => Err(DatasetError::MissingColumn { column }),
        None => Ok(()),
    }
}

/// Decodes a prefix table from any reader.
///
/// Blank lines and lines starting with `#` are skipped, fields are trimmed
/// and the first remaining line is the header.
pub fn read_records<R: Read>(input: R) -> Result<Vec<PrefixRecord>, DatasetError> {
    let started = Instant::now();
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    check_header(&headers)?;

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row)? {
        let line = row.position().map_or(0, |position| position.line());
        let record: PrefixRecord = row
            .deserialize(Some(&headers))
            .map_err(|source| DatasetError::InvalidRecord { line, source })?;
        check_consistency(&record, line)?;
        records.push(record);
    }

    debug!("Decoded {} prefix records in {:?}", records.len(), started.elapsed());
    Ok(records)
}

pub fn parse_records(table: &str) -> Result<Vec<PrefixRecord>, DatasetError> {
    read_records(table.as_bytes())
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<PrefixRecord>, DatasetError> {
    let input = File::open(path)?;
    read_records(input)
}

#[cfg(test)]
mod tests {
    use csv::ErrorKind;

    use super::*;

    const HEADER: &str =
        "zone_id,country_code,region_code,number_prefix,is_geographic,is_mobile,is_satellite,cc_len,prefix_len";

    #[test]
    fn parses_records_by_header_name() {
        let table = "prefix_len,number_prefix,region_code,country_code,zone_id,is_mobile,is_geographic,is_satellite,cc_len,comment\r\n\
                     # United Kingdom\r\n\
                     \r\n\
                     6, 447762 ,\"GB\",44,4,TRUE,false,0,2,mobile block\r\n";
        let records = parse_records(table).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.zone_id, 4);
        assert_eq!(record.country_code, "44");
        assert_eq!(record.region_code, "GB");
        assert_eq!(record.number_prefix, "447762");
        assert!(record.is_mobile && !record.is_geographic && !record.is_satellite);
        assert_eq!((record.country_code_len, record.prefix_len), (2, 6));
    }

    #[test]
    fn quoted_fields_keep_separators() {
        let table = format!("{HEADER}\n8,881,\"Iridium,\nInc \"\"sat\"\"\",8816,false,false,true,3,4\n");
        let records = parse_records(&table).unwrap();
        assert_eq!(records[0].region_code, "Iridium,\nInc \"sat\"");
    }

    #[test]
    fn reports_malformed_tables() {
        assert!(matches!(parse_records(""), Err(DatasetError::MissingHeader)));
        assert!(matches!(parse_records("# nothing here\n"), Err(DatasetError::MissingHeader)));
        assert!(matches!(
            parse_records("zone_id,country_code\n1,1\n"),
            Err(DatasetError::MissingColumn { column: "region_code" })
        ));

        let short_row = format!("{HEADER}\n1,1,US\n");
        match parse_records(&short_row) {
            Err(DatasetError::Csv(err)) => assert!(matches!(
                err.kind(),
                ErrorKind::UnequalLengths { expected_len: 9, len: 3, .. }
            )),
            other => panic!("expected unequal lengths, got {other:?}"),
        }

        let bad_zone = format!("{HEADER}\nx,1,US,1,true,false,false,1,1\n");
        assert!(matches!(
            parse_records(&bad_zone),
            Err(DatasetError::InvalidRecord { line: 2, .. })
        ));

        let bad_flag = format!("{HEADER}\n1,1,US,1,yes,false,false,1,1\n");
        let err = parse_records(&bad_flag).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { line: 2, .. }));
        assert!(err.to_string().contains("'yes' is not a boolean"));
    }

    #[test]
    fn rejects_text_after_closing_quote() {
        // the quoted code and the trailing digit decode as one field "447"
        let table = format!("{HEADER}\n4,\"44\"7,GB,44,true,false,false,2,2\n");
        assert!(matches!(
            parse_records(&table),
            Err(DatasetError::InconsistentRecord { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_rows_disagreeing_with_their_country_code() {
        let wrong_prefix_len = format!("{HEADER}\n4,44,GB,4420,true,false,false,2,3\n");
        let foreign_prefix = format!("{HEADER}\n4,44,GB,3320,true,false,false,2,4\n");
        for table in [wrong_prefix_len, foreign_prefix] {
            assert!(matches!(
                parse_records(&table),
                Err(DatasetError::InconsistentRecord { line: 2, .. })
            ));
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_records("/nonexistent/prefix_data.csv"),
            Err(DatasetError::IO(_))
        ));
    }
}
