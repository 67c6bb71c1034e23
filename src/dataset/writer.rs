use std::io::Write;

use csv::WriterBuilder;

use super::{DatasetError, COLUMNS};
use crate::PrefixRecord;

/// Writes records as a prefix table, header first, in a form
/// [`super::read_records`] reads back. The header is written even when
/// there are no records.
pub fn write_records<'a, W: Write>(
    records: impl IntoIterator<Item = &'a PrefixRecord>,
    output: W,
) -> Result<(), DatasetError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::parse_records, NumberKind};

    fn write_to_string(records: &[PrefixRecord]) -> String {
        let mut out = Vec::new();
        write_records(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn written_table_reads_back() {
        let records = vec![
            PrefixRecord::new(4, "44", "GB", "44").with_kind(NumberKind::Geographic),
            PrefixRecord::new(8, "881", "Iridium, Inc", "8816").with_kind(NumberKind::Satellite),
        ];
        let table = write_to_string(&records);

        assert!(table.starts_with("zone_id,country_code,region_code,number_prefix,"));
        assert!(table.contains("8,881,\"Iridium, Inc\",8816,false,false,true,3,4\n"));
        assert_eq!(parse_records(&table).unwrap(), records);
    }

    #[test]
    fn line_breaks_in_labels_survive() {
        let records = vec![
            PrefixRecord::new(8, "881", "Iridium\nInc", "8816").with_kind(NumberKind::Satellite),
            PrefixRecord::new(8, "882", "Thuraya\r\nSat", "88216").with_kind(NumberKind::Satellite),
        ];
        let table = write_to_string(&records);

        assert!(table.contains("\"Iridium\nInc\""));
        assert_eq!(parse_records(&table).unwrap(), records);
    }

    #[test]
    fn empty_table_keeps_header() {
        let table = write_to_string(&[]);
        assert_eq!(table, format!("{}\n", COLUMNS.join(",")));
        assert!(parse_records(&table).unwrap().is_empty());
    }
}
