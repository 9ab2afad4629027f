//! Writes one table's data to a UTF-8 CSV file in the scratch directory.

use crate::domain::entities::TableData;
use crate::domain::errors::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the header record then every row to `path`, flushing on completion.
///
/// NULL cells render as empty fields. Returns the row count for the run
/// summary.
pub fn write_artifact(path: &Path, data: &TableData) -> Result<u64> {
    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(128 * 1024, file);
    let mut wtr = WriterBuilder::new().from_writer(buf_writer);

    wtr.write_record(&data.columns)?;

    let mut count = 0;
    for row in &data.rows {
        let record: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
        wtr.write_record(&record)?;
        count += 1;
    }

    wtr.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> TableData {
        TableData {
            columns: vec!["id".into(), "status".into(), "note".into()],
            rows: vec![
                vec![Some("1".into()), Some("CONFIRMED".into()), None],
                vec![Some("2".into()), Some("PENDING".into()), Some("rush, please".into())],
            ],
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vic_db.orders_20260829143000.csv");

        let rows = write_artifact(&path, &sample_data()).unwrap();
        assert_eq!(rows, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("id,status,note"));
        assert_eq!(lines.next(), Some("1,CONFIRMED,"));
        // Fields containing the delimiter get quoted.
        assert_eq!(lines.next(), Some("2,PENDING,\"rush, please\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_table_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let data = TableData {
            columns: vec!["id".into(), "name".into()],
            rows: vec![],
        };
        let rows = write_artifact(&path, &data).unwrap();
        assert_eq!(rows, 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "id,name");
    }
}
