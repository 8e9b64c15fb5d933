//! CSV record loading for batch generation.
//!
//! One CSV row per contract. Headers are matched against placeholder
//! tokens, which extraction lowercases, so headers are trimmed and
//! lowercased here too. Every value is read as a string; missing cells
//! become empty strings, mirroring how absent fields substitute.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::generator::FieldValues;

/// Read contract records from a CSV file, in row order.
///
/// # Arguments
/// * `path` - Path of the CSV file (first row is the header)
///
/// # Returns
/// One field-value map per data row.
pub fn read_records(path: &Path) -> Result<Vec<FieldValues>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut values: FieldValues = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).unwrap_or_default();
            values.insert(header.clone(), value.to_string());
        }
        records.push(values);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(content.as_bytes()).expect("writable");
        file
    }

    #[test]
    fn test_rows_in_order_with_lowercased_headers() {
        let file = write_csv(
            "Buyer_Name, Estimated_Value\n\
             Jane Roe,350000\n\
             John Doe,275000\n",
        );

        let records = read_records(file.path()).expect("readable");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["buyer_name"], "Jane Roe");
        assert_eq!(records[0]["estimated_value"], "350000");
        assert_eq!(records[1]["buyer_name"], "John Doe");
    }

    #[test]
    fn test_short_rows_read_as_empty_strings() {
        let file = write_csv(
            "buyer_name,estimated_value,closing_date\n\
             Jane Roe,350000\n",
        );

        let records = read_records(file.path()).expect("readable");
        assert_eq!(records[0]["closing_date"], "");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_records(Path::new("/nonexistent/records.csv")).unwrap_err();
        assert!(err.to_string().contains("CSV"));
    }
}
