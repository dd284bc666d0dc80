// 📂 Raw dataset records - CSV loading
// One row of the Connecticut "Real Estate Sales 2001-2022" dataset

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Date format of the dataset's `Date Recorded` column.
pub const DATE_RECORDED_FORMAT: &str = "%m/%d/%Y";

/// RawSale - one CSV row exactly as loaded
///
/// Every field is optional: the dataset leaves cells blank, and blank cells
/// must survive loading so the cleaning predicates can reject them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSale {
    #[serde(rename = "Serial Number", default)]
    pub serial_number: Option<u64>,

    #[serde(rename = "List Year", default)]
    pub list_year: Option<i32>,

    #[serde(rename = "Date Recorded", default)]
    pub date_recorded: Option<String>,

    #[serde(rename = "Town", default)]
    pub town: Option<String>,

    #[serde(rename = "Assessed Value", default)]
    pub assessed_value: Option<f64>,

    #[serde(rename = "Sale Amount", default)]
    pub sale_amount: Option<f64>,

    #[serde(rename = "Sales Ratio", default)]
    pub sales_ratio: Option<f64>,

    #[serde(rename = "Property Type", default)]
    pub property_type: Option<String>,

    #[serde(rename = "Residential Type", default)]
    pub residential_type: Option<String>,
}

impl RawSale {
    /// One-line rendering for head/tail previews
    pub fn summary_line(&self) -> String {
        format!(
            "{:>8}  {:>4}  {:<20} {:<24} sale={:<12} assessed={:<12} ratio={}",
            self.serial_number
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.list_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.town.as_deref().unwrap_or("-"),
            self.property_type.as_deref().unwrap_or("-"),
            self.sale_amount
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string()),
            self.assessed_value
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string()),
            self.sales_ratio
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string()),
        )
    }
}

/// Load the dataset from a CSV file with a header row
///
/// Column names are matched by header, so extra columns in the source file
/// (address, remarks, location, ...) are ignored. A structurally malformed
/// record terminates the load: there is no row-level recovery.
pub fn load_csv(path: &Path) -> Result<Vec<RawSale>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut rows = Vec::new();
    for (line_num, result) in reader.deserialize::<RawSale>().enumerate() {
        let row = result.with_context(|| {
            // +2: 1-indexed plus the header row
            format!(
                "Failed to parse CSV line {} in {}",
                line_num + 2,
                path.display()
            )
        })?;
        rows.push(row);
    }

    Ok(rows)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE_HEADER: &str = "Serial Number,List Year,Date Recorded,Town,Assessed Value,Sale Amount,Sales Ratio,Property Type,Residential Type";

    fn write_fixture(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", FIXTURE_HEADER).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv_basic_row() {
        let file = write_fixture(&[
            "2020001,2020,09/13/2021,Ansonia,150500.0,325000.0,0.463,Residential,Single Family",
        ]);

        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.serial_number, Some(2020001));
        assert_eq!(row.list_year, Some(2020));
        assert_eq!(row.date_recorded.as_deref(), Some("09/13/2021"));
        assert_eq!(row.town.as_deref(), Some("Ansonia"));
        assert_eq!(row.assessed_value, Some(150500.0));
        assert_eq!(row.sale_amount, Some(325000.0));
        assert_eq!(row.sales_ratio, Some(0.463));
        assert_eq!(row.property_type.as_deref(), Some("Residential"));
        assert_eq!(row.residential_type.as_deref(), Some("Single Family"));
    }

    #[test]
    fn test_load_csv_blank_cells_become_none() {
        let file = write_fixture(&["2020002,2020,,,150500.0,,0.463,,"]);

        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.town, None);
        assert_eq!(row.sale_amount, None);
        assert_eq!(row.property_type, None);
        assert_eq!(row.residential_type, None);
        assert_eq!(row.date_recorded, None);
    }

    #[test]
    fn test_load_csv_ignores_unknown_columns() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{},Assessor Remarks", FIXTURE_HEADER).unwrap();
        writeln!(
            file,
            "1,2005,01/02/2006,Bristol,100000.0,200000.0,0.5,Residential,Condo,needs review"
        )
        .unwrap();
        file.flush().unwrap();

        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].town.as_deref(), Some("Bristol"));
        assert_eq!(rows[0].residential_type.as_deref(), Some("Condo"));
    }

    #[test]
    fn test_load_csv_missing_file_is_error() {
        let result = load_csv(Path::new("no_such_dataset.csv"));
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Failed to open dataset"));
    }

    #[test]
    fn test_load_csv_malformed_numeric_is_error() {
        let file = write_fixture(&[
            "1,2005,01/02/2006,Bristol,not-a-number,200000.0,0.5,Residential,Condo",
        ]);

        let result = load_csv(file.path());
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn test_summary_line_handles_missing_fields() {
        let row = RawSale {
            serial_number: None,
            list_year: Some(2010),
            date_recorded: None,
            town: Some("Avon".to_string()),
            assessed_value: None,
            sale_amount: Some(1000.0),
            sales_ratio: None,
            property_type: None,
            residential_type: None,
        };

        let line = row.summary_line();
        assert!(line.contains("Avon"));
        assert!(line.contains("2010"));
        assert!(line.contains("ratio=-"));
    }
}
