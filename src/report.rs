// 🔎 Dataset overview - shape, missing values, numeric summaries
//
// Mirrors the exploratory printout an analyst runs before cleaning: row
// count, per-column missing counts, describe-style numeric summaries, and
// unique category counts.

use crate::record::{RawSale, DATE_RECORDED_FORMAT};
use crate::stats::{mean, std_dev};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// Count / mean / std / min / max for one numeric column, computed over the
/// values that are present.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn describe(name: &'static str, values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        ColumnSummary {
            name,
            count: values.len(),
            mean: mean(values),
            std: std_dev(values),
            min: if values.is_empty() { 0.0 } else { min },
            max: if values.is_empty() { 0.0 } else { max },
        }
    }
}

/// Per-column missing-value counts for the fields the pipeline cares about.
#[derive(Debug, Clone, Default)]
pub struct MissingCounts {
    pub list_year: usize,
    pub town: usize,
    pub assessed_value: usize,
    pub sale_amount: usize,
    pub sales_ratio: usize,
    pub property_type: usize,
    pub residential_type: usize,
}

/// DatasetOverview - what the raw dataset looks like before cleaning
#[derive(Debug, Clone)]
pub struct DatasetOverview {
    pub rows: usize,
    pub missing: MissingCounts,
    pub numeric: Vec<ColumnSummary>,
    pub unique_towns: usize,
    pub unique_property_types: usize,
    pub recorded_range: Option<(NaiveDate, NaiveDate)>,
}

impl DatasetOverview {
    /// Scan the raw rows once and collect every overview statistic.
    pub fn scan(rows: &[RawSale]) -> Self {
        let mut missing = MissingCounts::default();
        let mut towns: BTreeSet<&str> = BTreeSet::new();
        let mut property_types: BTreeSet<&str> = BTreeSet::new();
        let mut assessed = Vec::new();
        let mut amounts = Vec::new();
        let mut ratios = Vec::new();
        let mut dates: Vec<NaiveDate> = Vec::new();

        for row in rows {
            if row.list_year.is_none() {
                missing.list_year += 1;
            }
            match row.town.as_deref() {
                Some(town) if !town.trim().is_empty() => {
                    towns.insert(town);
                }
                _ => missing.town += 1,
            }
            match row.assessed_value {
                Some(v) => assessed.push(v),
                None => missing.assessed_value += 1,
            }
            match row.sale_amount {
                Some(v) => amounts.push(v),
                None => missing.sale_amount += 1,
            }
            match row.sales_ratio {
                Some(v) => ratios.push(v),
                None => missing.sales_ratio += 1,
            }
            match row.property_type.as_deref() {
                Some(p) if !p.is_empty() => {
                    property_types.insert(p);
                }
                _ => missing.property_type += 1,
            }
            if row.residential_type.is_none() {
                missing.residential_type += 1;
            }
            if let Some(date) = row
                .date_recorded
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_RECORDED_FORMAT).ok())
            {
                dates.push(date);
            }
        }

        let recorded_range = match (dates.iter().min(), dates.iter().max()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        };

        DatasetOverview {
            rows: rows.len(),
            missing,
            numeric: vec![
                ColumnSummary::describe("Assessed Value", &assessed),
                ColumnSummary::describe("Sale Amount", &amounts),
                ColumnSummary::describe("Sales Ratio", &ratios),
            ],
            unique_towns: towns.len(),
            unique_property_types: property_types.len(),
            recorded_range,
        }
    }
}

impl fmt::Display for DatasetOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Unique towns: {}", self.unique_towns)?;
        writeln!(f, "Unique property types: {}", self.unique_property_types)?;
        if let Some((first, last)) = self.recorded_range {
            writeln!(f, "Recorded dates: {} → {}", first, last)?;
        }

        writeln!(f, "\nMissing values per column:")?;
        writeln!(f, "  List Year        {}", self.missing.list_year)?;
        writeln!(f, "  Town             {}", self.missing.town)?;
        writeln!(f, "  Assessed Value   {}", self.missing.assessed_value)?;
        writeln!(f, "  Sale Amount      {}", self.missing.sale_amount)?;
        writeln!(f, "  Sales Ratio      {}", self.missing.sales_ratio)?;
        writeln!(f, "  Property Type    {}", self.missing.property_type)?;
        writeln!(f, "  Residential Type {}", self.missing.residential_type)?;

        writeln!(f, "\nSummary statistics:")?;
        writeln!(
            f,
            "  {:<16} {:>8} {:>14} {:>14} {:>14} {:>14}",
            "column", "count", "mean", "std", "min", "max"
        )?;
        for col in &self.numeric {
            writeln!(
                f,
                "  {:<16} {:>8} {:>14.3} {:>14.3} {:>14.3} {:>14.3}",
                col.name, col.count, col.mean, col.std, col.min, col.max
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
