// 🧹 Data cleaning - sanity predicates, outlier removal, rescaling
//
// The pipeline applies three passes in a fixed order:
//   1. sanity predicates (drop rows with missing/negative key fields)
//   2. z-score outlier removal on the sales ratio (keep |z| < 3)
//   3. rescale the two monetary columns to millions

use crate::record::{RawSale, DATE_RECORDED_FORMAT};
use crate::stats::z_scores;
use chrono::NaiveDate;
use serde::Serialize;

/// Rows with a sales-ratio z-score at or beyond this are dropped.
pub const OUTLIER_Z_LIMIT: f64 = 3.0;

/// Divisor turning dollars into millions.
pub const MILLION: f64 = 1_000_000.0;

/// Sale - a row that passed the sanity predicates
///
/// Key fields are no longer optional; monetary amounts are in millions after
/// `clean` finishes. Property and residential types stay optional because the
/// dataset legitimately leaves them blank (non-residential rows).
#[derive(Debug, Clone, Serialize)]
pub struct Sale {
    pub list_year: i32,
    pub town: String,
    pub property_type: Option<String>,
    pub residential_type: Option<String>,
    pub assessed_value: f64,
    pub sale_amount: f64,
    pub sales_ratio: f64,
    pub date_recorded: Option<NaiveDate>,
}

/// CleanReport - what the cleaning passes did to the dataset
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub loaded: usize,
    pub dropped_invalid: usize,
    pub dropped_outliers: usize,
    pub retained: usize,
}

impl CleanReport {
    pub fn summary(&self) -> String {
        format!(
            "Retained {} of {} rows ({} failed sanity checks, {} ratio outliers)",
            self.retained, self.loaded, self.dropped_invalid, self.dropped_outliers
        )
    }
}

/// Check the sanity predicates: present and non-negative numeric fields,
/// present and non-empty town.
pub fn is_valid(raw: &RawSale) -> bool {
    let year_ok = matches!(raw.list_year, Some(y) if y >= 0);
    let town_ok = matches!(raw.town.as_deref(), Some(t) if !t.trim().is_empty());
    let sale_ok = matches!(raw.sale_amount, Some(v) if v >= 0.0);
    let assessed_ok = matches!(raw.assessed_value, Some(v) if v >= 0.0);
    let ratio_ok = matches!(raw.sales_ratio, Some(v) if v >= 0.0);

    year_ok && town_ok && sale_ok && assessed_ok && ratio_ok
}

/// Promote a raw row to a `Sale`. Returns None if any predicate fails.
///
/// `Date Recorded` is parsed on a best-effort basis: a blank or unparseable
/// date never rejects the row (the cleaning rules do not cover it).
fn promote(raw: &RawSale) -> Option<Sale> {
    if !is_valid(raw) {
        return None;
    }

    let date_recorded = raw
        .date_recorded
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_RECORDED_FORMAT).ok());

    Some(Sale {
        list_year: raw.list_year?,
        town: raw.town.clone()?,
        property_type: raw.property_type.clone(),
        residential_type: raw.residential_type.clone(),
        assessed_value: raw.assessed_value?,
        sale_amount: raw.sale_amount?,
        sales_ratio: raw.sales_ratio?,
        date_recorded,
    })
}

/// Run the three cleaning passes and report what was dropped.
pub fn clean(raw_rows: Vec<RawSale>) -> (Vec<Sale>, CleanReport) {
    let loaded = raw_rows.len();

    // Pass 1: sanity predicates
    let valid: Vec<Sale> = raw_rows.iter().filter_map(promote).collect();
    let dropped_invalid = loaded - valid.len();

    // Pass 2: z-score outlier removal on the sales ratio
    let ratios: Vec<f64> = valid.iter().map(|s| s.sales_ratio).collect();
    let scores = z_scores(&ratios);
    let mut sales: Vec<Sale> = valid
        .into_iter()
        .zip(scores)
        .filter(|(_, z)| z.abs() < OUTLIER_Z_LIMIT)
        .map(|(sale, _)| sale)
        .collect();
    let dropped_outliers = loaded - dropped_invalid - sales.len();

    // Pass 3: dollars -> millions
    for sale in &mut sales {
        sale.sale_amount /= MILLION;
        sale.assessed_value /= MILLION;
    }

    let report = CleanReport {
        loaded,
        dropped_invalid,
        dropped_outliers,
        retained: sales.len(),
    };

    (sales, report)
}

// ============================================================================
// TESTS
// ============================================================================
