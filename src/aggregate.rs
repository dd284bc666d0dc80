// 📊 Aggregations - the eight views behind the charts
//
// All group-bys run over BTreeMaps so output ordering is deterministic.
// Monetary values are already in millions when these run (see cleaning).

use crate::cleaning::Sale;
use crate::stats::pearson;
use std::collections::BTreeMap;

/// How many towns the town-level charts keep.
pub const TOP_TOWNS: usize = 10;

/// How many property types the pie chart keeps.
pub const TOP_PROPERTY_TYPES: usize = 5;

/// Per-year totals of both monetary columns.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySales {
    pub year: i32,
    pub sale_total: f64,
    pub assessed_total: f64,
}

/// Sale amount and assessed value sums per list year, sorted by year.
pub fn yearly_totals(sales: &[Sale]) -> Vec<YearlySales> {
    let mut by_year: BTreeMap<i32, (f64, f64)> = BTreeMap::new();
    for sale in sales {
        let entry = by_year.entry(sale.list_year).or_insert((0.0, 0.0));
        entry.0 += sale.sale_amount;
        entry.1 += sale.assessed_value;
    }

    by_year
        .into_iter()
        .map(|(year, (sale_total, assessed_total))| YearlySales {
            year,
            sale_total,
            assessed_total,
        })
        .collect()
}

/// Sale amount sum per town, descending by total (town name breaks ties).
pub fn town_sale_totals(sales: &[Sale]) -> Vec<(String, f64)> {
    let mut by_town: BTreeMap<&str, f64> = BTreeMap::new();
    for sale in sales {
        *by_town.entry(sale.town.as_str()).or_insert(0.0) += sale.sale_amount;
    }

    let mut totals: Vec<(String, f64)> = by_town
        .into_iter()
        .map(|(town, total)| (town.to_string(), total))
        .collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// The `n` towns with the largest sale amount sums.
pub fn top_towns(sales: &[Sale], n: usize) -> Vec<String> {
    town_sale_totals(sales)
        .into_iter()
        .take(n)
        .map(|(town, _)| town)
        .collect()
}

/// Restrict the dataset to rows from the given towns.
pub fn restrict_to_towns(sales: &[Sale], towns: &[String]) -> Vec<Sale> {
    sales
        .iter()
        .filter(|s| towns.iter().any(|t| *t == s.town))
        .cloned()
        .collect()
}

/// Mean sales ratio per town, ascending by ratio.
pub fn town_mean_ratio(sales: &[Sale]) -> Vec<(String, f64)> {
    let mut by_town: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for sale in sales {
        let entry = by_town.entry(sale.town.as_str()).or_insert((0.0, 0));
        entry.0 += sale.sales_ratio;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = by_town
        .into_iter()
        .map(|(town, (sum, count))| (town.to_string(), sum / count as f64))
        .collect();
    means.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    means
}

/// Sale amount sums for the top `n` property types, reported in name order.
/// Rows without a property type are excluded.
pub fn property_type_totals(sales: &[Sale], n: usize) -> Vec<(String, f64)> {
    let mut by_type: BTreeMap<&str, f64> = BTreeMap::new();
    for sale in sales {
        if let Some(property_type) = sale.property_type.as_deref() {
            *by_type.entry(property_type).or_insert(0.0) += sale.sale_amount;
        }
    }

    let mut totals: Vec<(String, f64)> = by_type
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(n);
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
}

/// Row count per town, descending by count (town name breaks ties).
pub fn town_counts(sales: &[Sale]) -> Vec<(String, u64)> {
    let mut by_town: BTreeMap<&str, u64> = BTreeMap::new();
    for sale in sales {
        *by_town.entry(sale.town.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, u64)> = by_town
        .into_iter()
        .map(|(town, count)| (town.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Residential-type counts per town for the stacked bar chart.
///
/// `counts[town_index][type_index]`; towns and types are alphabetical and
/// missing combinations are zero. Rows without a residential type are not
/// counted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentialBreakdown {
    pub towns: Vec<String>,
    pub types: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}

pub fn residential_breakdown(sales: &[Sale]) -> ResidentialBreakdown {
    let mut cells: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let mut towns: BTreeMap<&str, ()> = BTreeMap::new();
    let mut types: BTreeMap<&str, ()> = BTreeMap::new();

    for sale in sales {
        towns.insert(sale.town.as_str(), ());
        if let Some(residential) = sale.residential_type.as_deref() {
            types.insert(residential, ());
            *cells.entry((sale.town.as_str(), residential)).or_insert(0) += 1;
        }
    }

    let towns: Vec<String> = towns.keys().map(|t| t.to_string()).collect();
    let types: Vec<String> = types.keys().map(|t| t.to_string()).collect();

    let counts = towns
        .iter()
        .map(|town| {
            types
                .iter()
                .map(|ty| {
                    cells
                        .get(&(town.as_str(), ty.as_str()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    ResidentialBreakdown { towns, types, counts }
}

/// Pearson correlation matrix of the three numeric columns.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: [&'static str; 3],
    pub values: [[f64; 3]; 3],
}

pub fn correlation_matrix(sales: &[Sale]) -> CorrelationMatrix {
    let columns: [Vec<f64>; 3] = [
        sales.iter().map(|s| s.assessed_value).collect(),
        sales.iter().map(|s| s.sale_amount).collect(),
        sales.iter().map(|s| s.sales_ratio).collect(),
    ];

    let mut values = [[0.0; 3]; 3];
    for (i, xs) in columns.iter().enumerate() {
        for (j, ys) in columns.iter().enumerate() {
            values[i][j] = pearson(xs, ys);
        }
    }

    CorrelationMatrix {
        labels: ["Assessed Value", "Sale Amount", "Sales Ratio"],
        values,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(year: i32, town: &str, property: Option<&str>, residential: Option<&str>, assessed: f64, amount: f64, ratio: f64) -> Sale {
        Sale {
            list_year: year,
            town: town.to_string(),
            property_type: property.map(str::to_string),
            residential_type: residential.map(str::to_string),
            assessed_value: assessed,
            sale_amount: amount,
            sales_ratio: ratio,
            date_recorded: None,
        }
    }

    fn fixture() -> Vec<Sale> {
        vec![
            sale(2020, "Avon", Some("Residential"), Some("Single Family"), 0.10, 0.20, 0.50),
            sale(2020, "Avon", Some("Residential"), Some("Condo"), 0.05, 0.10, 0.50),
            sale(2021, "Avon", Some("Commercial"), None, 0.40, 0.80, 0.50),
            sale(2020, "Bristol", Some("Residential"), Some("Single Family"), 0.20, 0.50, 0.40),
            sale(2021, "Bristol", None, None, 0.10, 0.25, 0.40),
            sale(2021, "Canton", Some("Apartments"), Some("Single Family"), 0.03, 0.05, 0.60),
        ]
    }

    #[test]
    fn test_yearly_totals_sums_and_sorts() {
        let years = yearly_totals(&fixture());
        assert_eq!(years.len(), 2);

        assert_eq!(years[0].year, 2020);
        assert!((years[0].sale_total - 0.80).abs() < 1e-12); // 0.20 + 0.10 + 0.50
        assert!((years[0].assessed_total - 0.35).abs() < 1e-12);

        assert_eq!(years[1].year, 2021);
        assert!((years[1].sale_total - 1.10).abs() < 1e-12); // 0.80 + 0.25 + 0.05
        assert!((years[1].assessed_total - 0.53).abs() < 1e-12);
    }

    #[test]
    fn test_town_sale_totals_descending() {
        let totals = town_sale_totals(&fixture());
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].0, "Avon");
        assert!((totals[0].1 - 1.10).abs() < 1e-12);
        assert_eq!(totals[1].0, "Bristol");
        assert!((totals[1].1 - 0.75).abs() < 1e-12);
        assert_eq!(totals[2].0, "Canton");
    }

    #[test]
    fn test_top_towns_takes_largest() {
        assert_eq!(top_towns(&fixture(), 2), vec!["Avon", "Bristol"]);
        // Asking for more towns than exist returns all of them
        assert_eq!(top_towns(&fixture(), 10).len(), 3);
    }

    #[test]
    fn test_restrict_to_towns() {
        let subset = restrict_to_towns(&fixture(), &["Canton".to_string()]);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].town, "Canton");
    }

    #[test]
    fn test_town_mean_ratio_ascending() {
        let means = town_mean_ratio(&fixture());
        assert_eq!(means[0].0, "Bristol");
        assert!((means[0].1 - 0.40).abs() < 1e-12);
        assert_eq!(means[1].0, "Avon");
        assert!((means[1].1 - 0.50).abs() < 1e-12);
        assert_eq!(means[2].0, "Canton");
        assert!((means[2].1 - 0.60).abs() < 1e-12);
    }

    #[test]
    fn test_property_type_totals_top_n_in_name_order() {
        // Sums: Residential 0.80, Commercial 0.80, Apartments 0.05
        let totals = property_type_totals(&fixture(), 2);
        assert_eq!(totals.len(), 2);
        // Top 2 by total, then reported alphabetically
        assert_eq!(totals[0].0, "Commercial");
        assert_eq!(totals[1].0, "Residential");
        assert!((totals[1].1 - 0.80).abs() < 1e-12);
    }

    #[test]
    fn test_property_type_totals_skips_untyped_rows() {
        let totals = property_type_totals(&fixture(), 10);
        let sum: f64 = totals.iter().map(|(_, v)| v).sum();
        // The untyped Bristol row (0.25) is excluded
        assert!((sum - 1.65).abs() < 1e-12);
    }

    #[test]
    fn test_town_counts_descending_with_name_tiebreak() {
        let counts = town_counts(&fixture());
        assert_eq!(counts[0], ("Avon".to_string(), 3));
        assert_eq!(counts[1], ("Bristol".to_string(), 2));
        assert_eq!(counts[2], ("Canton".to_string(), 1));
    }

    #[test]
    fn test_residential_breakdown_matrix() {
        let breakdown = residential_breakdown(&fixture());
        assert_eq!(breakdown.towns, vec!["Avon", "Bristol", "Canton"]);
        assert_eq!(breakdown.types, vec!["Condo", "Single Family"]);

        // Avon: 1 Condo, 1 Single Family (the Commercial row has no type)
        assert_eq!(breakdown.counts[0], vec![1, 1]);
        // Bristol: 0 Condo, 1 Single Family
        assert_eq!(breakdown.counts[1], vec![0, 1]);
        // Canton: 0 Condo, 1 Single Family
        assert_eq!(breakdown.counts[2], vec![0, 1]);
    }

    #[test]
    fn test_correlation_matrix_diagonal_is_one() {
        let matrix = correlation_matrix(&fixture());
        for i in 0..3 {
            assert!((matrix.values[i][i] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_correlation_matrix_is_symmetric() {
        let matrix = correlation_matrix(&fixture());
        for i in 0..3 {
            for j in 0..3 {
                assert!((matrix.values[i][j] - matrix.values[j][i]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_correlation_assessed_tracks_sale_amount() {
        // Assessed value and sale amount move together in the fixture
        let matrix = correlation_matrix(&fixture());
        assert!(matrix.values[0][1] > 0.9);
    }
}
