// End-to-end pipeline test: load a fixture CSV, clean it, and render the
// full chart set into a temporary directory.

use estate_insights::{clean, load_csv, render_all, ChartData};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

const HEADER: &str = "Serial Number,List Year,Date Recorded,Town,Assessed Value,Sale Amount,Sales Ratio,Property Type,Residential Type";

const EXPECTED_IMAGES: [&str; 9] = [
    "line_chart.png",
    "stacked_bar_chart.png",
    "heatmap.png",
    "vertical_bar_chart.png",
    "horizontal_bar_chart.png",
    "pie_chart.png",
    "combo_chart.png",
    "count_plot.png",
    "complete_dashboard.png",
];

fn write_fixture_csv(dir: &std::path::Path) -> std::path::PathBuf {
    let towns = ["Avon", "Bristol", "Canton", "Danbury"];
    let residential = ["Single Family", "Condo", "Two Family"];
    let properties = ["Residential", "Commercial", "Apartments"];

    let path = dir.join("sales.csv");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();

    // A spread of plausible rows across four towns and three years
    let mut serial = 1u64;
    for year in 2019..=2021 {
        for (t, town) in towns.iter().enumerate() {
            for k in 0..4 {
                let sale = 150_000.0 + (t as f64) * 90_000.0 + (k as f64) * 35_000.0;
                let assessed = sale * 0.7;
                let ratio = 0.6 + (k as f64) * 0.05;
                writeln!(
                    file,
                    "{},{},01/1{}/20{},{},{},{},{},{},{}",
                    serial,
                    year,
                    k + 1,
                    year - 2000 + 1,
                    town,
                    assessed,
                    sale,
                    ratio,
                    properties[k % 3],
                    residential[(t + k) % 3],
                )
                .unwrap();
                serial += 1;
            }
        }
    }

    // Rows the cleaning pass must reject
    writeln!(file, "{},2020,01/01/2021,,100000.0,200000.0,0.5,Residential,Condo", serial).unwrap();
    writeln!(
        file,
        "{},2020,01/01/2021,Avon,-1.0,200000.0,0.5,Residential,Condo",
        serial + 1
    )
    .unwrap();

    file.flush().unwrap();
    path
}

#[test]
fn test_full_pipeline_writes_all_nine_images() {
    let dir = tempdir().unwrap();
    let csv_path = write_fixture_csv(dir.path());

    let raw = load_csv(&csv_path).unwrap();
    assert_eq!(raw.len(), 50);

    let (sales, report) = clean(raw);
    assert_eq!(report.dropped_invalid, 2);
    assert_eq!(report.retained, 48);

    let data = ChartData::build(&sales).unwrap();
    let out_dir = dir.path().join("images");
    let written = render_all(&out_dir, &data).unwrap();

    assert_eq!(written.len(), EXPECTED_IMAGES.len());
    for name in EXPECTED_IMAGES {
        let path = out_dir.join(name);
        let meta = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("missing image: {}", path.display()));
        assert!(meta.len() > 0, "empty image: {}", path.display());
    }
}

#[test]
fn test_pipeline_aggregates_match_hand_computed_values() {
    let dir = tempdir().unwrap();
    let csv_path = write_fixture_csv(dir.path());

    let raw = load_csv(&csv_path).unwrap();
    let (sales, _) = clean(raw);
    let data = ChartData::build(&sales).unwrap();

    // Every town sells 4 rows/year: 150k+185k+220k+255k base plus the town
    // offset of 90k per row. Yearly total over 4 towns =
    // 4 * 810k + (0+1+2+3) * 4 * 90k = 5.4m, in millions after rescale.
    assert_eq!(data.yearly.len(), 3);
    for yearly in &data.yearly {
        assert!((yearly.sale_total - 5.4).abs() < 1e-9);
        assert!((yearly.assessed_total - 5.4 * 0.7).abs() < 1e-9);
    }

    // Danbury has the largest town offset, so it leads the totals:
    // per year 600k + 3*360k + 210k = 1.89m, times 3 years
    assert_eq!(data.town_totals[0].0, "Danbury");
    assert!((data.town_totals[0].1 - 5.67).abs() < 1e-9);

    // Ratios are identical across towns: 12 rows each of 0.6/0.65/0.7/0.75
    for (_, ratio) in &data.town_ratios {
        assert!((ratio - 0.675).abs() < 1e-9);
    }

    // 12 valid rows per town survive cleaning
    for (_, count) in &data.town_counts {
        assert_eq!(*count, 12);
    }
}

#[test]
fn test_render_all_creates_output_directory() {
    let dir = tempdir().unwrap();
    let csv_path = write_fixture_csv(dir.path());

    let raw = load_csv(&csv_path).unwrap();
    let (sales, _) = clean(raw);
    let data = ChartData::build(&sales).unwrap();

    let nested = dir.path().join("deep").join("nested").join("images");
    assert!(!nested.exists());
    render_all(&nested, &data).unwrap();
    assert!(nested.is_dir());
}
