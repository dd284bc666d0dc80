use anyhow::Result;
use std::env;
use std::path::Path;

use estate_insights::{clean, load_csv, render_all, ChartData, DatasetOverview};

/// Default dataset file, next to the binary's working directory.
const DEFAULT_DATASET: &str = "Real_Estate_Sales_2001-2022_GL.csv";

/// Output directory for the rendered charts.
const IMAGES_DIR: &str = "images";

/// How many rows the head/tail previews show.
const PREVIEW_ROWS: usize = 5;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let dataset = args.get(1).map(String::as_str).unwrap_or(DEFAULT_DATASET);

    println!("🏠 Real Estate Sales — Exploratory Analysis");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load the dataset
    println!("\n📂 Loading {}...", dataset);
    let raw = load_csv(Path::new(dataset))?;
    println!("✓ Loaded {} rows", raw.len());

    // 2. Data overview
    println!("\n📋 DATA OVERVIEW");
    println!("\nFirst {} rows:", PREVIEW_ROWS);
    for row in raw.iter().take(PREVIEW_ROWS) {
        println!("  {}", row.summary_line());
    }
    println!("\nLast {} rows:", PREVIEW_ROWS);
    for row in raw.iter().rev().take(PREVIEW_ROWS).rev() {
        println!("  {}", row.summary_line());
    }
    println!();
    print!("{}", DatasetOverview::scan(&raw));

    // 3. Clean
    println!("\n🧹 Cleaning...");
    let (sales, report) = clean(raw);
    println!("✓ {}", report.summary());

    // 4. Aggregate + render
    println!("\n📈 Rendering charts...");
    let data = ChartData::build(&sales)?;
    let written = render_all(Path::new(IMAGES_DIR), &data)?;
    for path in &written {
        println!("  ✓ {}", path.display());
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 Wrote {} images to {}/", written.len(), IMAGES_DIR);

    Ok(())
}
