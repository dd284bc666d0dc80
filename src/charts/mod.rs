// 📈 Chart rendering - eight descriptive charts plus a combined dashboard
//
// Every chart draws onto a caller-supplied drawing area so the same code
// renders both the standalone PNGs and the 2x4 dashboard cells.

pub mod style;

mod bars;
mod combo;
mod dashboard;
mod heatmap;
mod line;
mod pie;

use crate::aggregate::{
    correlation_matrix, property_type_totals, residential_breakdown, restrict_to_towns,
    top_towns, town_counts, town_mean_ratio, town_sale_totals, yearly_totals,
    CorrelationMatrix, ResidentialBreakdown, YearlySales, TOP_PROPERTY_TYPES, TOP_TOWNS,
};
use crate::cleaning::Sale;
use anyhow::{bail, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Standalone chart canvas size (pixels).
pub const CHART_SIZE: (u32, u32) = (1200, 800);

/// Dashboard canvas size: a 2x4 grid of full-size cells.
pub const DASHBOARD_SIZE: (u32, u32) = (3840, 1920);

/// Output file names, one per chart plus the dashboard.
pub const LINE_CHART: &str = "line_chart.png";
pub const STACKED_BAR_CHART: &str = "stacked_bar_chart.png";
pub const HEATMAP: &str = "heatmap.png";
pub const VERTICAL_BAR_CHART: &str = "vertical_bar_chart.png";
pub const HORIZONTAL_BAR_CHART: &str = "horizontal_bar_chart.png";
pub const PIE_CHART: &str = "pie_chart.png";
pub const COMBO_CHART: &str = "combo_chart.png";
pub const COUNT_PLOT: &str = "count_plot.png";
pub const COMPLETE_DASHBOARD: &str = "complete_dashboard.png";

/// ChartData - every aggregate view the charts need, computed once
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Per-year sale and assessed totals (line chart + combo chart).
    pub yearly: Vec<YearlySales>,
    /// Residential-type counts for the top towns (stacked bar chart).
    pub residential: ResidentialBreakdown,
    /// Correlation of the three numeric columns (heatmap).
    pub correlation: CorrelationMatrix,
    /// Sale totals for the top towns, descending (vertical bar chart).
    pub town_totals: Vec<(String, f64)>,
    /// Mean sales ratio for the top towns, ascending (horizontal bar chart).
    pub town_ratios: Vec<(String, f64)>,
    /// Sale totals for the top property types, by name (pie chart).
    pub property_totals: Vec<(String, f64)>,
    /// Row counts for the top towns, descending (count plot).
    pub town_counts: Vec<(String, u64)>,
}

impl ChartData {
    /// Aggregate a cleaned dataset into chart-ready views.
    pub fn build(sales: &[Sale]) -> Result<Self> {
        if sales.is_empty() {
            bail!("No rows survived cleaning; nothing to chart");
        }

        let towns = top_towns(sales, TOP_TOWNS);
        let in_top_towns = restrict_to_towns(sales, &towns);

        Ok(ChartData {
            yearly: yearly_totals(sales),
            residential: residential_breakdown(&in_top_towns),
            correlation: correlation_matrix(sales),
            town_totals: town_sale_totals(&in_top_towns),
            town_ratios: town_mean_ratio(&in_top_towns),
            property_totals: property_type_totals(sales, TOP_PROPERTY_TYPES),
            town_counts: town_counts(&in_top_towns),
        })
    }
}

/// Render the eight standalone charts plus the dashboard into `dir`,
/// creating the directory if needed. Returns the written paths in order.
pub fn render_all(dir: &Path, data: &ChartData) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut written = Vec::new();

    written.push(single_chart(dir, LINE_CHART, |area| {
        line::draw(area, &data.yearly)
    })?);
    written.push(single_chart(dir, STACKED_BAR_CHART, |area| {
        bars::draw_stacked(area, &data.residential)
    })?);
    written.push(single_chart(dir, HEATMAP, |area| {
        heatmap::draw(area, &data.correlation)
    })?);
    written.push(single_chart(dir, VERTICAL_BAR_CHART, |area| {
        bars::draw_town_totals(area, &data.town_totals)
    })?);
    written.push(single_chart(dir, HORIZONTAL_BAR_CHART, |area| {
        bars::draw_town_ratios(area, &data.town_ratios)
    })?);
    written.push(single_chart(dir, PIE_CHART, |area| {
        pie::draw(area, &data.property_totals)
    })?);
    written.push(single_chart(dir, COMBO_CHART, |area| {
        combo::draw(area, &data.yearly)
    })?);
    written.push(single_chart(dir, COUNT_PLOT, |area| {
        bars::draw_town_counts(area, &data.town_counts)
    })?);

    let dashboard_path = dir.join(COMPLETE_DASHBOARD);
    dashboard::render(&dashboard_path, data)
        .with_context(|| format!("Failed to render {}", COMPLETE_DASHBOARD))?;
    written.push(dashboard_path);

    Ok(written)
}

/// Render one chart into `dir/name` on a standalone canvas.
fn single_chart<F>(dir: &Path, name: &str, draw: F) -> Result<PathBuf>
where
    F: for<'a, 'b> FnOnce(&'b DrawingArea<BitMapBackend<'a>, Shift>) -> Result<()>,
{
    let path = dir.join(name);
    {
        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        draw(&root).with_context(|| format!("Failed to render {}", name))?;
        root.present()
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
