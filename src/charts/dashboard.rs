// Complete dashboard: the eight charts on one 2x4 canvas

use super::{bars, combo, heatmap, line, pie, ChartData, DASHBOARD_SIZE};
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

pub(super) fn render(path: &Path, data: &ChartData) -> Result<()> {
    let root = BitMapBackend::new(path, DASHBOARD_SIZE).into_drawing_area();
    root.fill(&BLACK)?;

    let cells = root.split_evenly((2, 4));

    // Same layout as the standalone files, reading order
    line::draw(&cells[0], &data.yearly).context("dashboard: line chart")?;
    bars::draw_stacked(&cells[1], &data.residential).context("dashboard: stacked bars")?;
    heatmap::draw(&cells[2], &data.correlation).context("dashboard: heatmap")?;
    bars::draw_town_totals(&cells[3], &data.town_totals).context("dashboard: town totals")?;
    bars::draw_town_ratios(&cells[4], &data.town_ratios).context("dashboard: town ratios")?;
    pie::draw(&cells[5], &data.property_totals).context("dashboard: pie chart")?;
    combo::draw(&cells[6], &data.yearly).context("dashboard: combo chart")?;
    bars::draw_town_counts(&cells[7], &data.town_counts).context("dashboard: count plot")?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
