// Line chart: sum of sale amount per list year

use super::style;
use crate::aggregate::YearlySales;
use anyhow::{ensure, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    yearly: &[YearlySales],
) -> Result<()> {
    ensure!(!yearly.is_empty(), "Line chart has no data");

    area.fill(&BLACK)?;

    let first_year = yearly.first().map(|y| y.year).unwrap_or(0);
    let last_year = yearly.last().map(|y| y.year).unwrap_or(0);
    let max_total = yearly.iter().map(|y| y.sale_total).fold(0.0_f64, f64::max);
    // Keep the y-range non-degenerate when every total is zero
    let y_max = if max_total > 0.0 { max_total * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Sum of Sale Amount Over Years", style::title_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(first_year..last_year + 1, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("List Year")
        .y_desc("Sum of Sale Amount (Millions)")
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .bold_line_style(style::grid_line())
        .light_line_style(&TRANSPARENT)
        .draw()?;

    chart.draw_series(
        LineSeries::new(
            yearly.iter().map(|y| (y.year, y.sale_total)),
            style::LINE_YELLOW.stroke_width(2),
        )
        .point_size(4),
    )?;

    Ok(())
}
