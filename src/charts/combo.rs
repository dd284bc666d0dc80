// Dual-axis combo chart: assessed value bars (left axis) with a sale
// amount line (right axis), per list year

use super::style;
use crate::aggregate::YearlySales;
use anyhow::{ensure, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    yearly: &[YearlySales],
) -> Result<()> {
    ensure!(!yearly.is_empty(), "Combo chart has no data");

    area.fill(&BLACK)?;

    let first_year = yearly.first().map(|y| y.year).unwrap_or(0) as f64;
    let last_year = yearly.last().map(|y| y.year).unwrap_or(0) as f64;
    let x_range = (first_year - 0.5)..(last_year + 0.5);

    let assessed_max = yearly
        .iter()
        .map(|y| y.assessed_total)
        .fold(0.0_f64, f64::max);
    let sale_max = yearly.iter().map(|y| y.sale_total).fold(0.0_f64, f64::max);
    let left_max = if assessed_max > 0.0 { assessed_max * 1.05 } else { 1.0 };
    let right_max = if sale_max > 0.0 { sale_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Yearly Assessed Value vs Sales", style::title_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .right_y_label_area_size(72)
        .build_cartesian_2d(x_range.clone(), 0.0..left_max)?
        .set_secondary_coord(x_range, 0.0..right_max);

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Assessed Value (Millions)")
        .x_label_formatter(&|x| format!("{}", x.round() as i32))
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .bold_line_style(style::grid_line())
        .light_line_style(&TRANSPARENT)
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("Sale Amount (Millions)")
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .draw()?;

    chart
        .draw_series(yearly.iter().map(|y| {
            let year = y.year as f64;
            Rectangle::new(
                [(year - 0.3, 0.0), (year + 0.3, y.assessed_total)],
                style::COMBO_BLUE.mix(0.7).filled(),
            )
        }))?
        .label("Assessed Value")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], style::COMBO_BLUE.filled())
        });

    chart
        .draw_secondary_series(
            LineSeries::new(
                yearly.iter().map(|y| (y.year as f64, y.sale_total)),
                style::COMBO_ORANGE.stroke_width(3),
            )
            .point_size(5),
        )?
        .label("Sale Amount")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 12, y)], style::COMBO_ORANGE.stroke_width(3))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(BLACK.mix(0.7))
        .border_style(&WHITE)
        .label_font(style::label_style(13))
        .draw()?;

    Ok(())
}
