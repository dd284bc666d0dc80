// Pie chart: sale amount share of the top property types

use super::style;
use anyhow::{ensure, Result};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    totals: &[(String, f64)],
) -> Result<()> {
    ensure!(!totals.is_empty(), "Pie chart has no data");
    ensure!(
        totals.iter().any(|(_, total)| *total > 0.0),
        "Pie chart totals are all zero"
    );

    area.fill(&BLACK)?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2 + 16);
    let radius = (width.min(height) as f64) * 0.32;

    let sizes: Vec<f64> = totals.iter().map(|(_, total)| *total).collect();
    let labels: Vec<String> = totals.iter().map(|(name, _)| name.clone()).collect();
    let colors: Vec<RGBColor> = (0..totals.len()).map(style::palette_color).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(style::label_style(16));
    pie.percentages(style::label_style(14));
    area.draw(&pie)?;

    area.draw(&Text::new(
        "Top Property Type Distribution",
        (width as i32 / 2, 24),
        style::title_style().pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;

    Ok(())
}
