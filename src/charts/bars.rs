// Bar charts: vertical totals, horizontal ratios, stacked residential
// breakdown, and the per-town count plot. All bars run over segmented
// categorical axes with the category name printed at the segment center.

use super::style;
use crate::aggregate::ResidentialBreakdown;
use anyhow::{ensure, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

fn segment_label(names: &[String], seg: &SegmentValue<usize>) -> String {
    match seg {
        SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

/// Vertical bar chart: total sale amount per top town, descending.
pub(super) fn draw_town_totals(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    totals: &[(String, f64)],
) -> Result<()> {
    ensure!(!totals.is_empty(), "Town totals chart has no data");

    area.fill(&BLACK)?;

    let names: Vec<String> = totals.iter().map(|(town, _)| town.clone()).collect();
    let y_max = headroom(totals.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max));

    let mut chart = ChartBuilder::on(area)
        .caption("Total Sales by Town (Millions)", style::title_style())
        .margin(16)
        .x_label_area_size(110)
        .y_label_area_size(72)
        .build_cartesian_2d((0..totals.len()).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Town")
        .y_desc("Sale Amount (Millions)")
        .x_labels(totals.len())
        .x_label_formatter(&|seg| segment_label(&names, seg))
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .x_label_style(style::rotated_label_style(12))
        .bold_line_style(style::grid_line())
        .light_line_style(&TRANSPARENT)
        .draw()?;

    chart.draw_series(totals.iter().enumerate().map(|(i, (_, total))| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *total),
            ],
            style::BAR_GREEN.filled(),
        )
    }))?;

    Ok(())
}

/// Horizontal bar chart: mean sales ratio per top town, ascending.
pub(super) fn draw_town_ratios(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    ratios: &[(String, f64)],
) -> Result<()> {
    ensure!(!ratios.is_empty(), "Town ratio chart has no data");

    area.fill(&BLACK)?;

    let names: Vec<String> = ratios.iter().map(|(town, _)| town.clone()).collect();
    let x_max = headroom(ratios.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max));

    let mut chart = ChartBuilder::on(area)
        .caption("Average Sales Ratio by Town", style::title_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(150)
        .build_cartesian_2d(0.0..x_max, (0..ratios.len()).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Average Sales Ratio")
        .y_desc("Town")
        .y_labels(ratios.len())
        .y_label_formatter(&|seg| segment_label(&names, seg))
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .bold_line_style(style::grid_line())
        .light_line_style(&TRANSPARENT)
        .draw()?;

    chart.draw_series(ratios.iter().enumerate().map(|(i, (_, ratio))| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (*ratio, SegmentValue::Exact(i + 1)),
            ],
            style::BAR_PINK.filled(),
        )
    }))?;

    Ok(())
}

/// Stacked bar chart: residential-type counts per top town.
pub(super) fn draw_stacked(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    breakdown: &ResidentialBreakdown,
) -> Result<()> {
    ensure!(!breakdown.towns.is_empty(), "Stacked chart has no towns");

    area.fill(&BLACK)?;

    let town_totals: Vec<u64> = breakdown
        .counts
        .iter()
        .map(|row| row.iter().sum())
        .collect();
    let y_max = headroom(town_totals.iter().map(|v| *v as f64).fold(0.0_f64, f64::max));

    let mut chart = ChartBuilder::on(area)
        .caption("Residential Type Distribution by Town", style::title_style())
        .margin(16)
        .x_label_area_size(110)
        .y_label_area_size(72)
        .build_cartesian_2d((0..breakdown.towns.len()).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Town")
        .y_desc("Count")
        .x_labels(breakdown.towns.len())
        .x_label_formatter(&|seg| segment_label(&breakdown.towns, seg))
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .x_label_style(style::rotated_label_style(12))
        .bold_line_style(style::grid_line())
        .light_line_style(&TRANSPARENT)
        .draw()?;

    // One series per residential type, each stacked on the running total
    let mut base: Vec<f64> = vec![0.0; breakdown.towns.len()];
    for (type_idx, type_name) in breakdown.types.iter().enumerate() {
        let color = style::palette_color(type_idx);
        let segments: Vec<(usize, f64, f64)> = breakdown
            .counts
            .iter()
            .enumerate()
            .map(|(town_idx, row)| {
                let bottom = base[town_idx];
                let top = bottom + row[type_idx] as f64;
                base[town_idx] = top;
                (town_idx, bottom, top)
            })
            .collect();

        chart
            .draw_series(segments.into_iter().map(|(town_idx, bottom, top)| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(town_idx), bottom),
                        (SegmentValue::Exact(town_idx + 1), top),
                    ],
                    color.filled(),
                )
            }))?
            .label(type_name.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(BLACK.mix(0.7))
        .border_style(&WHITE)
        .label_font(style::label_style(13))
        .draw()?;

    Ok(())
}

/// Count plot: rows per top town, descending, viridis-ramped bars.
pub(super) fn draw_town_counts(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    counts: &[(String, u64)],
) -> Result<()> {
    ensure!(!counts.is_empty(), "Count plot has no data");

    area.fill(&BLACK)?;

    let names: Vec<String> = counts.iter().map(|(town, _)| town.clone()).collect();
    let y_max = headroom(counts.iter().map(|(_, c)| *c as f64).fold(0.0_f64, f64::max));

    let mut chart = ChartBuilder::on(area)
        .caption("Property Count by Town", style::title_style())
        .margin(16)
        .x_label_area_size(110)
        .y_label_area_size(72)
        .build_cartesian_2d((0..counts.len()).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Town")
        .y_desc("Count")
        .x_labels(counts.len())
        .x_label_formatter(&|seg| segment_label(&names, seg))
        .axis_style(&WHITE)
        .axis_desc_style(style::label_style(16))
        .label_style(style::label_style(13))
        .x_label_style(style::rotated_label_style(12))
        .bold_line_style(style::grid_line())
        .light_line_style(&TRANSPARENT)
        .draw()?;

    let ramp_span = counts.len().max(2) as f32;
    chart.draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
        let shade = ViridisRGB {}.get_color(i as f32 / (ramp_span - 1.0));
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *count as f64),
            ],
            shade.filled(),
        )
    }))?;

    Ok(())
}
