// Correlation heatmap: 3x3 grid, viridis shading, value annotations

use super::style;
use crate::aggregate::CorrelationMatrix;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

pub(super) fn draw(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    matrix: &CorrelationMatrix,
) -> Result<()> {
    area.fill(&BLACK)?;

    let n = matrix.labels.len();
    let labels: Vec<String> = matrix.labels.iter().map(|l| l.to_string()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Correlation Heatmap", style::title_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(150)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|seg| segment_label(&labels, seg))
        .y_label_formatter(&|seg| segment_label(&labels, seg))
        .axis_style(&WHITE)
        .label_style(style::label_style(13))
        .draw()?;

    // Cells, shaded by correlation mapped from [-1, 1] to the colormap range
    chart.draw_series((0..n).flat_map(|i| {
        (0..n).map(move |j| (i, j))
    }).map(|(i, j)| {
        let value = matrix.values[i][j];
        let shade = ViridisRGB {}.get_color(((value + 1.0) / 2.0) as f32);
        Rectangle::new(
            [
                (SegmentValue::Exact(i), SegmentValue::Exact(j)),
                (SegmentValue::Exact(i + 1), SegmentValue::Exact(j + 1)),
            ],
            shade.filled(),
        )
    }))?;

    // Annotate each cell; dark text on bright cells, light text on dark ones
    for i in 0..n {
        for j in 0..n {
            let value = matrix.values[i][j];
            let text_color = if value > 0.0 { BLACK } else { WHITE };
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", value),
                (SegmentValue::CenterOf(i), SegmentValue::CenterOf(j)),
                style::label_style(16).color(&text_color),
            )))?;
        }
    }

    Ok(())
}

fn segment_label(labels: &[String], seg: &SegmentValue<usize>) -> String {
    match seg {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}
