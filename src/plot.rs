use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::table::CaseTable;

/// The colors used for the plotted lines, assigned to series by column
/// order. Matches the matplotlib "tab20"-style sequence.
pub const PALETTE: [RGBColor; 16] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xae, 0xc7, 0xe8),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0xff, 0xbb, 0x78),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0x98, 0xdf, 0x8a),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0xff, 0x98, 0x96),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0xc5, 0xb0, 0xd5),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xc4, 0x9c, 0x94),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0xf7, 0xb6, 0xd2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xc7, 0xc7, 0xc7),
];

#[derive(Debug, Error, PartialEq)]
pub enum PlotError {
    #[error("nothing to plot, the table has no rows or no region columns")]
    EmptyTable,
    /// Reusing palette entries would make two regions indistinguishable,
    /// so overflowing the palette is an error.
    #[error("too many series for the configured palette: {0} (max {max})", max = PALETTE.len())]
    TooManySeries(usize),
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Color assigned to the series at `rank` (its position among the
/// region columns). Stable across runs for a given column order.
pub fn series_color(rank: usize) -> Option<RGBColor> {
    PALETTE.get(rank).copied()
}

/// Render every region column of `table` as a line series and write the
/// chart to `output` as a PNG. X positions are row indices labeled with
/// the row's date; the y-axis range is derived from the plotted data.
pub fn draw(table: &CaseTable, output: &Path, y_desc: &str) -> Result<(), PlotError> {
    if table.is_empty() || table.series.is_empty() {
        return Err(PlotError::EmptyTable);
    }
    if table.series.len() > PALETTE.len() {
        return Err(PlotError::TooManySeries(table.series.len()));
    }

    let labels = table.date_labels();
    let (y_min, y_max) = y_range(table);

    let root = BitMapBackend::new(output, (1280, 960)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("COVID-19 in Poland by region", ("sans-serif", 40).into_font())
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d(0..table.len() - 1, y_min..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("date")
        .y_desc(y_desc)
        .x_labels(labels.len())
        .x_label_formatter(&|x| labels.get(*x).cloned().unwrap_or_default())
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_formatter(&|y| significant(*y))
        .draw()
        .map_err(render_error)?;

    for (rank, series) in table.series.iter().enumerate() {
        let color = PALETTE[rank];
        chart
            .draw_series(LineSeries::new(
                series.values.iter().enumerate().map(|(x, &y)| (x, y)),
                color.stroke_width(2),
            ))
            .map_err(render_error)?
            .label(&series.region)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;

    Ok(())
}

fn render_error<E: std::error::Error>(error: E) -> PlotError {
    PlotError::Render(error.to_string())
}

/// Y-axis range covering every plotted value, padded by 10% (at least
/// one unit) and floored at zero. Case counts are never negative.
fn y_range(table: &CaseTable) -> (f64, f64) {
    let values = table.series.iter().flat_map(|series| &series.values);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let padding = ((max - min) * 0.1).max(1.0);
    ((min - padding).max(0.0), max + padding)
}

/// Format a value to 3 significant figures.
fn significant(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    let magnitude = value.abs().log10().floor();
    let factor = 10f64.powf(magnitude - 2.0);
    let rounded = (value / factor).round() * factor;
    let decimals = (2.0 - magnitude).max(0.0) as usize;
    format!("{rounded:.decimals$}")
}
