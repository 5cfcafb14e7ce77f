//! Plotters-powered SVG chart of the fitted curves.
//!
//! Curves are drawn as lines (clipped to the sample-derived y frame), samples
//! as filled black circles, and a legend names every series.

use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::AppError;
use crate::plot::{PlotData, pad_range};

/// Line colors assigned to curves in order (wrapping around).
const CURVE_COLORS: [RGBColor; 6] = [
    RGBColor(220, 50, 47),  // red
    RGBColor(38, 139, 210), // blue
    RGBColor(133, 153, 0),  // green
    RGBColor(211, 54, 130), // magenta
    RGBColor(181, 137, 0),  // yellow
    RGBColor(42, 161, 152), // cyan
];

/// Render the plot as an SVG document.
pub fn render_svg_plot(data: &PlotData, width: u32, height: u32) -> Result<String, AppError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        draw_chart(&root, data)
            .map_err(|e| AppError::numeric(format!("Failed to draw SVG plot: {e}")))?;
        root.present()
            .map_err(|e| AppError::numeric(format!("Failed to finish SVG plot: {e}")))?;
    }
    Ok(svg)
}

/// Render the plot and write it to `path`.
pub fn write_svg_plot(path: &Path, data: &PlotData, width: u32, height: u32) -> Result<(), AppError> {
    let svg = render_svg_plot(data, width, height)?;
    std::fs::write(path, svg)
        .map_err(|e| AppError::usage(format!("Failed to write SVG plot '{}': {e}", path.display())))?;
    info!("wrote SVG plot to {}", path.display());
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &PlotData,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x0, x1) = data.x_bounds().unwrap_or((0.0, 1.0));
    let (y0, y1) = data.y_bounds().unwrap_or((-1.0, 1.0));
    let (y0, y1) = pad_range(y0, y1, 0.25);

    let mut chart = ChartBuilder::on(root)
        .caption("Polynomial fits", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .x_label_formatter(&|v| format!("{v:.2}"))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    for (i, curve) in data.curves.iter().enumerate() {
        let style = CURVE_COLORS[i % CURVE_COLORS.len()].stroke_width(2);
        let points: Vec<(f64, f64)> = curve
            .points
            .iter()
            .filter(|p| p.1.is_finite())
            .map(|&(x, y)| (x, y.clamp(y0, y1)))
            .collect();

        chart
            .draw_series(LineSeries::new(points, style))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    if !data.scatter.is_empty() {
        chart
            .draw_series(
                data.scatter
                    .iter()
                    .map(|&p| Circle::new(p, 3, BLACK.filled())),
            )?
            .label("samples")
            .legend(|(x, y)| Circle::new((x + 10, y), 3, BLACK.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}
