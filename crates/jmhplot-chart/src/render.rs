// Dweve JMHPlot - JMH benchmark tables and charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Draw a [`ChartLayout`] with plotters.

use crate::aggregate::Series;
use crate::layout::{format_tick, ChartConfig, ChartLayout, PALETTE_SIZE};
use jmhplot_core::{BenchError, Metric, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const FONT: &str = "sans-serif";

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: [RGBColor; PALETTE_SIZE] = [
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
    hexcolour!(0xD62728),
    hexcolour!(0x9467BD),
    hexcolour!(0x8C564B),
    hexcolour!(0xE377C2),
    hexcolour!(0x7F7F7F),
    hexcolour!(0xBCBD22),
    hexcolour!(0x17BECF),
    hexcolour!(0x332288),
    hexcolour!(0x882255),
];

/// Render `series` to `out` with the default image size.
pub fn render_chart(series: &Series, dist: &str, metric: Metric, out: &Path) -> Result<ChartLayout> {
    render_chart_with_config(series, dist, metric, out, &ChartConfig::default())
}

/// Render `series` to `out`, returning the layout that was drawn.
///
/// The image is a PNG unless `out` ends in `.svg`. Missing parent
/// directories are created and an existing file is overwritten.
///
/// # Errors
///
/// - `EmptyResult` if nothing in `series` can be placed on log axes
/// - `Io` if the parent directory cannot be created
/// - `Render` if the drawing backend fails
pub fn render_chart_with_config(
    series: &Series,
    dist: &str,
    metric: Metric,
    out: &Path,
    config: &ChartConfig,
) -> Result<ChartLayout> {
    let layout = ChartLayout::new(series, dist, metric, config)?;
    if layout.dropped > 0 {
        warn!(
            dropped = layout.dropped,
            "non-positive points cannot be shown on log axes"
        );
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BenchError::io(format!(
                "cannot create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let size = (layout.width, layout.height);
    let drawn = if out.extension() == Some(OsStr::new("svg")) {
        draw(SVGBackend::new(out, size).into_drawing_area(), &layout)
    } else {
        draw(BitMapBackend::new(out, size).into_drawing_area(), &layout)
    };
    drawn.map_err(|e| BenchError::render(format!("cannot draw '{}': {}", out.display(), e)))?;

    info!(path = %out.display(), "wrote chart");
    Ok(layout)
}

fn draw<DB>(root: DrawingArea<DB, Shift>, layout: &ChartLayout) -> std::result::Result<(), String>
where
    DB: DrawingBackend,
{
    draw_on(&root, layout).map_err(|e| e.to_string())?;
    root.present().map_err(|e| e.to_string())
}

fn draw_on<DB>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;

    let (x0, x1) = layout.x_range;
    let (y0, y1) = layout.y_range;
    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, (FONT, 36))
        .margin(24)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d(
            (x0..x1).log_scale().base(2.0),
            (y0..y1).log_scale().base(2.0),
        )?;

    chart
        .configure_mesh()
        .x_desc(layout.x_label.as_str())
        .y_desc(layout.y_label.as_str())
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .label_style((FONT, 20))
        .axis_desc_style((FONT, 24))
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.06))
        .draw()?;

    // Heading row of the legend; it draws nothing on the plot area.
    chart
        .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), &TRANSPARENT))?
        .label(layout.legend_title.as_str())
        .legend(|(x, y)| EmptyElement::at((x, y)));

    for entry in &layout.entries {
        let colour = COLOURS[entry.colour % PALETTE_SIZE];
        chart
            .draw_series(LineSeries::new(
                entry.points.iter().copied(),
                colour.stroke_width(2),
            ))?
            .label(entry.variant.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
            });
        chart.draw_series(PointSeries::of_element(
            entry.points.iter().copied(),
            4,
            colour.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 20))
        .draw()?;

    Ok(())
}
