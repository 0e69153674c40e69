#[cfg(test)]
#[path = "../tests/unit/drawing_test.rs"]
mod drawing_test;

use crate::{CanvasPoint, DrawResult, Primitive, Rgb, get_dash_segments};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Paints primitives in their order on the drawing area.
pub fn draw_scene<B: DrawingBackend>(area: &DrawingArea<B, Shift>, primitives: &[Primitive]) -> DrawResult<()>
where
    B::ErrorType: 'static,
{
    primitives.iter().try_for_each(|primitive| draw_primitive(area, primitive))
}

/// Renders primitives as an svg document on a white background.
pub fn render_svg_string(primitives: &[Primitive], width: u32, height: u32) -> DrawResult<String> {
    let mut svg = String::new();

    {
        let area = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        area.fill(&WHITE)?;
        draw_scene(&area, primitives)?;
        area.present()?;
    }

    Ok(svg)
}

/// Renders primitives as an svg file.
pub fn write_svg(path: &Path, primitives: &[Primitive], width: u32, height: u32) -> DrawResult<()> {
    let svg = render_svg_string(primitives, width, height)?;
    std::fs::write(path, svg)?;

    log::info!("scene written to '{}'", path.display());

    Ok(())
}

fn draw_primitive<B: DrawingBackend>(area: &DrawingArea<B, Shift>, primitive: &Primitive) -> DrawResult<()>
where
    B::ErrorType: 'static,
{
    match primitive {
        Primitive::RouteLine { points, color, width, .. } => {
            let points = points.iter().copied().map(to_pixel).collect::<Vec<_>>();
            area.draw(&PathElement::new(points, to_color(*color).stroke_width(to_stroke(*width))))?;
        }
        Primitive::NodeMarker { center, radius, color, .. } => {
            area.draw(&Circle::new(to_pixel(*center), to_stroke(*radius), to_color(*color).filled()))?;
        }
        Primitive::SelectionRing { center, radius, color, width, .. } => {
            let style = to_color(*color).stroke_width(to_stroke(*width));
            area.draw(&Circle::new(to_pixel(*center), to_stroke(*radius), style))?;
        }
        Primitive::PartnerLink { from, to, color, width, dash: (dash, gap) } => {
            let style = to_color(*color).stroke_width(to_stroke(*width));
            let (viewport_width, viewport_height) = area.dim_in_pixel();
            let viewport = (viewport_width as f64, viewport_height as f64);

            get_dash_segments(*from, *to, *dash, *gap, viewport).into_iter().try_for_each(|(start, end)| {
                area.draw(&PathElement::new(vec![to_pixel(start), to_pixel(end)], style))
            })?;
        }
    }

    Ok(())
}

fn to_pixel((x, y): CanvasPoint) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn to_stroke(value: f64) -> u32 {
    value.round().max(1.) as u32
}

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}
