//! Rendering: draws the surface's strokes to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the surface and produces pixels — it does
//! not mutate any application state. The on-screen painting is presentation
//! only; the canonical pixel form lives in [`crate::raster`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BRUSH_RADIUS, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::stroke::StrokePoint;
use crate::surface::SketchSurface;

/// On-screen ink color.
const INK_CSS: &str = "#1f1a17";

/// On-screen background color.
const BACKGROUND_CSS: &str = "#ffffff";

/// Draw the full surface: committed strokes, then the active gesture.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, surface: &SketchSurface) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BACKGROUND_CSS);
    ctx.fill_rect(0.0, 0.0, f64::from(SURFACE_WIDTH), f64::from(SURFACE_HEIGHT));

    ctx.set_stroke_style_str(INK_CSS);
    ctx.set_line_width(BRUSH_RADIUS * 2.0);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for stroke in surface.history().strokes() {
        draw_polyline(ctx, &stroke.points)?;
    }
    if let Some(points) = surface.active_points() {
        draw_polyline(ctx, points)?;
    }
    Ok(())
}

/// Stroke a polyline; a single point becomes a filled brush dot.
fn draw_polyline(ctx: &CanvasRenderingContext2d, points: &[StrokePoint]) -> Result<(), JsValue> {
    match points {
        [] => Ok(()),
        [only] => {
            ctx.set_fill_style_str(INK_CSS);
            ctx.begin_path();
            ctx.arc(only.x, only.y, BRUSH_RADIUS, 0.0, TAU)?;
            ctx.fill();
            Ok(())
        }
        [first, rest @ ..] => {
            ctx.begin_path();
            ctx.move_to(first.x, first.y);
            for point in rest {
                ctx.line_to(point.x, point.y);
            }
            ctx.stroke();
            Ok(())
        }
    }
}
