//! Deterministic rasterization of stroke history into a grayscale bitmap.
//!
//! The raster is the canonical pixel form of the drawing: white background,
//! black ink, no anti-aliasing, no timestamps. Identical stroke input always
//! produces identical pixels, which keeps the downstream image encoding
//! byte-stable and testable.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::consts::{BACKGROUND, BRUSH_RADIUS, INK};
use crate::stroke::{Stroke, StrokePoint};

/// An 8-bit grayscale pixel buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster filled with the background value.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data, one byte per pixel.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Grayscale value at `(x, y)`. Out-of-bounds coordinates read as background.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return BACKGROUND;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Returns `true` when no pixel differs from the background.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == BACKGROUND)
    }

    /// Ink a filled disc centered at `(cx, cy)`. Pixels outside the raster
    /// bounds are skipped, so the center may lie anywhere.
    pub fn stamp_disc(&mut self, cx: f64, cy: f64, radius: f64) {
        let min_x = (cx - radius).floor().max(0.0);
        let max_x = (cx + radius).ceil().min(f64::from(self.width) - 1.0);
        let min_y = (cy - radius).floor().max(0.0);
        let max_y = (cy + radius).ceil().min(f64::from(self.height) - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (min_x, max_x, min_y, max_y) = (min_x as u32, max_x as u32, min_y as u32, max_y as u32);
        let r_sq = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the pixel center.
                let dx = f64::from(x) + 0.5 - cx;
                let dy = f64::from(y) + 0.5 - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.pixels[y as usize * self.width as usize + x as usize] = INK;
                }
            }
        }
    }
}

/// Rasterize committed strokes onto a fresh background-filled raster.
#[must_use]
pub fn rasterize(strokes: &[Stroke], width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(width, height);
    for stroke in strokes {
        stamp_stroke(&mut raster, stroke);
    }
    raster
}

/// Stamp one stroke: a disc at every recorded point, with intermediate
/// stamps interpolated along each segment so fast gestures stay connected.
fn stamp_stroke(raster: &mut Raster, stroke: &Stroke) {
    let points = &stroke.points;
    let Some(first) = points.first() else {
        return;
    };
    raster.stamp_disc(first.x, first.y, BRUSH_RADIUS);

    for pair in points.windows(2) {
        stamp_segment(raster, pair[0], pair[1]);
    }
}

fn stamp_segment(raster: &mut Raster, from: StrokePoint, to: StrokePoint) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = dx.hypot(dy);
    // One stamp per pixel of travel keeps the trail solid.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = distance.ceil().max(1.0) as u32;
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        raster.stamp_disc(from.x + dx * t, from.y + dy * t, BRUSH_RADIUS);
    }
}
