//! The drawing surface: gesture capture, undo/clear, and image export.
//!
//! `SketchSurface` is the single owner of the stroke history. A pen gesture
//! flows through `begin_stroke` / `extend_stroke` / `end_stroke`; only
//! `end_stroke` commits it, so the active gesture never appears in exports
//! or undo. All operations are safe to call in any state.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use image::ImageError;

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::encode::{self, EncodedImage};
use crate::raster;
use crate::stroke::{Stroke, StrokeHistory, StrokeId, StrokePoint};

/// Freehand drawing surface with an undoable stroke history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchSurface {
    history: StrokeHistory,
    /// Points of the gesture currently between pen-down and pen-up.
    active: Option<Vec<StrokePoint>>,
}

impl SketchSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Gesture capture ---

    /// Start a new pen gesture. Any gesture already in progress is replaced.
    pub fn begin_stroke(&mut self, point: StrokePoint) {
        self.active = Some(vec![point]);
    }

    /// Extend the in-progress gesture. No-op when no gesture is active.
    pub fn extend_stroke(&mut self, point: StrokePoint) {
        if let Some(points) = self.active.as_mut() {
            points.push(point);
        }
    }

    /// Commit the in-progress gesture to the history.
    ///
    /// Returns the committed stroke's id, or `None` when no gesture was
    /// active.
    pub fn end_stroke(&mut self) -> Option<StrokeId> {
        let points = self.active.take()?;
        Some(self.add_stroke(points))
    }

    /// Points of the in-progress gesture, if any.
    #[must_use]
    pub fn active_points(&self) -> Option<&[StrokePoint]> {
        self.active.as_deref()
    }

    // --- History operations ---

    /// Commit a point sequence directly as a stroke.
    pub fn add_stroke(&mut self, points: Vec<StrokePoint>) -> StrokeId {
        let stroke = Stroke::new(points);
        let id = stroke.id;
        self.history.push(stroke);
        id
    }

    /// Remove the most recently committed stroke. Safe no-op when empty.
    pub fn undo(&mut self) {
        self.history.undo();
    }

    /// Discard all strokes and cancel any in-progress gesture.
    pub fn clear(&mut self) {
        self.history.clear();
        self.active = None;
    }

    /// The committed stroke history.
    #[must_use]
    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    // --- Export ---

    /// Encode the committed strokes as a transmissible image payload.
    ///
    /// Callable in any state; an empty history yields the canonical blank
    /// encoding with its `blank` flag set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if PNG encoding of the raster fails.
    pub fn export_image(&self) -> Result<EncodedImage, ImageError> {
        let raster = raster::rasterize(self.history.strokes(), SURFACE_WIDTH, SURFACE_HEIGHT);
        encode::encode(&raster)
    }
}
