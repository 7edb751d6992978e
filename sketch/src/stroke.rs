//! Stroke model: points, committed strokes, and the undoable history.
//!
//! A stroke is immutable once committed to the history. The history is
//! append-only except for `undo`, which removes the most recently appended
//! stroke. Everything downstream (rasterization, encoding) is derived from
//! the history on demand and never mutated directly.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a committed stroke.
pub type StrokeId = Uuid;

/// A point on the drawing surface, in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    /// Horizontal offset from the surface's left edge.
    pub x: f64,
    /// Vertical offset from the surface's top edge.
    pub y: f64,
}

impl StrokePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One continuous pen gesture, recorded as an ordered point sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique identifier for this stroke.
    pub id: StrokeId,
    /// Ordered points from pen-down to pen-up.
    pub points: Vec<StrokePoint>,
}

impl Stroke {
    /// Commit a point sequence as a new stroke with a fresh identifier.
    #[must_use]
    pub fn new(points: Vec<StrokePoint>) -> Self {
        Self { id: Uuid::new_v4(), points }
    }
}

/// Ordered sequence of committed strokes.
///
/// Append-only except for [`undo`](Self::undo), which removes the most
/// recently appended stroke. Undo on an empty history is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { strokes: Vec::new() }
    }

    /// Append a committed stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove and return the most recently appended stroke.
    ///
    /// Returns `None` on an empty history; the history is left unchanged.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Discard all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// All committed strokes, oldest first.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if no stroke has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
