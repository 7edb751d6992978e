#![allow(clippy::float_cmp)]

use super::*;

fn stroke(points: &[(f64, f64)]) -> Stroke {
    Stroke::new(points.iter().map(|&(x, y)| StrokePoint::new(x, y)).collect())
}

// =============================================================
// Stroke
// =============================================================

#[test]
fn stroke_preserves_point_order() {
    let s = stroke(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    assert_eq!(s.points.len(), 3);
    assert_eq!(s.points[0], StrokePoint::new(1.0, 2.0));
    assert_eq!(s.points[2], StrokePoint::new(5.0, 6.0));
}

#[test]
fn stroke_new_assigns_unique_ids() {
    let a = stroke(&[(0.0, 0.0)]);
    let b = stroke(&[(0.0, 0.0)]);
    assert_ne!(a.id, b.id);
}

#[test]
fn stroke_serde_roundtrip() {
    let s = stroke(&[(10.5, 20.25), (30.0, 40.0)]);
    let json = serde_json::to_string(&s).unwrap();
    let back: Stroke = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

// =============================================================
// StrokeHistory
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut history = StrokeHistory::new();
    let a = stroke(&[(0.0, 0.0)]);
    let b = stroke(&[(1.0, 1.0)]);
    history.push(a.clone());
    history.push(b.clone());
    assert_eq!(history.len(), 2);
    assert_eq!(history.strokes()[0].id, a.id);
    assert_eq!(history.strokes()[1].id, b.id);
}

#[test]
fn undo_removes_most_recent() {
    let mut history = StrokeHistory::new();
    let a = stroke(&[(0.0, 0.0)]);
    let b = stroke(&[(1.0, 1.0)]);
    history.push(a.clone());
    history.push(b.clone());

    let undone = history.undo();
    assert_eq!(undone.map(|s| s.id), Some(b.id));
    assert_eq!(history.len(), 1);
    assert_eq!(history.strokes()[0].id, a.id);
}

#[test]
fn undo_on_empty_is_noop() {
    let mut history = StrokeHistory::new();
    for _ in 0..3 {
        assert!(history.undo().is_none());
        assert!(history.is_empty());
    }
}

#[test]
fn clear_discards_all() {
    let mut history = StrokeHistory::new();
    history.push(stroke(&[(0.0, 0.0)]));
    history.push(stroke(&[(1.0, 1.0)]));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
}
