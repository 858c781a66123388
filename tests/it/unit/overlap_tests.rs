//! Unit tests for the square/element overlap predicate.

use crate::helpers::{MockSurface, NodeId};
use dragsquare::overlap::{OverlapCase, classify_overlap, intersects};
use dragsquare::types::{Rect, RectCorners};
use dragsquare::{DragSquareTracker, TrackerConfig};

/// Tracker with margin 0 whose square is exactly `square`, plus an element
/// with rect `element`.
fn tracker_with(square: Rect, element: Rect) -> (DragSquareTracker<MockSurface>, NodeId) {
    let mut surface = MockSurface::new();
    let body = surface.add_root(Rect::new(-1000.0, -1000.0, 4000.0, 4000.0));
    let node = surface.add_child(body, element);

    let down = surface.mouse(Some(body), square.x, square.y);
    let moved = surface.mouse(Some(body), square.right(), square.bottom());

    let config = TrackerConfig::new().with_square_margin(0.0);
    let mut tracker = DragSquareTracker::with_config(surface, config);
    tracker.set_press(Some(&body), &down).unwrap();
    tracker.set_moving(&moved);

    let published = tracker.drag_square_info().unwrap();
    assert_eq!(published.rect(), square);
    (tracker, node)
}

#[test]
fn test_crossing_rectangles_overlap() {
    let (tracker, node) = tracker_with(
        Rect::new(0.0, 0.0, 100.0, 10.0),
        Rect::new(40.0, -50.0, 10.0, 200.0),
    );
    assert!(tracker.is_include_element_target_square(Some(&node)));
    assert_eq!(tracker.overlap_case(Some(&node)), Some(OverlapCase::ColumnCrossing));
}

#[test]
fn test_disjoint_rectangles_do_not_overlap() {
    let (tracker, node) = tracker_with(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(100.0, 100.0, 10.0, 10.0),
    );
    assert!(!tracker.is_include_element_target_square(Some(&node)));
}

#[test]
fn test_containment_overlaps_both_ways() {
    let big = Rect::new(0.0, 0.0, 300.0, 300.0);
    let small = Rect::new(100.0, 100.0, 20.0, 20.0);

    let (tracker, node) = tracker_with(big, small);
    assert_eq!(tracker.overlap_case(Some(&node)), Some(OverlapCase::CornerInSquare));

    let (tracker, node) = tracker_with(small, big);
    assert_eq!(tracker.overlap_case(Some(&node)), Some(OverlapCase::SquareInElement));
}

#[test]
fn test_absent_element_or_square_is_false() {
    let mut surface = MockSurface::new();
    let node = surface.add_root(Rect::new(0.0, 0.0, 10.0, 10.0));
    let tracker = DragSquareTracker::new(surface);

    assert!(!tracker.is_include_element_target_square(None));
    assert!(!tracker.is_include_element_target_square(Some(&node)));
}

#[test]
fn test_predicate_is_symmetric_for_assorted_pairs() {
    let rects = [
        Rect::new(0.0, 0.0, 100.0, 10.0),
        Rect::new(40.0, -50.0, 10.0, 200.0),
        Rect::new(100.0, 100.0, 10.0, 10.0),
        Rect::new(5.0, 5.0, 2.0, 2.0),
        Rect::new(-20.0, -20.0, 500.0, 500.0),
        Rect::new(110.0, 0.0, 5.0, 5.0),
        Rect::new(100.0, 10.0, 20.0, 20.0),
    ];

    for a in &rects {
        for b in &rects {
            assert_eq!(
                intersects(&a.corners(), &b.corners()),
                intersects(&b.corners(), &a.corners()),
                "{a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn test_corner_touch_counts() {
    let square = RectCorners::from_parts(0.0, 0.0, 100.0, 10.0);
    let element = RectCorners::from_parts(100.0, 10.0, 20.0, 20.0);
    assert_eq!(classify_overlap(&square, &element), Some(OverlapCase::CornerInSquare));
}

#[test]
fn test_degenerate_square_selects_nothing_nearby() {
    let square = RectCorners::from_parts(54.0, 84.0, -8.0, -8.0);
    let element = RectCorners::from_parts(48.0, 78.0, 4.0, 4.0);
    assert!(!intersects(&square, &element));
}
