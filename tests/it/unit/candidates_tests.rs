//! Unit tests for the candidate index.

use crate::helpers::MockSurfaceBuilder;
use dragsquare::types::{DragSquareInfo, Point, Rect};
use dragsquare::{CandidateIndex, DragSquareTracker, Surface};

#[test]
fn test_index_agrees_with_tracker_predicate() {
    let (surface, layout) = MockSurfaceBuilder::new()
        .with_grid((100.0, 100.0), 4, 7, (50.0, 30.0))
        .build();

    let index = CandidateIndex::from_rects(
        layout
            .cells
            .iter()
            .map(|&cell| (cell, surface.bounding_rect(&cell))),
    );
    assert_eq!(index.len(), 28);

    let body = layout.body;
    let down = surface.mouse(Some(body), 130.0, 110.0);
    let moved = surface.mouse(Some(body), 260.0, 170.0);

    let mut tracker = DragSquareTracker::new(surface);
    tracker.set_press(Some(&body), &down).unwrap();
    tracker.set_moving(&moved);

    let square = tracker.drag_square_info().unwrap();
    let from_index = index.query_square(&square);
    let from_tracker = tracker.select_included(layout.cells.iter().copied());
    assert_eq!(from_index, from_tracker);
    assert!(!from_index.is_empty());
}

#[test]
fn test_query_preserves_insertion_order() {
    let mut index = CandidateIndex::new();
    index.insert("c", Rect::new(20.0, 0.0, 10.0, 10.0));
    index.insert("a", Rect::new(0.0, 0.0, 10.0, 10.0));
    index.insert("b", Rect::new(10.0, 0.0, 10.0, 10.0));

    let square = DragSquareInfo::new(0.0, 0.0, 30.0, 5.0);
    assert_eq!(index.query_square(&square), vec!["c", "a", "b"]);
}

#[test]
fn test_degenerate_square_inside_element_still_matches() {
    let index = CandidateIndex::from_rects([
        (1u32, Rect::new(0.0, 0.0, 100.0, 100.0)),
        (2, Rect::new(44.0, 44.0, 4.0, 4.0)),
    ]);
    let square = DragSquareInfo::new(50.0, 50.0, -8.0, -8.0);
    // Negative extent contains no point, so only the element holding all
    // four square corners matches.
    assert_eq!(index.query_square(&square), vec![1]);
}

#[test]
fn test_clear_and_rebuild() {
    let mut index = CandidateIndex::from_rects([
        (1u32, Rect::new(0.0, 0.0, 10.0, 10.0)),
        (2, Rect::new(20.0, 0.0, 10.0, 10.0)),
    ]);
    index.clear();
    assert!(index.is_empty());
    assert!(index.query_point(Point::new(5.0, 5.0)).is_empty());

    index.rebuild([(3u32, Rect::new(0.0, 0.0, 10.0, 10.0))]);
    assert_eq!(index.query_point(Point::new(5.0, 5.0)), vec![3]);
}
