//! Scroll compensation between press and move.

use crate::helpers::{MockSurface, MockSurfaceBuilder};
use dragsquare::types::Rect;
use dragsquare::{DragSquareTracker, TrackerConfig, VerticalDirection};

#[test]
fn test_scroll_delta_measured_from_anchor() {
    let mut surface = MockSurface::new();
    let body = surface.add_root(Rect::new(0.0, 0.0, 1000.0, 3000.0));
    let down = surface.mouse(Some(body), 100.0, 100.0);

    let mut tracker = DragSquareTracker::new(surface);
    tracker.set_press(Some(&body), &down).unwrap();

    tracker.surface_mut().scroll_to(0.0, 50.0);
    let moved = tracker.surface().mouse(Some(body), 120.0, 120.0);
    tracker.set_moving(&moved);

    assert_eq!(tracker.scroll_x(), 0.0);
    assert_eq!(tracker.scroll_y(), 50.0);
    assert_eq!(tracker.drag_vertical_direction(), Some(VerticalDirection::Bottom));

    let square = tracker.drag_square_info().unwrap();
    // Press point now sits at client y = 50.
    assert_eq!(square.top, 54.0);
    assert_eq!(square.height, 62.0);
    assert_eq!(square.left, 104.0);
    assert_eq!(square.width, 12.0);
}

#[test]
fn test_scrolling_past_pointer_flips_direction() {
    let mut surface = MockSurface::new();
    let body = surface.add_root(Rect::new(0.0, 0.0, 1000.0, 3000.0));
    let down = surface.mouse(Some(body), 100.0, 400.0);

    let config = TrackerConfig::new().with_square_margin(0.0);
    let mut tracker = DragSquareTracker::with_config(surface, config);
    tracker.set_press(Some(&body), &down).unwrap();

    // Scroll back up: the press point moves down the viewport, below the pointer.
    tracker.surface_mut().scroll_to(0.0, 0.0);
    let moved = tracker.surface().mouse(Some(body), 100.0, 420.0);
    tracker.set_moving(&moved);
    assert_eq!(tracker.drag_vertical_direction(), Some(VerticalDirection::Bottom));

    tracker.surface_mut().scroll_to(0.0, -100.0);
    tracker.set_moving(&moved);
    assert_eq!(tracker.scroll_y(), -100.0);
    assert_eq!(tracker.drag_vertical_direction(), Some(VerticalDirection::Top));
    let square = tracker.drag_square_info().unwrap();
    assert_eq!(square.top, 420.0);
    assert_eq!(square.height, 80.0);
}

#[test]
fn test_fixed_anchor_ignores_scroll() {
    let mut surface = MockSurface::new();
    let overlay = surface.add_root(Rect::new(0.0, 0.0, 800.0, 600.0));
    surface.set_fixed(overlay);
    let down = surface.mouse(Some(overlay), 10.0, 10.0);

    let mut tracker = DragSquareTracker::new(surface);
    tracker.set_press(Some(&overlay), &down).unwrap();
    tracker.surface_mut().scroll_to(0.0, 300.0);
    let moved = tracker.surface().mouse(Some(overlay), 110.0, 60.0);
    tracker.set_moving(&moved);

    assert_eq!(tracker.scroll_y(), 0.0);
    assert_eq!(tracker.drag_square_info().unwrap().rect(), Rect::new(14.0, 14.0, 92.0, 42.0));
}

#[test]
fn test_selection_follows_content_while_scrolling() {
    let (surface, layout) = MockSurfaceBuilder::new()
        .with_body(1000.0, 3000.0)
        .with_grid((100.0, 100.0), 10, 1, (100.0, 30.0))
        .build();
    let body = layout.body;
    let first = layout.cell(0, 0);
    let last = layout.cell(9, 0);

    // Press just left of the first cell, then scroll without moving the pointer.
    let down = surface.mouse(Some(body), 90.0, 105.0);
    let mut tracker = DragSquareTracker::new(surface);
    tracker.set_press(Some(&body), &down).unwrap();
    assert!(!tracker.is_include_element_target_square(Some(&last)));

    tracker.surface_mut().scroll_to(0.0, 200.0);
    let moved = tracker.surface().mouse(Some(body), 150.0, 105.0);
    tracker.set_moving(&moved);

    assert_eq!(tracker.scroll_y(), 200.0);
    assert!(tracker.is_include_element_target_square(Some(&first)));
    assert!(tracker.is_include_element_target_square(Some(&layout.cell(6, 0))));
    assert!(!tracker.is_include_element_target_square(Some(&last)));
}
