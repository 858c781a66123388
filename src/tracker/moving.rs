//! Move handling - recompute the drag square.
//!
//! ## Performance Notes
//!
//! Moves arrive at display rate. The computation is a handful of float ops
//! plus one bounding-rect query for the anchor; enable the `profiling` feature
//! to time it.

use super::{DragSquareTracker, TrackerNotification, TrackerState};
use crate::constants::MOVE_WARN_THRESHOLD_MS;
use crate::event::CursorEvent;
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::{CursorSample, DragSquareInfo, HorizontalDirection, Point, VerticalDirection};
use tracing::{debug, trace};

/// Result of one square computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareComputation {
    pub square: DragSquareInfo,
    pub horizontal: HorizontalDirection,
    pub vertical: VerticalDirection,
}

/// Compute the square spanned by `press` and `current` (both client
/// coordinates).
///
/// `scroll_delta` is how far the anchor moved since press
/// (`press_rect.origin - current_rect.origin`); subtracting it maps the press
/// point into the current viewport. `margin` is inset from each edge, so the
/// extent can come out negative for short drags and is left that way.
pub fn compute_square(press: Point, current: Point, scroll_delta: Point, margin: f64) -> SquareComputation {
    let (left, width, horizontal) = if current.x < press.x - scroll_delta.x {
        (
            press.x - (press.x - current.x) + margin,
            (press.x - current.x - scroll_delta.x) - 2.0 * margin,
            HorizontalDirection::Left,
        )
    } else {
        (
            press.x - scroll_delta.x + margin,
            (current.x - press.x + scroll_delta.x) - 2.0 * margin,
            HorizontalDirection::Right,
        )
    };

    let (top, height, vertical) = if current.y < press.y - scroll_delta.y {
        (
            press.y - (press.y - current.y) + margin,
            (press.y - current.y - scroll_delta.y) - 2.0 * margin,
            VerticalDirection::Top,
        )
    } else {
        (
            press.y - scroll_delta.y + margin,
            (current.y - press.y + scroll_delta.y) - 2.0 * margin,
            VerticalDirection::Bottom,
        )
    };

    SquareComputation {
        square: DragSquareInfo::new(left, top, width, height),
        horizontal,
        vertical,
    }
}

impl<S: Surface> DragSquareTracker<S> {
    /// Record a pointer move and recompute the square.
    ///
    /// A move while idle is ignored. If either the press or this event lacks
    /// client coordinates the moving sample and scroll delta are still
    /// updated but the square is left as it was.
    pub fn set_moving(&mut self, event: &CursorEvent<S::Element>) {
        profile_scope!("set_moving", MOVE_WARN_THRESHOLD_MS);

        let TrackerState::Pressing { press, .. } = &self.state else {
            debug!("Move ignored while idle");
            return;
        };

        let element = press.element.clone();
        let press_rect = press.rect;
        let press_client = press.cursor_position.client;

        let current_rect = self.surface.bounding_rect(&element);
        let cursor_position = event.position();
        self.scroll_delta = press_rect.origin() - current_rect.origin();
        self.state.set_moving_sample(CursorSample {
            element,
            rect: current_rect,
            cursor_position,
        });

        let (Some(press_point), Some(current_point)) = (press_client, cursor_position.client) else {
            trace!("Move without client coordinates, square unchanged");
            return;
        };

        let computed = compute_square(
            press_point,
            current_point,
            self.scroll_delta,
            self.config.square_margin,
        );
        trace!(
            horizontal = ?computed.horizontal,
            vertical = ?computed.vertical,
            left = computed.square.left,
            top = computed.square.top,
            width = computed.square.width,
            height = computed.square.height,
            "Drag square updated"
        );

        self.square = Some(computed.square);
        self.horizontal = Some(computed.horizontal);
        self.vertical = Some(computed.vertical);
        self.notifier
            .publish(TrackerNotification::SquareChanged(computed.square));
    }
}
