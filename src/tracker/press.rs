//! Press handling - start a drag from an anchor element.

use super::{DragSquareTracker, TrackerNotification};
use crate::error::{TrackerError, TrackerResult};
use crate::event::CursorEvent;
use crate::surface::Surface;
use crate::types::{CursorSample, Point};
use tracing::debug;

impl<S: Surface> DragSquareTracker<S> {
    /// Start a drag anchored at `anchor`.
    ///
    /// Any previous press, move and end samples are discarded and the scroll
    /// delta is reset. The move step runs once with the same event, so a
    /// degenerate square is published before any motion.
    ///
    /// # Errors
    ///
    /// [`TrackerError::MissingAnchor`] if `anchor` is `None`. Tracker state is
    /// left untouched.
    pub fn set_press(
        &mut self,
        anchor: Option<&S::Element>,
        event: &CursorEvent<S::Element>,
    ) -> TrackerResult<()> {
        let anchor = anchor.ok_or(TrackerError::MissingAnchor)?;

        let press = CursorSample {
            element: anchor.clone(),
            rect: self.surface.bounding_rect(anchor),
            cursor_position: event.position(),
        };
        debug!(
            element = ?press.element,
            client = ?press.cursor_position.client,
            "Press started"
        );

        self.state.start_press(press.clone());
        self.end_sample = None;
        self.scroll_delta = Point::ZERO;
        self.square = None;
        self.horizontal = None;
        self.vertical = None;
        self.notifier.publish(TrackerNotification::Pressed { press });

        self.set_moving(event);
        Ok(())
    }
}
