//! Release handling - finish the drag and publish the end event.

use super::{DragSquareTracker, TrackerNotification, TrackerState};
use crate::event::CursorEvent;
use crate::surface::Surface;
use crate::types::{CursorSample, DragEndEvent};
use tracing::debug;

impl<S: Surface> DragSquareTracker<S> {
    /// Finish the current drag.
    ///
    /// Ignored unless a press is active and at least one move has been
    /// recorded. The end sample reuses the anchor rect from the last move.
    /// The square and both direction flags are cleared, and the drag-end
    /// event replaces any earlier one. Press and moving samples stay
    /// readable until the next press.
    pub fn set_end(&mut self, event: &CursorEvent<S::Element>) {
        let TrackerState::Pressing {
            moving: Some(moving),
            ..
        } = &self.state
        else {
            debug!("Release ignored without an active drag");
            return;
        };

        let end = CursorSample {
            element: moving.element.clone(),
            rect: moving.rect,
            cursor_position: event.position(),
        };

        self.state.release();
        self.square = None;
        self.horizontal = None;
        self.vertical = None;
        self.end_sample = Some(end.clone());

        let drag_end = DragEndEvent { end_info: end };
        debug!(
            element = ?drag_end.end_info.element,
            client = ?drag_end.end_info.cursor_position.client,
            "Drag ended"
        );
        self.last_drag_end = Some(drag_end.clone());
        self.notifier.publish(TrackerNotification::DragEnded(drag_end));
    }
}
