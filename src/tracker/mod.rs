//! Drag-square tracking over a host surface.
//!
//! `DragSquareTracker` follows a pointer through press, move and release and
//! keeps a selection square in viewport coordinates. The anchor element given
//! at press time is re-measured on every move; how far it shifted is the scroll
//! delta, which keeps the press corner of the square pinned to the content
//! while the surface scrolls.
//!
//! ## Modules
//!
//! - `state` - Idle/Pressing/Released state machine holding the press and move samples
//! - `notify` - Publish step for observers
//! - `press` - `set_press`
//! - `moving` - `set_moving` and the square computation
//! - `release` - `set_end`
//! - `query` - Geometry, resolver and overlap queries

mod moving;
mod notify;
mod press;
mod query;
mod release;
mod state;

pub use moving::{SquareComputation, compute_square};
pub use notify::{Notifier, TrackerNotification};
pub use state::TrackerState;

use crate::config::TrackerConfig;
use crate::surface::Surface;
use crate::types::{CursorSample, DragEndEvent, DragSquareInfo, HorizontalDirection, Point, VerticalDirection};
use std::sync::mpsc::Receiver;

pub struct DragSquareTracker<S: Surface> {
    surface: S,
    config: TrackerConfig,
    state: TrackerState<S::Element>,
    /// Cumulative anchor displacement since press
    scroll_delta: Point,
    square: Option<DragSquareInfo>,
    horizontal: Option<HorizontalDirection>,
    vertical: Option<VerticalDirection>,
    end_sample: Option<CursorSample<S::Element>>,
    last_drag_end: Option<DragEndEvent<S::Element>>,
    notifier: Notifier<S::Element>,
}

impl<S: Surface> DragSquareTracker<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, TrackerConfig::default())
    }

    pub fn with_config(surface: S, config: TrackerConfig) -> Self {
        Self {
            surface,
            config,
            state: TrackerState::Idle,
            scroll_delta: Point::ZERO,
            square: None,
            horizontal: None,
            vertical: None,
            end_sample: None,
            last_drag_end: None,
            notifier: Notifier::default(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface, for hosts that own their layout
    /// through the tracker.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> &TrackerState<S::Element> {
        &self.state
    }

    pub fn is_pressing(&self) -> bool {
        self.state.is_pressing()
    }

    /// Current square, if a press is active and a move has been measured.
    pub fn drag_square_info(&self) -> Option<DragSquareInfo> {
        self.square
    }

    pub fn drag_horizontal_direction(&self) -> Option<HorizontalDirection> {
        self.horizontal
    }

    pub fn drag_vertical_direction(&self) -> Option<VerticalDirection> {
        self.vertical
    }

    pub fn last_drag_end_event(&self) -> Option<&DragEndEvent<S::Element>> {
        self.last_drag_end.as_ref()
    }

    pub fn scroll_x(&self) -> f64 {
        self.scroll_delta.x
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_delta.y
    }

    pub fn press_sample(&self) -> Option<&CursorSample<S::Element>> {
        self.state.press_sample()
    }

    pub fn moving_sample(&self) -> Option<&CursorSample<S::Element>> {
        self.state.moving_sample()
    }

    pub fn end_sample(&self) -> Option<&CursorSample<S::Element>> {
        self.end_sample.as_ref()
    }

    /// Receive every notification published from now on.
    pub fn subscribe(&self) -> Receiver<TrackerNotification<S::Element>> {
        self.notifier.subscribe()
    }
}
