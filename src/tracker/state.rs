//! Tracker state machine.
//!
//! ```text
//! Idle     -> Pressing   (set_press with an anchor element)
//! Pressing -> Pressing   (set_moving)
//! Pressing -> Released   (set_end, once a moving sample exists)
//! Released -> Pressing   (set_press)
//! ```
//!
//! This enum is the single source of truth for "is pressing". Guards inside
//! `set_moving`/`set_end` read it directly, so a press followed by a move in
//! the same call chain is never dropped. `Released` keeps the samples of the
//! finished drag readable until the next press replaces them.

use crate::types::CursorSample;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState<E> {
    /// No active press
    Idle,

    /// Pointer is down
    Pressing {
        /// Sample captured at press time, holding the anchor element
        press: CursorSample<E>,
        /// Latest move sample, replaced on every move
        moving: Option<CursorSample<E>>,
    },

    /// Pointer is up after a completed drag
    Released {
        press: CursorSample<E>,
        /// Last move sample before release
        moving: CursorSample<E>,
    },
}

impl<E> Default for TrackerState<E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<E> TrackerState<E> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self, Self::Pressing { .. })
    }

    /// Enter `Pressing` with a fresh press sample and no moving sample.
    pub fn start_press(&mut self, press: CursorSample<E>) {
        *self = Self::Pressing { press, moving: None };
    }

    pub fn press_sample(&self) -> Option<&CursorSample<E>> {
        match self {
            Self::Pressing { press, .. } | Self::Released { press, .. } => Some(press),
            Self::Idle => None,
        }
    }

    pub fn moving_sample(&self) -> Option<&CursorSample<E>> {
        match self {
            Self::Pressing { moving, .. } => moving.as_ref(),
            Self::Released { moving, .. } => Some(moving),
            Self::Idle => None,
        }
    }

    /// Replace the moving sample. Ignored unless pressing.
    pub fn set_moving_sample(&mut self, sample: CursorSample<E>) {
        if let Self::Pressing { moving, .. } = self {
            *moving = Some(sample);
        }
    }

    /// Move `Pressing` to `Released`, keeping both samples. Returns `false`
    /// and leaves the state alone unless pressing with a moving sample.
    pub fn release(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Pressing {
                press,
                moving: Some(moving),
            } => {
                *self = Self::Released { press, moving };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }
}
