//! Grab-and-drag state machine.
//!
//! The anchor of a gesture lives inside [`DragState::Dragging`], so it is
//! created on pointer-down and dropped with the session. A later gesture can
//! never observe an anchor from an earlier one.

use crate::geometry::{Offset, Point};

/// Data captured when a drag gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_pointer: Point,
    start_offset: Offset,
}

impl DragSession {
    pub fn new(pointer: Point, offset: Offset) -> Self {
        Self {
            start_pointer: pointer,
            start_offset: offset,
        }
    }

    pub fn start_pointer(&self) -> Point {
        self.start_pointer
    }

    pub fn start_offset(&self) -> Offset {
        self.start_offset
    }

    /// Pointer position minus the offset at drag start.
    pub fn anchor(&self) -> Point {
        self.start_pointer - self.start_offset
    }

    /// Unclamped offset that keeps the grabbed pixel under `pointer`.
    pub fn raw_offset(&self, pointer: Point) -> Offset {
        pointer - self.anchor()
    }
}

/// Whether a drag gesture is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}

/// Pointer affordance the host should display over the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Grab,
    Grabbing,
}

impl CursorStyle {
    pub fn for_state(drag: &DragState, can_drag: bool) -> Self {
        match drag {
            DragState::Dragging(_) => Self::Grabbing,
            DragState::Idle if can_drag => Self::Grab,
            DragState::Idle => Self::Default,
        }
    }
}
