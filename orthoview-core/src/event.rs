//! Inbound events and their dispatch onto a [`Viewport`].

use crate::geometry::{Point, Size};
use crate::viewport::{Viewport, ViewportState};

/// Everything the host can tell the viewport about.
///
/// Pointer positions are relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Wheel notch; positive `delta_y` scrolls down and zooms out.
    Wheel { delta_y: f32 },
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    ZoomIn,
    ZoomOut,
    Reset,
    ContainerResized(Size),
}

impl Viewport {
    /// Applies `event` and reports whether the visible state changed.
    pub fn handle(&mut self, event: ViewportEvent) -> bool {
        let before: ViewportState = *self.state();
        let container = self.geometry().container;

        match event {
            ViewportEvent::Wheel { delta_y } => self.wheel(delta_y),
            ViewportEvent::PointerDown(point) => self.pointer_down(point),
            ViewportEvent::PointerMove(point) => self.pointer_move(point),
            ViewportEvent::PointerUp => self.pointer_up(),
            ViewportEvent::PointerLeave => self.pointer_leave(),
            ViewportEvent::ZoomIn => self.zoom_in(),
            ViewportEvent::ZoomOut => self.zoom_out(),
            ViewportEvent::Reset => self.reset(),
            ViewportEvent::ContainerResized(size) => self.resize(size),
        }

        *self.state() != before || self.geometry().container != container
    }
}
