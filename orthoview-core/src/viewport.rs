//! Viewport state and its transitions.
//!
//! [`ViewportState`] is a plain value: every transition consumes the current
//! state and returns the next one, which keeps them independently testable.
//! [`Viewport`] pairs the state with the host-supplied rectangles and exposes
//! one method per input event.

use tracing::debug;

use crate::bounds;
use crate::drag::{CursorStyle, DragSession, DragState};
use crate::geometry::{Offset, Point, Rect, Size};
use crate::scale::{self, ZoomDirection};

/// The two rectangles the pan limits are derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportGeometry {
    /// Size of the viewport frame.
    pub container: Size,
    /// Rendered size of the unscaled image.
    pub content: Size,
}

impl ViewportGeometry {
    pub const fn new(container: Size, content: Size) -> Self {
        Self { container, content }
    }

    pub fn clamp(&self, offset: Offset, scale: f32) -> Offset {
        bounds::clamp_offset(offset, scale, self.container, self.content)
    }

    pub fn max_offset(&self, scale: f32) -> Offset {
        bounds::max_offset(scale, self.container, self.content)
    }
}

/// What a renderer applies to the content: scale about its centre, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: Offset,
}

/// Scale, offset and drag flag of one viewer instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    scale: f32,
    offset: Offset,
    drag: DragState,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: scale::DEFAULT_SCALE,
            offset: Offset::ZERO,
            drag: DragState::Idle,
        }
    }
}

impl ViewportState {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Zoom level as a whole percentage, `round(scale * 100)`.
    pub fn zoom_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent())
    }

    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.scale,
            offset: self.offset,
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        CursorStyle::for_state(&self.drag, scale::allows_drag(self.scale))
    }

    /// The default state: scale 1, centred, not dragging.
    pub fn reset() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn apply_wheel_zoom(self, delta_y: f32, geometry: &ViewportGeometry) -> Self {
        self.with_scale(scale::zoom_by_wheel(delta_y, self.scale), geometry)
    }

    #[must_use]
    pub fn apply_button_zoom(self, direction: ZoomDirection, geometry: &ViewportGeometry) -> Self {
        let next = match direction {
            ZoomDirection::In => scale::zoom_in_button(self.scale),
            ZoomDirection::Out => scale::zoom_out_button(self.scale),
        };
        self.with_scale(next, geometry)
    }

    /// Starts a drag at `pointer`. Silently ignored unless the image is zoomed past 1.
    #[must_use]
    pub fn begin_drag(self, pointer: Point) -> Self {
        if !scale::allows_drag(self.scale) {
            return self;
        }
        let session = DragSession::new(pointer, self.offset);
        debug!(x = pointer.x, y = pointer.y, "drag started");
        Self {
            drag: DragState::Dragging(session),
            ..self
        }
    }

    /// Moves the image so the grabbed point follows `pointer`, within bounds.
    #[must_use]
    pub fn apply_drag(self, pointer: Point, geometry: &ViewportGeometry) -> Self {
        let DragState::Dragging(session) = self.drag else {
            return self;
        };
        if !scale::allows_drag(self.scale) {
            return self.end_drag();
        }
        let offset = geometry.clamp(session.raw_offset(pointer), self.scale);
        Self { offset, ..self }
    }

    /// Drops the drag session. The offset stays where the drag left it.
    #[must_use]
    pub fn end_drag(self) -> Self {
        if self.drag.is_dragging() {
            debug!(x = self.offset.x, y = self.offset.y, "drag ended");
        }
        Self {
            drag: DragState::Idle,
            ..self
        }
    }

    /// Where the scaled, translated image lands inside `geometry.container`.
    ///
    /// The content is scaled about its own centre, which starts at the
    /// container centre, and then moved by the offset in screen pixels.
    pub fn image_rect(&self, geometry: &ViewportGeometry) -> Rect {
        let container = geometry.container;
        let center = Point::new(container.width / 2.0, container.height / 2.0) + self.offset;
        Rect::centered_at(center, geometry.content.scaled(self.scale))
    }

    /// Pulls the offset back inside the bounds for the current geometry.
    #[must_use]
    pub fn reclamp(self, geometry: &ViewportGeometry) -> Self {
        Self {
            offset: geometry.clamp(self.offset, self.scale),
            ..self
        }
    }

    fn with_scale(self, scale: f32, geometry: &ViewportGeometry) -> Self {
        let drag = if scale::allows_drag(scale) {
            self.drag
        } else {
            if self.drag.is_dragging() {
                debug!(scale, "drag cancelled, image no longer larger than its fit size");
            }
            DragState::Idle
        };
        Self {
            scale,
            offset: geometry.clamp(self.offset, scale),
            drag,
        }
    }
}

/// A viewer instance: transform state plus the rectangles it is bounded by.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    state: ViewportState,
    geometry: ViewportGeometry,
}

impl Viewport {
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            state: ViewportState::default(),
            geometry: ViewportGeometry::new(container, content),
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    pub fn cursor(&self) -> CursorStyle {
        self.state.cursor()
    }

    pub fn zoom_label(&self) -> String {
        self.state.zoom_label()
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.state = self.state.apply_wheel_zoom(delta_y, &self.geometry);
    }

    pub fn zoom_in(&mut self) {
        self.state = self.state.apply_button_zoom(ZoomDirection::In, &self.geometry);
    }

    pub fn zoom_out(&mut self) {
        self.state = self.state.apply_button_zoom(ZoomDirection::Out, &self.geometry);
    }

    /// Back to scale 1 and a centred image, discarding any drag in progress.
    pub fn reset(&mut self) {
        debug!("viewport reset");
        self.state = ViewportState::reset();
    }

    pub fn pointer_down(&mut self, pointer: Point) {
        self.state = self.state.begin_drag(pointer);
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        self.state = self.state.apply_drag(pointer, &self.geometry);
    }

    pub fn pointer_up(&mut self) {
        self.state = self.state.end_drag();
    }

    pub fn pointer_leave(&mut self) {
        self.state = self.state.end_drag();
    }

    /// Adopts a new container size and re-clamps the current offset against it.
    pub fn resize(&mut self, container: Size) {
        if self.geometry.container == container {
            return;
        }
        debug!(width = container.width, height = container.height, "container resized");
        self.geometry.container = container;
        self.state = self.state.reclamp(&self.geometry);
    }

    /// Adopts a new content size and re-clamps the current offset against it.
    pub fn set_content(&mut self, content: Size) {
        self.geometry.content = content;
        self.state = self.state.reclamp(&self.geometry);
    }

    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    /// Where the scaled, translated image lands inside the container.
    pub fn image_rect(&self) -> Rect {
        self.state.image_rect(&self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn geometry() -> ViewportGeometry {
        ViewportGeometry::new(Size::new(500.0, 500.0), Size::new(400.0, 400.0))
    }

    fn zoomed(scale: f32) -> ViewportState {
        ViewportState {
            scale,
            ..ViewportState::default()
        }
    }

    #[test]
    fn default_state() {
        let state = ViewportState::default();
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), Offset::ZERO);
        assert!(!state.is_dragging());
        assert_eq!(state.zoom_label(), "100%");
        assert_eq!(state.cursor(), CursorStyle::Default);
    }

    #[test]
    fn transform_follows_zoom_and_drag() {
        let geometry = geometry();
        assert_eq!(
            ViewportState::default().transform(),
            Transform {
                scale: 1.0,
                offset: Offset::ZERO
            }
        );

        let state = zoomed(2.0)
            .begin_drag(Point::new(0.0, 0.0))
            .apply_drag(Point::new(-25.0, 60.0), &geometry);
        assert_eq!(
            state.transform(),
            Transform {
                scale: 2.0,
                offset: Offset::new(-25.0, 60.0)
            }
        );
    }

    #[test]
    fn zoom_percent_rounds() {
        assert_eq!(zoomed(0.1).zoom_percent(), 10);
        assert_eq!(zoomed(1.234).zoom_percent(), 123);
        assert_eq!(zoomed(1.235).zoom_label(), "124%");
    }

    #[test]
    fn begin_drag_is_guarded_by_scale() {
        let state = ViewportState::default().begin_drag(Point::new(10.0, 10.0));
        assert!(!state.is_dragging());

        let state = zoomed(2.0).begin_drag(Point::new(10.0, 10.0));
        assert!(state.is_dragging());
        assert_eq!(state.cursor(), CursorStyle::Grabbing);
    }

    #[test]
    fn drag_moves_and_clamps() {
        let geometry = geometry();
        let state = zoomed(2.0)
            .begin_drag(Point::new(100.0, 100.0))
            .apply_drag(Point::new(140.0, 80.0), &geometry);
        assert_eq!(state.offset(), Offset::new(40.0, -20.0));

        let state = state.apply_drag(Point::new(1000.0, -1000.0), &geometry);
        assert_eq!(state.offset(), Offset::new(150.0, -150.0));
    }

    #[test]
    fn end_drag_keeps_offset() {
        let geometry = geometry();
        let state = zoomed(2.0)
            .begin_drag(Point::new(0.0, 0.0))
            .apply_drag(Point::new(30.0, 30.0), &geometry)
            .end_drag();
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), Offset::new(30.0, 30.0));
        assert_eq!(state.cursor(), CursorStyle::Grab);
    }

    #[test]
    fn new_drag_uses_fresh_anchor() {
        let geometry = geometry();
        let state = zoomed(2.0)
            .begin_drag(Point::new(0.0, 0.0))
            .apply_drag(Point::new(50.0, 0.0), &geometry)
            .end_drag()
            .begin_drag(Point::new(300.0, 300.0))
            .apply_drag(Point::new(310.0, 300.0), &geometry);
        assert_eq!(state.offset(), Offset::new(60.0, 0.0));
    }

    #[test]
    fn move_without_session_is_ignored() {
        let state = zoomed(2.0).apply_drag(Point::new(80.0, 80.0), &geometry());
        assert_eq!(state, zoomed(2.0));
    }

    #[test]
    fn zooming_to_fit_size_cancels_drag_and_recentres() {
        let geometry = ViewportGeometry::new(Size::new(500.0, 500.0), Size::new(500.0, 500.0));
        let state = zoomed(1.2)
            .begin_drag(Point::new(0.0, 0.0))
            .apply_drag(Point::new(500.0, 0.0), &geometry);
        assert!(state.is_dragging());
        assert_eq!(state.offset().x, geometry.max_offset(state.scale()).x);

        let state = state.apply_button_zoom(ZoomDirection::Out, &geometry);
        assert_eq!(state.scale(), 1.0);
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), Offset::ZERO);
    }

    #[test]
    fn zooming_out_shrinks_offset_to_new_bounds() {
        let geometry = geometry();
        let state = zoomed(3.0)
            .begin_drag(Point::new(0.0, 0.0))
            .apply_drag(Point::new(1000.0, 0.0), &geometry)
            .end_drag();
        assert_eq!(state.offset(), Offset::new(350.0, 0.0));

        let state = state.apply_wheel_zoom(1.0, &geometry);
        assert_eq!(state.scale(), 2.9);
        assert_eq!(state.offset().x, geometry.max_offset(state.scale()).x);
        assert_eq!(state.offset().y, 0.0);
    }

    #[test]
    fn resize_reclamps_current_offset() {
        let mut viewport = Viewport::new(Size::new(500.0, 500.0), Size::new(400.0, 400.0));
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.zoom_in();
        assert_eq!(viewport.scale(), 2.0);

        viewport.pointer_down(Point::new(0.0, 0.0));
        viewport.pointer_move(Point::new(150.0, 150.0));
        viewport.pointer_up();
        assert_eq!(viewport.offset(), Offset::new(150.0, 150.0));

        viewport.resize(Size::new(700.0, 760.0));
        assert_eq!(viewport.offset(), Offset::new(50.0, 20.0));
    }

    #[test]
    fn image_rect_scales_about_centre_then_translates() {
        let mut viewport = Viewport::new(Size::new(500.0, 500.0), Size::new(400.0, 200.0));
        assert_eq!(
            viewport.image_rect(),
            Rect::new(Point::new(50.0, 150.0), Size::new(400.0, 200.0))
        );

        for _ in 0..10 {
            viewport.wheel(-1.0);
        }
        viewport.pointer_down(Point::new(0.0, 0.0));
        viewport.pointer_move(Point::new(100.0, 0.0));

        let rect = viewport.image_rect();
        assert_eq!(rect.size, Size::new(800.0, 400.0));
        assert_eq!(rect.center(), Point::new(350.0, 250.0));
    }
}
