//! Canvas that feeds pointer input into the viewport and draws the result.
//!
//! Drawing reads the viewport state and never changes it. All mutation goes
//! through [`Message::Viewport`] so the engine sees events in delivery order.

use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas::{self, event, Event, Frame, Geometry};
use iced::{Rectangle, Renderer, Theme};
use orthoview_core::{
    CursorStyle, ImageResource, Point, Rect, Size, Viewport, ViewportEvent, ViewportGeometry,
    ViewportState,
};

use crate::document::ImageDocument;
use crate::Message;

/// What the canvas reports to the application on each relevant event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasInput {
    /// Current size of the canvas, re-sent so resizes are picked up promptly.
    pub container: Size,
    pub event: Option<ViewportEvent>,
}

/// Per-widget bookkeeping kept by iced between events.
#[derive(Debug, Default)]
pub struct CanvasState {
    container: Option<Size>,
    hovered: bool,
}

pub struct ImageCanvas<'a> {
    document: &'a ImageDocument,
    viewport: &'a Viewport,
}

impl<'a> ImageCanvas<'a> {
    pub fn new(document: &'a ImageDocument, viewport: &'a Viewport) -> Self {
        Self { document, viewport }
    }
}

impl canvas::Program<Message> for ImageCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut CanvasState,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let container = Size::new(bounds.width, bounds.height);
        let resized = state.container.replace(container) != Some(container);

        let viewport_event = match event {
            Event::Mouse(mouse_event) => {
                let position = cursor
                    .position_in(bounds)
                    .map(|position| Point::new(position.x, position.y));
                let image = render_rect(
                    self.viewport.state(),
                    self.document.intrinsic_size(),
                    container,
                );
                let dragging = self.viewport.state().is_dragging();
                translate(mouse_event, position, image, dragging, &mut state.hovered)
            }
            _ => None,
        };

        if viewport_event.is_none() && !resized {
            return (event::Status::Ignored, None);
        }

        let status = match viewport_event {
            Some(ViewportEvent::Wheel { .. }) | Some(ViewportEvent::PointerDown(_)) => {
                event::Status::Captured
            }
            _ => event::Status::Ignored,
        };

        let input = CanvasInput {
            container,
            event: viewport_event,
        };
        (status, Some(Message::Viewport(input)))
    }

    fn draw(
        &self,
        _state: &CanvasState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let container = Size::new(bounds.width, bounds.height);
        let rect = render_rect(
            self.viewport.state(),
            self.document.intrinsic_size(),
            container,
        );

        frame.draw_image(
            Rectangle {
                x: rect.origin.x,
                y: rect.origin.y,
                width: rect.size.width,
                height: rect.size.height,
            },
            self.document.handle(),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &CanvasState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let style = self.viewport.cursor();
        if style != CursorStyle::Grabbing && !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        interaction(style)
    }
}

/// Screen rectangle of the image for the live canvas size.
///
/// The viewport may not have seen the latest size yet, so the offset is
/// re-clamped against it here. This works on a copy and leaves the state alone.
fn render_rect(state: &ViewportState, intrinsic: Size, container: Size) -> Rect {
    let content = intrinsic.fit_within(container);
    let geometry = ViewportGeometry::new(container, content);
    state.reclamp(&geometry).image_rect(&geometry)
}

/// Maps a raw mouse event onto the viewport vocabulary.
///
/// `position` is the cursor relative to the canvas, or `None` when it is
/// outside. Drags only start on the image itself, not on the letterbox around
/// it. `hovered` remembers whether the cursor was inside last time, so a
/// move across the edge can be reported as a leave.
fn translate(
    event: mouse::Event,
    position: Option<Point>,
    image: Rect,
    dragging: bool,
    hovered: &mut bool,
) -> Option<ViewportEvent> {
    match event {
        mouse::Event::WheelScrolled { delta } => {
            position?;
            let y = match delta {
                ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
            };
            // iced reports scrolling down as negative, the engine expects positive.
            (y != 0.0).then_some(ViewportEvent::Wheel { delta_y: -y })
        }
        mouse::Event::ButtonPressed(mouse::Button::Left) => position
            .filter(|point| image.contains(*point))
            .map(ViewportEvent::PointerDown),
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            dragging.then_some(ViewportEvent::PointerUp)
        }
        mouse::Event::CursorMoved { .. } => match position {
            Some(point) => {
                *hovered = true;
                dragging.then_some(ViewportEvent::PointerMove(point))
            }
            None if *hovered => {
                *hovered = false;
                Some(ViewportEvent::PointerLeave)
            }
            None => None,
        },
        mouse::Event::CursorLeft => {
            *hovered = false;
            Some(ViewportEvent::PointerLeave)
        }
        _ => None,
    }
}

fn interaction(style: CursorStyle) -> mouse::Interaction {
    match style {
        CursorStyle::Default => mouse::Interaction::Idle,
        CursorStyle::Grab => mouse::Interaction::Grab,
        CursorStyle::Grabbing => mouse::Interaction::Grabbing,
    }
}
