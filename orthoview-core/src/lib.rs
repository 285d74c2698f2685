//! # orthoview-core
//!
//! The viewport transform engine behind orthoview: turns wheel, button and
//! pointer-drag input into a bounded scale-and-offset transform for a single
//! image shown inside a fixed-size container.
//!
//! ## Overview
//!
//! - [`scale`] owns the zoom factor, always within `[0.1, 5.0]`.
//! - [`drag`] is the `Idle`/`Dragging` state machine for panning.
//! - [`bounds`] computes how far the image may be moved at the current scale.
//! - [`viewport`] composes them into [`ViewportState`] and [`Viewport`].
//! - [`resource`] ties the viewport to the lifetime of the image on display.
//!
//! Nothing in here can fail: every input is clamped or ignored.
//!
//! ```
//! use orthoview_core::{Point, Size, Viewport, ViewportEvent};
//!
//! let mut viewport = Viewport::new(Size::new(500.0, 500.0), Size::new(400.0, 400.0));
//! for _ in 0..5 {
//!     viewport.handle(ViewportEvent::ZoomIn);
//! }
//! viewport.handle(ViewportEvent::PointerDown(Point::new(100.0, 100.0)));
//! viewport.handle(ViewportEvent::PointerMove(Point::new(600.0, 100.0)));
//!
//! assert_eq!(viewport.state().zoom_label(), "200%");
//! assert_eq!(viewport.offset().x, 150.0);
//! ```

pub mod bounds;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod resource;
pub mod scale;
pub mod viewport;

pub use drag::{CursorStyle, DragSession, DragState};
pub use event::ViewportEvent;
pub use geometry::{Offset, Point, Rect, Size};
pub use resource::{ImageResource, ImageView};
pub use scale::{ZoomDirection, MAX_SCALE, MIN_SCALE};
pub use viewport::{Transform, Viewport, ViewportGeometry, ViewportState};
