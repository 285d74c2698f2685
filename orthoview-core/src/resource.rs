//! The image currently on display and the viewport bound to it.
//!
//! The engine never allocates or frees image data. Hosts hand an image in with
//! [`ImageView::show`] and get the previous one back, so they can release it
//! once their renderer has stopped referencing it.

use tracing::debug;

use crate::event::ViewportEvent;
use crate::geometry::Size;
use crate::viewport::Viewport;

/// Decoded image data owned by the host.
pub trait ImageResource {
    /// Pixel size of the image before any fitting or zooming.
    fn intrinsic_size(&self) -> Size;
}

/// Holds at most one image and the viewport that transforms it.
#[derive(Debug)]
pub struct ImageView<R> {
    image: Option<R>,
    viewport: Viewport,
}

impl<R> Default for ImageView<R> {
    fn default() -> Self {
        Self {
            image: None,
            viewport: Viewport::default(),
        }
    }
}

impl<R: ImageResource> ImageView<R> {
    pub fn new(container: Size) -> Self {
        Self {
            image: None,
            viewport: Viewport::new(container, Size::ZERO),
        }
    }

    pub fn image(&self) -> Option<&R> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The viewport to render, or `None` when there is nothing to show.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.image.as_ref().map(|_| &self.viewport)
    }

    pub fn container(&self) -> Size {
        self.viewport.geometry().container
    }

    /// Displays `image` with a fresh viewport and returns the image it replaces.
    #[must_use = "the previous image must be released by the caller"]
    pub fn show(&mut self, image: R) -> Option<R> {
        let container = self.container();
        let content = fitted_content(&image, container);
        debug!(
            width = content.width,
            height = content.height,
            "showing image"
        );
        self.viewport = Viewport::new(container, content);
        self.image.replace(image)
    }

    /// Removes the image, resets the viewport and returns the image for release.
    #[must_use = "the removed image must be released by the caller"]
    pub fn clear(&mut self) -> Option<R> {
        self.viewport = Viewport::new(self.container(), Size::ZERO);
        self.image.take()
    }

    /// Routes `event` to the viewport. Without an image only the container size is tracked.
    pub fn handle(&mut self, event: ViewportEvent) -> bool {
        match event {
            ViewportEvent::ContainerResized(container) => self.resize(container),
            _ if self.image.is_none() => false,
            event => self.viewport.handle(event),
        }
    }

    fn resize(&mut self, container: Size) -> bool {
        let before = (*self.viewport.state(), *self.viewport.geometry());
        self.viewport.resize(container);
        if let Some(image) = &self.image {
            self.viewport.set_content(fitted_content(image, container));
        }
        self.image.is_some() && before != (*self.viewport.state(), *self.viewport.geometry())
    }
}

/// Rendered unscaled size: the intrinsic size shrunk to fit the container.
fn fitted_content<R: ImageResource>(image: &R, container: Size) -> Size {
    image.intrinsic_size().fit_within(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Offset, Point};

    #[derive(Debug, PartialEq)]
    struct Picture(&'static str, Size);

    impl ImageResource for Picture {
        fn intrinsic_size(&self) -> Size {
            self.1
        }
    }

    fn zoomed_and_panned(view: &mut ImageView<Picture>) {
        for _ in 0..10 {
            view.handle(ViewportEvent::ZoomIn);
        }
        view.handle(ViewportEvent::PointerDown(Point::new(0.0, 0.0)));
        view.handle(ViewportEvent::PointerMove(Point::new(80.0, 80.0)));
    }

    #[test]
    fn empty_view_renders_nothing_and_ignores_input() {
        let mut view: ImageView<Picture> = ImageView::new(Size::new(500.0, 500.0));
        assert!(view.viewport().is_none());
        assert!(!view.handle(ViewportEvent::ZoomIn));
        assert!(!view.handle(ViewportEvent::ContainerResized(Size::new(640.0, 480.0))));
        assert_eq!(view.container(), Size::new(640.0, 480.0));
    }

    #[test]
    fn show_fits_content_into_container() {
        let mut view = ImageView::new(Size::new(500.0, 500.0));
        let previous = view.show(Picture("a", Size::new(1000.0, 500.0)));
        assert!(previous.is_none());

        let viewport = view.viewport().unwrap();
        assert_eq!(viewport.geometry().content, Size::new(500.0, 250.0));
    }

    #[test]
    fn replacing_image_hands_back_previous_and_resets() {
        let mut view = ImageView::new(Size::new(500.0, 500.0));
        let _ = view.show(Picture("a", Size::new(400.0, 400.0)));
        zoomed_and_panned(&mut view);
        assert_eq!(view.viewport().unwrap().offset(), Offset::new(80.0, 80.0));

        let previous = view.show(Picture("b", Size::new(300.0, 300.0)));
        assert_eq!(previous, Some(Picture("a", Size::new(400.0, 400.0))));

        let viewport = view.viewport().unwrap();
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.offset(), Offset::ZERO);
        assert!(!viewport.state().is_dragging());
    }

    #[test]
    fn clear_returns_image_and_resets() {
        let mut view = ImageView::new(Size::new(500.0, 500.0));
        let _ = view.show(Picture("a", Size::new(400.0, 400.0)));
        zoomed_and_panned(&mut view);

        let removed = view.clear();
        assert_eq!(removed.map(|p| p.0), Some("a"));
        assert!(view.viewport().is_none());
        assert!(view.clear().is_none());

        let _ = view.show(Picture("c", Size::new(400.0, 400.0)));
        assert_eq!(view.viewport().unwrap().scale(), 1.0);
    }

    #[test]
    fn resize_refits_content_and_reclamps() {
        let mut view = ImageView::new(Size::new(500.0, 500.0));
        let _ = view.show(Picture("a", Size::new(1000.0, 1000.0)));
        for _ in 0..5 {
            view.handle(ViewportEvent::ZoomIn);
        }
        view.handle(ViewportEvent::PointerDown(Point::new(0.0, 0.0)));
        view.handle(ViewportEvent::PointerMove(Point::new(400.0, 400.0)));
        assert_eq!(view.viewport().unwrap().offset(), Offset::new(250.0, 250.0));

        assert!(view.handle(ViewportEvent::ContainerResized(Size::new(250.0, 250.0))));
        let viewport = view.viewport().unwrap();
        assert_eq!(viewport.geometry().content, Size::new(250.0, 250.0));
        assert_eq!(viewport.offset(), Offset::new(125.0, 125.0));
    }
}
