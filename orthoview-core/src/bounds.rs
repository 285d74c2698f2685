//! Pan limits for a scaled image inside its container.
//!
//! The image is scaled about its own centre, so it may travel half of its
//! overflow in either direction before an edge enters the frame. An image that
//! does not overflow an axis cannot be moved along it at all.
//!
//! Bounds depend on the current scale and both rectangles. They are recomputed
//! on every call and must never be cached across events.

use crate::geometry::{Offset, Size};

/// Maximum legal distance from the centred position on each axis.
pub fn max_offset(scale: f32, container: Size, content: Size) -> Offset {
    Offset::new(
        axis_limit(content.width, scale, container.width),
        axis_limit(content.height, scale, container.height),
    )
}

/// Constrains `offset` to `[-maxX, maxX] × [-maxY, maxY]` for the given scale and rects.
pub fn clamp_offset(offset: Offset, scale: f32, container: Size, content: Size) -> Offset {
    let max = max_offset(scale, container, content);
    Offset::new(
        offset.x.clamp(-max.x, max.x),
        offset.y.clamp(-max.y, max.y),
    )
}

/// Returns `true` if `offset` already lies inside the legal range.
pub fn contains(offset: Offset, scale: f32, container: Size, content: Size) -> bool {
    let max = max_offset(scale, container, content);
    offset.x.abs() <= max.x && offset.y.abs() <= max.y
}

fn axis_limit(content: f32, scale: f32, container: f32) -> f32 {
    let overflow = (content * scale - container) / 2.0;
    // `f32::max` discards NaN, so degenerate rects pin the axis at zero.
    overflow.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONTAINER: Size = Size::new(500.0, 500.0);
    const CONTENT: Size = Size::new(400.0, 400.0);

    #[test]
    fn limits_follow_overflow() {
        assert_eq!(max_offset(2.0, CONTAINER, CONTENT), Offset::new(150.0, 150.0));
    }

    #[test]
    fn no_overflow_means_no_movement() {
        assert_eq!(max_offset(1.0, CONTAINER, CONTENT), Offset::ZERO);
        assert_eq!(max_offset(0.1, CONTAINER, CONTENT), Offset::ZERO);
    }

    #[test]
    fn axes_are_independent() {
        let content = Size::new(1000.0, 200.0);
        assert_eq!(max_offset(1.0, CONTAINER, content), Offset::new(250.0, 0.0));
    }

    #[test]
    fn clamp_saturates_both_directions() {
        let clamped = clamp_offset(Offset::new(500.0, -900.0), 2.0, CONTAINER, CONTENT);
        assert_eq!(clamped, Offset::new(150.0, -150.0));
    }

    #[test]
    fn clamp_keeps_legal_offsets() {
        let offset = Offset::new(-42.0, 10.5);
        assert_eq!(clamp_offset(offset, 2.0, CONTAINER, CONTENT), offset);
        assert!(contains(offset, 2.0, CONTAINER, CONTENT));
    }

    #[test]
    fn degenerate_rects_pin_offset() {
        let clamped = clamp_offset(Offset::new(30.0, 30.0), 3.0, CONTAINER, Size::ZERO);
        assert_eq!(clamped, Offset::ZERO);

        let nan = Size::new(f32::NAN, f32::NAN);
        assert_eq!(max_offset(3.0, CONTAINER, nan), Offset::ZERO);
    }
}
