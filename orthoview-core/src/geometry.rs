//! Plain value types shared by the viewport engine.
//!
//! These are deliberately GUI-agnostic so the engine can be driven by any host
//! toolkit. Hosts convert their own point/size types at the boundary.

use std::ops::{Add, Sub};

/// A pointer position in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pixel translation applied to the image centre after scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either side is zero, negative or not a number.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Uniformly multiplies both sides.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Shrinks `self` to fit inside `frame`, preserving the aspect ratio.
    ///
    /// Never enlarges: an image smaller than the frame keeps its own size.
    pub fn fit_within(self, frame: Size) -> Self {
        if self.is_empty() || frame.is_empty() {
            return self;
        }

        let ratio = (frame.width / self.width)
            .min(frame.height / self.height)
            .min(1.0);
        self.scaled(ratio)
    }
}

/// An axis-aligned rectangle in container-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Builds the rectangle of `size` whose centre sits at `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        let origin = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
        Self::new(origin, size)
    }

    /// Whether `point` lies inside the rectangle, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }
}

/// Subtracting an offset from a pointer position yields the drag anchor.
impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The difference of two positions is the translation between them.
impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
