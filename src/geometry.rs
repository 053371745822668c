//! Plane geometry helpers shared by layout and rendering
//!
//! All layout math uses the math convention (angles counter-clockwise, y up).
//! The canvas convention (y down) is only reached through [`flip`].

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of a drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Degenerate box covering a single point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y-coordinate (math convention, y grows upward)
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }

    /// Check if another box lies entirely inside this one
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.top() <= self.top()
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let top = self.top().max(other.top());
        BoundingBox::new(x, y, right - x, top - y)
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        self.union(&BoundingBox::at(point))
    }
}

/// Point reached by travelling `length` from `origin` at `angle` radians.
pub fn endpoint(origin: Point, angle: f64, length: f64) -> Point {
    Point::new(
        origin.x + length * angle.cos(),
        origin.y + length * angle.sin(),
    )
}

/// Convert a y-coordinate between math and canvas convention.
///
/// The conversion is its own inverse.
pub fn flip(y: f64, canvas_height: f64) -> f64 {
    canvas_height - y
}

/// Degrees to radians
pub fn degrees(deg: f64) -> f64 {
    deg.to_radians()
}
