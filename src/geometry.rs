/// 📍 Screen coordinate in touch space (pixels, y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Offset between two points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const ZERO: Displacement = Displacement { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Squared length, widened to `i64` and saturating at `i64::MAX`
    pub fn length_squared(&self) -> i64 {
        let dx = i64::from(self.dx);
        let dy = i64::from(self.dy);
        (dx * dx).saturating_add(dy * dy)
    }

    pub fn length(&self) -> f64 {
        (self.length_squared() as f64).sqrt()
    }
}

// Point arithmetic saturates so hit tests stay total over every `Point`.
impl std::ops::Sub for Point {
    type Output = Displacement;

    fn sub(self, other: Point) -> Displacement {
        Displacement {
            dx: self.x.saturating_sub(other.x),
            dy: self.y.saturating_sub(other.y),
        }
    }
}

impl std::ops::Add<Displacement> for Point {
    type Output = Point;

    fn add(self, offset: Displacement) -> Point {
        Point {
            x: self.x.saturating_add(offset.dx),
            y: self.y.saturating_add(offset.dy),
        }
    }
}

impl std::ops::Sub<Displacement> for Point {
    type Output = Point;

    fn sub(self, offset: Displacement) -> Point {
        Point {
            x: self.x.saturating_sub(offset.dx),
            y: self.y.saturating_sub(offset.dy),
        }
    }
}

impl std::ops::Neg for Displacement {
    type Output = Displacement;

    fn neg(self) -> Displacement {
        Displacement {
            dx: self.dx.saturating_neg(),
            dy: self.dy.saturating_neg(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Anything a touch point can be hit-tested against.
///
/// Only [`Circle`] and [`Rectangle`] implement it; every virtual control is
/// one of those two shapes.
pub trait Area {
    fn contains(&self, point: Point) -> bool;

    /// Point used to anchor the area when drawing it
    fn center(&self) -> Point;
}

/// ⭕ Circular region, boundary included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    pub fn radius_squared(&self) -> i64 {
        let r = i64::from(self.radius);
        r * r
    }
}

impl Area for Circle {
    fn contains(&self, point: Point) -> bool {
        (point - self.center).length_squared() <= self.radius_squared()
    }

    fn center(&self) -> Point {
        self.center
    }
}

/// ▭ Axis-aligned region: the near edges belong to it, the far edges don't,
/// so rectangles laid edge to edge never both claim a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub origin: Point,
    pub size: Size,
}

impl Rectangle {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn right(&self) -> i32 {
        self.origin.x.saturating_add(self.size.width)
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(self.size.height)
    }
}

impl Area for Rectangle {
    fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.right()
            && point.y >= self.origin.y
            && point.y < self.bottom()
    }

    fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2,
            self.origin.y + self.size.height / 2,
        )
    }
}
