//! 'Design space' is the coordinate space in which a path's points live.
//!
//! The host is responsible for converting pointer input into this space
//! before handing positions to the path; everything in this crate works
//! on design-space values only.
//!
//! Coordinates are continuous; values are never rounded.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use kurbo::{Point, Vec2};

/// A point in design space.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DPoint {
    pub x: f64,
    pub y: f64,
}

/// A vector in design space, used for handle offsets and drag deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DVec2 {
    pub x: f64,
    pub y: f64,
}

impl DPoint {
    pub const ZERO: DPoint = DPoint { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> DPoint {
        DPoint { x, y }
    }

    /// Create a new `DPoint` from a kurbo `Point`, after doing vector math
    /// in design space.
    pub fn from_raw(point: impl Into<Point>) -> DPoint {
        let point = point.into();
        DPoint::new(point.x, point.y)
    }

    /// Convert to a kurbo `Point`, for operations only available there.
    #[inline]
    pub fn to_raw(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Convert this `DPoint` to a `DVec2`.
    pub fn to_dvec2(self) -> DVec2 {
        let DPoint { x, y } = self;
        DVec2 { x, y }
    }

    pub fn distance(self, other: DPoint) -> f64 {
        (other - self).hypot()
    }

    pub fn lerp(self, other: DPoint, t: f64) -> DPoint {
        DPoint::from_raw(self.to_raw().lerp(other.to_raw(), t))
    }

    pub fn midpoint(self, other: DPoint) -> DPoint {
        self.lerp(other, 0.5)
    }

    /// The point on the far side of `self` from `other`, at the same
    /// distance; `self + (self - other)`.
    pub fn reflect(self, other: DPoint) -> DPoint {
        self + (self - other)
    }
}

impl DVec2 {
    pub const ZERO: DVec2 = DVec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> DVec2 {
        DVec2 { x, y }
    }

    pub fn from_raw(vec2: impl Into<Vec2>) -> DVec2 {
        let vec2 = vec2.into();
        DVec2::new(vec2.x, vec2.y)
    }

    #[inline]
    pub fn to_raw(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn hypot(self) -> f64 {
        self.to_raw().hypot()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// The unit vector in the same direction.
    ///
    /// A zero-length vector has no direction; it normalizes to zero.
    pub fn normalize(self) -> DVec2 {
        let len = self.hypot();
        if len == 0.0 || !len.is_finite() {
            DVec2::ZERO
        } else {
            DVec2::new(self.x / len, self.y / len)
        }
    }
}

impl Add<DVec2> for DPoint {
    type Output = DPoint;

    #[inline]
    fn add(self, other: DVec2) -> Self {
        DPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<DVec2> for DPoint {
    fn add_assign(&mut self, rhs: DVec2) {
        *self = *self + rhs
    }
}

impl Sub<DVec2> for DPoint {
    type Output = DPoint;

    #[inline]
    fn sub(self, other: DVec2) -> Self {
        DPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub<DPoint> for DPoint {
    type Output = DVec2;

    #[inline]
    fn sub(self, other: DPoint) -> DVec2 {
        DVec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Add for DVec2 {
    type Output = DVec2;

    #[inline]
    fn add(self, other: DVec2) -> DVec2 {
        DVec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for DVec2 {
    fn add_assign(&mut self, rhs: DVec2) {
        *self = *self + rhs
    }
}

impl Sub for DVec2 {
    type Output = DVec2;

    #[inline]
    fn sub(self, other: DVec2) -> DVec2 {
        DVec2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for DVec2 {
    fn sub_assign(&mut self, rhs: DVec2) {
        *self = *self - rhs
    }
}

impl Mul<f64> for DVec2 {
    type Output = DVec2;

    #[inline]
    fn mul(self, rhs: f64) -> DVec2 {
        DVec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for DVec2 {
    type Output = DVec2;

    #[inline]
    fn neg(self) -> DVec2 {
        DVec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for DPoint {
    fn from(src: (f64, f64)) -> DPoint {
        DPoint::new(src.0, src.1)
    }
}

impl From<Point> for DPoint {
    fn from(src: Point) -> DPoint {
        DPoint::from_raw(src)
    }
}

impl From<DPoint> for Point {
    fn from(src: DPoint) -> Point {
        src.to_raw()
    }
}

impl From<(f64, f64)> for DVec2 {
    fn from(src: (f64, f64)) -> DVec2 {
        DVec2::new(src.0, src.1)
    }
}

impl fmt::Debug for DPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "D({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for DPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "D(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

impl fmt::Display for DVec2 {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "D𝐯=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}
