use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use anyhow::bail;

/// Absolute per-component tolerance used by every approximate comparison.
pub const TOLERANCE: f32 = 1e-4;

/// Two-dimensional vector value.
///
/// There is no exact equality for vectors, use [`Vector2::approx_eq`] that
/// compares components against [`TOLERANCE`].
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Unit vector pointing along the positive y axis.
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of the vector.
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Return a unit vector pointing in the same direction.
    ///
    /// A vector with exactly zero magnitude normalizes into the zero vector
    /// instead of producing NaN components.
    pub fn normalized(self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x / magnitude, self.y / magnitude)
    }

    /// Both components differ by less than [`TOLERANCE`].
    pub fn approx_eq(self, other: Vector2) -> bool {
        (self.x - other.x).abs() < TOLERANCE
            && (self.y - other.y).abs() < TOLERANCE
    }

    pub fn is_zero(self) -> bool {
        self.approx_eq(Vector2::ZERO)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::vec2(v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Vector2 {
    type Err = anyhow::Error;

    /// Parse a vector from `x,y`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);

        let Some((x, y)) = s.split_once(',') else {
            bail!("vector {s:?} is not of the form x,y")
        };

        let (x, y): (f32, f32) = (x.trim().parse()?, y.trim().parse()?);
        if !x.is_finite() || !y.is_finite() {
            bail!("vector {s:?} has non-finite components")
        }

        Ok(Vector2::new(x, y))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Vector2 {
    fn arbitrary(g: &mut quickcheck::Gen) -> Vector2 {
        // Keep components finite and on a coarse grid so that zero vectors
        // show up and nonzero ones stay well clear of the tolerance.
        let mut c = || {
            let n = <i32 as quickcheck::Arbitrary>::arbitrary(g);
            (n % 10_000) as f32 / 8.0
        };
        Vector2::new(c(), c())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let v = *self;
        Box::new(
            quickcheck::Arbitrary::shrink(&(v.x, v.y))
                .map(|(x, y)| Vector2::new(x, y))
                .filter(|v| v.x.is_finite() && v.y.is_finite()),
        )
    }
}
