use std::{
    f32::consts::{PI, TAU},
    fmt,
    str::FromStr,
};

use crate::Vector2;

/// Angle type, uses radians internally.
///
/// Angles follow the mathematical convention, zero points along the positive
/// x axis and value increases counterclockwise.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default, Debug)]
pub struct Angle(f32);

impl Angle {
    /// Half turn, the default field of view of a sight cone.
    pub const HALF_TURN: Angle = Angle(PI);

    /// Initialize a new angle from a degree value.
    pub fn new(deg: f32) -> Self {
        Angle(deg * TAU / 360.0)
    }

    pub const fn from_radians(rad: f32) -> Self {
        Angle(rad)
    }

    pub fn radians(self) -> f32 {
        self.0
    }

    /// Return the degree value of the angle.
    pub fn deg(self) -> f32 {
        self.0 * 360.0 / TAU
    }
}

impl From<Vector2> for Angle {
    fn from(value: Vector2) -> Self {
        Angle(value.y.atan2(value.x))
    }
}

impl From<Angle> for Vector2 {
    fn from(value: Angle) -> Self {
        Vector2::new(value.0.cos(), value.0.sin())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.deg())
    }
}

impl FromStr for Angle {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Angle::new(s.parse()?))
    }
}
