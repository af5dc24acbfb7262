//! Unopinionated standalone geometry utilities.

mod geom;
pub use geom::Angle;

mod vector;
pub use vector::{Vector2, TOLERANCE};
