//! Field-of-view computation for observers in open 2D space.

mod cone;
pub use cone::{CosineDomain, SightCone};
