//! # Collision Detection
//!
//! Broad-phase candidate generation over a uniform grid, the all-pairs
//! baseline it replaces, and the exact disc overlap test consumers run on
//! the candidates. Nothing in here changes positions or velocities.

mod broad_phase;
mod brute_force;
mod debug_draw;
mod disc_disc;

pub use broad_phase::*;
pub use brute_force::*;
pub use debug_draw::*;
pub use disc_disc::*;

use crate::types::Vec2;

/// An unordered pair of indices into the entity slice that was queried.
/// The first index belongs to the cell being visited, the second to the
/// cell it was paired against; the order carries no meaning.
pub type CandidatePair = (usize, usize);

/// Anything the broad phase can bucket.
///
/// The grid only reads [`Locatable::position`]; the radius is there for
/// narrow-phase consumers such as [`discs_overlap`].
pub trait Locatable {
    fn position(&self) -> Vec2;

    fn radius(&self) -> f32;
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn radius(&self) -> f32 {
        (**self).radius()
    }
}
