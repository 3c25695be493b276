//! Disc-disc overlap test

use super::Locatable;

/// `true` when the two discs are strictly closer than the sum of their radii.
pub fn discs_overlap<A: Locatable + ?Sized, B: Locatable + ?Sized>(a: &A, b: &B) -> bool {
    let delta = b.position() - a.position();
    let min_distance = a.radius() + b.radius();
    delta.length_squared() < min_distance * min_distance
}

/// Gap between the two disc surfaces; negative while they overlap.
pub fn separation<A: Locatable + ?Sized, B: Locatable + ?Sized>(a: &A, b: &B) -> f32 {
    (b.position() - a.position()).length() - (a.radius() + b.radius())
}
