//! Vector helpers on top of `Vec3`
//!
//! `Vec3` already covers add, subtract, scale, copy, length and zero-init;
//! this adds the pieces the solver needs beyond that.

use bevy::math::Vec3;
use rand::Rng;
use std::ops::Range;

/// Vector with every axis drawn independently and uniformly from `range`
pub fn random_vec3<R: Rng>(rng: &mut R, range: Range<f32>) -> Vec3 {
    Vec3::new(
        rng.random_range(range.clone()),
        rng.random_range(range.clone()),
        rng.random_range(range),
    )
}

/// Unit vector along `v`, or zero when `v` has no direction
///
/// Zero-length (or non-finite) input yields `Vec3::ZERO` instead of NaN.
pub fn unit_or_zero(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}
