//! Density Estimator - SPH-style kernel interpolation
//!
//! Kernel: W(r, d) = max(0, r - d)^3 / (pi * r^8 / 4), zero beyond `r`.
//! Density at p: sum of mass * W(r, |p - q|) over all particle positions q,
//! unit mass per particle. Gradients use a forward difference (step 0.001).
//!
//! Nothing here feeds back into particle velocities.

use std::f64::consts::PI;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{Error, Result, Vec2};

pub const PARTICLE_MASS: f32 = 1.0;
/// Forward-difference step used by the gradient estimators
pub const GRADIENT_STEP: f32 = 0.001;

/// Cubic falloff kernel normalised by `pi * radius^8 / 4`.
///
/// Exactly 0 for `distance >= radius`; maximal at `distance == 0`.
/// Evaluated in f64 since `radius^8` leaves the f32 range for modest radii.
/// `radius` must be > 0 (validated by the query functions).
#[inline]
pub fn smoothing_kernel(radius: f32, distance: f32) -> f32 {
    let value = (radius - distance).max(0.0) as f64;
    if value == 0.0 {
        return 0.0;
    }
    let radius = radius as f64;
    let volume = PI * radius.powi(8) / 4.0;
    (value * value * value / volume) as f32
}

fn validate_query(sample: Vec2, radius: f32) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidQuery(format!(
            "smoothing radius must be finite and > 0, got {}",
            radius
        )));
    }
    // Peak weight must be a usable f32: tiny radii overflow, huge ones vanish
    let peak = smoothing_kernel(radius, 0.0);
    if !peak.is_finite() || peak <= 0.0 {
        return Err(Error::InvalidQuery(format!(
            "smoothing radius {} is outside the representable kernel range",
            radius
        )));
    }
    if !sample.is_finite() {
        return Err(Error::InvalidQuery(format!(
            "sample point must be finite, got ({}, {})",
            sample.x, sample.y
        )));
    }
    Ok(())
}

/// Kernel-weighted sum of `weight(i)` over `positions` (no validation).
#[inline]
fn weighted_sum<F>(sample: Vec2, radius: f32, positions: &[Vec2], weight: F) -> f32
where
    F: Fn(usize) -> f32 + Sync + Send,
{
    let term = |(i, q): (usize, &Vec2)| weight(i) * smoothing_kernel(radius, sample.distance(*q));

    #[cfg(feature = "parallel")]
    {
        positions.par_iter().enumerate().map(term).sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        positions.iter().enumerate().map(term).sum()
    }
}

fn finite_sum(sum: f32) -> Result<f32> {
    if sum.is_finite() {
        Ok(sum)
    } else {
        Err(Error::InvalidQuery(format!("weighted sum is not finite ({})", sum)))
    }
}

/// Density at `sample`; 0 for an empty position set.
pub fn density(sample: Vec2, radius: f32, positions: &[Vec2]) -> Result<f32> {
    validate_query(sample, radius)?;
    finite_sum(weighted_sum(sample, radius, positions, |_| PARTICLE_MASS))
}

/// Kernel-weighted sum of a per-particle scalar field (`values[i]` belongs
/// to `positions[i]`).
pub fn property(sample: Vec2, radius: f32, positions: &[Vec2], values: &[f32]) -> Result<f32> {
    validate_query(sample, radius)?;
    if values.len() != positions.len() {
        return Err(Error::InvalidQuery(format!(
            "property needs one value per position ({} values, {} positions)",
            values.len(),
            positions.len()
        )));
    }
    finite_sum(weighted_sum(sample, radius, positions, |i| values[i]))
}

/// Forward-difference gradient of `field` at `sample`.
fn forward_gradient<F>(sample: Vec2, field: F) -> Result<Vec2>
where
    F: Fn(Vec2) -> Result<f32>,
{
    let here = field(sample)?;
    let dx = field(sample + Vec2::new(GRADIENT_STEP, 0.0))? - here;
    let dy = field(sample + Vec2::new(0.0, GRADIENT_STEP))? - here;
    let gradient = Vec2::new(dx / GRADIENT_STEP, dy / GRADIENT_STEP);
    if !gradient.is_finite() {
        return Err(Error::InvalidQuery("gradient is not finite".into()));
    }
    Ok(gradient)
}

/// Gradient of the density field at `sample`.
pub fn density_gradient(sample: Vec2, radius: f32, positions: &[Vec2]) -> Result<Vec2> {
    validate_query(sample, radius)?;
    forward_gradient(sample, |p| density(p, radius, positions))
}

/// Gradient of an arbitrary per-particle scalar field at `sample`.
pub fn property_gradient(
    sample: Vec2,
    radius: f32,
    positions: &[Vec2],
    values: &[f32],
) -> Result<Vec2> {
    validate_query(sample, radius)?;
    forward_gradient(sample, |p| property(p, radius, positions, values))
}
