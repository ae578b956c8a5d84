use crate::core::Vec2;
use crate::domain::{Domain, SimConfig};

/// Replacement for a zero seed (xorshift never leaves 0)
const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

/// Uniform in [0, 1) with 24 bits of precision
#[inline]
pub(super) fn next_unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform integer in [0, bound)
#[inline]
pub(super) fn next_below(state: &mut u32, bound: u32) -> u32 {
    ((xorshift32(state) as u64 * bound as u64) >> 32) as u32
}

/// Uniform in [0, max); guards against `unit * max` rounding up to `max`
#[inline]
fn next_coord(state: &mut u32, max: f32) -> f32 {
    let v = next_unit(state) * max;
    if v < max { v } else { 0.0 }
}

/// Spawn state for one particle: position in `[0,w) x [0,h)`, velocity
/// zero apart from the optional X jitter.
pub(super) fn spawn(state: &mut u32, domain: &Domain, config: &SimConfig) -> (Vec2, Vec2) {
    let position = if config.spawn_on_grid {
        Vec2::new(
            next_below(state, domain.width()) as f32,
            next_below(state, domain.height()) as f32,
        )
    } else {
        Vec2::new(
            next_coord(state, domain.max_x()),
            next_coord(state, domain.max_y()),
        )
    };

    let jitter = config.initial_velocity_jitter;
    let velocity = if jitter > 0.0 {
        Vec2::new((next_unit(state) * 2.0 - 1.0) * jitter, 0.0)
    } else {
        Vec2::ZERO
    };

    (position, velocity)
}
