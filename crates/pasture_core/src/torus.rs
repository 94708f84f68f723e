//! Geometry on a square toroidal world.
//!
//! Every distance and heading in the simulation goes through
//! [`wrapped_delta`], so an agent near one edge sees neighbours across the
//! opposite edge exactly as if the world had no boundary.

use pasture_data::Position;

/// Shortest signed difference from `a` to `b` on a ring of circumference `extent`.
///
/// Picks the smallest-magnitude member of `{d, d - extent, d + extent}` where
/// `d` is `b - a` reduced into `(-extent, extent)`. Ties keep the earlier
/// candidate. The result satisfies `|delta| <= extent / 2`.
#[inline]
#[must_use]
pub fn wrapped_delta(a: f64, b: f64, extent: f64) -> f64 {
    let d = (b - a) % extent;
    let mut best = d;
    for candidate in [d - extent, d + extent] {
        if candidate.abs() < best.abs() {
            best = candidate;
        }
    }
    best
}

/// Maps a coordinate into `[0, extent)`.
#[inline]
#[must_use]
pub fn wrap(v: f64, extent: f64) -> f64 {
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if w >= extent {
        0.0
    } else {
        w
    }
}

#[inline]
#[must_use]
pub fn wrap_position(p: Position, extent: f64) -> Position {
    Position::new(wrap(p.x, extent), wrap(p.y, extent))
}

/// Wrapped `(dx, dy)` from `from` to `to`.
#[inline]
#[must_use]
pub fn wrapped_offset(from: Position, to: Position, extent: f64) -> (f64, f64) {
    (
        wrapped_delta(from.x, to.x, extent),
        wrapped_delta(from.y, to.y, extent),
    )
}

/// Euclidean distance across the torus.
#[inline]
#[must_use]
pub fn distance(a: Position, b: Position, extent: f64) -> f64 {
    let (dx, dy) = wrapped_offset(a, b, extent);
    dx.hypot(dy)
}

/// Moves `p` by `step` along `heading` (radians) and re-wraps.
#[inline]
#[must_use]
pub fn displace(p: Position, heading: f64, step: f64, extent: f64) -> Position {
    let (sin, cos) = heading.sin_cos();
    wrap_position(Position::new(p.x + cos * step, p.y + sin * step), extent)
}
