//! Per-shape force accumulation
//!
//! Three terms stack each tick: pointer repulsion, pairwise peer
//! repulsion, and a gentle pull toward the viewport center. Every term
//! is clamped before it accumulates so a busy tick cannot blow up the
//! integration.
//!
//! Peer forces are deliberately one-sided: the force on A from B is
//! computed on its own, not mirrored onto B. The visuals depend on that
//! asymmetry, so it stays.

use glam::Vec2;

use super::state::Shape;
use crate::config::SceneConfig;
use crate::{map_range, set_mag};

/// Net force on `shapes[index]` for this tick.
pub fn net_force(
    index: usize,
    shapes: &[Shape],
    pointer: Option<Vec2>,
    pointer_radius: f32,
    center: Vec2,
    cfg: &SceneConfig,
) -> Vec2 {
    let shape = &shapes[index];
    let mut total = Vec2::ZERO;

    if let Some(p) = pointer {
        total += pointer_term(shape, p, pointer_radius, cfg);
    }
    total += peer_term(index, shapes, cfg);
    total += center_term(shape, center, cfg);

    total
}

/// Repulsion away from the pointer: linear falloff to zero at the
/// influence radius, scaled by the shape's own strength, plus a
/// short-range pure repulsion so shapes never collapse onto the pointer.
fn pointer_term(shape: &Shape, pointer: Vec2, radius: f32, cfg: &SceneConfig) -> Vec2 {
    let away = shape.pos - pointer;
    // Epsilon floor keeps the direction normalizable at distance zero
    let d = away.length().max(f32::EPSILON);
    if d >= radius {
        return Vec2::ZERO;
    }

    let falloff = map_range(d, 0.0, radius, cfg.pointer_force, 0.0);
    let mut force = set_mag(away, falloff * shape.strength).clamp_length_max(cfg.force_clamp);

    let k = cfg.close_repel_radius;
    let close = ((k - d) / k).max(0.0) * cfg.close_repel_force;
    if close > 0.0 {
        force += set_mag(away, close).clamp_length_max(cfg.force_clamp);
    }

    force
}

/// Repulsion from every peer that is both inside the interaction radius
/// and closer than the size-based minimum separation. Closer pairs repel
/// harder, interpolated from 2x the base force down to a tenth of it.
fn peer_term(index: usize, shapes: &[Shape], cfg: &SceneConfig) -> Vec2 {
    let shape = &shapes[index];
    let mut total = Vec2::ZERO;

    for (j, other) in shapes.iter().enumerate() {
        if j == index {
            continue;
        }
        let away = shape.pos - other.pos;
        let d = away.length();
        // A degenerate peer (NaN position from a bad force elsewhere)
        // is skipped rather than propagated
        if !d.is_finite() {
            continue;
        }
        let min_sep = shape.size / 2.0 + other.size / 2.0 + cfg.peer_buffer;
        if d < cfg.peer_radius && d < min_sep {
            let strength = map_range(d, 0.0, min_sep, cfg.peer_force * 2.0, cfg.peer_force * 0.1);
            total += set_mag(away, strength).clamp_length_max(cfg.force_clamp);
        }
    }

    total
}

/// Constant-fraction pull toward the viewport center, applied every tick
/// regardless of distance.
fn center_term(shape: &Shape, center: Vec2, cfg: &SceneConfig) -> Vec2 {
    ((center - shape.pos) * cfg.center_pull).clamp_length_max(cfg.force_clamp)
}
