//! Trail-particle emission
//!
//! Fast shapes shed particles. The chance per tick scales linearly with
//! speed up to the configured base rate, and the global particle cap is
//! enforced here before a spawn is even rolled.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Particle, Shape};
use crate::config::SceneConfig;
use crate::map_range;

/// Roll for a trail particle behind `shape`. `live` is the current
/// live-particle count; at or above the cap nothing spawns.
pub fn maybe_emit(
    shape: &Shape,
    rng: &mut Pcg32,
    live: usize,
    cfg: &SceneConfig,
) -> Option<Particle> {
    if live >= cfg.effective_particle_cap() {
        return None;
    }

    let chance = map_range(shape.speed(), 0.0, cfg.max_speed, 0.0, cfg.emit_rate).clamp(0.0, 1.0);
    if rng.random::<f32>() >= chance {
        return None;
    }

    Some(spawn(shape, rng, cfg))
}

/// Build one particle at the shape's position with a small randomized
/// outward velocity, inheriting the shape's hue and a fraction of its
/// size.
fn spawn(shape: &Shape, rng: &mut Pcg32, cfg: &SceneConfig) -> Particle {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let speed = rng.random_range(0.3..1.5);
    let jitter = if cfg.particle_life_jitter > 0 {
        rng.random_range(-cfg.particle_life_jitter..=cfg.particle_life_jitter)
    } else {
        0
    };
    let life = (cfg.particle_life + jitter).max(1);

    Particle {
        pos: shape.pos,
        vel: Vec2::new(angle.cos(), angle.sin()) * speed,
        life,
        initial_life: life,
        hue: shape.hue,
        size: shape.size * rng.random_range(0.08..0.2),
    }
}
