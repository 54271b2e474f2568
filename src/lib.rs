//! Driftfield - interactive generative particle art for the browser canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (forces, integration, entity lifecycles)
//! - `render`: Draw-call types and render adapters (Canvas2D on wasm)
//! - `config`: Tunable scene configuration and quality presets

pub mod config;
pub mod render;
pub mod sim;

pub use config::{QualityPreset, SceneConfig};

use glam::Vec2;

/// Scene tuning constants (defaults for [`SceneConfig`])
pub mod consts {
    /// Number of drifting shapes in the scene
    pub const NUM_SHAPES: usize = 80;

    /// Pointer influence radius (pixels) at the default viewport
    pub const POINTER_RADIUS: f32 = 150.0;
    /// Peak pointer repulsion force (at distance 0, falls off linearly)
    pub const POINTER_FORCE: f32 = 1.5;
    /// Short-range pure repulsion radius around the pointer
    pub const CLOSE_REPEL_RADIUS: f32 = 30.0;
    /// Short-range pure repulsion force scale
    pub const CLOSE_REPEL_FORCE: f32 = 0.5;

    /// Peer repulsion interaction radius
    pub const PEER_RADIUS: f32 = 50.0;
    /// Base peer repulsion force
    pub const PEER_FORCE: f32 = 0.8;
    /// Extra separation buffer added to the sum of half-sizes
    pub const PEER_BUFFER: f32 = 10.0;

    /// Constant-fraction pull toward the viewport center
    pub const CENTER_PULL: f32 = 0.005;

    /// Cap on any single force contribution per tick
    pub const FORCE_CLAMP: f32 = 2.0;
    /// Speed limit after integration (pixels per tick)
    pub const MAX_SPEED: f32 = 5.0;
    /// Per-tick multiplicative velocity damping
    pub const FRICTION: f32 = 0.97;

    /// Extra rotation (radians per tick) at max speed
    pub const SPIN_BOOST: f32 = 0.05;
    /// Extra hue degrees at max speed
    pub const HUE_BOOST: f32 = 30.0;

    /// Hard cap on live trail particles
    pub const PARTICLE_CAP: usize = 300;
    /// Particle emit probability per tick at max speed
    pub const EMIT_RATE: f32 = 0.35;
    /// Base particle lifespan in frames
    pub const PARTICLE_LIFE: i32 = 50;
    /// Lifespan jitter (plus or minus, frames)
    pub const PARTICLE_LIFE_JITTER: i32 = 20;
    /// Per-tick multiplicative damping for particle velocity
    pub const PARTICLE_FRICTION: f32 = 0.92;

    /// Click explosion radius
    pub const EXPLOSION_RADIUS: f32 = 200.0;
    /// Click explosion force at the blast center
    pub const EXPLOSION_FORCE: f32 = 15.0;

    /// Shockwave fade decrement per tick (fade runs 1.0 -> 0)
    pub const SHOCKWAVE_FADE_STEP: f32 = 0.02;
    /// Shockwave expansion speed decay per tick
    pub const SHOCKWAVE_EXPANSION_DECAY: f32 = 0.95;
    /// Shockwave stroke weight decay per tick
    pub const SHOCKWAVE_STROKE_DECAY: f32 = 0.93;

    /// Max distance at which connection lines are drawn between shapes
    pub const CONNECT_DIST: f32 = 100.0;
}

/// Linear remap of `v` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Unclamped, like the p5 `map()` the sketches lean on; callers clamp
/// where they need to.
#[inline]
pub fn map_range(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (v - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Rescale `dir` to magnitude `mag`.
///
/// A zero-length direction is treated as having a minimal epsilon length
/// so the result is always finite (pushes along +x in that degenerate
/// case rather than dividing by zero).
#[inline]
pub fn set_mag(dir: Vec2, mag: f32) -> Vec2 {
    let len = dir.length();
    if len <= f32::EPSILON {
        Vec2::new(mag, 0.0)
    } else {
        dir * (mag / len)
    }
}
