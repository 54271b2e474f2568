//! Visual parameter derivation
//!
//! Pure functions from entity state to [`DrawCall`] values. Nothing here
//! mutates the scene; the only inputs are entity fields and phase
//! accumulators the integrator advances.

use crate::config::SceneConfig;
use crate::map_range;
use crate::render::{DrawCall, Hsba};

use super::state::{Particle, Shape, Shockwave};

/// Smooth bounded pseudo-random oscillation, seeded per shape.
///
/// A three-term sine sum with incommensurate frequencies: continuous in
/// the phase and bounded in [-1, 1] (the coefficients sum to 1). Stands
/// in for platform noise so tests can assert boundedness without
/// bit-exact noise reproduction.
pub fn wobble(seed: f32, phase: f32) -> f32 {
    0.5 * (phase + seed).sin()
        + 0.3 * (2.17 * phase + 1.3 * seed).sin()
        + 0.2 * (4.31 * phase + 2.6 * seed).sin()
}

/// Size a shape renders at this frame: base size plus the wobble swing.
pub fn visual_size(shape: &Shape) -> f32 {
    shape.size + shape.size * shape.wobble_amount * wobble(shape.wobble_seed, shape.wobble_phase)
}

/// Fill color for a shape: hue boosted by speed, saturation rising with
/// speed, fixed brightness and alpha.
pub fn shape_fill(shape: &Shape, cfg: &SceneConfig) -> Hsba {
    let speed = shape.speed();
    let hue = (shape.hue + map_range(speed, 0.0, cfg.max_speed, 0.0, cfg.hue_boost)).rem_euclid(360.0);
    let sat = map_range(speed, 0.0, cfg.max_speed, 70.0, 100.0).clamp(70.0, 100.0);
    Hsba::new(hue, sat, 95.0, 0.85)
}

pub fn shape_call(shape: &Shape, cfg: &SceneConfig) -> DrawCall {
    let size = visual_size(shape);
    let glow = cfg.quality.glow_enabled().then_some(size * 0.6);
    DrawCall::Shape {
        kind: shape.kind,
        pos: shape.pos,
        rotation: shape.rotation,
        size,
        fill: shape_fill(shape, cfg),
        glow,
    }
}

/// Particles fade linearly with remaining life and drift their hue as
/// they age.
pub fn particle_call(p: &Particle) -> DrawCall {
    let hue = (p.hue + p.age() as f32 * 0.5).rem_euclid(360.0);
    let alpha = p.life_ratio() * 0.8;
    DrawCall::Particle {
        pos: p.pos,
        size: p.size,
        fill: Hsba::new(hue, 80.0, 100.0, alpha),
    }
}

/// Shockwaves render as a white ring whose alpha tracks the fade level.
pub fn shockwave_call(w: &Shockwave) -> DrawCall {
    DrawCall::Shockwave {
        center: w.center,
        radius: w.radius,
        stroke_weight: w.stroke,
        stroke: Hsba::new(0.0, 0.0, 100.0, map_range(w.fade, 0.0, 1.0, 0.0, 0.9).max(0.0)),
    }
}

/// Connection line between two near shapes: alpha fades to zero at the
/// distance limit, hue is the pair average.
pub fn connection_call(a: &Shape, b: &Shape, dist: f32, connect_dist: f32) -> DrawCall {
    let alpha = map_range(dist, 0.0, connect_dist, 0.6, 0.0).max(0.0);
    let hue = ((a.hue + b.hue) / 2.0).rem_euclid(360.0);
    DrawCall::Connection {
        from: a.pos,
        to: b.pos,
        weight: 0.5,
        stroke: Hsba::new(hue, 50.0, 100.0, alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Scene, Viewport};
    use glam::Vec2;

    fn test_shape() -> Shape {
        let mut scene = Scene::new(11, Viewport::new(800.0, 600.0), SceneConfig::default());
        scene.shapes.remove(0)
    }

    #[test]
    fn test_wobble_bounded() {
        for seed in [0.0_f32, 17.5, 423.9, 999.0] {
            let mut phase = 0.0_f32;
            for _ in 0..2000 {
                let w = wobble(seed, phase);
                assert!((-1.0..=1.0).contains(&w), "wobble {} out of range", w);
                phase += 0.03;
            }
        }
    }

    #[test]
    fn test_wobble_continuous_in_phase() {
        // Small phase steps produce small output steps
        let mut prev = wobble(42.0, 0.0);
        let mut phase = 0.0_f32;
        for _ in 0..1000 {
            phase += 0.001;
            let w = wobble(42.0, phase);
            assert!((w - prev).abs() < 0.01);
            prev = w;
        }
    }

    #[test]
    fn test_visual_size_stays_within_wobble_band() {
        let mut s = test_shape();
        s.size = 30.0;
        s.wobble_amount = 0.4;
        for i in 0..500 {
            s.wobble_phase = i as f32 * 0.05;
            let v = visual_size(&s);
            assert!(v >= 30.0 * (1.0 - 0.4) - 1e-3);
            assert!(v <= 30.0 * (1.0 + 0.4) + 1e-3);
        }
    }

    #[test]
    fn test_shape_fill_speed_boost() {
        let cfg = SceneConfig::default();
        let mut s = test_shape();
        s.hue = 100.0;

        s.vel = Vec2::ZERO;
        let still = shape_fill(&s, &cfg);
        assert!((still.h - 100.0).abs() < 1e-4);
        assert!((still.s - 70.0).abs() < 1e-4);

        s.vel = Vec2::new(cfg.max_speed, 0.0);
        let fast = shape_fill(&s, &cfg);
        assert!((fast.h - (100.0 + cfg.hue_boost)).abs() < 1e-4);
        assert!((fast.s - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_shape_fill_hue_wraps() {
        let cfg = SceneConfig::default();
        let mut s = test_shape();
        s.hue = 350.0;
        s.vel = Vec2::new(cfg.max_speed, 0.0);
        let fill = shape_fill(&s, &cfg);
        assert!(fill.h >= 0.0 && fill.h < 360.0);
    }

    #[test]
    fn test_particle_fade_linear() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 40,
            initial_life: 40,
            hue: 10.0,
            size: 2.0,
        };
        let full = match particle_call(&p) {
            DrawCall::Particle { fill, .. } => fill.a,
            _ => unreachable!(),
        };
        p.life = 10;
        let late = match particle_call(&p) {
            DrawCall::Particle { fill, .. } => fill.a,
            _ => unreachable!(),
        };
        assert!((full - 0.8).abs() < 1e-5);
        assert!((late - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_shockwave_alpha_tracks_fade() {
        let w = Shockwave {
            center: Vec2::ZERO,
            radius: 40.0,
            max_radius: 200.0,
            expansion: 4.0,
            fade: 0.5,
            stroke: 3.0,
        };
        match shockwave_call(&w) {
            DrawCall::Shockwave { stroke, .. } => assert!((stroke.a - 0.45).abs() < 1e-5),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_connection_fades_with_distance() {
        let a = test_shape();
        let mut b = a.clone();
        b.pos = a.pos + Vec2::new(50.0, 0.0);
        let mid = match connection_call(&a, &b, 50.0, 100.0) {
            DrawCall::Connection { stroke, .. } => stroke.a,
            _ => unreachable!(),
        };
        let edge = match connection_call(&a, &b, 100.0, 100.0) {
            DrawCall::Connection { stroke, .. } => stroke.a,
            _ => unreachable!(),
        };
        assert!((mid - 0.3).abs() < 1e-5);
        assert!(edge.abs() < 1e-5);
    }
}
