//! Velocity/position integration and the wrap-around boundary
//!
//! Fixed order per tick: accumulate, clamp speed, move, damp, clear the
//! accumulator. Rotation, hue, and the wobble phase advance here too so
//! every per-tick mutation of a shape happens in one place.

use glam::Vec2;

use super::state::{Shape, Viewport};
use crate::config::SceneConfig;
use crate::map_range;

/// Advance one shape by one tick's worth of accumulated force.
pub fn integrate(shape: &mut Shape, cfg: &SceneConfig) {
    shape.vel += shape.acc;
    shape.vel = shape.vel.clamp_length_max(cfg.max_speed);
    shape.pos += shape.vel;
    shape.vel *= cfg.friction;
    shape.acc = Vec2::ZERO;

    // Spin faster while moving fast; hue drifts and wraps
    let speed = shape.vel.length();
    shape.rotation += shape.rotation_speed + map_range(speed, 0.0, cfg.max_speed, 0.0, cfg.spin_boost);
    shape.hue = (shape.hue + shape.hue_shift).rem_euclid(360.0);
    shape.wobble_phase += shape.wobble_speed;
}

/// Wrap-around boundary: a shape leaving one edge (past its own size)
/// re-enters from the opposite edge. Never clamps, never bounces.
pub fn wrap_edges(shape: &mut Shape, viewport: Viewport) {
    if shape.pos.x > viewport.width + shape.size {
        shape.pos.x = -shape.size;
    } else if shape.pos.x < -shape.size {
        shape.pos.x = viewport.width + shape.size;
    }
    if shape.pos.y > viewport.height + shape.size {
        shape.pos.y = -shape.size;
    } else if shape.pos.y < -shape.size {
        shape.pos.y = viewport.height + shape.size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Scene;

    fn test_shape() -> Shape {
        let mut scene = Scene::new(3, Viewport::new(800.0, 600.0), SceneConfig::default());
        scene.shapes.remove(0)
    }

    #[test]
    fn test_speed_clamped_after_integration() {
        let cfg = SceneConfig::default();
        let mut s = test_shape();
        s.acc = Vec2::new(1000.0, -500.0);
        integrate(&mut s, &cfg);
        // Friction applies after the clamp, so post-tick speed is under it
        assert!(s.speed() <= cfg.max_speed + 1e-4);
    }

    #[test]
    fn test_acc_cleared_by_integration() {
        let cfg = SceneConfig::default();
        let mut s = test_shape();
        s.acc = Vec2::new(0.5, 0.5);
        integrate(&mut s, &cfg);
        assert_eq!(s.acc, Vec2::ZERO);
    }

    #[test]
    fn test_friction_decays_speed() {
        let cfg = SceneConfig::default();
        let mut s = test_shape();
        s.vel = Vec2::new(4.0, 0.0);
        s.acc = Vec2::ZERO;
        integrate(&mut s, &cfg);
        assert!((s.vel.x - 4.0 * cfg.friction).abs() < 1e-5);
    }

    #[test]
    fn test_hue_wraps_mod_360() {
        let cfg = SceneConfig::default();
        let mut s = test_shape();
        s.hue = 359.5;
        s.hue_shift = 1.0;
        integrate(&mut s, &cfg);
        assert!((s.hue - 0.5).abs() < 1e-4);

        s.hue = 0.2;
        s.hue_shift = -1.0;
        integrate(&mut s, &cfg);
        assert!(s.hue >= 0.0 && s.hue < 360.0);
    }

    #[test]
    fn test_rotation_spins_faster_when_moving() {
        let cfg = SceneConfig::default();
        let mut slow = test_shape();
        let mut fast = slow.clone();
        slow.rotation = 0.0;
        fast.rotation = 0.0;
        slow.rotation_speed = 0.01;
        fast.rotation_speed = 0.01;
        slow.vel = Vec2::ZERO;
        fast.vel = Vec2::new(cfg.max_speed, 0.0);
        slow.acc = Vec2::ZERO;
        fast.acc = Vec2::ZERO;

        integrate(&mut slow, &cfg);
        integrate(&mut fast, &cfg);
        assert!(fast.rotation > slow.rotation);
    }

    #[test]
    fn test_wrap_right_edge() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut s = test_shape();
        s.size = 20.0;
        s.pos = Vec2::new(821.0, 300.0);
        wrap_edges(&mut s, viewport);
        assert_eq!(s.pos.x, -20.0);
    }

    #[test]
    fn test_wrap_left_and_top_edges() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut s = test_shape();
        s.size = 20.0;
        s.pos = Vec2::new(-21.0, -25.0);
        wrap_edges(&mut s, viewport);
        assert_eq!(s.pos.x, 820.0);
        assert_eq!(s.pos.y, 620.0);
    }

    #[test]
    fn test_no_wrap_inside_margin() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut s = test_shape();
        s.size = 20.0;
        s.pos = Vec2::new(810.0, 300.0);
        wrap_edges(&mut s, viewport);
        // Within [-size, width+size]: untouched
        assert_eq!(s.pos.x, 810.0);
    }
}
