//! Scene state and core simulation types
//!
//! The whole simulation is reproducible from a `u64` seed: every random
//! draw goes through the scene's own Pcg32.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::pool::Pool;
use crate::config::SceneConfig;

/// Viewport dimensions; defines the wrap-around boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "viewport dimensions must be positive"
        );
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Smaller of the two dimensions (interaction radii scale off this)
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Closed set of shape outlines.
///
/// Star variants carry their point count; a hexagram is a fixed
/// six-pointed star drawn with a wider inner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Pentagon,
    Star { points: u32 },
    Hexagram,
}

impl ShapeKind {
    /// Draw one of the six kinds with the scene RNG
    pub fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..6) {
            0 => ShapeKind::Circle,
            1 => ShapeKind::Square,
            2 => ShapeKind::Triangle,
            3 => ShapeKind::Pentagon,
            4 => ShapeKind::Star {
                points: rng.random_range(5..=7),
            },
            _ => ShapeKind::Hexagram,
        }
    }
}

/// A drifting shape. Created at scene init, mutated every tick, never
/// destroyed.
#[derive(Debug, Clone)]
pub struct Shape {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated force; consumed and zeroed by integration
    pub acc: Vec2,
    pub size: f32,
    pub kind: ShapeKind,
    pub hue: f32,
    /// Hue degrees added per tick (may be negative)
    pub hue_shift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Per-entity pointer-force scalar ("density")
    pub strength: f32,
    pub wobble_seed: f32,
    pub wobble_speed: f32,
    /// Proportion of size the wobble swings through
    pub wobble_amount: f32,
    pub wobble_phase: f32,
}

impl Shape {
    /// Spawn a shape with randomized parameters somewhere in the viewport
    pub fn random(rng: &mut Pcg32, viewport: Viewport) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(1.0..3.0);
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..viewport.width),
                rng.random_range(0.0..viewport.height),
            ),
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            acc: Vec2::ZERO,
            size: rng.random_range(15.0..45.0),
            kind: ShapeKind::random(rng),
            hue: rng.random_range(0.0..360.0),
            hue_shift: rng.random_range(-1.0..1.0),
            rotation: rng.random_range(0.0..std::f32::consts::TAU),
            rotation_speed: rng.random_range(-0.05..0.05),
            strength: rng.random_range(0.2..1.2),
            wobble_seed: rng.random_range(0.0..1000.0),
            wobble_speed: rng.random_range(0.01..0.05),
            wobble_amount: rng.random_range(0.1..0.4),
            wobble_phase: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A trail particle emitted behind a fast shape
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining; removed on the tick this reaches 0
    pub life: i32,
    /// Lifespan at spawn, for the fade ratio
    pub initial_life: i32,
    pub hue: f32,
    pub size: f32,
}

impl Particle {
    /// Remaining-life ratio in [0, 1]
    pub fn life_ratio(&self) -> f32 {
        (self.life as f32 / self.initial_life as f32).clamp(0.0, 1.0)
    }

    /// Frames lived so far
    pub fn age(&self) -> i32 {
        self.initial_life - self.life
    }
}

/// An expanding ring triggered by a click
#[derive(Debug, Clone, Copy)]
pub struct Shockwave {
    pub center: Vec2,
    pub radius: f32,
    /// Informs the initial expansion speed; not a hard cap on radius
    pub max_radius: f32,
    /// Radius growth per tick; decays multiplicatively
    pub expansion: f32,
    /// 1.0 at spawn, stepped down each tick; removed at <= 0
    pub fade: f32,
    /// Stroke weight; decays multiplicatively
    pub stroke: f32,
}

impl Shockwave {
    pub fn spawn(center: Vec2, max_radius: f32, rng: &mut Pcg32) -> Self {
        Self {
            center,
            radius: 0.0,
            max_radius,
            expansion: max_radius * 0.04 * rng.random_range(0.9..1.1),
            fade: 1.0,
            stroke: rng.random_range(5.0..7.0),
        }
    }
}

/// The whole scene: typed pools, pointer state, viewport, RNG, tick
/// counter. Owned by the controller, passed explicitly to the update and
/// draw functions.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Seed the scene was built from, for reproduction
    pub seed: u64,
    /// Monotonically increasing frame counter
    pub tick_count: u64,
    pub viewport: Viewport,
    /// Last-known pointer position; `None` when the pointer left
    pub pointer: Option<Vec2>,
    /// Effective pointer influence radius (rescaled on resize)
    pub pointer_radius: f32,
    pub shapes: Vec<Shape>,
    pub particles: Pool<Particle>,
    pub shockwaves: Pool<Shockwave>,
    pub config: SceneConfig,
    pub(crate) rng: Pcg32,
}

impl Scene {
    /// Build a scene; panics if the config fails its precondition checks
    pub fn new(seed: u64, viewport: Viewport, config: SceneConfig) -> Self {
        config.validate();

        let mut rng = Pcg32::seed_from_u64(seed);
        let shapes = (0..config.effective_shape_count())
            .map(|_| Shape::random(&mut rng, viewport))
            .collect();
        let particle_cap = config.effective_particle_cap();

        Self {
            seed,
            tick_count: 0,
            viewport,
            pointer: None,
            pointer_radius: config.pointer_radius,
            shapes,
            particles: Pool::with_cap(particle_cap),
            shockwaves: Pool::new(),
            config,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_init_population() {
        let mut cfg = SceneConfig::default();
        cfg.shape_count = 10;
        let scene = Scene::new(42, Viewport::new(800.0, 600.0), cfg);
        assert_eq!(scene.shapes.len(), 10);
        assert_eq!(scene.particles.len(), 0);
        assert_eq!(scene.shockwaves.len(), 0);
        assert_eq!(scene.tick_count, 0);
        assert!(scene.pointer.is_none());
    }

    #[test]
    fn test_scene_init_deterministic() {
        let viewport = Viewport::new(800.0, 600.0);
        let a = Scene::new(7, viewport, SceneConfig::default());
        let b = Scene::new(7, viewport, SceneConfig::default());
        for (sa, sb) in a.shapes.iter().zip(&b.shapes) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.kind, sb.kind);
            assert_eq!(sa.hue, sb.hue);
        }
    }

    #[test]
    fn test_shapes_spawn_inside_viewport() {
        let viewport = Viewport::new(640.0, 480.0);
        let scene = Scene::new(99, viewport, SceneConfig::default());
        for s in &scene.shapes {
            assert!(s.pos.x >= 0.0 && s.pos.x <= viewport.width);
            assert!(s.pos.y >= 0.0 && s.pos.y <= viewport.height);
            assert!(s.size >= 15.0 && s.size < 45.0);
        }
    }

    #[test]
    fn test_particle_life_ratio() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 25,
            initial_life: 50,
            hue: 120.0,
            size: 3.0,
        };
        assert!((p.life_ratio() - 0.5).abs() < 1e-6);
        assert_eq!(p.age(), 25);
    }

    #[test]
    #[should_panic(expected = "viewport")]
    fn test_zero_viewport_rejected() {
        Viewport::new(0.0, 600.0);
    }
}
