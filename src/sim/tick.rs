//! Per-frame scene update
//!
//! One well-defined tick runs to completion before the next: forces,
//! integration, boundary wrap, emission, then the transient-pool sweeps.
//! Pointer, click, and resize events arrive between ticks, already
//! serialized by the hosting event loop, and only mutate scene fields.

use glam::Vec2;
use rand::Rng;

use super::emitter::maybe_emit;
use super::forces::net_force;
use super::integrate::{integrate, wrap_edges};
use super::state::{Scene, Shockwave, Viewport};
use super::visuals;
use crate::render::RenderAdapter;
use crate::{map_range, set_mag};

/// Advance the scene by one frame. No drawing; see [`draw`].
pub fn advance(scene: &mut Scene) {
    let center = scene.viewport.center();

    for i in 0..scene.shapes.len() {
        let force = net_force(
            i,
            &scene.shapes,
            scene.pointer,
            scene.pointer_radius,
            center,
            &scene.config,
        );

        let cfg = &scene.config;
        let shape = &mut scene.shapes[i];
        shape.acc += force;
        integrate(shape, cfg);
        wrap_edges(shape, scene.viewport);

        if let Some(p) = maybe_emit(
            &scene.shapes[i],
            &mut scene.rng,
            scene.particles.len(),
            &scene.config,
        ) {
            scene.particles.push(p);
        }
    }

    // Particles: count down, drift with their own damping, expire at 0
    let particle_friction = scene.config.particle_friction;
    scene.particles.sweep(|p| {
        p.life -= 1;
        p.vel *= particle_friction;
        p.pos += p.vel;
        p.life > 0
    });

    // Shockwaves: grow, fade by a fixed step, decay speed and stroke
    let fade_step = scene.config.shockwave_fade_step;
    let expansion_decay = scene.config.shockwave_expansion_decay;
    let stroke_decay = scene.config.shockwave_stroke_decay;
    scene.shockwaves.sweep(|w| {
        w.radius += w.expansion;
        w.fade -= fade_step;
        w.expansion *= expansion_decay;
        w.stroke *= stroke_decay;
        w.fade > 0.0
    });

    scene.tick_count += 1;
}

/// Emit one draw call per live entity (plus connection lines) to the
/// adapter. Pure with respect to the scene.
pub fn draw<R: RenderAdapter>(scene: &Scene, adapter: &mut R) {
    adapter.begin_frame(scene.viewport);

    if scene.config.quality.connections_enabled() {
        let connect = scene.config.connect_dist;
        for i in 0..scene.shapes.len() {
            for j in (i + 1)..scene.shapes.len() {
                let d = scene.shapes[i].pos.distance(scene.shapes[j].pos);
                if d < connect {
                    adapter.submit(visuals::connection_call(
                        &scene.shapes[i],
                        &scene.shapes[j],
                        d,
                        connect,
                    ));
                }
            }
        }
    }

    for shape in &scene.shapes {
        adapter.submit(visuals::shape_call(shape, &scene.config));
    }
    for particle in &scene.particles {
        adapter.submit(visuals::particle_call(particle));
    }
    for wave in &scene.shockwaves {
        adapter.submit(visuals::shockwave_call(wave));
    }

    adapter.end_frame();
}

/// Advance, then draw: one animation tick.
pub fn tick<R: RenderAdapter>(scene: &mut Scene, adapter: &mut R) {
    advance(scene);
    draw(scene, adapter);
}

impl Scene {
    /// Pointer moved inside the viewport
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Pointer left the viewport; pointer forces stop until it returns
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// Viewport changed. The wrap boundary moves immediately and the
    /// pointer influence radius rescales with the smaller dimension.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.pointer_radius = self.viewport.min_dim() * 0.2;
        log::info!(
            "viewport {}x{}, pointer radius {:.0}",
            width,
            height,
            self.pointer_radius
        );
    }

    /// Click explosion: an outward impulse on every shape inside the
    /// blast radius (strongest at the center), a spin/hue jolt, and one
    /// or two shockwaves pushed at the click point.
    pub fn on_click(&mut self, pos: Vec2) {
        let radius = self.config.explosion_radius;
        let force = self.config.explosion_force;

        for shape in &mut self.shapes {
            let d = shape.pos.distance(pos);
            if d < radius {
                let strength = map_range(d, 0.0, radius, force, 1.0);
                shape.acc += set_mag(shape.pos - pos, strength);
                shape.rotation_speed += self.rng.random_range(-0.2..0.2);
                shape.hue_shift += self.rng.random_range(-0.5..0.5);
            }
        }

        self.shockwaves
            .push(Shockwave::spawn(pos, radius, &mut self.rng));
        if self.rng.random_bool(0.5) {
            let offset = Vec2::new(
                self.rng.random_range(-30.0..30.0),
                self.rng.random_range(-30.0..30.0),
            );
            self.shockwaves
                .push(Shockwave::spawn(pos + offset, radius, &mut self.rng));
        }
    }
}
