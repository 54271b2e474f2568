//! Canvas2D render adapter (wasm)
//!
//! Owns the `CanvasRenderingContext2d` and turns draw calls into path
//! tracing. Each frame starts with a translucent dark fill instead of a
//! clear, which is what produces the motion trails.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{DrawCall, Hsba, RenderAdapter, outline};
use crate::sim::{ShapeKind, Viewport};

/// Background fill laid over the previous frame (dark, low alpha)
const TRAIL_FILL: &str = "rgba(10, 10, 20, 0.15)";

pub struct CanvasAdapter {
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasAdapter {
    pub fn new(ctx: CanvasRenderingContext2d, viewport: Viewport) -> Self {
        Self { ctx, viewport }
    }

    fn trace_outline(&self, verts: &[Vec2]) {
        self.ctx.begin_path();
        if let Some(first) = verts.first() {
            self.ctx.move_to(first.x as f64, first.y as f64);
            for v in &verts[1..] {
                self.ctx.line_to(v.x as f64, v.y as f64);
            }
        }
        self.ctx.close_path();
    }

    fn draw_shape(&self, kind: ShapeKind, pos: Vec2, rotation: f32, size: f32, fill: Hsba, glow: Option<f32>) {
        self.ctx.save();
        let _ = self.ctx.translate(pos.x as f64, pos.y as f64);
        let _ = self.ctx.rotate(rotation as f64);

        let css = fill.to_css();
        if let Some(radius) = glow {
            self.ctx.set_shadow_blur(radius as f64);
            self.ctx.set_shadow_color(&css);
        }
        self.ctx.set_fill_style_str(&css);

        match outline::for_kind(kind, size) {
            None => {
                self.ctx.begin_path();
                let _ = self
                    .ctx
                    .arc(0.0, 0.0, (size / 2.0) as f64, 0.0, std::f64::consts::TAU);
                self.ctx.fill();
            }
            Some(verts) => {
                self.trace_outline(&verts);
                self.ctx.fill();
            }
        }

        self.ctx.restore();
    }
}

impl RenderAdapter for CanvasAdapter {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn submit(&mut self, call: DrawCall) {
        match call {
            DrawCall::Shape {
                kind,
                pos,
                rotation,
                size,
                fill,
                glow,
            } => self.draw_shape(kind, pos, rotation, size, fill, glow),
            DrawCall::Particle { pos, size, fill } => {
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_fill_style_str(&fill.to_css());
                self.ctx.begin_path();
                let _ = self.ctx.arc(
                    pos.x as f64,
                    pos.y as f64,
                    size as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                self.ctx.fill();
            }
            DrawCall::Shockwave {
                center,
                radius,
                stroke_weight,
                stroke,
            } => {
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_stroke_style_str(&stroke.to_css());
                self.ctx.set_line_width(stroke_weight as f64);
                self.ctx.begin_path();
                let _ = self.ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    radius.max(0.0) as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                self.ctx.stroke();
            }
            DrawCall::Connection {
                from,
                to,
                weight,
                stroke,
            } => {
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_stroke_style_str(&stroke.to_css());
                self.ctx.set_line_width(weight as f64);
                self.ctx.begin_path();
                self.ctx.move_to(from.x as f64, from.y as f64);
                self.ctx.line_to(to.x as f64, to.y as f64);
                self.ctx.stroke();
            }
        }
    }
}
