//! Draw-call types and render adapters
//!
//! The simulation never touches a drawing surface. Each frame it derives
//! visual parameters per live entity and hands them to a
//! [`RenderAdapter`] as [`DrawCall`] values; adapters own the surface.

pub mod outline;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::sim::{ShapeKind, Viewport};

/// HSB color with alpha: hue in degrees, saturation/brightness in
/// 0..=100, alpha in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    pub fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// CSS `hsla()` string. Canvas wants HSL, not HSB, so brightness and
    /// saturation are converted first.
    pub fn to_css(&self) -> String {
        let (s, l) = hsb_to_hsl(self.s / 100.0, self.b / 100.0);
        format!(
            "hsla({:.0}, {:.0}%, {:.0}%, {:.3})",
            self.h.rem_euclid(360.0),
            s * 100.0,
            l * 100.0,
            self.a
        )
    }
}

/// Convert HSB saturation/brightness (both 0..=1) to HSL saturation and
/// lightness.
pub fn hsb_to_hsl(s: f32, b: f32) -> (f32, f32) {
    let l = b * (1.0 - s / 2.0);
    let sl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (b - l) / l.min(1.0 - l)
    };
    (sl, l)
}

/// One entity's worth of rendering, fully derived from simulation state.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Shape {
        kind: ShapeKind,
        pos: Vec2,
        rotation: f32,
        /// Visual size for this frame (wobble already applied)
        size: f32,
        fill: Hsba,
        /// Glow halo radius, when the quality preset enables it
        glow: Option<f32>,
    },
    Particle {
        pos: Vec2,
        size: f32,
        fill: Hsba,
    },
    Shockwave {
        center: Vec2,
        radius: f32,
        stroke_weight: f32,
        stroke: Hsba,
    },
    Connection {
        from: Vec2,
        to: Vec2,
        weight: f32,
        stroke: Hsba,
    },
}

/// External collaborator that owns the drawing surface.
pub trait RenderAdapter {
    /// Called once at the start of each frame's draw pass
    fn begin_frame(&mut self, viewport: Viewport);
    /// One call per live entity (and per connection line)
    fn submit(&mut self, call: DrawCall);
    /// Called after the last submit of a frame
    fn end_frame(&mut self) {}
}

/// Adapter that draws nothing; headless runs and benchmarks.
#[derive(Debug, Default)]
pub struct NullAdapter;

impl RenderAdapter for NullAdapter {
    fn begin_frame(&mut self, _viewport: Viewport) {}
    fn submit(&mut self, _call: DrawCall) {}
}

/// Adapter that records every call; used by tests to assert on the
/// draw stream.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub frames: usize,
    pub calls: Vec<DrawCall>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Shape { .. }))
    }

    pub fn shockwaves(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Shockwave { .. }))
    }
}

impl RenderAdapter for RecordingAdapter {
    fn begin_frame(&mut self, _viewport: Viewport) {
        self.frames += 1;
        self.calls.clear();
    }

    fn submit(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsb_to_hsl_extremes() {
        // Full saturation, full brightness -> pure hue: HSL (1.0, 0.5)
        let (s, l) = hsb_to_hsl(1.0, 1.0);
        assert!((s - 1.0).abs() < 1e-5);
        assert!((l - 0.5).abs() < 1e-5);

        // Zero brightness -> black regardless of saturation
        let (s, l) = hsb_to_hsl(1.0, 0.0);
        assert_eq!(l, 0.0);
        assert_eq!(s, 0.0);

        // Zero saturation -> grey, lightness = brightness
        let (s, l) = hsb_to_hsl(0.0, 0.7);
        assert_eq!(s, 0.0);
        assert!((l - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_css_string_shape() {
        let c = Hsba::new(200.0, 90.0, 95.0, 0.85);
        let css = c.to_css();
        assert!(css.starts_with("hsla(200, "));
        assert!(css.ends_with("0.850)"));
    }

    #[test]
    fn test_css_hue_wraps() {
        let c = Hsba::new(380.0, 50.0, 50.0, 1.0);
        assert!(c.to_css().starts_with("hsla(20, "));
    }

    #[test]
    fn test_recording_adapter_clears_per_frame() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut rec = RecordingAdapter::new();
        rec.begin_frame(viewport);
        rec.submit(DrawCall::Particle {
            pos: Vec2::ZERO,
            size: 1.0,
            fill: Hsba::new(0.0, 0.0, 100.0, 1.0),
        });
        assert_eq!(rec.calls.len(), 1);
        rec.begin_frame(viewport);
        assert!(rec.calls.is_empty());
        assert_eq!(rec.frames, 2);
    }
}
