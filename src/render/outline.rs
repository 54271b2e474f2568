//! Outline generation for 2D primitives
//!
//! Pure vertex walks for the polygon and star outlines; adapters trace
//! these into whatever path API they own. All outlines start from the
//! top vertex (-PI/2) and wind clockwise, centered on the origin.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use crate::sim::ShapeKind;

/// Vertices of a regular polygon with circumradius `radius`.
pub fn polygon(radius: f32, sides: u32) -> Vec<Vec2> {
    let step = TAU / sides as f32;
    (0..sides)
        .map(|i| {
            let a = -PI / 2.0 + i as f32 * step;
            Vec2::new(a.cos() * radius, a.sin() * radius)
        })
        .collect()
}

/// Vertices of a star: `points` outer tips at `outer`, valleys at
/// `inner`, alternating.
pub fn star(outer: f32, inner: f32, points: u32) -> Vec<Vec2> {
    let step = TAU / points as f32;
    let half = step / 2.0;
    let mut verts = Vec::with_capacity(points as usize * 2);
    for i in 0..points {
        let a = -PI / 2.0 + i as f32 * step;
        verts.push(Vec2::new(a.cos() * outer, a.sin() * outer));
        verts.push(Vec2::new((a + half).cos() * inner, (a + half).sin() * inner));
    }
    verts
}

/// Outline for a shape kind at visual size `size` (diameter). Circles
/// have no vertex outline and return `None`; adapters arc them directly.
pub fn for_kind(kind: ShapeKind, size: f32) -> Option<Vec<Vec2>> {
    let r = size / 2.0;
    match kind {
        ShapeKind::Circle => None,
        ShapeKind::Square => Some(vec![
            Vec2::new(-r, -r),
            Vec2::new(r, -r),
            Vec2::new(r, r),
            Vec2::new(-r, r),
        ]),
        ShapeKind::Triangle => Some(polygon(r, 3)),
        ShapeKind::Pentagon => Some(polygon(r, 5)),
        ShapeKind::Star { points } => Some(star(r, r / 2.0, points)),
        // Hexagram inner radius is r/sqrt(3): the two interlocking
        // triangles cross exactly there
        ShapeKind::Hexagram => Some(star(r, r * 0.577, 6)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_vertex_count_and_radius() {
        let verts = polygon(10.0, 5);
        assert_eq!(verts.len(), 5);
        for v in &verts {
            assert!((v.length() - 10.0).abs() < 1e-4);
        }
        // Starts from the top
        assert!((verts[0].y + 10.0).abs() < 1e-4);
        assert!(verts[0].x.abs() < 1e-4);
    }

    #[test]
    fn test_star_alternates_radii() {
        let verts = star(10.0, 4.0, 5);
        assert_eq!(verts.len(), 10);
        for (i, v) in verts.iter().enumerate() {
            let expect = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((v.length() - expect).abs() < 1e-4);
        }
    }

    #[test]
    fn test_for_kind_coverage() {
        assert!(for_kind(ShapeKind::Circle, 20.0).is_none());
        assert_eq!(for_kind(ShapeKind::Square, 20.0).unwrap().len(), 4);
        assert_eq!(for_kind(ShapeKind::Triangle, 20.0).unwrap().len(), 3);
        assert_eq!(for_kind(ShapeKind::Pentagon, 20.0).unwrap().len(), 5);
        assert_eq!(
            for_kind(ShapeKind::Star { points: 7 }, 20.0).unwrap().len(),
            14
        );
        assert_eq!(for_kind(ShapeKind::Hexagram, 20.0).unwrap().len(), 12);
    }
}
