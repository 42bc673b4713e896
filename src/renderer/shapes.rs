//! Stroke tessellation for 2D paths
//!
//! `TessellatingSurface` collects the arcs of the current path and, on
//! `stroke`, emits a triangle list (two triangles per polyline segment) in
//! the active stroke colour.

use glam::Vec2;
use std::convert::Infallible;

use super::vertex::Vertex;
use super::{Color, DrawSurface};
use crate::polar_to_cartesian;
use crate::sim::RingArc;

/// Polyline segments per radian of arc
const SEGMENTS_PER_RADIAN: f32 = 16.0;
/// Minimum segments for any arc, so tiny arcs still show up
const MIN_SEGMENTS: u32 = 4;

/// Surface that turns stroked paths into triangle vertices
#[derive(Debug, Clone)]
pub struct TessellatingSurface {
    line_width: f32,
    color: Color,
    /// Sub-paths of the current path, as point lists
    path: Vec<Vec<Vec2>>,
    vertices: Vec<Vertex>,
}

impl TessellatingSurface {
    pub fn new(line_width: f32) -> Self {
        Self {
            line_width,
            color: Color::BLACK,
            path: Vec::new(),
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Take the frame's vertices, leaving the surface empty for the next one
    pub fn take_vertices(&mut self) -> Vec<Vertex> {
        self.path.clear();
        std::mem::take(&mut self.vertices)
    }
}

/// Sample points along an arc (canvas sweep semantics)
pub fn arc_points(center: Vec2, radius: f32, arc: RingArc) -> Vec<Vec2> {
    let num_segments = ((arc.sweep() * SEGMENTS_PER_RADIAN) as u32).max(MIN_SEGMENTS);
    arc.sample_angles(num_segments as usize + 1)
        .into_iter()
        .map(|theta| center + polar_to_cartesian(radius, theta))
        .collect()
}

/// Generate vertices for a thick polyline
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

impl DrawSurface for TessellatingSurface {
    type Error = Infallible;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        self.path.clear();
        Ok(())
    }

    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Result<(), Self::Error> {
        let points = arc_points(
            Vec2::new(cx, cy),
            radius,
            RingArc::new(start_angle, end_angle),
        );
        // Canvas joins consecutive arcs in one sub-path with a straight line
        match self.path.last_mut() {
            Some(sub) => sub.extend(points),
            None => self.path.push(points),
        }
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.color = color;
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        let color = self.color.as_array();
        for sub in &self.path {
            self.vertices.extend(polyline(sub, self.line_width, color));
        }
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        if let Some(sub) = self.path.last_mut() {
            if let Some(&first) = sub.first() {
                sub.push(first);
            }
        }
        // Anything drawn after a close starts a fresh sub-path
        self.path.push(Vec::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CarrierRing, Moon, update_and_render};
    use std::f32::consts::TAU;

    #[test]
    fn test_arc_points_on_circle() {
        let center = Vec2::new(10.0, 20.0);
        let points = arc_points(center, 50.0, RingArc::new(0.0, TAU));
        assert!(points.len() > MIN_SEGMENTS as usize);
        for p in &points {
            assert!(((*p - center).length() - 50.0).abs() < 1e-3);
        }
        // Full circle closes on itself
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first - last).length() < 1e-3);
    }

    #[test]
    fn test_polyline_triangles() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let verts = polyline(&points, 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 12);
        // First quad spans y = ±1 around the x axis
        assert_eq!(verts[0].position, [0.0, 1.0]);
        assert_eq!(verts[1].position, [0.0, -1.0]);
        assert!(polyline(&points[..1], 2.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_unstroked_path_emits_nothing() {
        let mut surface = TessellatingSurface::new(1.0);
        surface.begin_path().unwrap();
        surface.arc(0.0, 0.0, 10.0, 0.0, 1.0).unwrap();
        surface.close_path().unwrap();
        assert!(surface.vertices().is_empty());
    }

    #[test]
    fn test_tessellates_ring_frame() {
        let mut ring = CarrierRing::new(0.0, 0.0, 200.0, vec![Moon::new(0.2, 20.0, 1.0)]);
        let mut surface = TessellatingSurface::new(1.5);
        update_and_render(&mut ring, 0.016, &mut surface, || Color::WHITE).unwrap();

        let verts = surface.take_vertices();
        assert!(!verts.is_empty());
        assert_eq!(verts.len() % 3, 0);
        assert!(verts.iter().all(|v| v.color == Color::WHITE.as_array()));
        assert!(surface.vertices().is_empty());
    }
}
