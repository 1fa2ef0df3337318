//! Proximity edges between field particles.

use crate::constants::*;
use crate::surface::{DrawSurface, Rgba};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct ConnectivityParams {
    pub threshold: f32,
    pub line_width: f32,
    pub stroke: Rgba,
}

impl Default for ConnectivityParams {
    fn default() -> Self {
        Self {
            threshold: CONNECT_THRESHOLD,
            line_width: EDGE_LINE_WIDTH,
            stroke: Rgba::from_rgb(EDGE_STROKE_RGB, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Linear falloff: 1 at distance 0, 0 at and beyond `threshold`.
#[inline]
pub fn edge_opacity(distance: f32, threshold: f32) -> f32 {
    if distance >= threshold {
        0.0
    } else {
        1.0 - distance / threshold
    }
}

/// Every unordered pair closer than `threshold`, with `a < b`.
pub fn edges(positions: &[Vec2], threshold: f32) -> Vec<Edge> {
    let mut out = Vec::new();
    for (a, pa) in positions.iter().enumerate() {
        for (offset, pb) in positions[a + 1..].iter().enumerate() {
            let distance = pa.distance(*pb);
            if distance < threshold {
                out.push(Edge {
                    a,
                    b: a + 1 + offset,
                    opacity: edge_opacity(distance, threshold),
                });
            }
        }
    }
    out
}

pub fn draw_edges(surface: &mut impl DrawSurface, positions: &[Vec2], params: &ConnectivityParams) {
    for e in edges(positions, params.threshold) {
        surface.stroke_line(
            positions[e.a],
            positions[e.b],
            params.stroke.with_alpha(e.opacity),
            params.line_width,
        );
    }
}
