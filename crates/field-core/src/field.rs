//! 2D node field: independent point-masses that drift, flee the cursor and
//! stay inside the viewport.
//!
//! Velocity is rebuilt from scratch each frame. Only the per-particle base
//! velocity persists, so ambient drift resumes as soon as the cursor leaves.

use crate::constants::*;
use crate::input::CursorState;
use crate::surface::{DrawSurface, Rgba};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub outer_radius: f32,
    pub slow_zone: f32,
    pub slow_speed: f32,
    pub repel_speed: f32,
    pub centering_strength: f32,
    pub edge_zone: f32,
    pub edge_factor: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub base_speed: f32,
    pub fill: Rgba,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: FIELD_PARTICLE_COUNT,
            outer_radius: CURSOR_OUTER_RADIUS,
            slow_zone: CURSOR_SLOW_ZONE,
            slow_speed: SLOW_ZONE_SPEED,
            repel_speed: REPEL_SPEED,
            centering_strength: CENTERING_STRENGTH,
            edge_zone: EDGE_REPEL_ZONE,
            edge_factor: EDGE_REPEL_FACTOR,
            radius_min: NODE_RADIUS_MIN,
            radius_max: NODE_RADIUS_MAX,
            base_speed: BASE_SPEED_MAX,
            fill: Rgba::from_array(NODE_FILL),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    /// Ambient drift, fixed at creation.
    pub base_velocity: Vec2,
    pub velocity: Vec2,
    /// Drawn size and bounce margin.
    pub radius: f32,
}

impl Particle {
    pub fn random(viewport: &Viewport, params: &FieldParams, rng: &mut impl Rng) -> Self {
        let mut p = Self {
            position: Vec2::ZERO,
            base_velocity: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: params.radius_min,
        };
        p.reset(viewport, params, rng);
        p
    }

    pub fn reset(&mut self, viewport: &Viewport, params: &FieldParams, rng: &mut impl Rng) {
        self.position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let s = params.base_speed;
        self.base_velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * s,
            (rng.gen::<f32>() - 0.5) * 2.0 * s,
        );
        self.velocity = self.base_velocity;
        self.radius = params.radius_min + rng.gen::<f32>() * (params.radius_max - params.radius_min);
    }

    /// Advance one frame.
    pub fn step(&mut self, cursor: &CursorState, viewport: &Viewport, params: &FieldParams) {
        let away = self.position - cursor.position;
        self.velocity = if cursor.repulsion_enabled {
            repulsion_velocity(away, params)
        } else {
            None
        }
        .unwrap_or(self.base_velocity);

        self.velocity += (viewport.center() - self.position) * params.centering_strength;
        self.velocity += edge_force(self.position, viewport, params);

        self.position += self.velocity;
        self.bounce(viewport);
    }

    fn bounce(&mut self, viewport: &Viewport) {
        let r = self.radius;
        if self.position.x - r < 0.0 {
            self.position.x = r;
            self.velocity.x = -self.velocity.x;
        } else if self.position.x + r > viewport.width {
            self.position.x = viewport.width - r;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - r < 0.0 {
            self.position.y = r;
            self.velocity.y = -self.velocity.y;
        } else if self.position.y + r > viewport.height {
            self.position.y = viewport.height - r;
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Flee velocity for a particle at `away` (particle minus cursor), or `None`
/// outside the outer radius.
///
/// Speed snaps between the slow-zone and outer-zone values with no blend at
/// the boundary. A particle exactly on the cursor flees along +x.
pub fn repulsion_velocity(away: Vec2, params: &FieldParams) -> Option<Vec2> {
    let distance = away.length();
    if distance >= params.outer_radius {
        return None;
    }
    let angle = away.y.atan2(away.x);
    let speed = if distance < params.slow_zone {
        params.slow_speed
    } else {
        params.repel_speed
    };
    Some(Vec2::new(angle.cos(), angle.sin()) * speed)
}

/// Inward push for a position within `edge_zone` of a boundary. Each axis is
/// pushed by at most one edge; corners receive both axes.
pub fn edge_force(position: Vec2, viewport: &Viewport, params: &FieldParams) -> Vec2 {
    let axis = |p: f32, extent: f32| -> f32 {
        let zone = params.edge_zone;
        if p < zone {
            (zone - p) / zone * params.edge_factor
        } else if p > extent - zone {
            -(p - (extent - zone)) / zone * params.edge_factor
        } else {
            0.0
        }
    };
    Vec2::new(
        axis(position.x, viewport.width),
        axis(position.y, viewport.height),
    )
}

pub struct ParticleField {
    particles: Vec<Particle>,
    params: FieldParams,
}

impl ParticleField {
    pub fn new(viewport: &Viewport, params: FieldParams, rng: &mut impl Rng) -> Self {
        let particles = (0..params.count)
            .map(|_| Particle::random(viewport, &params, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] {} particles in {}x{}",
            particles.len(),
            viewport.width,
            viewport.height
        );
        Self { particles, params }
    }

    pub fn from_particles(particles: Vec<Particle>, params: FieldParams) -> Self {
        Self { particles, params }
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    pub fn step(&mut self, cursor: &CursorState, viewport: &Viewport) {
        for p in &mut self.particles {
            p.step(cursor, viewport, &self.params);
        }
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, self.params.fill);
        }
    }
}
