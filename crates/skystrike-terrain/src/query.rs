//! Segment-vs-ground collision queries.
//!
//! Uses stepped segment traversal against the heightfield, comparing the
//! segment height to the sampled terrain elevation at each step.

use skystrike_core::types::Position;

use crate::heightfield::HeightField;

/// Fraction of a grid cell per traversal sample.
const SAMPLES_PER_CELL: f64 = 2.0;

/// Injected ground-collision capability.
///
/// Implementations answer: does the segment from `start` to `end` cross the
/// ground, and if so approximately where. Absence of a hit is `None`, never
/// a sentinel coordinate.
pub trait GroundQuery {
    fn segment_hit(&self, start: &Position, end: &Position) -> Option<Position>;
}

/// Infinite horizontal ground plane at a fixed elevation.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub elevation: f64,
}

impl FlatGround {
    pub fn new(elevation: f64) -> Self {
        Self { elevation }
    }
}

impl GroundQuery for FlatGround {
    fn segment_hit(&self, start: &Position, end: &Position) -> Option<Position> {
        // Already at or under the plane: the segment starts in the ground.
        if start.z <= self.elevation {
            return Some(Position::new(start.x, start.y, self.elevation));
        }
        if end.z > self.elevation {
            return None;
        }
        // Exact crossing point by linear interpolation in z.
        let t = (start.z - self.elevation) / (start.z - end.z);
        Some(Position::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
            self.elevation,
        ))
    }
}

impl GroundQuery for HeightField {
    fn segment_hit(&self, start: &Position, end: &Position) -> Option<Position> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let dz = end.z - start.z;
        let length = (dx * dx + dy * dy + dz * dz).sqrt();

        let interval = self.sample_interval();
        let num_samples = ((length / interval).ceil() as usize).max(1);

        let mut prev_t = 0.0;
        let mut prev_clearance = match self.clearance_at(start) {
            Some(c) if c <= 0.0 => return Some(self.surface_point(start)),
            Some(c) => Some(c),
            None => None,
        };

        for i in 1..=num_samples {
            let t = i as f64 / num_samples as f64;
            let sample = Position::new(start.x + dx * t, start.y + dy * t, start.z + dz * t);

            match (self.clearance_at(&sample), prev_clearance) {
                (Some(c), Some(pc)) if c <= 0.0 => {
                    // Crossed the surface between the previous sample and
                    // this one; interpolate on clearance for the hit point.
                    let frac = if pc - c > 1e-12 { pc / (pc - c) } else { 1.0 };
                    let ht = prev_t + (t - prev_t) * frac;
                    let hit =
                        Position::new(start.x + dx * ht, start.y + dy * ht, start.z + dz * ht);
                    return Some(self.surface_point(&hit));
                }
                (Some(c), None) if c <= 0.0 => {
                    // Entered the grid already underground.
                    return Some(self.surface_point(&sample));
                }
                (c, _) => prev_clearance = c,
            }
            prev_t = t;
        }

        None
    }
}

impl HeightField {
    /// Traversal sample spacing derived from the grid resolution.
    fn sample_interval(&self) -> f64 {
        self.cell_size() / SAMPLES_PER_CELL
    }

    /// Height of a point above the terrain, `None` outside the grid.
    fn clearance_at(&self, pos: &Position) -> Option<f64> {
        self.elevation_at(pos).map(|e| pos.z - e as f64)
    }

    /// The point projected onto the terrain surface.
    fn surface_point(&self, pos: &Position) -> Position {
        let z = self.elevation_at(pos).map(|e| e as f64).unwrap_or(pos.z);
        Position::new(pos.x, pos.y, z)
    }
}
