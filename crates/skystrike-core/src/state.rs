//! Simulation state snapshot — the complete visible state sent to the
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete simulation state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub aircraft: AircraftView,
    pub targets: Vec<TargetView>,
    pub rockets: Vec<RocketView>,
    pub bombs: Vec<BombView>,
    pub events: Vec<SimEvent>,
}

/// Aircraft position and bomb sight status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AircraftView {
    pub position: Position,
    pub velocity: Velocity,
    /// Predicted bomb impact marker; `None` when no ground hit is predicted.
    pub bomb_indicator: Option<Position>,
}

/// A strike target on the tactical display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub target_id: u32,
    pub archetype: TargetArchetype,
    pub position: Position,
    /// Speed (m/s).
    pub speed: f64,
    /// Heading (radians, 0 = North).
    pub heading: f64,
    /// Position history for trail dots.
    pub history: Vec<Position>,
}

/// An in-flight rocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub rocket_id: u32,
    pub target_id: Option<u32>,
    pub position: Position,
    pub heading: f64,
    pub age_secs: f64,
    /// Straight-line lead point (debug overlay).
    pub standard_prediction: Position,
    /// Lead point after lateral deviation (debug overlay).
    pub deviated_prediction: Position,
}

/// A falling bomb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombView {
    pub bomb_id: u32,
    pub position: Position,
    pub velocity: Velocity,
}
