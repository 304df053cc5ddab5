//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! Entities are referenced by stable u32 ids so components stay serializable.

use serde::{Deserialize, Serialize};

use crate::enums::TargetArchetype;
use crate::types::Position;

/// Marks an entity as the player's aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OwnAircraft;

/// Marks an entity as a strike target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Target identity and behavior profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Stable id assigned at spawn.
    pub target_id: u32,
    pub archetype: TargetArchetype,
    /// Tick of the last heading drift update (for mobile archetypes).
    pub last_drift_tick: u64,
}

/// Homing rocket state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Stable id assigned at launch.
    pub rocket_id: u32,
    /// Target id this rocket is homing on. `None` after the target dies;
    /// the rocket then flies straight until it expires.
    pub target_id: Option<u32>,
    /// Seconds since launch.
    pub age_secs: f64,
    /// Last computed straight-line lead point (for display).
    pub standard_prediction: Position,
    /// Last computed lead point after lateral deviation (for display).
    pub deviated_prediction: Position,
}

/// Per-rocket guidance tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuidanceTuning {
    /// Distance at or below which no lead is applied (meters).
    pub min_predict_distance: f64,
    /// Distance at or beyond which the full lead time is applied (meters).
    pub max_predict_distance: f64,
    /// Maximum lead prediction time (seconds).
    pub max_lead_time: f64,
    /// Lateral deviation amplitude at full lead fraction (meters).
    pub deviation_amount: f64,
    /// Deviation oscillation rate (rad/s).
    pub deviation_speed: f64,
}

impl Default for GuidanceTuning {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            min_predict_distance: PREDICT_MIN_DISTANCE,
            max_predict_distance: PREDICT_MAX_DISTANCE,
            max_lead_time: PREDICT_MAX_LEAD_TIME,
            deviation_amount: DEVIATION_AMOUNT,
            deviation_speed: DEVIATION_SPEED,
        }
    }
}

/// Free-fall bomb state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    /// Stable id assigned at release.
    pub bomb_id: u32,
}

/// Marks an entity as subject to gravity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ballistic;

/// Predicted bomb impact marker carried by the aircraft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BombSight {
    /// Predicted impact indicator, `None` when the trajectory never
    /// crosses the ground within the step budget.
    pub indicator: Option<Position>,
}

/// History of positions for trail rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionHistory {
    pub positions: Vec<Position>,
}
