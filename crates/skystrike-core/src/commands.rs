//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Flight ---
    /// Set the aircraft's commanded velocity. Pilot input is resolved to a
    /// velocity upstream; the sim only integrates it.
    SetAircraftVelocity { x: f64, y: f64, z: f64 },

    // --- Weapons ---
    /// Launch a homing rocket at a target.
    LaunchRocket { target_id: u32 },
    /// Release a free-fall bomb with the aircraft's horizontal velocity.
    ReleaseBomb,

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Start a new mission.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
