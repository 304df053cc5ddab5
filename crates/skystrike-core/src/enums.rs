//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall simulation lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mission loaded yet.
    #[default]
    Idle,
    /// Mission running, systems ticking.
    Active,
    /// Mission paused; world frozen.
    Paused,
    /// All targets destroyed.
    Complete,
}

/// Target archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetArchetype {
    /// Stationary emplacement (bunker, SAM site).
    Emplacement,
    /// Light vehicle moving along the ground.
    LightVehicle,
    /// Fast patrol boat on the water plane.
    FastBoat,
}

/// How an ordnance entity ended its flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    /// Detonated within lethal radius of a target.
    TargetHit,
    /// Struck the ground away from any target.
    GroundImpact,
    /// Exceeded its lifetime without detonating.
    Expired,
}
