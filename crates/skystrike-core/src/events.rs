//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::ImpactKind;

/// Per-tick simulation events, carried in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Rocket launched at a target.
    RocketAway { rocket_id: u32, target_id: u32 },
    /// Rocket flight ended.
    RocketGone { rocket_id: u32, kind: ImpactKind },
    /// Bomb released from the aircraft.
    BombReleased { bomb_id: u32 },
    /// Bomb struck the ground.
    BombImpact { bomb_id: u32, kind: ImpactKind },
    /// A target was destroyed.
    TargetDestroyed { target_id: u32 },
    /// All targets destroyed; mission complete.
    MissionComplete,
}
