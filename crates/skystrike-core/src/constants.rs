//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz) — matches a 20 ms fixed physics step.
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Simulation area radius in meters. Entities beyond this are despawned.
pub const WORLD_RADIUS: f64 = 2_000.0;

/// Margin below the lowest terrain before a falling entity is culled (meters).
pub const FLOOR_MARGIN: f64 = 50.0;

// --- Physics ---

/// Gravitational acceleration (m/s²), applied along -z.
pub const GRAVITY: f64 = 9.81;

// --- Rocket performance ---

/// Rocket cruise speed (m/s).
pub const ROCKET_SPEED: f64 = 15.0;

/// Maximum rocket turn rate (rad/s, ~95 deg/s).
pub const ROCKET_TURN_RATE: f64 = 95.0 * std::f64::consts::PI / 180.0;

/// Rocket self-destruct age (seconds).
pub const ROCKET_MAX_LIFETIME: f64 = 10.0;

/// Proximity radius for rocket detonation against its target (meters).
pub const ROCKET_LETHAL_RADIUS: f64 = 1.5;

// --- Lead prediction ---

/// Distance at or below which no lead is applied (meters).
pub const PREDICT_MIN_DISTANCE: f64 = 5.0;

/// Distance at or beyond which the full lead time is applied (meters).
pub const PREDICT_MAX_DISTANCE: f64 = 100.0;

/// Maximum lead prediction time (seconds).
pub const PREDICT_MAX_LEAD_TIME: f64 = 5.0;

// --- Deviation ---

/// Lateral deviation amplitude at full lead fraction (meters).
pub const DEVIATION_AMOUNT: f64 = 50.0;

/// Deviation oscillation rate (rad/s).
pub const DEVIATION_SPEED: f64 = 2.0;

// --- Bombing ---

/// Total simulated fall time for the impact predictor (seconds).
pub const TRAJECTORY_HORIZON_SECS: f64 = 10.0;

/// Step budget for the impact predictor.
pub const TRAJECTORY_MAX_STEPS: usize = 600;

/// Ballistic integration sub-step (seconds).
pub const TRAJECTORY_STEP_SECS: f64 = TRAJECTORY_HORIZON_SECS / TRAJECTORY_MAX_STEPS as f64;

/// Vertical clamp for the impact indicator (meters).
pub const INDICATOR_MAX_SCALE: f64 = 20.0;

/// Blast radius for bomb ground impact (meters).
pub const BOMB_LETHAL_RADIUS: f64 = 8.0;

// --- Targets ---

/// Light vehicle ground speed (m/s).
pub const VEHICLE_SPEED: f64 = 8.0;

/// Fast boat speed (m/s).
pub const BOAT_SPEED: f64 = 12.0;

/// Interval between heading drift updates for mobile targets (ticks).
pub const TARGET_DRIFT_INTERVAL_TICKS: u64 = 100;

/// Maximum heading change per drift update (radians).
pub const TARGET_DRIFT_MAX_TURN: f64 = 0.6;

// --- Display ---

/// Maximum number of position history dots per entity.
pub const MAX_HISTORY_DOTS: usize = 12;

/// History dot interval in ticks (one dot every N ticks).
pub const HISTORY_DOT_INTERVAL: u32 = 15;
