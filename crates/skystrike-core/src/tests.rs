use crate::commands::PlayerCommand;
use crate::components::GuidanceTuning;
use crate::constants::*;
use crate::types::{Position, SimTime, Velocity};

#[test]
fn test_range_and_speed_helpers() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
    assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-12);

    let c = Position::new(3.0, 4.0, 12.0);
    assert!((a.range_to(&c) - 13.0).abs() < 1e-12);
    assert!((a.horizontal_range_to(&c) - 5.0).abs() < 1e-12);

    let v = Velocity::new(0.0, 3.0, 4.0);
    assert!((v.speed() - 5.0).abs() < 1e-12);
    assert!((v.horizontal_speed() - 3.0).abs() < 1e-12);
    assert_eq!(v.horizontal(), Velocity::new(0.0, 3.0, 0.0));
}

#[test]
fn test_advanced_by_extrapolates_linearly() {
    let p = Position::new(1.0, 2.0, 3.0);
    let v = Velocity::new(10.0, -5.0, 0.5);
    let q = p.advanced_by(&v, 2.0);
    assert_eq!(q, Position::new(21.0, -8.0, 4.0));
}

#[test]
fn test_heading_convention_north_zero_clockwise() {
    // North
    assert!((Velocity::new(0.0, 1.0, 0.0).heading()).abs() < 1e-12);
    // East = 90 degrees
    let east = Velocity::new(1.0, 0.0, 0.0).heading();
    assert!((east - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_sim_time_advance() {
    let mut t = SimTime::default();
    for _ in 0..TICK_RATE {
        t.advance();
    }
    assert_eq!(t.tick, TICK_RATE as u64);
    assert!(
        (t.elapsed_secs - 1.0).abs() < 1e-9,
        "one tick-rate worth of ticks should be one second, got {}",
        t.elapsed_secs
    );
}

#[test]
fn test_trajectory_step_budget_covers_horizon() {
    let covered = TRAJECTORY_MAX_STEPS as f64 * TRAJECTORY_STEP_SECS;
    assert!(
        (covered - TRAJECTORY_HORIZON_SECS).abs() < TRAJECTORY_STEP_SECS,
        "step budget should span the full horizon, covers {covered}s"
    );
}

#[test]
fn test_guidance_tuning_defaults_match_constants() {
    let t = GuidanceTuning::default();
    assert_eq!(t.min_predict_distance, PREDICT_MIN_DISTANCE);
    assert_eq!(t.max_predict_distance, PREDICT_MAX_DISTANCE);
    assert_eq!(t.max_lead_time, PREDICT_MAX_LEAD_TIME);
    assert_eq!(t.deviation_amount, DEVIATION_AMOUNT);
    assert_eq!(t.deviation_speed, DEVIATION_SPEED);
}

#[test]
fn test_command_serde_tagged_format() {
    // Commands cross the frontend boundary as tagged JSON.
    let cmd = PlayerCommand::LaunchRocket { target_id: 7 };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"LaunchRocket\""), "got {json}");
    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    assert!(matches!(back, PlayerCommand::LaunchRocket { target_id: 7 }));
}
