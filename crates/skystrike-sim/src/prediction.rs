//! Predictive targeting kernel.
//!
//! Two independent modes of the same lead-point family: distance-scaled
//! lead prediction with a time-varying lateral deviation (rocket homing),
//! and step-wise ballistic integration against a ground query (bomb impact
//! indicator). All functions are pure; no state persists between calls.

use glam::DVec3;

use skystrike_core::components::GuidanceTuning;
use skystrike_core::types::{KinematicSample, Position, Velocity};
use skystrike_terrain::GroundQuery;

/// Straight-line lead point and the lead point after lateral deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadPrediction {
    pub standard: Position,
    pub deviated: Position,
    /// Normalized [0, 1] factor the predictions were computed with.
    pub lead_fraction: f64,
}

/// Predicted bomb impact point, vertical coordinate already clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPoint {
    pub position: Position,
}

/// Normalized lead fraction for a given distance: 0 at or below `min_dist`,
/// 1 at or beyond `max_dist`, linear in between.
///
/// A degenerate range (`min_dist >= max_dist`) is a step function at the far
/// bound: 1.0 when `distance >= max_dist`, else 0.0.
pub fn lead_fraction(min_dist: f64, max_dist: f64, distance: f64) -> f64 {
    if min_dist >= max_dist {
        return if distance >= max_dist { 1.0 } else { 0.0 };
    }
    ((distance - min_dist) / (max_dist - min_dist)).clamp(0.0, 1.0)
}

/// Predict where to aim at a moving target: the target position extrapolated
/// along its velocity by `max_lead_time` scaled with the lead fraction, so a
/// distant target is led further ahead than a close one.
pub fn predict_lead(
    self_pos: &Position,
    target: &KinematicSample,
    min_dist: f64,
    max_dist: f64,
    max_lead_time: f64,
) -> Position {
    let distance = self_pos.range_to(&target.position);
    let fraction = lead_fraction(min_dist, max_dist, distance);
    target
        .position
        .advanced_by(&target.velocity, max_lead_time * fraction)
}

/// Offset a base prediction by a lateral oscillation in the pursuer's frame.
///
/// The oscillation `cos(time * speed)` runs along the lateral axis of the
/// frame whose forward axis is `forward` and whose up is the world z-axis,
/// scaled by `amount * lead_fraction`. Repeated calls with increasing `time`
/// sweep the aim point side to side with period `2π / speed`; the offset
/// vanishes as the lead fraction goes to zero.
pub fn apply_deviation(
    base: &Position,
    forward: &Velocity,
    time_secs: f64,
    amount: f64,
    speed: f64,
    lead_fraction: f64,
) -> Position {
    let offset = lateral_axis(forward) * ((time_secs * speed).cos() * amount * lead_fraction);
    Position::from_dvec3(base.to_dvec3() + offset)
}

/// World-space lateral (right) axis for a forward direction, z-up frame.
/// Falls back to the world x-axis when `forward` is near-vertical.
fn lateral_axis(forward: &Velocity) -> DVec3 {
    let right = forward.to_dvec3().cross(DVec3::Z);
    if right.length_squared() > 1e-12 {
        right.normalize()
    } else {
        DVec3::X
    }
}

/// Full homing prediction: standard lead point plus deviated aim point,
/// using the rocket's guidance tuning and the current simulation time.
pub fn predict(
    self_pos: &Position,
    forward: &Velocity,
    target: &KinematicSample,
    tuning: &GuidanceTuning,
    time_secs: f64,
) -> LeadPrediction {
    let distance = self_pos.range_to(&target.position);
    let fraction = lead_fraction(
        tuning.min_predict_distance,
        tuning.max_predict_distance,
        distance,
    );
    let standard = target
        .position
        .advanced_by(&target.velocity, tuning.max_lead_time * fraction);
    let deviated = apply_deviation(
        &standard,
        forward,
        time_secs,
        tuning.deviation_amount,
        tuning.deviation_speed,
        fraction,
    );
    LeadPrediction {
        standard,
        deviated,
        lead_fraction: fraction,
    }
}

/// Predict where a free-fall bomb released now would strike the ground.
///
/// Starts from the launch position with the vertical component of the launch
/// velocity zeroed, then Euler-integrates under gravity in `step_secs`
/// sub-steps, testing each movement segment against `ground`. The first hit
/// wins. The indicator keeps the launch height as its vertical coordinate
/// when the drop to the hit point is under `max_scale`, and is clamped to
/// exactly `max_scale` otherwise.
///
/// Returns `None` when no segment hits within `max_steps` steps.
pub fn predict_impact<G: GroundQuery + ?Sized>(
    launch: &KinematicSample,
    gravity: f64,
    step_secs: f64,
    max_steps: usize,
    max_scale: f64,
    ground: &G,
) -> Option<IndicatorPoint> {
    let mut point1 = launch.position;
    let mut velocity = launch.velocity.horizontal();

    for _ in 0..max_steps {
        velocity.z -= gravity * step_secs;
        let point2 = point1.advanced_by(&velocity, step_secs);

        if let Some(hit) = ground.segment_hit(&point1, &point2) {
            let z = if (launch.position.z - hit.z).abs() < max_scale {
                launch.position.z
            } else {
                max_scale
            };
            return Some(IndicatorPoint {
                position: Position::new(hit.x, hit.y, z),
            });
        }

        point1 = point2;
    }

    None
}
