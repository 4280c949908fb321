//! Target selection and retention.
//!
//! Pure functions over the evaluating unit's data and the world view.

use skirmish_core::components::Team;
use skirmish_core::constants::*;
use skirmish_core::enums::TargetLossReason;
use skirmish_core::types::{UnitId, Vector2};

use crate::view::{UnitSnapshot, WorldView};

/// The unit looking for a target.
#[derive(Debug, Clone, Copy)]
pub struct Seeker {
    pub id: UnitId,
    pub team: Team,
    pub position: Vector2,
    pub direction: Vector2,
    pub range: f64,
}

/// Cost of engaging `candidate`; lower is better, infinite means excluded.
///
/// A candidate already aiming at the seeker is answered at a tenth of its
/// distance, in or out of range. Anyone else must be in range, spotted and in
/// line of sight, and costs its distance plus a penalty for the turn needed.
pub fn target_cost(seeker: &Seeker, candidate: &UnitSnapshot, view: &WorldView) -> f64 {
    let to_target = candidate.position - seeker.position;
    let distance = to_target.length();

    if candidate.target == Some(seeker.id) {
        return distance * RECIPROCAL_TARGET_COST_FACTOR;
    }

    let in_range = distance <= seeker.range;
    if !in_range || !candidate.spotted || !view.line_of_sight(seeker.position, candidate.position)
    {
        return f64::INFINITY;
    }

    let facing_angle = seeker.direction.angle_between(to_target);
    FACING_ANGLE_COST_WEIGHT * facing_angle + distance
}

/// Cheapest spotted enemy with finite cost. Ties go to the lower id.
pub fn select_target(seeker: &Seeker, view: &WorldView) -> Option<UnitId> {
    // Everyone in range, plus attackers that may be out of range
    let mut candidates = view.units_within(seeker.position, seeker.range);
    candidates.extend(view.attackers_of(seeker.id));
    candidates.sort_by_key(|u| u.id);
    candidates.dedup_by_key(|u| u.id);

    let mut best: Option<(UnitId, f64)> = None;
    for candidate in candidates {
        if candidate.id == seeker.id
            || candidate.team == seeker.team
            || !candidate.spotted
            || candidate.health <= 0.0
        {
            continue;
        }
        let cost = target_cost(seeker, candidate, view);
        if cost.is_finite() && best.map_or(true, |(_, c)| cost < c) {
            best = Some((candidate.id, cost));
        }
    }
    best.map(|(id, _)| id)
}

/// Whether a held target should be dropped, and why.
///
/// `target` is the held id resolved through the view; `None` means it is gone.
pub fn target_loss(
    seeker: &Seeker,
    target: Option<&UnitSnapshot>,
    acquired_at: f64,
    now: f64,
) -> Option<TargetLossReason> {
    let Some(target) = target else {
        return Some(TargetLossReason::Dead);
    };
    if target.health <= 0.0 {
        return Some(TargetLossReason::Dead);
    }
    if target.position.distance(seeker.position) > seeker.range {
        return Some(TargetLossReason::OutOfRange);
    }
    if now - acquired_at > RETARGET_TIMEOUT_SECS {
        return Some(TargetLossReason::Stale);
    }
    None
}
