//! Shot timing and damage rolls.

use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::types::Vector2;

/// Outcome of a damage roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    pub amount: f64,
    pub critical: bool,
}

/// Time between shots at `distance`: longer shots take longer to aim.
pub fn shot_cooldown(base_cooldown: f64, distance: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return base_cooldown;
    }
    base_cooldown * (1.0 + distance / range)
}

/// True if `direction` points at `to_target` within the aim cone.
pub fn is_aimed(direction: Vector2, to_target: Vector2) -> bool {
    to_target.angle_between(direction) < AIM_CONE
}

/// True if at least `cooldown` seconds passed since the last shot.
pub fn cooldown_elapsed(last_shot_time: Option<f64>, cooldown: f64, now: f64) -> bool {
    last_shot_time.map_or(true, |t| now - t >= cooldown)
}

/// Roll the damage of one shot.
///
/// Critical hits double the base damage, then a uniform multiplier in
/// [`DAMAGE_VARIANCE_MIN`, 1.0] applies. Both draws always happen so the
/// random stream advances the same way for every shot.
pub fn roll_damage<R: Rng + ?Sized>(base_damage: f64, rng: &mut R) -> DamageRoll {
    let critical = rng.gen_bool(CRITICAL_HIT_CHANCE);
    let variance = rng.gen_range(DAMAGE_VARIANCE_MIN..=1.0);
    let multiplier = if critical { CRITICAL_HIT_MULTIPLIER } else { 1.0 };
    DamageRoll {
        amount: base_damage * multiplier * variance,
        critical,
    }
}
