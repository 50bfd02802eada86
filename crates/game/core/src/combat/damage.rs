//! Damage calculation and application.

/// Angle spread is scaled by 1.12 before being read as a percentage.
const ANGLE_SPREAD_SCALE_PERCENT: u32 = 112;

/// Calculate the damage taken by a hit player.
///
/// # Formula
///
/// ```text
/// angle_diff      = floor(|vs_angle - my_angle| * 1.12) / 100
/// relative_damage = clamp(angle_diff, 0, 1)
/// damage          = (1 + relative_damage) * hit_charge
/// ```
///
/// The floor is taken in integer arithmetic, so the result is exact for every
/// pair of two-digit angles.
///
/// # Arguments
///
/// * `my_angle` - Angle of the hit player's own entry
/// * `vs_angle` - Angle of the opponent's entry
/// * `hit_charge` - The hit player's accumulated charge
pub fn calculate_damage(my_angle: u8, vs_angle: u8, hit_charge: u32) -> f32 {
    let spread = u32::from(my_angle.abs_diff(vs_angle));
    let angle_diff_percent = spread * ANGLE_SPREAD_SCALE_PERCENT / 100;
    let relative_damage = (angle_diff_percent.min(100) as f32) / 100.0;

    (1.0 + relative_damage) * hit_charge as f32
}

/// Apply damage to current health.
///
/// Returns the new health value (clamped to 0).
pub fn apply_damage(current_health: f32, damage: f32) -> f32 {
    (current_health - damage).max(0.0)
}
