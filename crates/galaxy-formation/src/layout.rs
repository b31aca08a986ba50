//! Wave composition and formation grid layout.

use galaxy_core::constants::*;
use galaxy_core::enums::EnemyTier;
use galaxy_core::types::Position;
use rand::Rng;

/// One enemy to be spawned for a wave.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpawn {
    pub tier: EnemyTier,
    /// Formation slot (top-left corner).
    pub home: Position,
    pub hp: u32,
    /// Wobble phase in radians.
    pub wobble: f32,
}

/// Row count grows by one every three waves, capped.
pub fn rows_for_wave(wave: u32) -> u32 {
    (FORMATION_BASE_ROWS + wave / 3).min(FORMATION_MAX_ROWS)
}

/// Extra hit points for every enemy: one per three waves cleared.
pub fn hp_bonus(wave: u32) -> u32 {
    wave.saturating_sub(1) / HP_BONUS_EVERY_WAVES
}

/// Chance that a front-row slot is promoted to a striker.
pub fn striker_chance(wave: u32) -> f64 {
    (STRIKER_CHANCE_BASE + wave as f64 * STRIKER_CHANCE_PER_WAVE).min(1.0)
}

/// Tier for a grid slot. `roll` is a uniform sample in `[0, 1)` and only
/// matters for the striker promotion.
pub fn tier_for_slot(wave: u32, row: u32, roll: f64) -> EnemyTier {
    if wave >= 3 && wave % 3 == 0 && row == 0 {
        EnemyTier::Core
    } else if row < 2 && wave >= 2 && roll < striker_chance(wave) {
        EnemyTier::Striker
    } else {
        EnemyTier::Scout
    }
}

/// Left edge of the first column so the grid is centered in `width`.
pub fn grid_left(width: f32) -> f32 {
    (width - (FORMATION_COLS - 1) as f32 * FORMATION_GAP_X) / 2.0
}

/// Lay out a full wave, row-major from the top-left slot.
pub fn spawn_wave<R: Rng + ?Sized>(wave: u32, width: f32, rng: &mut R) -> Vec<EnemySpawn> {
    let rows = rows_for_wave(wave);
    let left = grid_left(width);
    let bonus = hp_bonus(wave);

    let mut out = Vec::with_capacity((rows * FORMATION_COLS) as usize);
    for row in 0..rows {
        for col in 0..FORMATION_COLS {
            let tier = tier_for_slot(wave, row, rng.gen::<f64>());
            out.push(EnemySpawn {
                tier,
                home: Position::new(
                    left + col as f32 * FORMATION_GAP_X,
                    FORMATION_TOP + row as f32 * FORMATION_GAP_Y,
                ),
                hp: tier_profile(tier).base_hp + bonus,
                wobble: rng.gen_range(0.0..std::f32::consts::TAU),
            });
        }
    }
    out
}
