//! Enemy damage and kill resolution shared by bullets, missiles and bombs.

use hecs::{Entity, World};
use rand::Rng;

use galaxy_core::components::{DiveState, Enemy, Hitbox};
use galaxy_core::constants::*;
use galaxy_core::events::GameEvent;
use galaxy_core::types::{Position, Rect};

use super::Frame;
use crate::run_state::RunState;
use crate::world_setup;

/// What dealt the damage. Decides particles, dive bonus and drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Bullet,
    Missile,
    Bomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Entity is not a live enemy.
    Missed,
    Hurt,
    Killed,
}

/// Current collision box of an enemy.
pub fn enemy_rect(world: &World, entity: Entity) -> Option<Rect> {
    let pos = *world.get::<&Position>(entity).ok()?;
    let size = world.get::<&Hitbox>(entity).ok()?.0;
    Some(Rect::at(&pos, &size))
}

/// Subtract `amount` hit points. At zero or below the enemy is scored,
/// burst, possibly drops a power-up, and is despawned in the same call.
pub fn damage_enemy(
    world: &mut World,
    entity: Entity,
    amount: f32,
    impact: Position,
    source: Source,
    run: &mut RunState,
    frame: &mut Frame,
) -> Outcome {
    let (tier, hp) = {
        let Ok(mut enemy) = world.get::<&mut Enemy>(entity) else {
            return Outcome::Missed;
        };
        enemy.hp -= amount;
        (enemy.tier, enemy.hp)
    };
    let profile = tier_profile(tier);

    if source != Source::Bomb {
        world_setup::spawn_burst(world, frame.rng, impact, profile.color, HIT_BURST);
    }
    if hp > 0.0 {
        if source != Source::Bomb {
            frame.events.push(GameEvent::EnemyHit);
        }
        return Outcome::Hurt;
    }

    let diving = world
        .get::<&DiveState>(entity)
        .map(|d| d.diving)
        .unwrap_or(false);
    let center = enemy_rect(world, entity)
        .map(|r| r.center())
        .unwrap_or(impact);

    let bonus = if diving && source != Source::Bomb {
        frame.tuning.dive_kill_bonus
    } else {
        0
    };
    run.score += profile.score + bonus;

    let burst = if source == Source::Bomb { BOMB_BURST } else { DEATH_BURST };
    world_setup::spawn_burst(world, frame.rng, center, profile.color, burst);

    if source != Source::Bomb && frame.rng.gen_bool(frame.tuning.power_up_drop_chance.clamp(0.0, 1.0)) {
        if let Some(kind) = frame.drops.pick(frame.rng) {
            world_setup::spawn_power_up(world, kind, center, frame.tuning.power_up_fall_speed);
        }
    }

    frame.events.push(GameEvent::EnemyDestroyed { tier });
    let _ = world.despawn(entity);
    Outcome::Killed
}
