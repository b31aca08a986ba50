//! Power-up effects, applied the instant a capsule is picked up.

use hecs::{Entity, World};
use tracing::debug;

use galaxy_core::components::{Enemy, EnemyBullet, Player, PowerLabel};
use galaxy_core::constants::*;
use galaxy_core::enums::{Buff, PowerUpKind};
use galaxy_core::events::GameEvent;

use super::combat::{self, Source};
use super::Frame;
use crate::run_state::RunState;
use crate::world_setup;

pub fn apply(world: &mut World, player: &mut Player, run: &mut RunState, kind: PowerUpKind, frame: &mut Frame) {
    let now = frame.now_ms;
    let flash_until = Some(now + frame.tuning.flash_label_ms);
    debug!(?kind, "power-up collected");

    let label_until = match kind {
        PowerUpKind::Overcharge => {
            player.weapon_level = (player.weapon_level + 1).min(MAX_WEAPON_LEVEL);
            grant(player, Buff::Overcharge, frame)
        }
        PowerUpKind::Shield => {
            player.shield_active = true;
            player.shield_hits = frame.tuning.shield_hits.max(1);
            None
        }
        PowerUpKind::Bomb => {
            detonate_bomb(world, run, frame);
            flash_until
        }
        PowerUpKind::ExtraLife => {
            player.lives = (player.lives + 1).min(frame.tuning.max_lives);
            flash_until
        }
        PowerUpKind::RapidFire => grant(player, Buff::RapidFire, frame),
        PowerUpKind::PhotonBurst => grant(player, Buff::PhotonBurst, frame),
        PowerUpKind::RapidPulse => grant(player, Buff::RapidPulse, frame),
        PowerUpKind::MissileSwarm => grant(player, Buff::MissileSwarm, frame),
        PowerUpKind::GuardianDrone => grant(player, Buff::GuardianDrone, frame),
    };

    run.power_label = Some(PowerLabel {
        kind,
        until_ms: label_until,
    });
    frame.events.push(match kind {
        PowerUpKind::ExtraLife => GameEvent::ExtraLife,
        _ => GameEvent::PowerUp { kind },
    });
}

/// Start a timed buff and return its deadline.
fn grant(player: &mut Player, buff: Buff, frame: &Frame) -> Option<f64> {
    let until = frame.now_ms + frame.tuning.buff_duration_ms(buff);
    player.buffs.grant(buff, until);
    Some(until)
}

/// Clear enemy fire, deal bomb damage to every enemy, flash the screen.
pub fn detonate_bomb(world: &mut World, run: &mut RunState, frame: &mut Frame) {
    let bullets: Vec<Entity> = world
        .query::<&EnemyBullet>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    for e in bullets {
        let _ = world.despawn(e);
    }

    let enemies: Vec<Entity> = world.query::<&Enemy>().iter().map(|(e, _)| e).collect();
    for e in enemies {
        let impact = combat::enemy_rect(world, e).map(|r| r.center()).unwrap_or_default();
        combat::damage_enemy(world, e, BOMB_DAMAGE, impact, Source::Bomb, run, frame);
    }

    let (w, h) = (frame.tuning.width, frame.tuning.height);
    world_setup::spawn_flash(world, frame.rng, w, h, FLASH_SPARKS);
}
