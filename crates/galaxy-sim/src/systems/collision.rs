//! Collision resolution: pickups, player shots, missiles and hits on the
//! player ship.

use hecs::{Entity, World};

use galaxy_core::components::*;
use galaxy_core::constants::*;
use galaxy_core::enums::{Buff, PowerUpKind};
use galaxy_core::events::GameEvent;
use galaxy_core::types::{Position, Rect};

use super::combat::{self, Outcome, Source};
use super::{power_ups, Frame};
use crate::run_state::RunState;
use crate::world_setup::{self, entity_bits};

pub fn player_rect(player: &Player) -> Rect {
    Rect::at(&player.pos, &player.size)
}

/// Box of a center-anchored entity.
fn centered_rect(pos: &Position, hitbox: &Hitbox) -> Rect {
    let Hitbox(size) = hitbox;
    Rect::new(pos.x - size.w / 2.0, pos.y - size.h / 2.0, size.w, size.h)
}

/// Capsules whose center falls inside the padded ship box are consumed.
pub fn power_ups(world: &mut World, player: &mut Player, run: &mut RunState, frame: &mut Frame) {
    let reach = player_rect(player).padded(POWER_UP_SIZE, POWER_UP_SIZE);
    let picked: Vec<(Entity, PowerUpKind)> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| reach.contains(pos))
        .map(|(e, (pu, _))| (e, pu.kind))
        .collect();

    for (entity, kind) in picked {
        let _ = world.despawn(entity);
        power_ups::apply(world, player, run, kind, frame);
    }
}

/// Player bullets against enemies. Non-piercing shots stop at their first
/// hit; piercing shots damage every overlapped enemy once.
pub fn player_bullets(world: &mut World, run: &mut RunState, frame: &mut Frame) {
    let bullets: Vec<(Entity, Rect, bool, bool, bool)> = world
        .query::<(&PlayerBullet, &Position, &Hitbox)>()
        .iter()
        .map(|(e, (b, pos, hitbox))| (e, centered_rect(pos, hitbox), b.piercing, b.weak, b.landed))
        .collect();

    for (bullet, rect, piercing, weak, mut landed) in bullets {
        let targets: Vec<(Entity, Rect)> = world
            .query::<(&Enemy, &Position, &Hitbox)>()
            .iter()
            .map(|(e, (_, pos, hitbox))| (e, Rect::at(pos, &hitbox.0)))
            .filter(|(_, r)| r.overlaps(&rect))
            .collect();

        let damage = if weak { WEAK_BULLET_DAMAGE } else { BULLET_DAMAGE };
        for (enemy, _) in targets {
            if piercing {
                let bits = entity_bits(enemy);
                let fresh = match world.get::<&mut PlayerBullet>(bullet) {
                    Ok(mut shot) if !shot.pierced.contains(&bits) => {
                        shot.pierced.push(bits);
                        true
                    }
                    Ok(_) => false,
                    Err(_) => break,
                };
                if !fresh {
                    continue;
                }
            }
            let outcome = combat::damage_enemy(world, enemy, damage, rect.center(), Source::Bullet, run, frame);
            if outcome == Outcome::Missed {
                continue;
            }
            // One shot counts as at most one hit, however many ticks it pierces.
            if !landed {
                run.shots_hit += 1;
                landed = true;
                if let Ok(mut shot) = world.get::<&mut PlayerBullet>(bullet) {
                    shot.landed = true;
                }
            }
            if !piercing {
                let _ = world.despawn(bullet);
                break;
            }
        }
    }
}

/// Missiles hit whatever enemy they touch and are consumed.
pub fn missiles(world: &mut World, run: &mut RunState, frame: &mut Frame) {
    let missiles: Vec<(Entity, Rect)> = world
        .query::<(&Missile, &Position, &Hitbox)>()
        .iter()
        .map(|(e, (_, pos, hitbox))| (e, centered_rect(pos, hitbox)))
        .collect();

    for (missile, rect) in missiles {
        let hit = world
            .query::<(&Enemy, &Position, &Hitbox)>()
            .iter()
            .find(|(_, (_, pos, hitbox))| Rect::at(pos, &hitbox.0).overlaps(&rect))
            .map(|(e, _)| e);
        if let Some(enemy) = hit {
            let _ = world.despawn(missile);
            frame.events.push(GameEvent::MissileHit);
            let damage = frame.tuning.missile_damage;
            combat::damage_enemy(world, enemy, damage, rect.center(), Source::Missile, run, frame);
        }
    }
}

/// Enemy bullets, then enemy bodies, against the ship. At most one hit is
/// resolved per tick and none while invulnerable.
pub fn player_hits(world: &mut World, player: &mut Player, run: &mut RunState, frame: &mut Frame) {
    if player.is_invulnerable() {
        return;
    }
    let ship = player_rect(player);

    let bullet = world
        .query::<(&EnemyBullet, &Position, &Hitbox)>()
        .iter()
        .find(|(_, (_, pos, hitbox))| centered_rect(pos, hitbox).overlaps(&ship))
        .map(|(e, _)| e);
    if let Some(bullet) = bullet {
        let _ = world.despawn(bullet);
        hit_player(world, player, run, frame);
        return;
    }

    let rammed = world
        .query::<(&Enemy, &Position, &Hitbox)>()
        .iter()
        .any(|(_, (_, pos, hitbox))| Rect::at(pos, &hitbox.0).overlaps(&ship));
    if rammed {
        hit_player(world, player, run, frame);
    }
}

/// A shield charge soaks the hit; otherwise a life is lost and the weapon
/// is knocked back down.
pub fn hit_player(world: &mut World, player: &mut Player, run: &mut RunState, frame: &mut Frame) {
    let c = player.center();
    if player.shield_active {
        player.shield_hits = player.shield_hits.saturating_sub(1);
        if player.shield_hits == 0 {
            player.shield_active = false;
            if run
                .power_label
                .is_some_and(|l| l.kind == PowerUpKind::Shield)
            {
                run.power_label = None;
            }
        }
        world_setup::spawn_burst(world, frame.rng, Position::new(c.x, player.pos.y), COLOR_SHIELD, SHIELD_BURST);
        frame.events.push(GameEvent::ShieldHit);
        return;
    }

    player.lives = player.lives.saturating_sub(1);
    player.invuln_ms = frame.tuning.invuln_ms;
    player.weapon_level = 1;
    player.buffs.clear(Buff::Overcharge);
    player.buffs.clear(Buff::RapidFire);
    run.power_label = None;
    world_setup::spawn_burst(world, frame.rng, c, COLOR_DAMAGE, DAMAGE_BURST);
    frame.events.push(GameEvent::PlayerHit);
}
