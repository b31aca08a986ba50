//! Player ship: buff expiry, movement and shooting.

use hecs::{Entity, World};
use rand::Rng;

use galaxy_core::components::{Enemy, Player, PlayerBullet};
use galaxy_core::constants::*;
use galaxy_core::enums::{Buff, ShotPattern};
use galaxy_core::events::GameEvent;
use galaxy_core::types::{Position, Velocity};

use super::input::Intent;
use super::Frame;
use crate::run_state::RunState;
use crate::world_setup;

/// Lapse timed buffs and tick down invulnerability.
///
/// Each buff reverts only its own effect; overcharge is the only one that
/// touches the weapon level.
pub fn expire(player: &mut Player, run: &mut RunState, frame: &Frame) {
    for buff in player.buffs.expire(frame.now_ms) {
        if buff == Buff::Overcharge {
            player.weapon_level = 1;
        }
    }
    if run
        .power_label
        .is_some_and(|label| !label.is_visible(frame.now_ms))
    {
        run.power_label = None;
    }
    player.invuln_ms = (player.invuln_ms - frame.dt_ms).max(0.0);
}

/// Apply horizontal intent, keeping the ship fully inside the playfield.
pub fn movement(player: &mut Player, intent: &Intent, width: f32) {
    player.pos.x = (player.pos.x + intent.dx).clamp(0.0, (width - player.size.w).max(0.0));
}

/// Pattern for the next trigger pull, by modifier precedence.
pub fn shot_pattern(player: &Player, now_ms: f64) -> ShotPattern {
    if player.buffs.is_active(Buff::PhotonBurst, now_ms) {
        ShotPattern::PhotonBeam
    } else if player.buffs.is_active(Buff::RapidPulse, now_ms) {
        ShotPattern::Pulse
    } else if player.weapon_level >= 3 {
        ShotPattern::Spread
    } else if player.weapon_level == 2 {
        ShotPattern::Twin
    } else {
        ShotPattern::Single
    }
}

/// Count down the shot cooldown and fire when the trigger is held.
pub fn shoot(world: &mut World, player: &Player, run: &mut RunState, intent: &Intent, frame: &mut Frame) {
    run.shoot_cooldown_ms = (run.shoot_cooldown_ms - frame.dt_ms).max(0.0);
    if intent.fire && run.shoot_cooldown_ms <= 0.0 {
        fire(world, player, run, frame);
    }
}

/// One shot attempt. Refused while too many player bullets are in flight.
pub fn fire(world: &mut World, player: &Player, run: &mut RunState, frame: &mut Frame) -> bool {
    let tuning = frame.tuning;
    let in_flight = world.query::<&PlayerBullet>().iter().count();
    if in_flight >= tuning.max_player_bullets {
        return false;
    }

    let nose = Position::new(player.center().x, player.pos.y - 4.0);
    let up = Velocity::new(0.0, -tuning.bullet_speed);
    let pattern = shot_pattern(player, frame.now_ms);
    let spawned = match pattern {
        ShotPattern::PhotonBeam => {
            world_setup::spawn_player_bullet(world, nose, up, BEAM_SIZE, true, false);
            1
        }
        ShotPattern::Pulse => {
            let fast = Velocity::new(0.0, -tuning.pulse_speed);
            world_setup::spawn_player_bullet(world, nose, fast, PULSE_SIZE, false, true);
            1
        }
        ShotPattern::Spread => {
            for vx in [-tuning.spread_vx, 0.0, tuning.spread_vx] {
                let vel = Velocity::new(vx, -tuning.bullet_speed);
                world_setup::spawn_player_bullet(world, nose, vel, BULLET_SIZE, false, false);
            }
            3
        }
        ShotPattern::Twin => {
            for dx in [-TWIN_OFFSET, TWIN_OFFSET] {
                let at = Position::new(nose.x + dx, nose.y);
                world_setup::spawn_player_bullet(world, at, up, BULLET_SIZE, false, false);
            }
            2
        }
        ShotPattern::Single => {
            world_setup::spawn_player_bullet(world, nose, up, BULLET_SIZE, false, false);
            1
        }
    };
    run.shots_fired += spawned;

    let rapid = player.buffs.is_active(Buff::RapidFire, frame.now_ms)
        || player.buffs.is_active(Buff::RapidPulse, frame.now_ms);
    run.shoot_cooldown_ms = tuning.shot_cooldown_ms(rapid);
    frame.events.push(if pattern == ShotPattern::PhotonBeam {
        GameEvent::PhotonShot
    } else {
        GameEvent::Shoot
    });

    if player.buffs.is_active(Buff::MissileSwarm, frame.now_ms) {
        launch_missiles(world, player, frame);
    }
    true
}

/// Launch the swarm, each missile locked on a random live enemy.
fn launch_missiles(world: &mut World, player: &Player, frame: &mut Frame) {
    let targets: Vec<Entity> = world.query::<&Enemy>().iter().map(|(e, _)| e).collect();
    if targets.is_empty() {
        return;
    }
    let c = player.center();
    let count = frame.tuning.missiles_per_shot;
    for i in 0..count {
        let target = targets[frame.rng.gen_range(0..targets.len())];
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        world_setup::spawn_missile(
            world,
            Position::new(c.x + side * player.size.w / 4.0, player.pos.y),
            Velocity::new(0.0, -frame.tuning.missile_speed),
            Some(target),
            frame.tuning.missile_ttl_ms,
        );
    }
    if count > 0 {
        frame.events.push(GameEvent::MissileLaunch);
    }
}
