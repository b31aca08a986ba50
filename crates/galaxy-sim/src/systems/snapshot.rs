//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use galaxy_core::components::*;
use galaxy_core::enums::*;
use galaxy_core::events::GameEvent;
use galaxy_core::records::Records;
use galaxy_core::state::*;
use galaxy_core::tuning::Tuning;
use galaxy_core::types::{Position, SimTime, Velocity};

use crate::run_state::RunState;

/// Everything outside the world that the snapshot reads.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub tuning: &'a Tuning,
    pub player: &'a Player,
    pub run: &'a RunState,
    pub records: &'a Records,
    pub stars: &'a [Star],
    pub portal_angle: f32,
}

pub fn build_snapshot(world: &World, inputs: &SnapshotInputs, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        width: inputs.tuning.width,
        height: inputs.tuning.height,
        overlay: build_overlay(inputs),
        hud: build_hud(inputs),
        player: build_player(inputs),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        missiles: world
            .query::<(&Missile, &Position, &Velocity)>()
            .iter()
            .map(|(_, (_, pos, vel))| MissileView {
                position: *pos,
                velocity: *vel,
            })
            .collect(),
        power_ups: world
            .query::<(&PowerUp, &Position)>()
            .iter()
            .map(|(_, (pu, pos))| PowerUpView {
                kind: pu.kind,
                position: *pos,
            })
            .collect(),
        particles: world
            .query::<(&Particle, &Position)>()
            .iter()
            .map(|(_, (p, pos))| ParticleView {
                position: *pos,
                life: p.life,
                color: p.color,
                radius: p.radius,
            })
            .collect(),
        stars: inputs.stars.to_vec(),
        portal_angle: inputs.portal_angle,
        events,
    }
}

fn build_overlay(inputs: &SnapshotInputs) -> Overlay {
    let run = inputs.run;
    match inputs.phase {
        GamePhase::Idle => Overlay::Splash,
        GamePhase::Paused => Overlay::Paused,
        GamePhase::GameOver => Overlay::GameOver {
            score: run.score,
            best_score: inputs.records.best_score,
            wave: run.wave,
            best_wave: inputs.records.best_wave,
            accuracy: (run.shots_fired > 0).then(|| run.accuracy()),
        },
        GamePhase::Running if run.in_overlay(inputs.time.now_ms) => Overlay::WaveIncoming { wave: run.wave },
        GamePhase::Running => Overlay::None,
    }
}

fn build_hud(inputs: &SnapshotInputs) -> HudView {
    let (player, run) = (inputs.player, inputs.run);
    let now = inputs.time.now_ms;
    let power_label = run
        .power_label
        .filter(|l| l.is_visible(now))
        .map(|l| l.kind.label().to_string())
        .or_else(|| player.shield_active.then(|| PowerUpKind::Shield.label().to_string()));

    HudView {
        score: run.score,
        lives: player.lives,
        wave: run.wave,
        weapon_level: player.weapon_level,
        shield: player.shield_active,
        power_label,
        best_score: inputs.records.best_score,
        best_wave: inputs.records.best_wave,
        accuracy: run.accuracy(),
    }
}

fn build_player(inputs: &SnapshotInputs) -> PlayerView {
    let player = inputs.player;
    let now = inputs.time.now_ms;
    PlayerView {
        position: player.pos,
        size: player.size,
        invulnerable: player.is_invulnerable(),
        shield_active: player.shield_active,
        drone: player
            .buffs
            .is_active(Buff::GuardianDrone, now)
            .then(|| player.drone_position(inputs.tuning.drone_orbit_radius)),
        active_buffs: player.buffs.active().collect(),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &DiveState, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (enemy, dive, pos, hitbox))| EnemyView {
            tier: enemy.tier,
            position: *pos,
            size: hitbox.0,
            hp: enemy.hp,
            max_hp: enemy.max_hp,
            diving: dive.diving,
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&PlayerBullet, &Position, &Velocity, &Hitbox)>()
        .iter()
        .map(|(_, (b, pos, vel, hitbox))| BulletView {
            kind: if b.piercing {
                BulletKind::Beam
            } else if b.weak {
                BulletKind::Pulse
            } else {
                BulletKind::Standard
            },
            position: *pos,
            velocity: *vel,
            size: hitbox.0,
        })
        .collect();
    bullets.extend(
        world
            .query::<(&EnemyBullet, &Position, &Velocity, &Hitbox)>()
            .iter()
            .map(|(_, (_, pos, vel, hitbox))| BulletView {
                kind: BulletKind::Enemy,
                position: *pos,
                velocity: *vel,
                size: hitbox.0,
            }),
    );
    bullets
}
