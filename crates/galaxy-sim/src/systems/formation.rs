//! Formation system: sway, dive launches and dive trajectories.

use hecs::{Entity, World};
use tracing::trace;

use galaxy_core::components::{DiveState, Enemy, Hitbox};
use galaxy_core::events::GameEvent;
use galaxy_core::types::Position;
use galaxy_formation::dive::{self, DiveCandidate};
use galaxy_formation::motion;

use super::Frame;
use crate::run_state::RunState;

pub fn run(world: &mut World, run: &mut RunState, frame: &mut Frame) {
    advance(world, frame);
    launch(world, run, frame);
}

/// Move every enemy: formation members follow sway and wobble, divers
/// follow their trajectory and return home once they leave the bottom.
fn advance(world: &mut World, frame: &mut Frame) {
    let now = frame.now_ms;
    let dt_secs = frame.dt_secs();
    let height = frame.tuning.height;
    let fall = motion::dive_fall_speed(height);

    for (_entity, (enemy, dive, pos)) in world.query_mut::<(&Enemy, &mut DiveState, &mut Position)>() {
        dive.reform_ms = (dive.reform_ms - frame.dt_ms).max(0.0);

        if !dive.diving {
            *pos = motion::formation_position(enemy.home, enemy.wobble, now);
            continue;
        }

        dive.t += dt_secs;
        match motion::dive_curve_position(dive.start, dive.t, dive.curve_dir, height) {
            Some(p) => *pos = p,
            None => pos.y += fall * dt_secs,
        }

        if pos.y > height {
            *pos = motion::return_position(enemy.home, now);
            dive.diving = false;
            dive.reform_ms = dive::reform_cooldown(frame.tuning, frame.rng);
        }
    }
}

/// Launch a new dive group once the timer has elapsed and no one is
/// still out diving.
fn launch(world: &mut World, run: &mut RunState, frame: &mut Frame) {
    run.dive_timer_ms -= frame.dt_ms;

    let mut diving = 0;
    let mut candidates = Vec::new();
    for (entity, (enemy, dive, hitbox)) in world.query::<(&Enemy, &DiveState, &Hitbox)>().iter() {
        if dive.diving {
            diving += 1;
        }
        candidates.push(DiveCandidate {
            id: entity,
            home_center_x: enemy.home.x + hitbox.0.w / 2.0,
            eligible: !dive.diving && dive.reform_ms <= 0.0,
        });
    }

    if !dive::can_launch(run.dive_timer_ms, diving) {
        return;
    }

    let width = frame.tuning.width;
    let count = frame.tuning.divers_for_wave(run.wave) as usize;
    let picked: Vec<Entity> = dive::select_divers(&candidates, count, width / 2.0, frame.rng);
    if picked.is_empty() {
        return;
    }

    for entity in &picked {
        let plan = dive::plan_dive(frame.tuning, frame.rng);
        let start = world.get::<&Position>(*entity).map(|p| *p);
        let home_center = candidates
            .iter()
            .find(|c| c.id == *entity)
            .map(|c| c.home_center_x)
            .unwrap_or(width / 2.0);
        if let (Ok(start), Ok(mut dive)) = (start, world.get::<&mut DiveState>(*entity)) {
            *dive = DiveState {
                diving: true,
                t: 0.0,
                start,
                curve_dir: motion::curve_direction(home_center, width),
                shots_fired: 0,
                shots_allotted: plan.shots_allotted,
                shot_timer_ms: plan.first_shot_ms,
                reform_ms: 0.0,
            };
        }
    }

    trace!(count = picked.len(), wave = run.wave, "dive group launched");
    frame.events.push(GameEvent::EnemyDive);
    run.dive_timer_ms = frame.tuning.dive_interval_ms(run.wave);
}
