//! Dive group selection and per-dive shot planning.

use galaxy_core::tuning::Tuning;
use rand::Rng;

/// Formation member considered for a dive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiveCandidate<Id> {
    pub id: Id,
    /// Horizontal center of the enemy's home slot.
    pub home_center_x: f32,
    /// False while the enemy is diving or still on its reform cooldown.
    pub eligible: bool,
}

/// A dive group may only launch once the timer has elapsed and every
/// previous diver is back in formation.
pub fn can_launch(dive_timer_ms: f32, diving_count: usize) -> bool {
    dive_timer_ms <= 0.0 && diving_count == 0
}

/// Pick up to `count` divers, alternating left half then right half of the
/// formation. An empty side lets the other contribute the remainder.
pub fn select_divers<Id: Copy, R: Rng + ?Sized>(
    candidates: &[DiveCandidate<Id>],
    count: usize,
    center_x: f32,
    rng: &mut R,
) -> Vec<Id> {
    let (mut left, mut right): (Vec<&DiveCandidate<Id>>, Vec<&DiveCandidate<Id>>) = candidates
        .iter()
        .filter(|c| c.eligible)
        .partition(|c| c.home_center_x < center_x);

    let mut picked = Vec::with_capacity(count);
    let mut from_left = true;
    while picked.len() < count && !(left.is_empty() && right.is_empty()) {
        let side = match (from_left, left.is_empty(), right.is_empty()) {
            (true, false, _) | (false, false, true) => &mut left,
            _ => &mut right,
        };
        let idx = rng.gen_range(0..side.len());
        picked.push(side.swap_remove(idx).id);
        from_left = !from_left;
    }
    picked
}

/// Shot budget and first-shot delay rolled when a dive launches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivePlan {
    pub shots_allotted: u32,
    pub first_shot_ms: f32,
}

pub fn plan_dive<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> DivePlan {
    let lo = tuning.dive_shots_min.min(tuning.dive_shots_max);
    DivePlan {
        shots_allotted: rng.gen_range(lo..=tuning.dive_shots_max.max(lo)),
        first_shot_ms: tuning.dive_first_shot_ms + jitter(tuning, rng),
    }
}

/// Delay between consecutive shot attempts of one diver.
pub fn next_shot_delay<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    tuning.dive_shot_spacing_ms + jitter(tuning, rng)
}

/// Reform cooldown rolled when a diver returns home.
pub fn reform_cooldown<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    if tuning.reform_max_ms > tuning.reform_min_ms {
        rng.gen_range(tuning.reform_min_ms..tuning.reform_max_ms)
    } else {
        tuning.reform_min_ms
    }
}

fn jitter<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    if tuning.dive_shot_jitter_ms > 0.0 {
        rng.gen_range(0.0..tuning.dive_shot_jitter_ms)
    } else {
        0.0
    }
}
