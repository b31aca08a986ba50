//! Scripted player for headless runs: keeps auto-fire on and tracks the
//! enemy closest to the bottom of the screen.

use galaxy_core::commands::PlayerCommand;
use galaxy_core::enums::GamePhase;
use galaxy_core::state::GameStateSnapshot;

#[derive(Debug, Clone)]
pub struct Autopilot {
    max_runs: u32,
    runs_started: u32,
}

impl Autopilot {
    pub fn new(max_runs: u32) -> Self {
        Self {
            max_runs,
            runs_started: 0,
        }
    }

    pub fn runs_started(&self) -> u32 {
        self.runs_started
    }

    /// Commands to send before the next tick.
    pub fn steer(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Idle | GamePhase::GameOver if self.runs_started < self.max_runs => {
                self.runs_started += 1;
                vec![
                    PlayerCommand::SetAutoFire { enabled: true },
                    PlayerCommand::StartRun,
                ]
            }
            GamePhase::Idle | GamePhase::GameOver => Vec::new(),
            GamePhase::Paused => vec![PlayerCommand::Resume],
            GamePhase::Running => vec![PlayerCommand::PointerMove {
                x: target_x(snapshot),
            }],
        }
    }
}

/// Center x of the lowest enemy, or mid-screen when the field is empty.
pub fn target_x(snapshot: &GameStateSnapshot) -> f32 {
    snapshot
        .enemies
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|e| e.position.x + e.size.w / 2.0)
        .unwrap_or(snapshot.width / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::enums::EnemyTier;
    use galaxy_core::state::EnemyView;
    use galaxy_core::types::{Position, Size};

    fn enemy_at(x: f32, y: f32) -> EnemyView {
        EnemyView {
            tier: EnemyTier::Scout,
            position: Position::new(x, y),
            size: Size::new(26.0, 22.0),
            hp: 1.0,
            max_hp: 1.0,
            diving: false,
        }
    }

    #[test]
    fn test_starts_at_most_max_runs() {
        let mut pilot = Autopilot::new(2);
        let idle = GameStateSnapshot::default();
        assert!(pilot.steer(&idle).contains(&PlayerCommand::StartRun));
        let over = GameStateSnapshot {
            phase: GamePhase::GameOver,
            ..Default::default()
        };
        assert!(pilot.steer(&over).contains(&PlayerCommand::StartRun));
        assert!(pilot.steer(&over).is_empty());
        assert_eq!(pilot.runs_started(), 2);
    }

    #[test]
    fn test_tracks_lowest_enemy() {
        let snapshot = GameStateSnapshot {
            phase: GamePhase::Running,
            width: 480.0,
            enemies: vec![enemy_at(10.0, 80.0), enemy_at(300.0, 400.0), enemy_at(100.0, 120.0)],
            ..Default::default()
        };
        assert_eq!(target_x(&snapshot), 313.0);
        let mut pilot = Autopilot::new(1);
        assert_eq!(pilot.steer(&snapshot), vec![PlayerCommand::PointerMove { x: 313.0 }]);
    }

    #[test]
    fn test_empty_field_aims_center() {
        let snapshot = GameStateSnapshot {
            width: 480.0,
            ..Default::default()
        };
        assert_eq!(target_x(&snapshot), 240.0);
    }

    #[test]
    fn test_resumes_when_paused() {
        let snapshot = GameStateSnapshot {
            phase: GamePhase::Paused,
            ..Default::default()
        };
        assert_eq!(Autopilot::new(1).steer(&snapshot), vec![PlayerCommand::Resume]);
    }
}
