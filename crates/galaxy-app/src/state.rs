//! State shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use galaxy_core::commands::PlayerCommand;
use galaxy_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Host-side handle on a running game loop.
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
}

impl AppState {
    /// Forward a player command. False once the loop has stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx.send(GameLoopCommand::PlayerCommand(command)).is_ok()
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_fails_after_loop_stops() {
        let (tx, rx) = mpsc::channel();
        let state = AppState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        };
        assert!(state.send(PlayerCommand::StartRun));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
        ));
        drop(rx);
        assert!(!state.send(PlayerCommand::Fire));
        assert!(state.latest().is_none());
    }
}
