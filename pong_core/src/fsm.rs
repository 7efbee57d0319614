//! Match State Machine
//!
//! Lifecycle of a single match: waiting in the menu, playing, and finished.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// In the menu, nothing ticking
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    WinningScore,
    Restart,
    ReturnToMenu,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the state untouched
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("match {:?} -> {:?} on {:?}", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Idle, MatchAction::Start) => Some(MatchState::Running),
            (MatchState::Running, MatchAction::WinningScore) => Some(MatchState::GameOver),
            (MatchState::GameOver, MatchAction::Restart) => Some(MatchState::Running),

            // Leaving for the menu is always allowed
            (_, MatchAction::ReturnToMenu) => Some(MatchState::Idle),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }
}
