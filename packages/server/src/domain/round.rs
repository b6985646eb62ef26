//! Round controller
//!
//! ```text
//!            start()                 correct guess / drawer leaves
//!   Idle ─────────────▶ Running ───────────────────────────────▶ Idle
//! ```
//!
//! Starting while running, or with nobody left to draw, is refused with a
//! [`RoundError`]; callers log it and carry on.

use super::{
    entity::Player,
    error::RoundError,
    provider::WordProvider,
    roster::PlayerRoster,
    value_object::{ConnectionToken, PlayerName, Word},
};

/// Chat text that starts a round.
pub const START_COMMAND: &str = "!start";

/// What happens once every player has drawn in the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// No further rounds can start.
    #[default]
    ExhaustOnce,
    /// Forget who has drawn and begin a new cycle.
    RestartCycle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    Idle,
    Running {
        word: Word,
        drawer: ConnectionToken,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStarted {
    pub drawer: Player,
    pub word: Word,
}

impl RoundStarted {
    /// Broadcast to everyone.
    pub fn announcement(&self) -> String {
        format!("New game started! {} is the drawmaster.", self.drawer.name)
    }

    /// Sent to the drawer only.
    pub fn word_reveal(&self) -> String {
        format!("Your word: {}.", self.word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundWon {
    pub guesser: PlayerName,
    pub word: Word,
}

impl RoundWon {
    pub fn announcement(&self) -> String {
        format!("{} has guessed the word: {}!", self.guesser, self.word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundAbandoned {
    pub drawer: PlayerName,
    pub word: Word,
}

impl RoundAbandoned {
    pub fn announcement(&self) -> String {
        format!(
            "Drawmaster {} has abandoned us :-(. The word was {}.",
            self.drawer, self.word
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoundController {
    state: RoundState,
    rotation: RotationPolicy,
}

impl RoundController {
    pub fn new(rotation: RotationPolicy) -> Self {
        Self {
            state: RoundState::Idle,
            rotation,
        }
    }

    /// `Idle -> Running`: choose a word, hand the drawer role on.
    pub fn start(
        &mut self,
        roster: &mut PlayerRoster,
        words: &dyn WordProvider,
    ) -> Result<RoundStarted, RoundError> {
        if self.is_running() {
            return Err(RoundError::AlreadyRunning);
        }

        let word = words.random_word();
        let drawer = match roster.pick_next_drawer().cloned() {
            Some(drawer) => drawer,
            None if self.rotation == RotationPolicy::RestartCycle && !roster.is_empty() => {
                tracing::info!("Every player has drawn; starting a new rotation cycle");
                roster.reset_rotation();
                roster
                    .pick_next_drawer()
                    .cloned()
                    .ok_or(RoundError::NoEligibleDrawer)?
            }
            None => return Err(RoundError::NoEligibleDrawer),
        };

        self.state = RoundState::Running {
            word: word.clone(),
            drawer: drawer.token.clone(),
        };
        Ok(RoundStarted { drawer, word })
    }

    /// `Running -> Idle` when a non-drawer types the word exactly.
    pub fn check_guess(
        &mut self,
        roster: &mut PlayerRoster,
        speaker: &ConnectionToken,
        text: &str,
    ) -> Option<RoundWon> {
        let RoundState::Running { word, .. } = &self.state else {
            return None;
        };
        let speaker = roster.find(speaker)?;
        if speaker.is_drawer || !word.matches(text) {
            return None;
        }

        let won = RoundWon {
            guesser: speaker.name.clone(),
            word: word.clone(),
        };
        self.state = RoundState::Idle;
        roster.clear_drawer();
        Some(won)
    }

    /// `Running -> Idle` when the drawer has left. `leaver` is already
    /// removed from the roster.
    pub fn abandon(&mut self, leaver: &Player) -> Option<RoundAbandoned> {
        let RoundState::Running { word, drawer } = &self.state else {
            return None;
        };
        if drawer != &leaver.token {
            return None;
        }

        let abandoned = RoundAbandoned {
            drawer: leaver.name.clone(),
            word: word.clone(),
        };
        self.state = RoundState::Idle;
        Some(abandoned)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RoundState::Running { .. })
    }

    pub fn word(&self) -> Option<&Word> {
        match &self.state {
            RoundState::Running { word, .. } => Some(word),
            RoundState::Idle => None,
        }
    }
}
