//! Gameplay events emitted by the game controllers.
//!
//! Lifetime totals and cross-session streaks live in the store; anything
//! scoped to a single run (bombs caught, current score and lives) travels in
//! the event because the controller owns the run.

use crate::modes::{CatchItem, FieldSize, GameMode, QuizDifficulty};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A game of `mode` was started.
    GamePlayed { mode: GameMode },

    /// Double Echo: two cards matched.
    PairMatched,
    /// Double Echo: every pair on the board found.
    MemoryLevelCleared {
        size: FieldSize,
        elapsed: Duration,
        mistakes: u32,
        moves: u32,
    },
    /// Double Echo: the player left a board before clearing it.
    MemoryLevelAbandoned,

    /// Echo Drop: an item was tapped. `bombs_this_run` includes this item.
    ItemCaught { item: CatchItem, bombs_this_run: u32 },
    /// Echo Drop: score or lives changed.
    ScoreReached { score: u32, lives: u32 },
    /// Echo Drop: the run ended (no lives left).
    CatcherRunEnded { score: u32 },

    /// Volcado Quiz: one question answered.
    QuestionAnswered { correct: bool },
    /// Volcado Quiz: the last question of a level answered.
    QuizCompleted {
        difficulty: QuizDifficulty,
        mistakes: u32,
        score: u32,
    },
}

impl GameEvent {
    /// The mode that emitted this event.
    pub fn mode(&self) -> GameMode {
        match self {
            GameEvent::GamePlayed { mode } => *mode,
            GameEvent::PairMatched
            | GameEvent::MemoryLevelCleared { .. }
            | GameEvent::MemoryLevelAbandoned => GameMode::DoubleEcho,
            GameEvent::ItemCaught { .. }
            | GameEvent::ScoreReached { .. }
            | GameEvent::CatcherRunEnded { .. } => GameMode::EchoDrop,
            GameEvent::QuestionAnswered { .. } | GameEvent::QuizCompleted { .. } => {
                GameMode::VolcadoQuiz
            }
        }
    }
}
