//! Durable achievement flags and progress counters.

use super::types::AchievementId;
use crate::modes::{GameMode, QuizDifficulty};
use crate::records;
use crate::storage::{KeyValueStore, StoreError};

/// Persisted integer counters used as unlock inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    TotalGamesPlayed,
    TotalItemsCollected,
    TotalPairsMatched,
    /// Double Echo boards cleared in a row; reset when a board is abandoned.
    ConsecutiveLevelsCompleted,
    ConsecutiveCorrectAnswers,
    ConsecutiveWrongAnswers,
}

impl Counter {
    pub const ALL: [Counter; 6] = [
        Counter::TotalGamesPlayed,
        Counter::TotalItemsCollected,
        Counter::TotalPairsMatched,
        Counter::ConsecutiveLevelsCompleted,
        Counter::ConsecutiveCorrectAnswers,
        Counter::ConsecutiveWrongAnswers,
    ];

    /// Persisted key name.
    pub fn key(&self) -> &'static str {
        match self {
            Counter::TotalGamesPlayed => "totalGamesPlayed",
            Counter::TotalItemsCollected => "totalItemsCollected",
            Counter::TotalPairsMatched => "totalPairsMatched",
            Counter::ConsecutiveLevelsCompleted => "consecutiveLevelsCompleted_DoubleEcho",
            Counter::ConsecutiveCorrectAnswers => "consecutiveCorrectAnswers",
            Counter::ConsecutiveWrongAnswers => "consecutiveWrongAnswers",
        }
    }
}

pub fn achievement_key(id: AchievementId) -> String {
    format!("achievement_{}", id.key())
}

fn played_key(mode: GameMode) -> String {
    format!("gamePlayed_{}", mode.key())
}

fn perfect_quiz_key(difficulty: QuizDifficulty) -> String {
    format!("perfectQuiz_{}", difficulty.display_name())
}

/// Achievement flags and counters on top of a [`KeyValueStore`].
#[derive(Debug)]
pub struct AchievementStore<S> {
    kv: S,
}

impl<S: KeyValueStore> AchievementStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.kv.get_bool(&achievement_key(id))
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn set_unlocked(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.kv.set_bool(&achievement_key(id), true);
        true
    }

    /// Get the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        AchievementId::ALL
            .iter()
            .filter(|id| self.is_unlocked(**id))
            .count()
    }

    pub fn get_counter(&self, counter: Counter) -> u64 {
        u64::try_from(self.kv.get_int(counter.key())).unwrap_or(0)
    }

    /// Add `by` to a counter and return the new value.
    pub fn increment_counter(&mut self, counter: Counter, by: u64) -> u64 {
        let value = self.get_counter(counter).saturating_add(by);
        self.kv
            .set_int(counter.key(), i64::try_from(value).unwrap_or(i64::MAX));
        tracing::debug!("{} = {}", counter.key(), value);
        value
    }

    pub fn reset_counter(&mut self, counter: Counter) {
        if self.get_counter(counter) != 0 {
            self.kv.set_int(counter.key(), 0);
        }
    }

    pub fn has_played(&self, mode: GameMode) -> bool {
        self.kv.get_bool(&played_key(mode))
    }

    /// Mark a mode as played. Returns true the first time.
    pub fn mark_played(&mut self, mode: GameMode) -> bool {
        if self.has_played(mode) {
            return false;
        }
        self.kv.set_bool(&played_key(mode), true);
        true
    }

    pub fn has_perfect_quiz(&self, difficulty: QuizDifficulty) -> bool {
        self.kv.get_bool(&perfect_quiz_key(difficulty))
    }

    pub fn mark_perfect_quiz(&mut self, difficulty: QuizDifficulty) {
        if !self.has_perfect_quiz(difficulty) {
            self.kv.set_bool(&perfect_quiz_key(difficulty), true);
        }
    }

    /// Clear every flag, counter and record back to its default.
    pub fn reset_all(&mut self) {
        for id in AchievementId::ALL {
            self.kv.remove(&achievement_key(id));
        }
        for counter in Counter::ALL {
            self.kv.remove(counter.key());
        }
        for mode in GameMode::ALL {
            self.kv.remove(&played_key(mode));
        }
        for difficulty in QuizDifficulty::ALL {
            self.kv.remove(&perfect_quiz_key(difficulty));
        }
        for key in records::all_record_keys() {
            self.kv.remove(&key);
        }
    }

    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.kv.flush()
    }

    /// Raw key-value access, used by the records helpers.
    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    pub fn into_inner(self) -> S {
        self.kv
    }
}
