//! Per-mode high-score records.
//!
//! Double Echo keeps the fewest moves per board size (0 = no record yet),
//! Echo Drop the best score, Volcado Quiz the best score per difficulty.

use crate::modes::{FieldSize, QuizDifficulty};
use crate::storage::KeyValueStore;

pub const ECHO_DROP_RECORD_KEY: &str = "EchoDropRecord";

pub fn double_echo_key(size: FieldSize) -> String {
    format!("DoubleEchoRecord_{}", size.display_name())
}

pub fn quiz_key(difficulty: QuizDifficulty) -> String {
    format!("VolcadoQuizRecord_{}", difficulty.display_name())
}

/// Every persisted record key.
pub fn all_record_keys() -> Vec<String> {
    let mut keys: Vec<String> = FieldSize::ALL.into_iter().map(double_echo_key).collect();
    keys.push(ECHO_DROP_RECORD_KEY.to_string());
    keys.extend(QuizDifficulty::ALL.into_iter().map(quiz_key));
    keys
}

fn to_stored(value: u32) -> i64 {
    i64::from(value)
}

fn from_stored(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Submit a finished Double Echo board. Returns true on a new record.
pub fn submit_double_echo<S: KeyValueStore>(store: &mut S, size: FieldSize, moves: u32) -> bool {
    if moves == 0 {
        return false;
    }
    let key = double_echo_key(size);
    let record = from_stored(store.get_int(&key));
    if record == 0 || moves < record {
        store.set_int(&key, to_stored(moves));
        tracing::debug!("New Double Echo record for {}: {} moves", size, moves);
        return true;
    }
    false
}

/// Submit a finished Echo Drop run. Returns true on a new record.
pub fn submit_echo_drop<S: KeyValueStore>(store: &mut S, score: u32) -> bool {
    let record = from_stored(store.get_int(ECHO_DROP_RECORD_KEY));
    if score > record {
        store.set_int(ECHO_DROP_RECORD_KEY, to_stored(score));
        tracing::debug!("New Echo Drop record: {}", score);
        return true;
    }
    false
}

/// Submit a finished quiz. Returns true on a new record.
pub fn submit_quiz<S: KeyValueStore>(store: &mut S, difficulty: QuizDifficulty, score: u32) -> bool {
    let key = quiz_key(difficulty);
    let record = from_stored(store.get_int(&key));
    if score > record {
        store.set_int(&key, to_stored(score));
        tracing::debug!("New {} quiz record: {}", difficulty, score);
        return true;
    }
    false
}

/// Snapshot of every record, for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Records {
    /// Fewest moves per board size; `None` until a board is finished.
    pub double_echo: Vec<(FieldSize, Option<u32>)>,
    pub echo_drop: u32,
    pub quiz: Vec<(QuizDifficulty, u32)>,
}

impl Records {
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let double_echo = FieldSize::ALL
            .into_iter()
            .map(|size| {
                let moves = from_stored(store.get_int(&double_echo_key(size)));
                (size, (moves > 0).then_some(moves))
            })
            .collect();

        let quiz = QuizDifficulty::ALL
            .into_iter()
            .map(|d| (d, from_stored(store.get_int(&quiz_key(d)))))
            .collect();

        Self {
            double_echo,
            echo_drop: from_stored(store.get_int(ECHO_DROP_RECORD_KEY)),
            quiz,
        }
    }

    pub fn double_echo_best(&self, size: FieldSize) -> Option<u32> {
        self.double_echo
            .iter()
            .find(|(s, _)| *s == size)
            .and_then(|(_, moves)| *moves)
    }

    pub fn quiz_best(&self, difficulty: QuizDifficulty) -> u32 {
        self.quiz
            .iter()
            .find(|(d, _)| *d == difficulty)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    }
}
