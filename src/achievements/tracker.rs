//! Achievement evaluation: turns gameplay events into unlocks.

use super::data::{get_achievement_def, ALL_ACHIEVEMENTS};
use super::events::GameEvent;
use super::store::{AchievementStore, Counter};
use super::types::{AchievementCategory, AchievementDef, AchievementId, AchievementStatus};
use crate::constants::*;
use crate::modes::{GameMode, QuizDifficulty};
use crate::records::{self, Records};
use crate::storage::{KeyValueStore, StoreError};
use std::time::Duration;

/// Callback invoked once for every newly unlocked achievement.
pub type UnlockListener = Box<dyn FnMut(&AchievementDef)>;

/// Owns the progress store and applies the unlock rules.
pub struct AchievementTracker<S> {
    store: AchievementStore<S>,
    listeners: Vec<UnlockListener>,
}

impl<S: KeyValueStore> AchievementTracker<S> {
    /// Wrap `kv`, catching up aggregates the stored flags already satisfy.
    pub fn new(kv: S) -> Self {
        let mut tracker = Self {
            store: AchievementStore::new(kv),
            listeners: Vec::new(),
        };
        let caught_up = tracker.refresh();
        if !caught_up.is_empty() {
            tracing::info!("Caught up {} achievements from stored progress", caught_up.len());
        }
        tracker
    }

    pub fn store(&self) -> &AchievementStore<S> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut AchievementStore<S> {
        &mut self.store
    }

    /// Register a listener for future unlocks.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&AchievementDef) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every achievement with its unlock state, in catalog order.
    pub fn evaluate(&self) -> Vec<AchievementStatus> {
        ALL_ACHIEVEMENTS
            .iter()
            .map(|def| AchievementStatus {
                def,
                unlocked: self.store.is_unlocked(def.id),
            })
            .collect()
    }

    /// [`evaluate`](Self::evaluate) split into display sections.
    pub fn evaluate_by_category(&self) -> Vec<(AchievementCategory, Vec<AchievementStatus>)> {
        let all = self.evaluate();
        AchievementCategory::ALL
            .into_iter()
            .map(|category| {
                let section = all
                    .iter()
                    .filter(|s| s.def.category == category)
                    .cloned()
                    .collect();
                (category, section)
            })
            .collect()
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.store.is_unlocked(id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.store.unlocked_count()
    }

    pub fn total_count(&self) -> usize {
        ALL_ACHIEVEMENTS.len()
    }

    /// Get unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        (self.unlocked_count() as f32 / self.total_count() as f32) * 100.0
    }

    /// Get count of unlocked/total by category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        let in_category: Vec<_> = ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();
        let unlocked = in_category
            .iter()
            .filter(|a| self.store.is_unlocked(a.id))
            .count();
        (unlocked, in_category.len())
    }

    pub fn records(&self) -> Records {
        Records::load(self.store.kv())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Apply one gameplay event. Returns the achievements it unlocked, in
    /// unlock order (aggregate unlocks follow the unlock that caused them).
    pub fn record_event(&mut self, event: &GameEvent) -> Vec<AchievementId> {
        tracing::debug!("{} event: {:?}", event.mode(), event);
        let mut unlocked = Vec::new();

        match *event {
            GameEvent::GamePlayed { mode } => self.on_game_played(mode, &mut unlocked),
            GameEvent::PairMatched => self.on_pair_matched(&mut unlocked),
            GameEvent::MemoryLevelCleared {
                size,
                elapsed,
                mistakes,
                moves,
            } => {
                records::submit_double_echo(self.store.kv_mut(), size, moves);
                self.on_memory_level_cleared(elapsed, mistakes, &mut unlocked);
            }
            GameEvent::MemoryLevelAbandoned => {
                self.store.reset_counter(Counter::ConsecutiveLevelsCompleted);
            }
            GameEvent::ItemCaught {
                item,
                bombs_this_run,
            } => {
                if item.is_collectible() {
                    self.on_item_collected(&mut unlocked);
                }
                if bombs_this_run >= ASH_MISTAKE_BOMBS {
                    self.unlock_into(AchievementId::AshMistake, &mut unlocked);
                }
            }
            GameEvent::ScoreReached { score, lives } => {
                self.on_score_reached(score, lives, &mut unlocked)
            }
            GameEvent::CatcherRunEnded { score } => {
                records::submit_echo_drop(self.store.kv_mut(), score);
            }
            GameEvent::QuestionAnswered { correct } => {
                self.on_question_answered(correct, &mut unlocked)
            }
            GameEvent::QuizCompleted {
                difficulty,
                mistakes,
                score,
            } => {
                records::submit_quiz(self.store.kv_mut(), difficulty, score);
                self.on_quiz_completed(difficulty, mistakes, &mut unlocked);
            }
        }

        // Totals can cross a threshold without any other unlock.
        self.check_general(&mut unlocked);
        unlocked
    }

    /// Unlock `id` outside of gameplay. Listeners and the aggregate
    /// cascade run exactly as for event unlocks.
    pub fn unlock(&mut self, id: AchievementId) -> Vec<AchievementId> {
        let mut unlocked = Vec::new();
        self.unlock_into(id, &mut unlocked);
        unlocked
    }

    /// Re-check the aggregate achievements against the stored state.
    pub fn refresh(&mut self) -> Vec<AchievementId> {
        let mut unlocked = Vec::new();
        self.check_general(&mut unlocked);
        unlocked
    }

    /// Clear all achievements, counters and records.
    pub fn reset_progress(&mut self) {
        let had = self.store.unlocked_count();
        self.store.reset_all();
        tracing::info!("Progress reset ({} achievements cleared)", had);
    }

    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.store.flush()
    }

    fn unlock_into(&mut self, id: AchievementId, unlocked: &mut Vec<AchievementId>) {
        if !self.store.set_unlocked(id) {
            return;
        }
        let def = get_achievement_def(id);
        tracing::info!("Achievement unlocked: {} {}", def.icon, def.name);
        unlocked.push(id);
        for listener in self.listeners.iter_mut() {
            listener(def);
        }
        self.check_general(unlocked);
    }

    /// Aggregate achievements. Runs after every individual unlock so a
    /// 10th or 22nd unlock cascades within the same event.
    fn check_general(&mut self, unlocked: &mut Vec<AchievementId>) {
        let count = self.store.unlocked_count();
        let others = count - usize::from(self.store.is_unlocked(AchievementId::SoundOfLava));
        if others >= SOUND_OF_LAVA_UNLOCKS {
            self.unlock_into(AchievementId::SoundOfLava, unlocked);
        }

        if self.store.get_counter(Counter::TotalGamesPlayed) >= ENDLESS_ECHO_GAMES {
            self.unlock_into(AchievementId::EndlessEcho, unlocked);
        }

        let all_others = AchievementId::ALL
            .into_iter()
            .filter(|id| *id != AchievementId::VolcadoLegend)
            .all(|id| self.store.is_unlocked(id));
        if all_others {
            self.unlock_into(AchievementId::VolcadoLegend, unlocked);
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn on_game_played(&mut self, mode: GameMode, unlocked: &mut Vec<AchievementId>) {
        self.store.mark_played(mode);
        self.store.increment_counter(Counter::TotalGamesPlayed, 1);

        self.unlock_into(AchievementId::FirstEcho, unlocked);

        if GameMode::ALL.iter().all(|m| self.store.has_played(*m)) {
            self.unlock_into(AchievementId::HotStart, unlocked);
        }
    }

    fn on_pair_matched(&mut self, unlocked: &mut Vec<AchievementId>) {
        let pairs = self.store.increment_counter(Counter::TotalPairsMatched, 1);

        self.unlock_into(AchievementId::FirstMatch, unlocked);
        if pairs >= PAIR_COLLECTOR_PAIRS {
            self.unlock_into(AchievementId::PairCollector, unlocked);
        }
    }

    fn on_memory_level_cleared(
        &mut self,
        elapsed: Duration,
        mistakes: u32,
        unlocked: &mut Vec<AchievementId>,
    ) {
        let streak = self
            .store
            .increment_counter(Counter::ConsecutiveLevelsCompleted, 1);

        if elapsed < Duration::from_secs(FAST_ECHO_SECONDS) {
            self.unlock_into(AchievementId::FastEcho, unlocked);
        }
        if mistakes == 0 {
            self.unlock_into(AchievementId::NoMistakes, unlocked);
        }
        if streak >= FIERY_FOCUS_STREAK {
            self.unlock_into(AchievementId::FieryFocus, unlocked);
        }
        if streak >= FLOW_OF_LAVA_STREAK {
            self.unlock_into(AchievementId::FlowOfLava, unlocked);
        }
    }

    fn on_item_collected(&mut self, unlocked: &mut Vec<AchievementId>) {
        let items = self.store.increment_counter(Counter::TotalItemsCollected, 1);

        self.unlock_into(AchievementId::FirstCatch, unlocked);
        if items >= LAVA_COLLECTOR_ITEMS {
            self.unlock_into(AchievementId::LavaCollector, unlocked);
        }
    }

    fn on_score_reached(&mut self, score: u32, lives: u32, unlocked: &mut Vec<AchievementId>) {
        if score >= NEVER_GIVES_UP_SCORE && lives == NEVER_GIVES_UP_LIVES {
            self.unlock_into(AchievementId::VolcadoNeverGivesUp, unlocked);
        }
        if score >= ECHO_AVALANCHE_SCORE {
            self.unlock_into(AchievementId::EchoAvalanche, unlocked);
        }
        if score >= MASTER_OF_FALLS_SCORE {
            self.unlock_into(AchievementId::MasterOfFalls, unlocked);
        }
    }

    fn on_question_answered(&mut self, correct: bool, unlocked: &mut Vec<AchievementId>) {
        if correct {
            self.store.reset_counter(Counter::ConsecutiveWrongAnswers);
            let streak = self
                .store
                .increment_counter(Counter::ConsecutiveCorrectAnswers, 1);

            self.unlock_into(AchievementId::FirstAnswer, unlocked);
            if streak >= VOLCADO_GENIUS_STREAK {
                self.unlock_into(AchievementId::VolcadoGenius, unlocked);
            }
        } else {
            self.store.reset_counter(Counter::ConsecutiveCorrectAnswers);
            let streak = self
                .store
                .increment_counter(Counter::ConsecutiveWrongAnswers, 1);

            if streak >= ASHES_OF_KNOWLEDGE_STREAK {
                self.unlock_into(AchievementId::AshesOfKnowledge, unlocked);
            }
        }
    }

    fn on_quiz_completed(
        &mut self,
        difficulty: QuizDifficulty,
        mistakes: u32,
        unlocked: &mut Vec<AchievementId>,
    ) {
        if difficulty == QuizDifficulty::Hard {
            self.unlock_into(AchievementId::FieryMind, unlocked);
        }
        if mistakes > 0 {
            return;
        }

        self.store.mark_perfect_quiz(difficulty);
        self.unlock_into(AchievementId::DidntBurnOut, unlocked);

        if QuizDifficulty::ALL
            .iter()
            .all(|d| self.store.has_perfect_quiz(*d))
        {
            self.unlock_into(AchievementId::LavaLogic, unlocked);
        }
    }
}

impl<S: KeyValueStore + Default> Default for AchievementTracker<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::store::achievement_key;
    use crate::modes::{CatchItem, FieldSize};
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracker() -> AchievementTracker<MemoryStore> {
        AchievementTracker::default()
    }

    fn played(mode: GameMode) -> GameEvent {
        GameEvent::GamePlayed { mode }
    }

    fn cleared(secs: u64, mistakes: u32) -> GameEvent {
        GameEvent::MemoryLevelCleared {
            size: FieldSize::TwoByTwo,
            elapsed: Duration::from_secs(secs),
            mistakes,
            moves: 4,
        }
    }

    fn answer(correct: bool) -> GameEvent {
        GameEvent::QuestionAnswered { correct }
    }

    // =========================================================================
    // General
    // =========================================================================

    #[test]
    fn test_first_game_unlocks_first_echo() {
        let mut t = tracker();
        let unlocked = t.record_event(&played(GameMode::EchoDrop));
        assert_eq!(unlocked, vec![AchievementId::FirstEcho]);
        assert_eq!(t.unlocked_count(), 1);

        // Playing again is a no-op for achievements
        assert!(t.record_event(&played(GameMode::EchoDrop)).is_empty());
        assert_eq!(t.store().get_counter(Counter::TotalGamesPlayed), 2);
    }

    #[test]
    fn test_hot_start_needs_every_mode() {
        let mut t = tracker();
        t.record_event(&played(GameMode::EchoDrop));
        t.record_event(&played(GameMode::DoubleEcho));
        assert!(!t.is_unlocked(AchievementId::HotStart));

        let unlocked = t.record_event(&played(GameMode::VolcadoQuiz));
        assert_eq!(unlocked, vec![AchievementId::HotStart]);
        assert_eq!(t.unlocked_count(), 2);
    }

    #[test]
    fn test_endless_echo_at_hundred_games() {
        let mut t = tracker();
        for _ in 0..99 {
            t.record_event(&played(GameMode::DoubleEcho));
        }
        assert!(!t.is_unlocked(AchievementId::EndlessEcho));

        let unlocked = t.record_event(&played(GameMode::DoubleEcho));
        assert_eq!(unlocked, vec![AchievementId::EndlessEcho]);
    }

    #[test]
    fn test_endless_echo_from_preexisting_counter() {
        let mut t = tracker();
        t.store_mut()
            .increment_counter(Counter::TotalGamesPlayed, ENDLESS_ECHO_GAMES);

        // Any event re-checks the aggregates
        let unlocked = t.record_event(&GameEvent::MemoryLevelAbandoned);
        assert_eq!(unlocked, vec![AchievementId::EndlessEcho]);
    }

    #[test]
    fn test_sound_of_lava_cascades_on_tenth_unlock() {
        let mut t = tracker();
        let nine = [
            AchievementId::FirstEcho,
            AchievementId::FirstMatch,
            AchievementId::FastEcho,
            AchievementId::NoMistakes,
            AchievementId::FirstCatch,
            AchievementId::AshMistake,
            AchievementId::FirstAnswer,
            AchievementId::FieryMind,
            AchievementId::DidntBurnOut,
        ];
        for id in nine {
            t.store_mut().set_unlocked(id);
        }

        let unlocked = t.record_event(&GameEvent::ScoreReached {
            score: ECHO_AVALANCHE_SCORE,
            lives: 3,
        });
        assert_eq!(
            unlocked,
            vec![AchievementId::EchoAvalanche, AchievementId::SoundOfLava]
        );
        assert_eq!(t.unlocked_count(), 11);
    }

    #[test]
    fn test_volcado_legend_closes_the_set() {
        let mut t = tracker();
        for id in AchievementId::ALL {
            if id != AchievementId::MasterOfFalls && id != AchievementId::VolcadoLegend {
                t.store_mut().set_unlocked(id);
            }
        }
        assert_eq!(t.unlocked_count(), 21);

        let unlocked = t.record_event(&GameEvent::ScoreReached {
            score: MASTER_OF_FALLS_SCORE,
            lives: 2,
        });
        assert_eq!(
            unlocked,
            vec![AchievementId::MasterOfFalls, AchievementId::VolcadoLegend]
        );
        assert_eq!(t.unlocked_count(), 23);
    }

    #[test]
    fn test_direct_unlocks_cascade() {
        let mut t = tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        t.subscribe(move |def| sink.borrow_mut().push(def.id));

        let nine = [
            AchievementId::FirstEcho,
            AchievementId::HotStart,
            AchievementId::FirstMatch,
            AchievementId::FastEcho,
            AchievementId::NoMistakes,
            AchievementId::FirstCatch,
            AchievementId::AshMistake,
            AchievementId::FirstAnswer,
            AchievementId::FieryMind,
        ];
        for id in nine {
            assert_eq!(t.unlock(id), vec![id]);
        }
        assert!(t.unlock(AchievementId::FirstEcho).is_empty());

        assert_eq!(
            t.unlock(AchievementId::DidntBurnOut),
            vec![AchievementId::DidntBurnOut, AchievementId::SoundOfLava]
        );
        let sound = t
            .evaluate()
            .into_iter()
            .find(|s| s.def.id == AchievementId::SoundOfLava)
            .unwrap();
        assert!(sound.unlocked);
        assert_eq!(seen.borrow().len(), 11);
        assert_eq!(seen.borrow().last(), Some(&AchievementId::SoundOfLava));
    }

    #[test]
    fn test_opening_stored_progress_catches_up_aggregates() {
        let mut kv = MemoryStore::new();
        let ten = [
            AchievementId::FirstEcho,
            AchievementId::HotStart,
            AchievementId::FirstMatch,
            AchievementId::FastEcho,
            AchievementId::NoMistakes,
            AchievementId::FieryFocus,
            AchievementId::FirstCatch,
            AchievementId::LavaCollector,
            AchievementId::FirstAnswer,
            AchievementId::LavaLogic,
        ];
        for id in ten {
            kv.set_bool(&achievement_key(id), true);
        }
        kv.set_int(Counter::TotalGamesPlayed.key(), 120);

        let mut t = AchievementTracker::new(kv);
        assert!(t.is_unlocked(AchievementId::SoundOfLava));
        assert!(t.is_unlocked(AchievementId::EndlessEcho));
        assert!(!t.is_unlocked(AchievementId::VolcadoLegend));
        assert!(t.refresh().is_empty());
    }

    #[test]
    fn test_listeners_see_each_unlock_once() {
        let mut t = tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        t.subscribe(move |def| sink.borrow_mut().push(def.id));

        for mode in GameMode::ALL {
            t.record_event(&played(mode));
        }
        t.record_event(&played(GameMode::EchoDrop));

        assert_eq!(
            *seen.borrow(),
            vec![AchievementId::FirstEcho, AchievementId::HotStart]
        );
    }

    // =========================================================================
    // Double Echo
    // =========================================================================

    #[test]
    fn test_pair_milestones() {
        let mut t = tracker();
        assert_eq!(
            t.record_event(&GameEvent::PairMatched),
            vec![AchievementId::FirstMatch]
        );

        t.store_mut()
            .increment_counter(Counter::TotalPairsMatched, PAIR_COLLECTOR_PAIRS - 3);
        assert!(t.record_event(&GameEvent::PairMatched).is_empty());
        assert_eq!(
            t.record_event(&GameEvent::PairMatched),
            vec![AchievementId::PairCollector]
        );
    }

    #[test]
    fn test_level_clear_rules() {
        let mut t = tracker();

        // Slow board with a mistake: nothing but the streak moves
        assert!(t.record_event(&cleared(30, 2)).is_empty());

        assert_eq!(t.record_event(&cleared(9, 1)), vec![AchievementId::FastEcho]);
        assert_eq!(
            t.record_event(&cleared(10, 0)),
            vec![AchievementId::NoMistakes, AchievementId::FieryFocus]
        );
    }

    #[test]
    fn test_abandoning_breaks_the_streak() {
        let mut t = tracker();
        t.record_event(&cleared(30, 1));
        t.record_event(&cleared(30, 1));
        t.record_event(&GameEvent::MemoryLevelAbandoned);
        t.record_event(&cleared(30, 1));
        assert!(!t.is_unlocked(AchievementId::FieryFocus));

        t.record_event(&cleared(30, 1));
        t.record_event(&cleared(30, 1));
        assert!(t.is_unlocked(AchievementId::FieryFocus));
        assert!(!t.is_unlocked(AchievementId::FlowOfLava));
    }

    #[test]
    fn test_flow_of_lava_at_fifty() {
        let mut t = tracker();
        for _ in 0..FLOW_OF_LAVA_STREAK - 1 {
            t.record_event(&cleared(30, 1));
        }
        assert!(!t.is_unlocked(AchievementId::FlowOfLava));
        t.record_event(&cleared(30, 1));
        assert!(t.is_unlocked(AchievementId::FlowOfLava));
    }

    #[test]
    fn test_level_clear_updates_record() {
        let mut t = tracker();
        t.record_event(&GameEvent::MemoryLevelCleared {
            size: FieldSize::ThreeByFour,
            elapsed: Duration::from_secs(40),
            mistakes: 3,
            moves: 11,
        });
        assert_eq!(
            t.records().double_echo_best(FieldSize::ThreeByFour),
            Some(11)
        );
    }

    // =========================================================================
    // Echo Drop
    // =========================================================================

    #[test]
    fn test_bombs_do_not_count_as_items() {
        let mut t = tracker();
        let unlocked = t.record_event(&GameEvent::ItemCaught {
            item: CatchItem::Bomb,
            bombs_this_run: 1,
        });
        assert!(unlocked.is_empty());
        assert_eq!(t.store().get_counter(Counter::TotalItemsCollected), 0);

        let unlocked = t.record_event(&GameEvent::ItemCaught {
            item: CatchItem::Heart,
            bombs_this_run: 1,
        });
        assert_eq!(unlocked, vec![AchievementId::FirstCatch]);
    }

    #[test]
    fn test_ash_mistake_on_fifth_bomb() {
        let mut t = tracker();
        for bombs in 1..ASH_MISTAKE_BOMBS {
            t.record_event(&GameEvent::ItemCaught {
                item: CatchItem::Bomb,
                bombs_this_run: bombs,
            });
        }
        assert!(!t.is_unlocked(AchievementId::AshMistake));

        t.record_event(&GameEvent::ItemCaught {
            item: CatchItem::Bomb,
            bombs_this_run: ASH_MISTAKE_BOMBS,
        });
        assert!(t.is_unlocked(AchievementId::AshMistake));
    }

    #[test]
    fn test_score_milestones() {
        let mut t = tracker();

        assert!(t
            .record_event(&GameEvent::ScoreReached { score: 600, lives: 2 })
            .is_empty());
        assert_eq!(
            t.record_event(&GameEvent::ScoreReached { score: 600, lives: 1 }),
            vec![AchievementId::VolcadoNeverGivesUp]
        );
        assert_eq!(
            t.record_event(&GameEvent::ScoreReached {
                score: 10_050,
                lives: 3
            }),
            vec![AchievementId::EchoAvalanche, AchievementId::MasterOfFalls]
        );
    }

    #[test]
    fn test_run_end_updates_record() {
        let mut t = tracker();
        t.record_event(&GameEvent::CatcherRunEnded { score: 420 });
        t.record_event(&GameEvent::CatcherRunEnded { score: 80 });
        assert_eq!(t.records().echo_drop, 420);
    }

    // =========================================================================
    // Volcado Quiz
    // =========================================================================

    #[test]
    fn test_correct_streak() {
        let mut t = tracker();
        assert_eq!(t.record_event(&answer(true)), vec![AchievementId::FirstAnswer]);
        for _ in 0..8 {
            t.record_event(&answer(true));
        }
        assert!(!t.is_unlocked(AchievementId::VolcadoGenius));

        // A wrong answer restarts the streak
        t.record_event(&answer(false));
        for _ in 0..9 {
            t.record_event(&answer(true));
        }
        assert!(!t.is_unlocked(AchievementId::VolcadoGenius));
        assert_eq!(
            t.record_event(&answer(true)),
            vec![AchievementId::VolcadoGenius]
        );
    }

    #[test]
    fn test_wrong_streak() {
        let mut t = tracker();
        for _ in 0..4 {
            t.record_event(&answer(false));
        }
        t.record_event(&answer(true));
        for _ in 0..4 {
            t.record_event(&answer(false));
        }
        assert!(!t.is_unlocked(AchievementId::AshesOfKnowledge));
        assert_eq!(
            t.record_event(&answer(false)),
            vec![AchievementId::AshesOfKnowledge]
        );
    }

    #[test]
    fn test_quiz_completion_rules() {
        let mut t = tracker();
        let quiz = |difficulty, mistakes| GameEvent::QuizCompleted {
            difficulty,
            mistakes,
            score: 10 - mistakes,
        };

        assert_eq!(
            t.record_event(&quiz(QuizDifficulty::Hard, 2)),
            vec![AchievementId::FieryMind]
        );
        assert_eq!(
            t.record_event(&quiz(QuizDifficulty::Easy, 0)),
            vec![AchievementId::DidntBurnOut]
        );
        assert!(t.record_event(&quiz(QuizDifficulty::Medium, 0)).is_empty());
        assert_eq!(
            t.record_event(&quiz(QuizDifficulty::Hard, 0)),
            vec![AchievementId::LavaLogic]
        );
        assert_eq!(t.records().quiz_best(QuizDifficulty::Hard), 10);
    }

    // =========================================================================
    // Reset
    // =========================================================================

    #[test]
    fn test_reset_progress() {
        let mut t = tracker();
        for mode in GameMode::ALL {
            t.record_event(&played(mode));
        }
        t.record_event(&GameEvent::CatcherRunEnded { score: 50 });
        assert_eq!(t.unlocked_count(), 2);

        t.reset_progress();

        assert_eq!(t.unlocked_count(), 0);
        assert!(t.evaluate().iter().all(|s| !s.unlocked));
        assert_eq!(t.records(), Records::load(&MemoryStore::new()));

        // Progress is re-earned from scratch
        assert_eq!(
            t.record_event(&played(GameMode::VolcadoQuiz)),
            vec![AchievementId::FirstEcho]
        );
    }

    #[test]
    fn test_evaluate_grouping() {
        let mut t = tracker();
        t.record_event(&GameEvent::PairMatched);

        let sections = t.evaluate_by_category();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[1].0, AchievementCategory::DoubleEcho);
        assert!(sections[1].1[0].unlocked);
        assert_eq!(t.count_by_category(AchievementCategory::DoubleEcho), (1, 6));
        assert_eq!(t.count_by_category(AchievementCategory::General), (0, 5));
    }
}
