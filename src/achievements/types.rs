//! Achievement system types and data structures.

/// Achievement categories for grouping in the achievements screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    General,
    DoubleEcho,
    EchoDrop,
    VolcadoQuiz,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::General,
        AchievementCategory::DoubleEcho,
        AchievementCategory::EchoDrop,
        AchievementCategory::VolcadoQuiz,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::General => "General",
            AchievementCategory::DoubleEcho => "Double Echo",
            AchievementCategory::EchoDrop => "Echo Drop",
            AchievementCategory::VolcadoQuiz => "Volcado Quiz",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // General
    FirstEcho,
    HotStart,
    SoundOfLava,   // 10 unlocked
    EndlessEcho,   // 100 games
    VolcadoLegend, // everything else

    // Double Echo
    FirstMatch,
    FastEcho,
    NoMistakes,
    FieryFocus,   // 3 levels in a row
    FlowOfLava,   // 50 levels in a row
    PairCollector, // 1,000 pairs

    // Echo Drop
    FirstCatch,
    LavaCollector, // 150 items
    AshMistake,    // 5 bombs in a run
    VolcadoNeverGivesUp,
    EchoAvalanche, // 2,000 points
    MasterOfFalls, // 10,000 points

    // Volcado Quiz
    FirstAnswer,
    VolcadoGenius, // 10 correct in a row
    DidntBurnOut,
    AshesOfKnowledge, // 5 wrong in a row
    FieryMind,
    LavaLogic,
}

impl AchievementId {
    /// Every id, in catalog order.
    pub const ALL: [AchievementId; 23] = [
        AchievementId::FirstEcho,
        AchievementId::HotStart,
        AchievementId::SoundOfLava,
        AchievementId::EndlessEcho,
        AchievementId::VolcadoLegend,
        AchievementId::FirstMatch,
        AchievementId::FastEcho,
        AchievementId::NoMistakes,
        AchievementId::FieryFocus,
        AchievementId::FlowOfLava,
        AchievementId::PairCollector,
        AchievementId::FirstCatch,
        AchievementId::LavaCollector,
        AchievementId::AshMistake,
        AchievementId::VolcadoNeverGivesUp,
        AchievementId::EchoAvalanche,
        AchievementId::MasterOfFalls,
        AchievementId::FirstAnswer,
        AchievementId::VolcadoGenius,
        AchievementId::DidntBurnOut,
        AchievementId::AshesOfKnowledge,
        AchievementId::FieryMind,
        AchievementId::LavaLogic,
    ];

    /// Stable string id, used in persisted keys (`achievement_<key>`).
    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::FirstEcho => "firstEcho",
            AchievementId::HotStart => "hotStart",
            AchievementId::SoundOfLava => "soundOfLava",
            AchievementId::EndlessEcho => "endlessEcho",
            AchievementId::VolcadoLegend => "volcadoLegend",
            AchievementId::FirstMatch => "firstMatch",
            AchievementId::FastEcho => "fastEcho",
            AchievementId::NoMistakes => "noMistakes",
            AchievementId::FieryFocus => "fieryFocus",
            AchievementId::FlowOfLava => "flowOfLava",
            AchievementId::PairCollector => "pairCollector",
            AchievementId::FirstCatch => "firstCatch",
            AchievementId::LavaCollector => "lavaCollector",
            AchievementId::AshMistake => "ashMistake",
            AchievementId::VolcadoNeverGivesUp => "volcadoNeverGivesUp",
            AchievementId::EchoAvalanche => "echoAvalanche",
            AchievementId::MasterOfFalls => "masterOfFalls",
            AchievementId::FirstAnswer => "firstAnswer",
            AchievementId::VolcadoGenius => "volcadoGenius",
            AchievementId::DidntBurnOut => "didntBurnOut",
            AchievementId::AshesOfKnowledge => "ashesOfKnowledge",
            AchievementId::FieryMind => "fieryMind",
            AchievementId::LavaLogic => "lavaLogic",
        }
    }

    /// Inverse of [`AchievementId::key`].
    pub fn from_key(key: &str) -> Option<AchievementId> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub icon: &'static str,
}

/// An achievement definition paired with its current unlock state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStatus {
    pub def: &'static AchievementDef,
    pub unlocked: bool,
}
