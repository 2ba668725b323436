//! Static achievement catalog.

use super::types::{AchievementCategory, AchievementDef, AchievementId};

/// All achievement definitions in display order, grouped by category.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // GENERAL
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstEcho,
        name: "First Echo",
        description: "Play your first game.",
        category: AchievementCategory::General,
        icon: "🎮",
    },
    AchievementDef {
        id: AchievementId::HotStart,
        name: "Hot Start",
        description: "Play each game mode once.",
        category: AchievementCategory::General,
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::SoundOfLava,
        name: "Sound of Lava",
        description: "Earn 10 rewards.",
        category: AchievementCategory::General,
        icon: "🌋",
    },
    AchievementDef {
        id: AchievementId::EndlessEcho,
        name: "Endless Echo",
        description: "Play 100 games in total.",
        category: AchievementCategory::General,
        icon: "♾️",
    },
    AchievementDef {
        id: AchievementId::VolcadoLegend,
        name: "Volcado Legend",
        description: "Collect all achievements.",
        category: AchievementCategory::General,
        icon: "👑",
    },
    // ═══════════════════════════════════════════════════════════════
    // DOUBLE ECHO (memory match)
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstMatch,
        name: "First Match",
        description: "Find your first matching pair.",
        category: AchievementCategory::DoubleEcho,
        icon: "🎯",
    },
    AchievementDef {
        id: AchievementId::FastEcho,
        name: "Fast Echo",
        description: "Complete a level in under 10 seconds.",
        category: AchievementCategory::DoubleEcho,
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::NoMistakes,
        name: "No Mistakes",
        description: "Finish a level without any errors.",
        category: AchievementCategory::DoubleEcho,
        icon: "✨",
    },
    AchievementDef {
        id: AchievementId::FieryFocus,
        name: "Fiery Focus",
        description: "Complete 3 levels in a row without losing.",
        category: AchievementCategory::DoubleEcho,
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::FlowOfLava,
        name: "Flow of Lava",
        description: "Play 50 levels in a row.",
        category: AchievementCategory::DoubleEcho,
        icon: "🌊",
    },
    AchievementDef {
        id: AchievementId::PairCollector,
        name: "Pair Collector",
        description: "Match 1000 pairs.",
        category: AchievementCategory::DoubleEcho,
        icon: "📚",
    },
    // ═══════════════════════════════════════════════════════════════
    // ECHO DROP (catcher)
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstCatch,
        name: "First Catch",
        description: "Catch your first item.",
        category: AchievementCategory::EchoDrop,
        icon: "🎣",
    },
    AchievementDef {
        id: AchievementId::LavaCollector,
        name: "Lava Collector",
        description: "Collect 150 items.",
        category: AchievementCategory::EchoDrop,
        icon: "💎",
    },
    AchievementDef {
        id: AchievementId::AshMistake,
        name: "Ash Mistake",
        description: "Catch 5 bombs in one game.",
        category: AchievementCategory::EchoDrop,
        icon: "💣",
    },
    AchievementDef {
        id: AchievementId::VolcadoNeverGivesUp,
        name: "Volcado Never Gives Up",
        description: "Score 500 points with one life.",
        category: AchievementCategory::EchoDrop,
        icon: "💪",
    },
    AchievementDef {
        id: AchievementId::EchoAvalanche,
        name: "Echo Avalanche",
        description: "Score 2000 points.",
        category: AchievementCategory::EchoDrop,
        icon: "🏔️",
    },
    AchievementDef {
        id: AchievementId::MasterOfFalls,
        name: "Master of Falls",
        description: "Score 10000 points.",
        category: AchievementCategory::EchoDrop,
        icon: "👑",
    },
    // ═══════════════════════════════════════════════════════════════
    // VOLCADO QUIZ
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstAnswer,
        name: "First Answer",
        description: "Answer your first question correctly.",
        category: AchievementCategory::VolcadoQuiz,
        icon: "✅",
    },
    AchievementDef {
        id: AchievementId::VolcadoGenius,
        name: "Volcado Genius",
        description: "Get 10 correct answers in a row.",
        category: AchievementCategory::VolcadoQuiz,
        icon: "🧠",
    },
    AchievementDef {
        id: AchievementId::DidntBurnOut,
        name: "Didn't Burn Out!",
        description: "Complete a quiz level without mistakes.",
        category: AchievementCategory::VolcadoQuiz,
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::AshesOfKnowledge,
        name: "Ashes of Knowledge",
        description: "Give 5 wrong answers in a row.",
        category: AchievementCategory::VolcadoQuiz,
        icon: "💨",
    },
    AchievementDef {
        id: AchievementId::FieryMind,
        name: "Fiery Mind",
        description: "Complete the \"Hard\" difficulty quiz.",
        category: AchievementCategory::VolcadoQuiz,
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::LavaLogic,
        name: "Lava Logic",
        description: "Answer all questions correctly on all difficulty levels.",
        category: AchievementCategory::VolcadoQuiz,
        icon: "🧪",
    },
];

// `get_achievement_def` indexes by discriminant; fail the build if the
// catalog drifts from `AchievementId` order.
const _: () = {
    assert!(ALL_ACHIEVEMENTS.len() == AchievementId::ALL.len());
    let mut i = 0;
    while i < ALL_ACHIEVEMENTS.len() {
        assert!(
            ALL_ACHIEVEMENTS[i].id as usize == i,
            "achievement catalog out of AchievementId order"
        );
        i += 1;
    }
};

/// Every definition, in catalog order.
pub fn all_definitions() -> &'static [AchievementDef] {
    ALL_ACHIEVEMENTS
}

/// Get the definition for a specific achievement.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    &ALL_ACHIEVEMENTS[id as usize]
}

/// Get achievements filtered by category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_id_order() {
        assert_eq!(ALL_ACHIEVEMENTS.len(), AchievementId::ALL.len());
        for (def, id) in ALL_ACHIEVEMENTS.iter().zip(AchievementId::ALL) {
            assert_eq!(def.id, id, "Catalog out of order at {:?}", id);
            assert_eq!(get_achievement_def(id).id, id);
        }
    }

    #[test]
    fn test_all_achievements_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for achievement in ALL_ACHIEVEMENTS {
            assert!(
                ids.insert(achievement.id),
                "Duplicate achievement ID: {:?}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_category_sizes() {
        let sizes: Vec<usize> = AchievementCategory::ALL
            .iter()
            .map(|c| get_achievements_by_category(*c).len())
            .collect();
        assert_eq!(sizes, vec![5, 6, 6, 6]);
    }

    #[test]
    fn test_categories_are_contiguous_in_display_order() {
        let order: Vec<AchievementCategory> = all_definitions().iter().map(|d| d.category).collect();
        let mut deduped = order.clone();
        deduped.dedup();
        assert_eq!(deduped, AchievementCategory::ALL.to_vec());
    }

    #[test]
    fn test_get_achievement_def() {
        let def = get_achievement_def(AchievementId::DidntBurnOut);
        assert_eq!(def.name, "Didn't Burn Out!");
        assert_eq!(def.category, AchievementCategory::VolcadoQuiz);
        assert_eq!(def.icon, "🔥");
    }
}
