//! Achievement system module.
//!
//! Tracks the 23 Volcado Echo achievements across all three mini-games.
//! Progress lives in a flat key-value store (by default
//! `~/.volcado/progress.json`) and is updated through
//! [`AchievementTracker::record_event`].

pub mod data;
pub mod events;
pub mod store;
pub mod tracker;
pub mod types;

pub use data::{all_definitions, get_achievement_def, get_achievements_by_category};
pub use events::GameEvent;
pub use store::{AchievementStore, Counter};
pub use tracker::{AchievementTracker, UnlockListener};
pub use types::{AchievementCategory, AchievementDef, AchievementId, AchievementStatus};
