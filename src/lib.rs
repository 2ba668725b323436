//! Volcado Echo - achievement engine for the Volcado Echo mini-game bundle.
//!
//! The three mini-games (Double Echo, Echo Drop and Volcado Quiz) report
//! gameplay through [`GameEvent`]s; an [`AchievementTracker`] turns them into
//! persistent unlocks, counters and high-score records.

pub mod achievements;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod constants;
pub mod modes;
pub mod records;
pub mod storage;

pub use achievements::{
    AchievementCategory, AchievementDef, AchievementId, AchievementStatus, AchievementTracker,
    GameEvent,
};
pub use config::Config;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
