// General achievement thresholds
pub const SOUND_OF_LAVA_UNLOCKS: usize = 10;
pub const ENDLESS_ECHO_GAMES: u64 = 100;

// Double Echo thresholds
pub const FAST_ECHO_SECONDS: u64 = 10;
pub const FIERY_FOCUS_STREAK: u64 = 3;
pub const FLOW_OF_LAVA_STREAK: u64 = 50;
pub const PAIR_COLLECTOR_PAIRS: u64 = 1000;

// Echo Drop thresholds
pub const LAVA_COLLECTOR_ITEMS: u64 = 150;
pub const ASH_MISTAKE_BOMBS: u32 = 5;
pub const NEVER_GIVES_UP_SCORE: u32 = 500;
pub const NEVER_GIVES_UP_LIVES: u32 = 1;
pub const ECHO_AVALANCHE_SCORE: u32 = 2000;
pub const MASTER_OF_FALLS_SCORE: u32 = 10000;

// Volcado Quiz thresholds
pub const VOLCADO_GENIUS_STREAK: u64 = 10;
pub const ASHES_OF_KNOWLEDGE_STREAK: u64 = 5;

// Storage
pub const DEFAULT_DATA_DIR_NAME: &str = ".volcado";
pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";
