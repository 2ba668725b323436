//! Game-mode vocabulary shared by the event contract, the store and records.

use std::fmt;
use std::str::FromStr;

/// The three mini-games in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Memory-match game.
    DoubleEcho,
    /// Falling-item catcher.
    EchoDrop,
    /// Trivia quiz.
    VolcadoQuiz,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::DoubleEcho,
        GameMode::EchoDrop,
        GameMode::VolcadoQuiz,
    ];

    /// Name used in persisted keys (`gamePlayed_<key>`).
    pub fn key(&self) -> &'static str {
        match self {
            GameMode::DoubleEcho => "DoubleEcho",
            GameMode::EchoDrop => "EchoDrop",
            GameMode::VolcadoQuiz => "VolcadoQuiz",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::DoubleEcho => "Double Echo",
            GameMode::EchoDrop => "Echo Drop",
            GameMode::VolcadoQuiz => "Volcado Quiz",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "doubleecho" | "memory" => Ok(GameMode::DoubleEcho),
            "echodrop" | "catcher" => Ok(GameMode::EchoDrop),
            "volcadoquiz" | "quiz" => Ok(GameMode::VolcadoQuiz),
            _ => Err(format!("unknown game mode '{}'", s)),
        }
    }
}

/// Board sizes offered by Double Echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSize {
    TwoByTwo,
    TwoByThree,
    ThreeByFour,
    FourByFour,
}

impl FieldSize {
    pub const ALL: [FieldSize; 4] = [
        FieldSize::TwoByTwo,
        FieldSize::TwoByThree,
        FieldSize::ThreeByFour,
        FieldSize::FourByFour,
    ];

    pub fn rows(&self) -> u32 {
        match self {
            FieldSize::TwoByTwo | FieldSize::TwoByThree => 2,
            FieldSize::ThreeByFour => 3,
            FieldSize::FourByFour => 4,
        }
    }

    pub fn cols(&self) -> u32 {
        match self {
            FieldSize::TwoByTwo => 2,
            FieldSize::TwoByThree => 3,
            FieldSize::ThreeByFour | FieldSize::FourByFour => 4,
        }
    }

    pub fn total_cards(&self) -> u32 {
        self.rows() * self.cols()
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_cards() / 2
    }

    /// `"RxC"`, as shown on the size picker and used in record keys.
    pub fn display_name(&self) -> String {
        format!("{}x{}", self.rows(), self.cols())
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display_name())
    }
}

impl FromStr for FieldSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldSize::ALL
            .into_iter()
            .find(|size| size.display_name() == s)
            .ok_or_else(|| format!("unknown field size '{}' (expected 2x2, 2x3, 3x4 or 4x4)", s))
    }
}

/// Volcado Quiz difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuizDifficulty {
    pub const ALL: [QuizDifficulty; 3] = [
        QuizDifficulty::Easy,
        QuizDifficulty::Medium,
        QuizDifficulty::Hard,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            QuizDifficulty::Easy => "Easy",
            QuizDifficulty::Medium => "Medium",
            QuizDifficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for QuizDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for QuizDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(QuizDifficulty::Easy),
            "medium" => Ok(QuizDifficulty::Medium),
            "hard" => Ok(QuizDifficulty::Hard),
            _ => Err(format!("unknown quiz difficulty '{}'", s)),
        }
    }
}

/// Effect of an item tapped in Echo Drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchItem {
    /// Coins (1), circles (5) and the volcano (50).
    Points(u32),
    /// Restores one life, capped at three.
    Heart,
    /// Costs one life.
    Bomb,
}

impl CatchItem {
    /// Everything except bombs counts toward the lifetime collection.
    pub fn is_collectible(&self) -> bool {
        !matches!(self, CatchItem::Bomb)
    }
}

impl FromStr for CatchItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coin" => Ok(CatchItem::Points(1)),
            "circle" => Ok(CatchItem::Points(5)),
            "volcano" => Ok(CatchItem::Points(50)),
            "heart" => Ok(CatchItem::Heart),
            "bomb" => Ok(CatchItem::Bomb),
            other => other
                .parse::<u32>()
                .map(CatchItem::Points)
                .map_err(|_| format!("unknown item '{}'", s)),
        }
    }
}
