//! Command-line parsing and text rendering for the `volcado-echo` binary.

use crate::achievements::{AchievementCategory, AchievementId, AchievementTracker, GameEvent};
use crate::modes::{CatchItem, FieldSize, GameMode, QuizDifficulty};
use crate::records::Records;
use crate::storage::KeyValueStore;
use std::fmt::Write as _;
use std::time::Duration;

pub const HELP: &str = "\
Volcado Echo - achievement progress

Usage: volcado-echo [command]

Commands:
  status                       Unlocked count and per-category progress (default)
  list                         Every achievement and whether it is unlocked
  records                      Best results per game mode
  record <event> [args]        Feed one gameplay event:
      played <mode>                  double-echo | echo-drop | volcado-quiz
      pair
      cleared <size> <secs> <mistakes> <moves>
      abandoned
      caught <item> <bombs-this-run> coin | circle | volcano | heart | bomb | <points>
      score <score> <lives>
      run-ended <score>
      answer right|wrong
      quiz <difficulty> <mistakes> <score>
  unlock <achievement>         Unlock one achievement by id (e.g. fastEcho)
  reset                        Clear all progress
  --version                    Show version information
  --help                       Show this help message

Environment:
  VOLCADO_DATA_DIR             Progress directory (default ~/.volcado)
  VOLCADO_LOG                  Log filter (default warn)";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Status,
    List,
    Records,
    Record(GameEvent),
    Unlock(AchievementId),
    Reset,
    Version,
    Help,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
    let Some(first) = args.first() else {
        return Ok(Command::Status);
    };
    match first.as_str() {
        "status" => Ok(Command::Status),
        "list" => Ok(Command::List),
        "records" => Ok(Command::Records),
        "record" => parse_event(&args[1..]).map(Command::Record),
        "unlock" => {
            let key = arg(&args[1..], 0, "achievement")?;
            AchievementId::from_key(key)
                .map(Command::Unlock)
                .ok_or_else(|| CommandError::InvalidArgument(format!("achievement '{}'", key)))
        }
        "reset" => Ok(Command::Reset),
        "--version" | "-v" => Ok(Command::Version),
        "--help" | "-h" => Ok(Command::Help),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn arg<'a>(args: &'a [String], index: usize, name: &'static str) -> Result<&'a str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(name))
}

fn parse<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    name: &'static str,
) -> Result<T, CommandError> {
    let raw = arg(args, index, name)?;
    raw.parse()
        .map_err(|_| CommandError::InvalidArgument(format!("{} '{}'", name, raw)))
}

fn parse_vocab<T>(args: &[String], index: usize, name: &'static str) -> Result<T, CommandError>
where
    T: std::str::FromStr<Err = String>,
{
    arg(args, index, name)?
        .parse()
        .map_err(CommandError::InvalidArgument)
}

fn parse_event(args: &[String]) -> Result<GameEvent, CommandError> {
    let kind = arg(args, 0, "event")?;
    let event = match kind {
        "played" => GameEvent::GamePlayed {
            mode: parse_vocab::<GameMode>(args, 1, "mode")?,
        },
        "pair" => GameEvent::PairMatched,
        "cleared" => GameEvent::MemoryLevelCleared {
            size: parse_vocab::<FieldSize>(args, 1, "size")?,
            elapsed: Duration::try_from_secs_f64(parse::<f64>(args, 2, "secs")?).map_err(
                |_| CommandError::InvalidArgument(format!("secs '{}'", args[2])),
            )?,
            mistakes: parse(args, 3, "mistakes")?,
            moves: parse(args, 4, "moves")?,
        },
        "abandoned" => GameEvent::MemoryLevelAbandoned,
        "caught" => GameEvent::ItemCaught {
            item: parse_vocab::<CatchItem>(args, 1, "item")?,
            bombs_this_run: parse(args, 2, "bombs-this-run")?,
        },
        "score" => GameEvent::ScoreReached {
            score: parse(args, 1, "score")?,
            lives: parse(args, 2, "lives")?,
        },
        "run-ended" => GameEvent::CatcherRunEnded {
            score: parse(args, 1, "score")?,
        },
        "answer" => match arg(args, 1, "right|wrong")? {
            "right" | "correct" => GameEvent::QuestionAnswered { correct: true },
            "wrong" | "incorrect" => GameEvent::QuestionAnswered { correct: false },
            other => return Err(CommandError::InvalidArgument(format!("answer '{}'", other))),
        },
        "quiz" => GameEvent::QuizCompleted {
            difficulty: parse_vocab::<QuizDifficulty>(args, 1, "difficulty")?,
            mistakes: parse(args, 2, "mistakes")?,
            score: parse(args, 3, "score")?,
        },
        other => return Err(CommandError::InvalidArgument(format!("event '{}'", other))),
    };
    Ok(event)
}

pub fn render_status<S: KeyValueStore>(tracker: &AchievementTracker<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Achievements: {}/{} ({:.0}%)",
        tracker.unlocked_count(),
        tracker.total_count(),
        tracker.unlock_percentage()
    );
    for category in AchievementCategory::ALL {
        let (unlocked, total) = tracker.count_by_category(category);
        let _ = writeln!(out, "  {:<14} {}/{}", category.name(), unlocked, total);
    }
    out
}

pub fn render_list<S: KeyValueStore>(tracker: &AchievementTracker<S>) -> String {
    let mut out = String::new();
    for (category, section) in tracker.evaluate_by_category() {
        let _ = writeln!(out, "{}", category.name());
        for status in section {
            let mark = if status.unlocked { "✓" } else { " " };
            let _ = writeln!(
                out,
                "  [{}] {} {} - {}",
                mark, status.def.icon, status.def.name, status.def.description
            );
        }
    }
    out
}

pub fn render_records(records: &Records) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Double Echo (fewest moves)");
    for (size, moves) in &records.double_echo {
        let shown = moves.map_or_else(|| "-".to_string(), |m| m.to_string());
        let _ = writeln!(out, "  {:<6} {}", size, shown);
    }
    let _ = writeln!(out, "Echo Drop (best score)");
    let _ = writeln!(out, "  {}", records.echo_drop);
    let _ = writeln!(out, "Volcado Quiz (best score)");
    for (difficulty, score) in &records.quiz {
        let _ = writeln!(out, "  {:<6} {}", difficulty, score);
    }
    out
}

pub fn render_unlocks(unlocked: &[AchievementId]) -> String {
    if unlocked.is_empty() {
        return "No new achievements.\n".to_string();
    }
    let mut out = String::new();
    for id in unlocked {
        let def = crate::achievements::get_achievement_def(*id);
        let _ = writeln!(out, "Unlocked: {} {}", def.icon, def.name);
    }
    out
}
