//! Interactive command handling for the draft helper
//!
//! - `display`: text tables for the console
//! - `prompt`: line reading and the disambiguation sub-dialogue
//! - `session`: the command loop and its state

pub mod display;
pub mod prompt;
pub mod session;


use std::path::PathBuf;

use crate::Position;

/// Players shown by `top` and after every removal or undo.
pub const TOP_OVERALL: usize = 3;
/// Players shown for a position.
pub const TOP_AT_POSITION: usize = 5;

pub const HELP_TEXT: &str = "\
Commands:
  <name>              -> remove player from available (last name or part/full name)
  remove <name>       -> same as above; explicitly remove by name
  QB/RB/WR/TE/K/DST   -> show top 5 available at that position
  top                 -> show top 3 overall available
  list <pos>          -> same as typing the position code (shows 5)
  save <file.csv>     -> save remaining board to CSV
  undo [n]            -> restore last removed player(s), default n=1
  help                -> show commands
  quit                -> exit";

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line
    Empty,
    /// Best available overall
    Top,
    /// Best available at a position (bare code or `list <pos>`)
    List { position: String },
    Undo { count: usize },
    /// Explicit (`remove`/`rm`) or implicit name query
    Remove { query: String },
    Save { path: PathBuf },
    Help,
    Quit,
    /// Recognized command with malformed arguments
    Invalid { usage: &'static str },
}

impl Command {
    /// Classify a raw input line. Keywords are case-insensitive; anything
    /// unrecognized is a player name to remove.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        if let Ok(position) = line.parse::<Position>() {
            return Command::List {
                position: position.code().to_string(),
            };
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest.trim())),
            None => (line, None),
        };

        match (keyword.to_lowercase().as_str(), rest) {
            ("top", None) => Command::Top,
            ("list", Some(position)) => Command::List {
                position: position.to_uppercase(),
            },
            ("list", None) => Command::Invalid {
                usage: "list <pos>",
            },
            ("undo", None) => Command::Undo { count: 1 },
            ("undo", Some(count)) if count.chars().all(|c| c.is_ascii_digit()) => {
                match count.parse::<usize>() {
                    Ok(count) => Command::Undo { count },
                    Err(_) => Command::Invalid { usage: "undo [n]" },
                }
            }
            ("undo", Some(_)) => Command::Invalid { usage: "undo [n]" },
            ("remove" | "rm", Some(query)) => Command::Remove {
                query: query.to_string(),
            },
            ("remove" | "rm", None) => Command::Invalid {
                usage: "remove <name>",
            },
            ("save", Some(path)) => Command::Save {
                path: PathBuf::from(path),
            },
            ("save", None) => Command::Invalid {
                usage: "save <file.csv>",
            },
            ("help" | "h" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            _ => Command::Remove {
                query: line.to_string(),
            },
        }
    }
}
