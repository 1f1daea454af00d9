//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;

use crate::{BOARD_FILE_ENV_VAR, DEFAULT_BOARD_FILE};

/// Interactive draft board: mark players as drafted and see who is left.
#[derive(Debug, Parser)]
#[clap(name = "draft-helper", about = "Live fantasy draft availability tracker")]
pub struct DraftHelper {
    /// Ranked draft board CSV (or set `DRAFT_HELPER_BOARD` env var).
    pub board: Option<PathBuf>,
}

/// Pick the board file: explicit argument, then environment, then the default name.
pub fn resolve_board_path(board: Option<PathBuf>) -> PathBuf {
    board
        .or_else(|| {
            std::env::var(BOARD_FILE_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BOARD_FILE))
}
