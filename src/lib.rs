//! Fantasy Draft Helper Library
//!
//! Tracks which players are still available during a live fantasy football
//! draft. A ranked draft board is loaded from CSV, drafted players are
//! crossed off by typing any recognizable part of their name, and the best
//! remaining players can be listed overall or by position at any time.
//!
//! ## Features
//!
//! - **Forgiving Board Loading**: Common export headers are recognized and
//!   non-numeric values are treated as missing
//! - **Name Matching**: Full-name fragments, bare surnames, suffixes ignored
//! - **Disambiguation**: Pick from a numbered list when a name is shared
//! - **Undo**: Restore the most recent removals
//! - **Export**: Save the remaining board back to CSV
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use draft_helper::{commands::session::DraftSession, storage::PlayerPool};
//! use std::io;
//!
//! # fn example() -> draft_helper::Result<()> {
//! let pool = PlayerPool::load("custom_ranked_draftboard.csv".as_ref())?;
//! let stdin = io::stdin();
//! let mut session = DraftSession::new(pool, stdin.lock(), io::stdout());
//! session.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the helper at your board once instead of passing it every time:
//! ```bash
//! export DRAFT_HELPER_BOARD=~/drafts/board.csv
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ids::PlayerId, position::Position};
pub use error::{DraftError, Result};
pub use storage::{Column, Player, PlayerPool, SortKey};

pub const BOARD_FILE_ENV_VAR: &str = "DRAFT_HELPER_BOARD";

/// Board file used when neither an argument nor the environment names one.
pub const DEFAULT_BOARD_FILE: &str = "custom_ranked_draftboard.csv";
