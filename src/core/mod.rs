//! Core draft logic
//!
//! - `names`: player name canonicalization
//! - `matcher`: resolving typed queries to available players
//! - `history`: undo stack of removals

pub mod history;
pub mod matcher;
pub mod names;

// Re-export commonly used items for convenience
pub use history::{HistoryStack, UndoOutcome};
pub use matcher::{resolve, MatchResult};
pub use names::{last_token, normalize};
