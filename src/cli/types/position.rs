//! Fantasy football position codes recognized as bare commands.

use crate::error::DraftError;
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// Typing one of these codes at the prompt (in any case) shows the best
/// available players at that position. Positions on the board itself are
/// free text, so filtering compares against [`Position::code`].
///
/// # Examples
///
/// ```rust
/// use draft_helper::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::DST.to_string(), "DST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// Every position, in the order they are listed in the help text.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DST,
    ];

    /// Short code as it appears in the board's position column.
    pub fn code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DST" => Ok(Position::DST),
            _ => Err(DraftError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
