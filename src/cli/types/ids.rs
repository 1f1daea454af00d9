//! ID types for draft board rows.

use std::fmt;

/// Type-safe wrapper for a row of the player pool.
///
/// A `PlayerId` is the row's position in the pool after the load-time sort.
/// Players are never added or deleted, so an id stays valid for the whole
/// session and is what the undo history records.
///
/// # Examples
///
/// ```rust
/// use draft_helper::PlayerId;
///
/// let id = PlayerId::new(3);
/// assert_eq!(id.as_usize(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Create a new PlayerId from a row index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the underlying row index.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
