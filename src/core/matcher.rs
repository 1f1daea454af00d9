//! Resolve a typed query to the available player(s) it refers to.
//!
//! A multi-word query is first tried as a substring of every canonical full
//! name ("rick mahom"). Anything that finds nothing there, including single
//! words such as "jones", falls back to an exact canonical last-name
//! comparison. A single word that is nobody's last name is finally tried as a
//! fragment of the full name ("mahom").

use log::debug;

use crate::{
    core::names::{letters_only, normalize},
    storage::{Player, PlayerPool},
    PlayerId,
};

/// Outcome of matching one query against the available players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Nothing available matched.
    NoMatch,
    /// Exactly one available player matched.
    Unique(PlayerId),
    /// Several players matched, in pool order.
    Ambiguous(Vec<PlayerId>),
}

impl MatchResult {
    fn from_candidates(mut candidates: Vec<PlayerId>) -> Self {
        match candidates.len() {
            0 => MatchResult::NoMatch,
            1 => MatchResult::Unique(candidates.remove(0)),
            _ => MatchResult::Ambiguous(candidates),
        }
    }
}

/// Match `query` against the available players of `pool`.
pub fn resolve(query: &str, pool: &PlayerPool) -> MatchResult {
    let query = query.trim();

    let multi_word = query.contains(char::is_whitespace);
    let needle = normalize(query);

    let mut candidates = Vec::new();
    if multi_word && query.chars().any(|c| c.is_alphabetic()) {
        candidates = collect(pool, |p| p.normalized_name.contains(needle.as_str()));
        debug!(
            "Full-name match for {:?} found {} candidate(s)",
            needle,
            candidates.len()
        );
    }

    if candidates.is_empty() {
        let surname = letters_only(query);
        if !surname.is_empty() {
            candidates = collect(pool, |p| p.last_name_token == surname);
            debug!(
                "Last-name match for {:?} found {} candidate(s)",
                surname,
                candidates.len()
            );
        }
    }

    if candidates.is_empty() && !multi_word && !needle.is_empty() {
        candidates = collect(pool, |p| p.normalized_name.contains(needle.as_str()));
        debug!(
            "Fragment match for {:?} found {} candidate(s)",
            needle,
            candidates.len()
        );
    }

    MatchResult::from_candidates(candidates)
}

fn collect(pool: &PlayerPool, predicate: impl Fn(&Player) -> bool) -> Vec<PlayerId> {
    pool.available()
        .filter(|p| predicate(p))
        .map(|p| p.id)
        .collect()
}
