//! Plain-text tables for the console.

use std::io::{self, Write};

use crate::storage::{pool::cell, Column, Player, PlayerPool};

/// Shown for missing values.
const MISSING: &str = "-";

/// Write `rows` under `headers` with every column padded to its widest cell.
pub fn render_table<W: Write>(out: &mut W, headers: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    write_row(out, headers, &widths)?;
    for row in rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

/// Columns shown in ranking views: identity, the sort metric, then draft
/// position data, limited to what the board has.
pub fn ranking_columns(pool: &PlayerPool) -> Vec<Column> {
    [
        Column::FullName,
        Column::Position,
        Column::Team,
        pool.sort_key().column(),
        Column::Adp,
        Column::PositionalRank,
        Column::OverallRank,
    ]
    .into_iter()
    .filter(|c| pool.has_column(*c))
    .collect()
}

/// Columns shown when asking the user to pick between candidates.
pub fn candidate_columns(pool: &PlayerPool) -> Vec<Column> {
    [
        Column::FullName,
        Column::Position,
        Column::Team,
        Column::AdjustedPoints,
        Column::ProjectedPoints,
        Column::Adp,
        Column::PositionalRank,
    ]
    .into_iter()
    .filter(|c| pool.has_column(*c))
    .collect()
}

/// One table row for `player`.
pub fn player_row(player: &Player, columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .map(|c| cell(player, *c).unwrap_or_else(|| MISSING.to_string()))
        .collect()
}

pub fn headers(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.header().to_string()).collect()
}

/// Print the best `n` available players, overall or at `position`.
pub fn show_top<W: Write>(
    out: &mut W,
    pool: &PlayerPool,
    n: usize,
    position: Option<&str>,
) -> io::Result<()> {
    let top = pool.top_available(n, position);
    if top.is_empty() {
        return match position {
            Some(pos) => writeln!(out, "No players available at {}", pos),
            None => writeln!(out, "No players available"),
        };
    }

    match position {
        Some(pos) => writeln!(out, "\nTop {} available ({}):", n, pos)?,
        None => writeln!(out, "\nTop {} available:", n)?,
    }

    let columns = ranking_columns(pool);
    let rows: Vec<Vec<String>> = top.iter().map(|p| player_row(p, &columns)).collect();
    render_table(out, &headers(&columns), &rows)
}
