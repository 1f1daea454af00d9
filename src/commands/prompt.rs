//! Line input and the candidate selection sub-dialogue.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    commands::display::{candidate_columns, headers, player_row, render_table},
    storage::PlayerPool,
    PlayerId,
};

/// Result of asking the user to pick one of several candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(PlayerId),
    /// Input ended before a valid choice was made.
    Cancelled,
}

/// Print `prompt` and read one trimmed line.
///
/// Returns `None` at end of input or when the read was interrupted.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            debug!("Read interrupted: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// List `candidates` numbered from 1 and block until the user picks one.
///
/// Only a plain number within range is accepted; anything else is
/// corrected in place and asked again.
pub fn choose_candidate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    pool: &PlayerPool,
    candidates: &[PlayerId],
) -> io::Result<Selection> {
    writeln!(
        output,
        "Multiple matches found. Select the number of the player to remove:"
    )?;

    let columns = candidate_columns(pool);
    let mut table_headers = vec!["#".to_string()];
    table_headers.extend(headers(&columns));
    let rows: Vec<Vec<String>> = candidates
        .iter()
        .filter_map(|id| pool.get(*id))
        .enumerate()
        .map(|(index, player)| {
            let mut row = vec![(index + 1).to_string()];
            row.extend(player_row(player, &columns));
            row
        })
        .collect();
    render_table(output, &table_headers, &rows)?;

    loop {
        let Some(answer) = read_line(input, output, "# > ")? else {
            return Ok(Selection::Cancelled);
        };

        if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
            writeln!(output, "Enter a number from the list (e.g., 1, 2, 3 ...).")?;
            continue;
        }

        match answer.parse::<usize>() {
            Ok(choice) if (1..=candidates.len()).contains(&choice) => {
                return Ok(Selection::Chosen(candidates[choice - 1]));
            }
            _ => writeln!(
                output,
                "Out of range. Please select a valid number from the list."
            )?,
        }
    }
}
