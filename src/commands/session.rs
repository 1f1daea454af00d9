//! The interactive draft session: one command per input line.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::{
    commands::{
        display::show_top,
        prompt::{choose_candidate, read_line, Selection},
        Command, HELP_TEXT, TOP_AT_POSITION, TOP_OVERALL,
    },
    core::{resolve, HistoryStack, MatchResult, UndoOutcome},
    storage::PlayerPool,
    PlayerId, Result,
};

/// Print the goodbye shown when input ends or the user interrupts the session.
pub fn farewell<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nBye!")?;
    output.flush()
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a draft session owns: the pool, the undo history and the
/// console it talks to.
pub struct DraftSession<R, W> {
    pool: PlayerPool,
    history: HistoryStack,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> DraftSession<R, W> {
    pub fn new(pool: PlayerPool, input: R, output: W) -> Self {
        Self {
            pool,
            history: HistoryStack::new(),
            input,
            output,
        }
    }

    pub fn pool(&self) -> &PlayerPool {
        &self.pool
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the welcome banner, then process commands until `quit` or end
    /// of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Loaded players: {}", self.pool.len())?;
        writeln!(self.output, "{}\n", HELP_TEXT)?;
        show_top(&mut self.output, &self.pool, TOP_OVERALL, None)?;

        loop {
            let Some(line) = read_line(&mut self.input, &mut self.output, "> ")? else {
                farewell(&mut self.output)?;
                return Ok(());
            };

            if self.execute(Command::parse(&line))? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Carry out one command.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("Executing {:?}", command);
        match command {
            Command::Empty => {}
            Command::Top => show_top(&mut self.output, &self.pool, TOP_OVERALL, None)?,
            Command::List { position } => show_top(
                &mut self.output,
                &self.pool,
                TOP_AT_POSITION,
                Some(position.as_str()),
            )?,
            Command::Undo { count } => {
                self.undo(count)?;
                show_top(&mut self.output, &self.pool, TOP_OVERALL, None)?;
            }
            Command::Remove { query } => {
                self.remove(&query)?;
                show_top(&mut self.output, &self.pool, TOP_OVERALL, None)?;
            }
            Command::Save { path } => match self.pool.save(&path) {
                Ok(()) => writeln!(self.output, "Saved remaining board to {}", path.display())?,
                Err(e) => {
                    warn!("Saving to {} failed: {}", path.display(), e);
                    writeln!(self.output, "Failed to save {}: {}", path.display(), e)?;
                }
            },
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Quit => {
                writeln!(self.output, "Bye!")?;
                return Ok(Flow::Exit);
            }
            Command::Invalid { usage } => writeln!(self.output, "Usage: {}", usage)?,
        }
        Ok(Flow::Continue)
    }

    /// Resolve `query` and mark the player drafted. Returns the removed
    /// player, if any.
    pub fn remove(&mut self, query: &str) -> Result<Option<PlayerId>> {
        let id = match resolve(query, &self.pool) {
            MatchResult::NoMatch => {
                writeln!(
                    self.output,
                    "No available player matched '{}'. Try typing more of the name.",
                    query
                )?;
                return Ok(None);
            }
            MatchResult::Unique(id) => id,
            MatchResult::Ambiguous(candidates) => {
                match choose_candidate(&mut self.input, &mut self.output, &self.pool, &candidates)? {
                    Selection::Chosen(id) => id,
                    Selection::Cancelled => {
                        writeln!(self.output, "\nSelection cancelled.")?;
                        return Ok(None);
                    }
                }
            }
        };

        if !self.pool.mark_drafted(id) {
            return Ok(None);
        }
        self.history.push(id);
        if let Some(player) = self.pool.get(id) {
            writeln!(self.output, "Removed from available: {}", player.summary())?;
        }
        Ok(Some(id))
    }

    /// Restore up to `count` of the most recent removals.
    pub fn undo(&mut self, count: usize) -> Result<UndoOutcome> {
        let outcome = self.history.undo(count, &mut self.pool);
        match &outcome {
            UndoOutcome::Empty => writeln!(self.output, "Nothing to undo.")?,
            UndoOutcome::Popped { restored, .. } => {
                for id in restored {
                    if let Some(player) = self.pool.get(*id) {
                        writeln!(self.output, "Restored: {}", player.summary())?;
                    }
                }
            }
        }
        Ok(outcome)
    }
}
