//! Entry point: parse CLI, load the board and run the draft session.

use std::{io, process};

use anyhow::Context;
use clap::Parser;
use draft_helper::{
    cli::{resolve_board_path, DraftHelper},
    commands::session::{farewell, DraftSession},
    storage::PlayerPool,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = DraftHelper::parse();
    let path = resolve_board_path(app.board);

    let pool = match PlayerPool::load(&path) {
        Ok(pool) => pool,
        Err(e) => {
            // A board that cannot be loaded ends the program before the loop starts
            eprintln!("Could not load draft board {}: {}", path.display(), e); // tarpaulin::skip
            return Ok(());
        }
    };

    // Ctrl-C is an implicit quit
    ctrlc::set_handler(|| {
        let _ = farewell(&mut io::stdout());
        process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    let stdin = io::stdin();
    let mut session = DraftSession::new(pool, stdin.lock(), io::stdout());
    session.run().context("draft session aborted")?;

    Ok(())
}
