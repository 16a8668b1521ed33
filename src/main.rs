use anyhow::Result;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod game;
mod output;
mod storage;

use crate::commands::Command;
use crate::config::Config;
use crate::game::quiz::definition::{QuestionBank, QuestionSource};
use crate::game::Game;
use crate::output::terminal::TerminalPresenter;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // stdout belongs to the quiz itself
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let store: Box<dyn KeyValueStore> = if config.ephemeral {
        info!("Saved and missed questions will not outlive this session");
        Box::new(MemoryStore::new())
    } else {
        let dir = config.storage_dir()?;
        info!("Persisting saved and missed questions in {}", dir.display());
        Box::new(FileStore::new(dir))
    };

    let presenter = TerminalPresenter::new(io::stdout());
    let mut game = Game::new(store, config.settings.clone(), presenter);

    let source = QuestionSource::parse(&config.questions);
    game.on_load(QuestionBank::load(&source).await);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match commands::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => game.dispatch(command),
            Err(_) => game.report_unknown(&line),
        }
    }

    Ok(())
}
