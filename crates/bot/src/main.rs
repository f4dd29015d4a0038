//! Stdin/stdout referee adapter: parse the setup, then one snapshot per
//! turn, and print one command line per controlled agent. With `--journal`
//! the whole match is recorded for offline replay.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use engine_core::{Engine, TurnJournal};

mod protocol;

use protocol::ProtocolReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the engine's pseudorandom source
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Record the match to a JSON journal file for offline replay
    #[arg(short, long)]
    journal: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut reader = ProtocolReader::new(io::stdin().lock());

    let setup = reader.read_setup()?;
    let mut engine = Engine::new(args.seed, &setup)
        .map_err(|err| anyhow!("referee sent an invalid setup: {err:?}"))?;
    let mut journal = args.journal.is_some().then(|| TurnJournal::new(args.seed, setup));

    let stdout = io::stdout();
    while let Some(snapshot) = reader.read_turn()? {
        if let Some(journal) = journal.as_mut() {
            journal.push_turn(snapshot.clone());
        }
        engine.begin_turn(&snapshot);

        let mut out = stdout.lock();
        for command in engine.plan_turn() {
            writeln!(out, "{command}")?;
        }
        out.flush()?;
    }

    if let (Some(path), Some(journal)) = (args.journal, journal) {
        write_journal(&path, &journal)?;
    }
    Ok(())
}

fn write_journal(path: &Path, journal: &TurnJournal) -> Result<()> {
    let json = journal.to_json_string().context("failed to serialize the journal")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write the journal to {}", path.display()))
}
