use anyhow::{Context, Result};
use clap::Parser;
use engine_core::{ReplayResult, TurnJournal, replay::replay_journal};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,

    /// Print every replayed command line, not just the summary
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: TurnJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_journal(&journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    if args.verbose {
        for line in &result.action_lines {
            println!("{line}");
        }
    }
    println!("Replay complete.");
    println!("Turns: {}", result.turns);
    println!("Commands: {}", result.action_lines.len());
    println!("Decision Hash: {}", result.decision_hash);

    Ok(())
}
