//! Offline re-execution of a recorded match. The engine is deterministic
//! given the seed and the snapshot stream, so a replay reproduces every
//! command line and the final decision hash.

use crate::engine::Engine;
use crate::journal::TurnJournal;
use crate::types::SetupError;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    InvalidSetup(SetupError),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub turns: u64,
    /// Every protocol line the bot would have printed, in order.
    pub action_lines: Vec<String>,
    pub decision_hash: u64,
}

pub fn replay_journal(journal: &TurnJournal) -> Result<ReplayResult, ReplayError> {
    let mut engine = Engine::new(journal.seed, &journal.setup).map_err(ReplayError::InvalidSetup)?;

    let mut action_lines = Vec::new();
    for snapshot in &journal.turns {
        engine.begin_turn(snapshot);
        for command in engine.plan_turn() {
            action_lines.push(command.to_string());
        }
    }

    Ok(ReplayResult {
        turns: engine.current_turn(),
        action_lines,
        decision_hash: engine.decision_hash(),
    })
}
