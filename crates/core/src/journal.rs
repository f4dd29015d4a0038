//! Match journal: the seed plus every referee input, enough to re-run the
//! whole match offline and compare decisions byte for byte.

use serde::{Deserialize, Serialize};

use crate::snapshot::{MatchSetup, TurnSnapshot};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnJournal {
    pub format_version: u16,
    pub seed: u64,
    pub setup: MatchSetup,
    pub turns: Vec<TurnSnapshot>,
}

impl TurnJournal {
    pub fn new(seed: u64, setup: MatchSetup) -> Self {
        Self { format_version: 1, seed, setup, turns: Vec::new() }
    }

    pub fn push_turn(&mut self, snapshot: TurnSnapshot) {
        self.turns.push(snapshot);
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}
