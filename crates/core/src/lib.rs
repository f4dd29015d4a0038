pub mod engine;
pub mod journal;
pub mod replay;
pub mod snapshot;
pub mod state;
pub mod types;

pub use engine::Engine;
pub use journal::TurnJournal;
pub use replay::*;
pub use snapshot::{AgentSpec, AgentUpdate, MatchSetup, TurnSnapshot};
pub use state::{Agent, Arena, Grid};
pub use types::*;
