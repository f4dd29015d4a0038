//! Authoritative input model shared by the live protocol reader and the
//! journal. These structs mirror the referee streams exactly; the engine
//! never reads anything the referee did not send.

use serde::{Deserialize, Serialize};

use crate::types::{AgentId, PlayerId};

/// Static match-start data: roster stats and the cover grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSetup {
    pub my_id: PlayerId,
    pub agents: Vec<AgentSpec>,
    pub width: usize,
    pub height: usize,
    /// Raw cover levels in row-major order, one byte per cell.
    pub covers: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AgentSpec {
    pub id: AgentId,
    pub player: PlayerId,
    pub shoot_cooldown: u32,
    pub optimal_range: u32,
    pub soaking_power: u32,
    pub splash_bombs: u32,
}

/// Per-turn authoritative state. Agents absent from the list are dead.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub agents: Vec<AgentUpdate>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AgentUpdate {
    pub id: AgentId,
    pub x: i32,
    pub y: i32,
    pub cooldown: u32,
    pub splash_bombs: u32,
    pub wetness: u32,
}
