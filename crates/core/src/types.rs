use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire identity of an agent, assigned by the referee at match start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// Owning side of an agent, as reported by the referee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

pub fn chebyshev(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

pub fn neighbors(p: Pos) -> [Pos; 4] {
    [
        Pos { y: p.y - 1, x: p.x },
        Pos { y: p.y, x: p.x + 1 },
        Pos { y: p.y + 1, x: p.x },
        Pos { y: p.y, x: p.x - 1 },
    ]
}

/// Protection fractions for the three cover levels. Cover never stacks; the
/// best single qualifying neighbor applies.
pub const COVER_PROTECTION: [f64; 3] = [0.0, 0.5, 0.75];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cover {
    Open,
    Low,
    High,
}

impl Cover {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Cover::Open),
            1 => Some(Cover::Low),
            2 => Some(Cover::High),
            _ => None,
        }
    }

    pub fn protection(self) -> f64 {
        COVER_PROTECTION[self as usize]
    }

    pub fn is_cover(self) -> bool {
        self != Cover::Open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Heavy,
    Sniper,
    Scout,
}

/// Combat half of an agent's turn. Exactly one is emitted per agent;
/// `HunkerDown` is the defensive fallback when neither attack scores positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CombatAction {
    Shoot(AgentId),
    Throw(Pos),
    HunkerDown,
}

/// One planned turn for one controlled agent: at most one orthogonal step,
/// one combat action, and a flavor message, in protocol order.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentCommand {
    pub agent: AgentId,
    pub movement: Option<Pos>,
    pub combat: CombatAction,
    pub message: String,
}

impl fmt::Display for AgentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.agent.0)?;
        if let Some(step) = self.movement {
            write!(f, ";MOVE {} {}", step.x, step.y)?;
        }
        match self.combat {
            CombatAction::Shoot(target) => write!(f, ";SHOOT {}", target.0)?,
            CombatAction::Throw(cell) => write!(f, ";THROW {} {}", cell.x, cell.y)?,
            CombatAction::HunkerDown => write!(f, ";HUNKER_DOWN")?,
        }
        write!(f, ";MESSAGE {}", self.message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEvent {
    RoleAssigned { agent: AgentId, role: Role },
    BombZoneMarked { cell: Pos },
    AgentDropped { agent: AgentId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    EmptyGrid,
    CoverCountMismatch { expected: usize, actual: usize },
    CoverOutOfRange { value: u8 },
}
