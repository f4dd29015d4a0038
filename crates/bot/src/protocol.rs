//! Referee line protocol: a static setup block at match start, then one
//! state block per turn. Every line is whitespace-separated integers.

use std::io::BufRead;

use anyhow::{Context, Result, ensure};
use engine_core::{AgentId, AgentSpec, AgentUpdate, MatchSetup, PlayerId, TurnSnapshot};

pub struct ProtocolReader<R> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }

    fn next_line(&mut self) -> Result<String> {
        self.lines
            .next()
            .context("referee stream ended mid-block")?
            .context("failed to read from the referee stream")
    }

    fn next_fields(&mut self, expected: usize, what: &str) -> Result<Vec<i64>> {
        let line = self.next_line()?;
        let fields: Vec<i64> = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().with_context(|| format!("bad {what} field: {token:?}"))
            })
            .collect::<Result<_>>()?;
        ensure!(
            fields.len() >= expected,
            "{what} line has {} fields, expected {expected}",
            fields.len()
        );
        Ok(fields)
    }

    pub fn read_setup(&mut self) -> Result<MatchSetup> {
        let my_id = self.next_fields(1, "my id")?[0];
        let agent_count = self.next_fields(1, "agent count")?[0];
        let mut agents = Vec::new();
        for _ in 0..agent_count {
            let fields = self.next_fields(6, "agent spec")?;
            agents.push(AgentSpec {
                id: AgentId(fields[0] as u32),
                player: PlayerId(fields[1] as u32),
                shoot_cooldown: fields[2] as u32,
                optimal_range: fields[3] as u32,
                soaking_power: fields[4] as u32,
                splash_bombs: fields[5] as u32,
            });
        }
        let dims = self.next_fields(2, "grid size")?;
        let (width, height) = (dims[0] as usize, dims[1] as usize);
        let mut covers = Vec::with_capacity(width * height);
        for _ in 0..height {
            // Each cell is an `x y tile` triple; the tile is the cover level.
            let row = self.next_fields(3 * width, "grid row")?;
            for x in 0..width {
                covers.push(row[3 * x + 2] as u8);
            }
        }
        Ok(MatchSetup { my_id: PlayerId(my_id as u32), agents, width, height, covers })
    }

    /// One per-turn block, or `None` once the referee closes the stream.
    pub fn read_turn(&mut self) -> Result<Option<TurnSnapshot>> {
        let Some(first) = self.lines.next() else {
            return Ok(None);
        };
        let first = first.context("failed to read from the referee stream")?;
        let agent_count: i64 =
            first.trim().parse().with_context(|| format!("bad agent count: {first:?}"))?;
        let mut agents = Vec::new();
        for _ in 0..agent_count {
            let fields = self.next_fields(6, "agent update")?;
            agents.push(AgentUpdate {
                id: AgentId(fields[0] as u32),
                x: fields[1] as i32,
                y: fields[2] as i32,
                cooldown: fields[3] as u32,
                splash_bombs: fields[4] as u32,
                wetness: fields[5] as u32,
            });
        }
        // Trailing controlled-agent count; nothing in it we do not already know.
        self.next_fields(1, "my agent count")?;
        Ok(Some(TurnSnapshot { agents }))
    }
}
