//! Flavor chatter. Each agent keeps repeating one phrase from its role's
//! bank until the cursor is invalidated (role change, bank change) or a
//! one-in-ten reroll picks a fresh line.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::state::Agent;

pub(crate) fn flavor_message(
    rng: &mut ChaCha8Rng,
    name: &str,
    phrases: &[&str],
    agent: &mut Agent,
) -> String {
    let reroll = match agent.phrase_cursor {
        None => true,
        Some(cursor) => cursor >= phrases.len() || rng.next_u64() % 10 == 0,
    };
    if reroll {
        agent.phrase_cursor = Some(rng.next_u64() as usize % phrases.len());
    }
    let cursor = agent.phrase_cursor.expect("cursor was just validated");
    format!("{name}: {}", phrases[cursor])
}
