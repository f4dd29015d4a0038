use core::journal::TurnJournal;
use core::replay::replay_journal;
use core::{AgentId, AgentSpec, AgentUpdate, MatchSetup, PlayerId, TurnSnapshot};

fn standard_setup() -> MatchSetup {
    let spec = |id: u32, player: u32, cooldown: u32, range: u32, soak: u32, bombs: u32| AgentSpec {
        id: AgentId(id),
        player: PlayerId(player),
        shoot_cooldown: cooldown,
        optimal_range: range,
        soaking_power: soak,
        splash_bombs: bombs,
    };
    MatchSetup {
        my_id: PlayerId(0),
        agents: vec![
            spec(1, 0, 1, 4, 16, 1),
            spec(2, 0, 5, 6, 32, 0),
            spec(3, 0, 2, 2, 8, 2),
            spec(4, 1, 1, 4, 16, 1),
            spec(5, 1, 2, 2, 8, 2),
        ],
        width: 16,
        height: 8,
        covers: {
            let mut covers = vec![0u8; 16 * 8];
            covers[3 * 16 + 5] = 1;
            covers[4 * 16 + 10] = 2;
            covers
        },
    }
}

fn scripted_journal(seed: u64) -> TurnJournal {
    let update = |id: u32, x: i32, y: i32, bombs: u32, wetness: u32| AgentUpdate {
        id: AgentId(id),
        x,
        y,
        cooldown: 0,
        splash_bombs: bombs,
        wetness,
    };
    let mut journal = TurnJournal::new(seed, standard_setup());
    for turn in 0..6i32 {
        journal.push_turn(TurnSnapshot {
            agents: vec![
                update(1, (turn).min(5), 2, 1, 0),
                update(2, 0, 4, 0, 0),
                update(3, (turn).min(6), 6, 2, 0),
                update(4, 14 - turn.min(4), 3, 1, (turn as u32) * 10),
                update(5, 15, 6, 2, 0),
            ],
        });
    }
    journal
}

#[test]
fn identical_journals_reproduce_every_line_and_the_hash() {
    let journal = scripted_journal(12345);
    let first = replay_journal(&journal).expect("replay should succeed");
    let second = replay_journal(&journal).expect("replay should succeed");

    assert_eq!(first.action_lines, second.action_lines);
    assert_eq!(first.decision_hash, second.decision_hash);
    assert_eq!(first.turns, 6);
    assert_eq!(first.action_lines.len(), 18, "three controlled agents, six turns");
}

#[test]
fn different_seeds_diverge_in_the_decision_hash() {
    let first = replay_journal(&scripted_journal(123)).expect("replay should succeed");
    let second = replay_journal(&scripted_journal(456)).expect("replay should succeed");
    // The seed itself is folded into the hash, so divergence is guaranteed
    // even when both runs happen to pick the same flavor lines.
    assert_ne!(first.decision_hash, second.decision_hash);
}

#[test]
fn journal_json_round_trip_preserves_the_replay() {
    let journal = scripted_journal(777);
    let direct = replay_journal(&journal).expect("replay should succeed");

    let json = journal.to_json_string().expect("journal should serialize");
    let reloaded = TurnJournal::from_json_str(&json).expect("journal should deserialize");
    let replayed = replay_journal(&reloaded).expect("replay should succeed");

    assert_eq!(direct, replayed);
}
