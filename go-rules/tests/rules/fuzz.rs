use go_rules::{Engine, GoError};

use crate::common::{assert_counts_consistent, assert_fresh, init_tracing};

const SEEDS: [u64; 4] = [1, 7, 42, 20240601];

/// Random interleaving of moves and undos. After every step the counters
/// match a recount, and any undo straight after a move restores the prior
/// position.
#[test]
fn counters_survive_random_play_and_undo() {
    init_tracing();

    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut engine = Engine::new(7);

        for _ in 0..2000 {
            if rng.u8(0..5) == 0 {
                match engine.undo() {
                    Ok(_) => {}
                    Err(e) => assert_eq!(e, GoError::EmptyHistory),
                }
            } else {
                let point = (rng.u8(0..8), rng.u8(0..8));
                let before = engine.snapshot();
                match engine.attempt_move(point) {
                    Ok(_) if before.ko.is_none() && rng.bool() => {
                        engine.undo().unwrap();
                        assert_eq!(engine.snapshot(), before, "seed {seed}");
                    }
                    Ok(_) => {}
                    Err(_) => assert_eq!(engine.snapshot(), before, "seed {seed}"),
                }
            }
            assert_counts_consistent(&engine);
        }

        while engine.undo().is_ok() {
            assert_counts_consistent(&engine);
        }
        assert_fresh(&engine);
    }
}

/// Replaying the recorded history on a new engine reaches the same board.
#[test]
fn history_replays_to_same_position() {
    init_tracing();
    let mut rng = fastrand::Rng::with_seed(99);
    let mut engine = Engine::new(9);

    for _ in 0..500 {
        let _ = engine.attempt_move((rng.u8(0..9), rng.u8(0..9)));
    }

    let moves: Vec<_> = engine.history().iter().map(|r| r.point).collect();
    let replayed = Engine::with_moves(9, &moves).unwrap();

    assert_eq!(replayed.board(), engine.board());
    assert_eq!(replayed.stone_counts(), engine.stone_counts());
    assert_eq!(replayed.ko(), engine.ko());
}
