use go_rules::{Engine, GoError, Stone};

use crate::common::{assert_counts_consistent, init_tracing, play_all};

/// Corner ko on a 9×9 board.
///
/// ```
///      c0  c1  c2
/// r0:   .   W   B
/// r1:   W   B   .
/// ```
///
/// Black then plays (0,0), taking W(0,1). Black's corner stone is left with
/// only the vacated point as a liberty.
fn corner_ko() -> Engine {
    init_tracing();
    let mut engine = Engine::new(9);
    play_all(&mut engine, &[(1, 1), (0, 1), (0, 2), (1, 0)]);

    let placed = engine.attempt_move((0, 0)).unwrap();
    assert_eq!(placed.captured, vec![(0, 1)]);
    assert!(placed.ko);
    engine
}

#[test]
fn ko_opens_on_single_stone_recapture_shape() {
    let engine = corner_ko();
    assert_eq!(engine.ko_forbidden_point(), Some((0, 1)));
    assert_eq!(engine.current_player(), Stone::White);
    assert_eq!(engine.stone_counts(), (3, 1));
}

#[test]
fn immediate_recapture_is_rejected() {
    let mut engine = corner_ko();
    let before = engine.snapshot();

    assert_eq!(engine.attempt_move((0, 1)), Err(GoError::KoViolation));
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.move_count(), 5);
}

#[test]
fn is_legal_reports_ko() {
    let engine = corner_ko();
    assert!(!engine.is_legal((0, 1)));
    assert!(engine.is_legal((5, 5)));
}

#[test]
fn recapture_allowed_after_moves_elsewhere() {
    let mut engine = corner_ko();

    engine.attempt_move((5, 5)).unwrap();
    assert_eq!(engine.ko_forbidden_point(), None);
    engine.attempt_move((6, 6)).unwrap();

    let placed = engine.attempt_move((0, 1)).unwrap();
    assert_eq!(placed.stone, Stone::White);
    assert_eq!(placed.captured, vec![(0, 0)]);
    // The retake is itself a ko for Black.
    assert!(placed.ko);
    assert_eq!(engine.ko_forbidden_point(), Some((0, 0)));
    assert_counts_consistent(&engine);
}

#[test]
fn ko_point_is_blocked_only_for_one_move() {
    let mut engine = corner_ko();
    engine.attempt_move((5, 5)).unwrap();

    // Black may now fill the ko point itself.
    engine.attempt_move((0, 1)).unwrap();
    assert_eq!(engine.ko_forbidden_point(), None);
    assert_eq!(engine.current_player(), Stone::White);
}

#[test]
fn undo_clears_ko() {
    let mut engine = corner_ko();

    let undone = engine.undo().unwrap();
    assert_eq!(undone.point, (0, 0));
    assert_eq!(undone.restored, vec![(0, 1)]);
    assert_eq!(engine.ko_forbidden_point(), None);
    assert_eq!(engine.current_player(), Stone::Black);
    assert_eq!(engine.color_at((0, 1)), Ok(Some(Stone::White)));
}

#[test]
fn undo_does_not_bring_back_an_older_ko() {
    let mut engine = corner_ko();
    engine.attempt_move((5, 5)).unwrap();
    engine.undo().unwrap();

    // White is to move again and the old ko stays cleared.
    assert_eq!(engine.current_player(), Stone::White);
    assert_eq!(engine.ko_forbidden_point(), None);
}

#[test]
fn capturing_one_stone_with_spare_liberties_is_not_ko() {
    init_tracing();
    let mut engine = Engine::new(9);
    // W(0,0) is taken by B(1,0); Black's stone keeps (2,0) and (1,1).
    play_all(&mut engine, &[(0, 1), (0, 0)]);

    let placed = engine.attempt_move((1, 0)).unwrap();
    assert_eq!(placed.captured, vec![(0, 0)]);
    assert!(!placed.ko);
    assert_eq!(engine.ko_forbidden_point(), None);
}
