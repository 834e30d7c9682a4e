//! Suicide checking without committing the move.

use crate::Point;
use crate::goban::Goban;
use crate::liberty;
use crate::stone::Stone;

/// Whether `stone` may legally be placed on the empty point `point` as far
/// as liberties go. Ko is checked separately by the caller.
///
/// The stone is placed on the board for the duration of the check and the
/// point is emptied again before returning, whatever the outcome.
pub fn is_valid_move(goban: &mut Goban, point: Point, stone: Stone) -> bool {
    debug_assert_eq!(goban.stone_at(point), None, "validating an occupied point");

    goban.set(point, Some(stone));
    let legal = has_liberty_or_captures(goban, point, stone);
    goban.set(point, None);

    legal
}

fn has_liberty_or_captures(goban: &Goban, point: Point, stone: Stone) -> bool {
    if liberty::group_has_liberty(goban, point, stone) {
        return true;
    }

    let opponent = stone.opp();
    goban
        .neighbors(point)
        .into_iter()
        .filter(|&n| goban.stone_at(n) == Some(opponent))
        .any(|n| !liberty::group_has_liberty(goban, n, opponent))
}
