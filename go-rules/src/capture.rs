//! Removal of opponent chains left without liberties by a placement.

use std::collections::VecDeque;

use crate::Point;
use crate::goban::Goban;
use crate::liberty::Visited;
use crate::stone::Stone;

/// Remove every `opponent` chain adjacent to `point` that has no liberty.
///
/// Each neighbor is considered even after an earlier chain has been taken,
/// and a chain touching `point` from several sides is only examined once.
/// Removed points are appended to `captured` in traversal order. Returns the
/// number of stones removed.
pub fn capture_stones(
    goban: &mut Goban,
    point: Point,
    opponent: Stone,
    captured: &mut Vec<Point>,
) -> usize {
    let mut checked = Visited::new(goban);
    let mut total = 0;

    for start in goban.neighbors(point) {
        if goban.stone_at(start) != Some(opponent) || checked.contains(goban, start) {
            continue;
        }

        let chain = collect_chain(goban, start, opponent, &mut checked);
        if chain_has_liberty(goban, &chain) {
            continue;
        }

        for &p in &chain {
            goban.set(p, None);
        }
        total += chain.len();
        captured.extend(chain);
    }

    total
}

/// Breadth-first walk over the `color` chain containing `start`, marking
/// members in `checked`.
fn collect_chain(goban: &Goban, start: Point, color: Stone, checked: &mut Visited) -> Vec<Point> {
    let mut chain = vec![start];
    let mut queue = VecDeque::from([start]);
    checked.insert(goban, start);

    while let Some(p) = queue.pop_front() {
        for n in goban.neighbors(p) {
            if goban.stone_at(n) == Some(color) && checked.insert(goban, n) {
                queue.push_back(n);
                chain.push(n);
            }
        }
    }

    chain
}

fn chain_has_liberty(goban: &Goban, chain: &[Point]) -> bool {
    chain
        .iter()
        .any(|&p| goban.neighbors(p).iter().any(|&n| goban.stone_at(n).is_none()))
}
