//! Liberty testing by iterative flood fill.

use crate::Point;
use crate::goban::Goban;
use crate::stone::Stone;

/// Per-query visited marks covering the whole board.
///
/// One query must start from a cleared set. The buffer can be reused across
/// queries by calling [`Visited::clear`] in between.
#[derive(Debug, Clone)]
pub struct Visited {
    marks: Vec<bool>,
}

impl Visited {
    pub fn new(goban: &Goban) -> Self {
        Visited {
            marks: vec![false; goban.area()],
        }
    }

    pub fn clear(&mut self) {
        self.marks.fill(false);
    }

    pub fn contains(&self, goban: &Goban, point: Point) -> bool {
        self.marks[goban.idx(point)]
    }

    /// Mark `point`, returning `false` if it was already marked.
    pub fn insert(&mut self, goban: &Goban, point: Point) -> bool {
        let i = goban.idx(point);
        !std::mem::replace(&mut self.marks[i], true)
    }
}

/// Whether the `color` group reachable from `point` touches an empty cell.
///
/// Every cell the fill steps on is marked in `visited`, empty and foreign
/// cells included. Returns `false` immediately when `point` is off the board
/// or already visited. An empty `point` counts as a liberty on its own.
pub fn has_liberty(goban: &Goban, point: Point, color: Stone, visited: &mut Visited) -> bool {
    if !goban.on_board(point) || visited.contains(goban, point) {
        return false;
    }

    let mut stack = vec![point];
    while let Some(p) = stack.pop() {
        if !visited.insert(goban, p) {
            continue;
        }
        match goban.stone_at(p) {
            None => return true,
            Some(s) if s != color => continue,
            Some(_) => {}
        }
        for n in goban.neighbors(p) {
            if !visited.contains(goban, n) {
                stack.push(n);
            }
        }
    }

    false
}

/// [`has_liberty`] with a fresh visited set.
pub fn group_has_liberty(goban: &Goban, point: Point, color: Stone) -> bool {
    let mut visited = Visited::new(goban);
    has_liberty(goban, point, color, &mut visited)
}
