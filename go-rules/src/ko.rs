use serde::{Deserialize, Serialize};

use crate::Point;
use crate::goban::Goban;
use crate::liberty;
use crate::stone::Stone;

/// The single point where an immediate recapture is forbidden.
///
/// Only the recapture directly following a single-stone capture is blocked;
/// longer repetition cycles are not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
}

impl Ko {
    /// Ko created by `stone` having just been played at `point` and taking
    /// `captured`.
    ///
    /// A ko exists when exactly one stone was taken and the placed group
    /// would have no liberty if that stone were still on the board. The
    /// board is probed by briefly restoring the captured stone and is left
    /// as it was found.
    pub fn detect(
        goban: &mut Goban,
        point: Point,
        stone: Stone,
        captured: &[Point],
    ) -> Option<Ko> {
        let &[vacated] = captured else {
            return None;
        };

        goban.set(vacated, Some(stone.opp()));
        let only_through_vacated = !liberty::group_has_liberty(goban, point, stone);
        goban.set(vacated, None);

        only_through_vacated.then_some(Ko { pos: vacated })
    }

    pub fn forbids(&self, point: Point) -> bool {
        self.pos == point
    }
}
