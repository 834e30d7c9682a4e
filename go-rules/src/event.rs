use serde::Serialize;

use crate::Point;
use crate::ko::Ko;
use crate::stone::Stone;

/// Outcome of a successful [`Engine::attempt_move`](crate::Engine::attempt_move).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placed {
    pub point: Point,
    pub stone: Stone,
    pub captured: Vec<Point>,
    /// Whether this move opened a ko.
    pub ko: bool,
}

/// Outcome of a successful [`Engine::undo`](crate::Engine::undo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Undone {
    /// The point that was emptied.
    pub point: Point,
    /// Color of the undone stone, which is also the player to move again.
    pub stone: Stone,
    /// Opponent stones put back on the board.
    pub restored: Vec<Point>,
}

/// A state change a presentation layer can redraw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Placed(Placed),
    Undone(Undone),
    Reset,
}

impl From<Placed> for Event {
    fn from(placed: Placed) -> Self {
        Event::Placed(placed)
    }
}

impl From<Undone> for Event {
    fn from(undone: Undone) -> Self {
        Event::Undone(undone)
    }
}

/// Read-only view of the whole game for full redraws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub size: u8,
    pub board: Vec<i8>,
    pub turn: Stone,
    pub black: u32,
    pub white: u32,
    pub ko: Option<Ko>,
}
