use crate::Point;
use crate::capture;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::event::{Placed, Snapshot, Undone};
use crate::goban::Goban;
use crate::history::{History, MoveRecord};
use crate::ko::Ko;
use crate::stone::Stone;
use crate::validate;

/// A game in progress: board, move history, ko point and the player to move.
///
/// Every operation either applies completely or returns an error with the
/// state unchanged. There is no terminal state; play continues until the
/// owner stops calling.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    goban: Goban,
    history: History,
    ko: Option<Ko>,
    turn: Stone,
}

impl Engine {
    pub fn new(size: u8) -> Self {
        Self::with_config(GameConfig::new(size))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Engine {
            config,
            goban: Goban::with_size(config.size),
            history: History::new(),
            ko: None,
            turn: Stone::Black,
        }
    }

    /// Replay `moves` from the empty board, Black first. Stops at the first
    /// rejected move.
    pub fn with_moves(size: u8, moves: &[Point]) -> Result<Self, GoError> {
        let mut engine = Self::new(size);
        for &point in moves {
            engine.attempt_move(point)?;
        }
        Ok(engine)
    }

    // -- Accessors --

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    /// Cell contents at `point`.
    pub fn color_at(&self, point: Point) -> Result<Option<Stone>, GoError> {
        self.goban.get(point)
    }

    pub fn current_player(&self) -> Stone {
        self.turn
    }

    /// Stones on the board as `(black, white)`.
    pub fn stone_counts(&self) -> (u32, u32) {
        self.goban.counts()
    }

    pub fn ko(&self) -> Option<Ko> {
        self.ko
    }

    pub fn ko_forbidden_point(&self) -> Option<Point> {
        self.ko.map(|ko| ko.pos)
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.history.records()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        let (black, white) = self.goban.counts();
        Snapshot {
            size: self.goban.size(),
            board: self.goban.board().to_vec(),
            turn: self.turn,
            black,
            white,
            ko: self.ko,
        }
    }

    // -- Game actions --

    /// Play the current player's stone at `point`.
    pub fn attempt_move(&mut self, point: Point) -> Result<Placed, GoError> {
        let stone = self.turn;
        if let Err(e) = self.check_move(point, stone) {
            tracing::trace!("{stone} at {point:?} rejected: {e}");
            return Err(e);
        }

        self.goban.set(point, Some(stone));
        let mut captured = Vec::new();
        capture::capture_stones(&mut self.goban, point, stone.opp(), &mut captured);

        self.ko = Ko::detect(&mut self.goban, point, stone, &captured);
        if let Some(ko) = self.ko {
            tracing::debug!("ko at {:?}", ko.pos);
        }

        self.history.push(MoveRecord {
            point,
            stone,
            captured: captured.clone(),
        });
        self.turn = stone.opp();
        self.check_counts();

        tracing::debug!(
            "{stone} played {point:?}, captured {}, move {}",
            captured.len(),
            self.history.len()
        );

        Ok(Placed {
            point,
            stone,
            captured,
            ko: self.ko.is_some(),
        })
    }

    /// Take back the latest move. The player who made it is to move again.
    pub fn undo(&mut self) -> Result<Undone, GoError> {
        let record = self.history.undo(&mut self.goban)?;
        self.ko = None;
        self.turn = record.stone;
        self.check_counts();

        tracing::debug!(
            "undid {} at {:?}, restored {}",
            record.stone,
            record.point,
            record.captured.len()
        );

        Ok(Undone {
            point: record.point,
            stone: record.stone,
            restored: record.captured,
        })
    }

    /// Start over on an empty board with Black to move.
    pub fn reset(&mut self) {
        self.goban.clear();
        self.history.clear();
        self.ko = None;
        self.turn = Stone::Black;
        tracing::debug!("game reset");
    }

    /// Whether the current player could play at `point` right now.
    pub fn is_legal(&self, point: Point) -> bool {
        let mut probe = self.goban.clone();
        Self::check_on(&mut probe, self.ko, point, self.turn).is_ok()
    }

    // -- Internal helpers --

    fn check_move(&mut self, point: Point, stone: Stone) -> Result<(), GoError> {
        Self::check_on(&mut self.goban, self.ko, point, stone)
    }

    /// Occupancy, then ko, then suicide. Leaves `goban` as it found it.
    fn check_on(
        goban: &mut Goban,
        ko: Option<Ko>,
        point: Point,
        stone: Stone,
    ) -> Result<(), GoError> {
        if goban.get(point)?.is_some() {
            return Err(GoError::OccupiedCell);
        }
        if ko.is_some_and(|ko| ko.forbids(point)) {
            return Err(GoError::KoViolation);
        }
        if !validate::is_valid_move(goban, point, stone) {
            return Err(GoError::SuicideMove);
        }
        Ok(())
    }

    fn check_counts(&self) {
        debug_assert_eq!(
            self.goban.counts(),
            self.goban.recount(),
            "stone counters out of sync with the board:\n{}",
            self.goban
        );
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
