use serde::Serialize;

use crate::Point;
use crate::error::GoError;
use crate::goban::Goban;
use crate::stone::Stone;

/// A committed move and the stones it removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub point: Point,
    pub stone: Stone,
    pub captured: Vec<Point>,
}

/// LIFO log of committed moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Pop the latest record and take it back off `goban`: captured stones
    /// return as the opponent's color and the placed point is emptied.
    ///
    /// Panics if the board does not match the record, which can only happen
    /// if the board was changed behind the history's back.
    pub fn undo(&mut self, goban: &mut Goban) -> Result<MoveRecord, GoError> {
        let record = self.records.pop().ok_or(GoError::EmptyHistory)?;
        let opponent = record.stone.opp();

        for &p in &record.captured {
            assert_eq!(
                goban.stone_at(p),
                None,
                "undo would restore a capture onto an occupied point {p:?}"
            );
            goban.set(p, Some(opponent));
        }

        assert_eq!(
            goban.stone_at(record.point),
            Some(record.stone),
            "undo found the wrong stone at {:?}",
            record.point
        );
        goban.set(record.point, None);

        Ok(record)
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
