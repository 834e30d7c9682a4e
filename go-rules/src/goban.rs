use std::fmt;

use arrayvec::ArrayVec;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// The square Go board stored as a flat array, with per-color stone counts.
///
/// The counts are maintained by [`Goban::set`] itself, so every mutation
/// keeps them equal to a full recount of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    black: u32,
    white: u32,
}

impl Goban {
    /// Create an empty board of `size` x `size` points.
    pub fn with_size(size: u8) -> Self {
        assert!(size > 0, "board size must be positive");

        Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
            black: 0,
            white: 0,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Row-major cell values: `1` Black, `-1` White, `0` Empty.
    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Cell contents, or `OutOfBounds` for a point off the board.
    pub fn get(&self, point: Point) -> Result<Option<Stone>, GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }
        Ok(Stone::from_int(self.board[self.idx(point)]))
    }

    /// Like [`Goban::get`] but treats off-board points as empty.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.get(point).ok().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.black == 0 && self.white == 0
    }

    /// Stone counts as `(black, white)`.
    pub fn counts(&self) -> (u32, u32) {
        (self.black, self.white)
    }

    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    /// Count stones by scanning every cell.
    pub fn recount(&self) -> (u32, u32) {
        self.board
            .iter()
            .fold((0, 0), |(b, w), &v| match Stone::from_int(v) {
                Some(Stone::Black) => (b + 1, w),
                Some(Stone::White) => (b, w + 1),
                None => (b, w),
            })
    }

    // -- Mutation --

    /// Overwrite a cell with no rule checks. Panics off the board.
    pub fn set(&mut self, point: Point, cell: Option<Stone>) {
        assert!(self.on_board(point), "set outside the board at {point:?}");

        let i = self.idx(point);
        if let Some(old) = Stone::from_int(self.board[i]) {
            *self.counter(old) -= 1;
        }
        if let Some(new) = cell {
            *self.counter(new) += 1;
        }
        self.board[i] = cell.map_or(0, Stone::to_int);
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.board.fill(0);
        self.black = 0;
        self.white = 0;
    }

    // -- Geometry --

    /// The orthogonal neighbors on the board, always in up, down, left,
    /// right order.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    /// Number of cells, the length a visited set needs to cover.
    pub fn area(&self) -> usize {
        self.board.len()
    }

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    fn counter(&mut self, stone: Stone) -> &mut u32 {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// Build a board from an ASCII layout. 'B' = Black, 'W' = White, anything
    /// else is empty.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &[&str]) -> Goban {
        let mut goban = Goban::with_size(layout.len() as u8);
        for (row, line) in layout.iter().enumerate() {
            assert_eq!(line.len(), layout.len(), "layout must be square");
            for (col, c) in line.chars().enumerate() {
                let cell = match c {
                    'B' => Some(Stone::Black),
                    'W' => Some(Stone::White),
                    _ => None,
                };
                goban.set((row as u8, col as u8), cell);
            }
        }
        goban
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(self.size as usize) {
            for &v in row {
                let c = Stone::from_int(v).map_or('.', Stone::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
