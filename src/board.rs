//! Square Go board: cell storage, bounds-checked access and fingerprints.
//!
//! Points are `(x, y)` pairs where `x` is the column and `y` the row index,
//! both zero-based. Row `y` is rank `y + 1` in vertex notation, so `D4`
//! is `(3, 3)`.

use std::fmt;

use crate::constants::{COLUMN_LABELS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, MAX_SIZE};
use crate::error::{BoardError, MoveError};

/// State of one intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The opposing color, or `None` for [`Cell::Empty`].
    pub fn opponent(self) -> Option<Cell> {
        match self {
            Cell::Black => Some(Cell::White),
            Cell::White => Some(Cell::Black),
            Cell::Empty => None,
        }
    }

    pub fn is_stone(self) -> bool {
        self != Cell::Empty
    }

    fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Black => GLYPH_BLACK,
            Cell::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::Black => "black",
            Cell::White => "white",
        };
        f.write_str(name)
    }
}

/// A point on the board as `(column, row)`.
pub type Point = (usize, usize);

/// Opaque identity of a whole-board state.
///
/// Two fingerprints are equal exactly when the grids they were taken from
/// hold the same cells. A fingerprint taken for a pass also carries the
/// passing player, so it never equals a fingerprint reached by play.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    cells: Box<[u8]>,
    pass: Option<Cell>,
}

impl Fingerprint {
    /// Mark this fingerprint as the state left by `player` passing.
    pub fn with_pass(mut self, player: Cell) -> Self {
        self.pass = Some(player);
        self
    }

    pub fn is_pass(&self) -> bool {
        self.pass.is_some()
    }
}

/// Full copy of the grid, taken before a move so it can be rolled back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    size: usize,
    cells: Vec<Cell>,
}

/// An NxN Go board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of side `size`.
    ///
    /// # Errors
    /// [`BoardError::InvalidSize`] if `size` is zero or larger than
    /// [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn is_inside(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, MoveError> {
        if !self.is_inside(x, y) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        Ok(self.cells[self.idx(x, y)])
    }

    /// Overwrite a cell. No legality checks beyond bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), MoveError> {
        if !self.is_inside(x, y) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        let i = self.idx(x, y);
        self.cells[i] = cell;
        Ok(())
    }

    /// Cell at a point already known to be on the board.
    pub(crate) fn at(&self, (x, y): Point) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub(crate) fn clear(&mut self, (x, y): Point) {
        let i = self.idx(x, y);
        self.cells[i] = Cell::Empty;
    }

    /// The up-to-four orthogonal neighbors of an on-board point.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        [
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < s).then(|| (x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < s).then(|| (x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |y| (0..s).map(move |x| (x, y)))
    }

    /// Number of cells in the given state.
    pub fn stone_count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    /// Overwrite the whole grid with a snapshot taken from this board.
    ///
    /// # Errors
    /// [`BoardError::SnapshotMismatch`] if the snapshot was taken from a board
    /// of a different size; the board is left unchanged.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), BoardError> {
        if snapshot.size != self.size {
            return Err(BoardError::SnapshotMismatch {
                expected: self.size,
                found: snapshot.size,
            });
        }
        self.cells = snapshot.cells;
        Ok(())
    }

    /// Row-major encoding of the grid, four cells per byte.
    pub fn fingerprint(&self) -> Fingerprint {
        let cells = self
            .cells
            .chunks(4)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, c)| acc | (c.code() << (2 * i)))
            })
            .collect();
        Fingerprint { cells, pass: None }
    }
}

/// Column label for a zero-based column index, if it has one.
pub(crate) fn column_label(x: usize) -> Option<char> {
    COLUMN_LABELS.get(x).map(|&c| char::from(c))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for label in (0..self.size).filter_map(column_label) {
            write!(f, "{label} ")?;
        }
        writeln!(f)?;
        for y in (0..self.size).rev() {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..self.size {
                write!(f, "{} ", self.at((x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
