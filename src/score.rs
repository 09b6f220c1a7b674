//! Area scoring.
//!
//! Each stone is one point for its color. Each connected region of empty
//! points is one point per point for a color when every stone bordering the
//! region has that color; regions bordered by both colors, or by none, are
//! neutral.

use std::cmp::Ordering;
use std::fmt;

use crate::board::{Board, Cell};

/// Final area score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// The color ahead on points, or `None` for a tie.
    pub fn leader(&self) -> Option<Cell> {
        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Cell::Black),
            Ordering::Less => Some(Cell::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black: {}  White: {}", self.black, self.white)
    }
}

/// Compute the area score of `board`.
pub fn score(board: &Board) -> Score {
    let size = board.size();
    let mut result = Score {
        black: board.stone_count(Cell::Black),
        white: board.stone_count(Cell::White),
    };

    let mut visited = vec![false; size * size];
    for start in board.points() {
        if visited[start.1 * size + start.0] || board.at(start) != Cell::Empty {
            continue;
        }

        // Flood the empty region, noting which colors border it
        let mut region = 0usize;
        let mut touches_black = false;
        let mut touches_white = false;
        let mut stack = vec![start];
        visited[start.1 * size + start.0] = true;

        while let Some(pt) = stack.pop() {
            region += 1;
            for n in board.neighbors(pt) {
                match board.at(n) {
                    Cell::Black => touches_black = true,
                    Cell::White => touches_white = true,
                    Cell::Empty => {
                        let i = n.1 * size + n.0;
                        if !visited[i] {
                            visited[i] = true;
                            stack.push(n);
                        }
                    }
                }
            }
        }

        match (touches_black, touches_white) {
            (true, false) => result.black += region,
            (false, true) => result.white += region,
            _ => {}
        }
    }
    result
}
