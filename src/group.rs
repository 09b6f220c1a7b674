//! Connected groups and liberty counting.
//!
//! Both operations are read-only flood fills over the board using an
//! explicit stack and a visited array, so each point is expanded at most once
//! per call regardless of board size.

use std::collections::HashSet;

use crate::board::{Board, Cell, Point};

/// A maximal set of same-colored, orthogonally connected stones.
pub type Group = HashSet<Point>;

/// Collect the group containing `(x, y)`.
///
/// Returns an empty set if the point is empty or off the board.
pub fn group(board: &Board, x: usize, y: usize) -> Group {
    let mut out = Group::new();
    let color = match board.get(x, y) {
        Ok(c) if c.is_stone() => c,
        _ => return out,
    };

    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut stack = vec![(x, y)];

    while let Some(pt) = stack.pop() {
        let i = pt.1 * size + pt.0;
        if visited[i] {
            continue;
        }
        visited[i] = true;

        if board.at(pt) == color {
            out.insert(pt);
            for n in board.neighbors(pt) {
                if !visited[n.1 * size + n.0] && board.at(n) == color {
                    stack.push(n);
                }
            }
        }
    }
    out
}

/// Count the distinct empty points adjacent to any member of `group`.
///
/// A liberty shared by several stones of the group is counted once.
pub fn liberties(board: &Board, group: &Group) -> usize {
    let mut seen = HashSet::new();
    for &pt in group {
        for n in board.neighbors(pt) {
            if board.at(n) == Cell::Empty {
                seen.insert(n);
            }
        }
    }
    seen.len()
}
