//! Randomised checks of board and engine invariants.
//!
//! Every test uses a fixed seed so failures are reproducible.

use igo_rules::board::{Board, Cell};
use igo_rules::engine::MoveEngine;
use igo_rules::group::{group, liberties};

const SEEDS: [u64; 4] = [1, 7, 42, 2024];

fn random_board(rng: &mut fastrand::Rng, size: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    for (x, y) in board.points() {
        let cell = match rng.u8(0..3) {
            0 => Cell::Empty,
            1 => Cell::Black,
            _ => Cell::White,
        };
        board.set(x, y, cell).unwrap();
    }
    board
}

fn random_player(rng: &mut fastrand::Rng) -> Cell {
    if rng.bool() { Cell::Black } else { Cell::White }
}

#[test]
fn test_is_inside_matches_bounds() {
    for size in 1..=19 {
        let board = Board::new(size).unwrap();
        for x in 0..size + 3 {
            for y in 0..size + 3 {
                assert_eq!(board.is_inside(x, y), x < size && y < size);
            }
        }
    }
}

#[test]
fn test_groups_are_monochrome_and_closed() {
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let board = random_board(&mut rng, 7);

        for (x, y) in board.points() {
            let color = board.get(x, y).unwrap();
            let g = group(&board, x, y);
            if color == Cell::Empty {
                assert!(g.is_empty());
                continue;
            }
            assert!(g.contains(&(x, y)), "group must contain its start point");
            for &pt in &g {
                assert_eq!(board.get(pt.0, pt.1).unwrap(), color);
                for n in board.neighbors(pt) {
                    if board.get(n.0, n.1).unwrap() == color {
                        assert!(g.contains(&n), "group not closed at {n:?} (seed {seed})");
                    }
                }
            }
        }
    }
}

#[test]
fn test_liberties_count_each_point_once() {
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let board = random_board(&mut rng, 9);

        for (x, y) in board.points() {
            let g = group(&board, x, y);
            if g.is_empty() {
                continue;
            }
            let expected = board
                .points()
                .filter(|&p| board.get(p.0, p.1).unwrap() == Cell::Empty)
                .filter(|&p| board.neighbors(p).any(|n| g.contains(&n)))
                .count();
            assert_eq!(liberties(&board, &g), expected, "seed {seed} at ({x}, {y})");
        }
    }
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut engine = MoveEngine::new(5).unwrap();

        for _ in 0..400 {
            let player = random_player(&mut rng);
            let opponent = player.opponent().unwrap();
            let before = engine.board().clone();
            let history_len = engine.history().len();

            if rng.u8(0..10) == 0 {
                match engine.apply_pass(player) {
                    Ok(()) => assert_eq!(engine.history().len(), history_len + 1),
                    Err(_) => assert_eq!(engine.history().len(), history_len),
                }
                assert_eq!(engine.board(), &before, "a pass never changes the board");
                continue;
            }

            // Occasionally aim past the edge to exercise bounds checks
            let x = rng.usize(0..6);
            let y = rng.usize(0..6);
            match engine.apply_move(player, x, y) {
                Ok(outcome) => {
                    assert_eq!(engine.board().get(x, y), Ok(player));
                    assert_eq!(
                        engine.board().stone_count(opponent),
                        before.stone_count(opponent) - outcome.captures(),
                        "captures remove exactly the reported stones (seed {seed})"
                    );
                    for &(cx, cy) in &outcome.captured {
                        assert_eq!(engine.board().get(cx, cy), Ok(Cell::Empty));
                    }
                    assert!(engine.history().contains(&engine.board().fingerprint()));
                    assert_eq!(engine.history().len(), history_len + 1);
                }
                Err(_) => {
                    assert_eq!(engine.board(), &before, "rejected move changed the board (seed {seed})");
                    assert_eq!(engine.history().len(), history_len);
                }
            }
        }
    }
}

#[test]
fn test_no_group_left_without_liberties() {
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut engine = MoveEngine::new(6).unwrap();

        for _ in 0..300 {
            let player = random_player(&mut rng);
            let _ = engine.apply_move(player, rng.usize(0..6), rng.usize(0..6));

            let board = engine.board();
            for (x, y) in board.points() {
                let g = group(board, x, y);
                if !g.is_empty() {
                    assert!(liberties(board, &g) > 0, "dead group on board (seed {seed})");
                }
            }
        }
    }
}
