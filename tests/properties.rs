//! Property tests for the rules engine.

use blockfall::core::{is_valid_placement, Board, GameState, Piece, Shape};
use blockfall::types::{GameAction, GameStatus, PieceKind};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn action() -> impl Strategy<Value = GameAction> {
    prop::sample::select(vec![
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ])
}

fn rotated(kind: PieceKind, turns: usize) -> Shape {
    (0..turns).fold(Shape::template(kind), |shape, _| shape.rotated_clockwise())
}

proptest! {
    #[test]
    fn four_rotations_are_identity(kind in kind(), start in 0usize..4) {
        let shape = rotated(kind, start);
        prop_assert_eq!(rotated(kind, start + 4), shape);
    }

    #[test]
    fn placement_on_empty_board_is_bounds_only(
        kind in kind(),
        turns in 0usize..4,
        x in -6i8..14,
        y in -6i8..24,
    ) {
        let board = Board::standard();
        let shape = rotated(kind, turns);
        let inside = shape
            .minos()
            .iter()
            .all(|&(dx, dy)| (0..10).contains(&(x + dx)) && y + dy < 20);
        prop_assert_eq!(is_valid_placement(&board, &shape, x, y), inside);
    }

    #[test]
    fn clear_lines_keeps_dimensions_and_partial_rows(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 8),
    ) {
        let mut board = Board::new(6, 8);
        for (y, row) in rows.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    board.set(x as i8, y as i8, Some(PieceKind::T));
                }
            }
        }
        let full = rows.iter().filter(|row| row.iter().all(|&f| f)).count();
        let partial: Vec<Vec<bool>> = rows.iter().filter(|row| !row.iter().all(|&f| f)).cloned().collect();

        prop_assert_eq!(board.clear_lines(), full);
        prop_assert_eq!((board.width(), board.height()), (6, 8));

        let after: Vec<Vec<bool>> = board
            .rows()
            .map(|row| row.iter().map(|c| c.is_some()).collect())
            .collect();
        prop_assert!(after[..full].iter().all(|row| row.iter().all(|&f| !f)));
        prop_assert_eq!(&after[full..], &partial[..]);
    }

    #[test]
    fn random_play_keeps_active_piece_valid(
        seed in any::<u32>(),
        actions in prop::collection::vec(action(), 1..400),
    ) {
        let mut game = GameState::new(seed);
        game.start();

        for action in actions {
            game.apply_action(action);
            game.advance(16);

            prop_assert_eq!(game.score() % 100, 0);
            match game.status() {
                GameStatus::Running => {
                    let piece: Piece = game.active().expect("running game has a piece");
                    prop_assert!(is_valid_placement(game.board(), &piece.shape, piece.x, piece.y));
                }
                GameStatus::GameOver => prop_assert!(game.active().is_none()),
                GameStatus::Idle => prop_assert!(false, "never returns to idle"),
            }
        }
    }
}
