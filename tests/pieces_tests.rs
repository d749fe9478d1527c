//! Piece tests - templates, rotation and spawn placement

use blockfall::core::{Piece, Shape};
use blockfall::types::PieceKind;

fn occupancy(shape: &Shape) -> Vec<Vec<bool>> {
    (0..shape.height() as usize)
        .map(|row| (0..shape.width() as usize).map(|col| shape.get(col, row).is_some()).collect())
        .collect()
}

#[test]
fn test_four_rotations_restore_every_template() {
    for kind in PieceKind::ALL {
        let template = Shape::template(kind);
        let mut shape = template;
        for _ in 0..4 {
            shape = shape.rotated_clockwise();
        }
        assert_eq!(shape, template, "{:?} after four rotations", kind);
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = Shape::template(PieceKind::O);
    assert_eq!(o.rotated_clockwise(), o);
}

#[test]
fn test_t_rotation_points_right() {
    let t = Shape::template(PieceKind::T).rotated_clockwise();
    assert_eq!(
        occupancy(&t),
        vec![
            vec![false, true, false],
            vec![false, true, true],
            vec![false, true, false],
        ]
    );
}

#[test]
fn test_i_rotation_is_vertical() {
    let i = Shape::template(PieceKind::I).rotated_clockwise();
    let filled: Vec<_> = i.minos().iter().copied().collect();
    assert_eq!(filled, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_rotation_does_not_touch_template() {
    let before = Shape::template(PieceKind::J);
    let _ = before.rotated_clockwise();
    assert_eq!(Shape::template(PieceKind::J), before);
}

#[test]
fn test_every_template_has_four_minos() {
    for kind in PieceKind::ALL {
        assert_eq!(Shape::template(kind).minos().len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_spawn_is_centered_at_top() {
    assert_eq!(Piece::spawn(PieceKind::I, 10).x, 3);
    assert_eq!(Piece::spawn(PieceKind::O, 10).x, 4);
    assert_eq!(Piece::spawn(PieceKind::T, 10).x, 4);
    assert_eq!(Piece::spawn(PieceKind::T, 7).x, 2);
    for kind in PieceKind::ALL {
        assert_eq!(Piece::spawn(kind, 10).y, 0);
    }
}

#[test]
fn test_cells_are_offset_by_position() {
    let piece = Piece {
        x: 2,
        y: 5,
        ..Piece::spawn(PieceKind::O, 10)
    };
    let cells: Vec<_> = piece.cells().iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
}
