//! Shape catalog, spawn positions and SRS rotation

use blockfall::core::pieces::{shape_matrix, spawn_position};
use blockfall::core::srs::{kick_offsets, KickFamily};
use blockfall::core::{get_shape, try_rotate, Board, Tetromino};
use blockfall::types::{PieceKind, Rotation, RotationDirection};

#[test]
fn test_spawn_positions_are_centered() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::spawn(kind);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.x, 3, "{kind:?}");

        let cols: Vec<i8> = piece.cells().map(|(x, _)| x).collect();
        let rows: Vec<i8> = piece.cells().map(|(_, y)| y).collect();
        let expected = match kind {
            PieceKind::I => 3..=6,
            PieceKind::O => 4..=5,
            _ => 3..=5,
        };
        assert!(cols.iter().all(|x| expected.contains(x)), "{kind:?} {cols:?}");
        // Every spawn is visible on the top row
        assert_eq!(*rows.iter().min().unwrap(), 0, "{kind:?}");
    }
    assert_eq!(spawn_position(PieceKind::I), (3, -1));
}

#[test]
fn test_shape_matrix_uses_piece_id() {
    let m = shape_matrix(PieceKind::T, Rotation::North);
    assert_eq!(m[0], [0, 3, 0, 0]);
    assert_eq!(m[1], [3, 3, 3, 0]);
    assert_eq!(m[2], [0, 0, 0, 0]);

    let i = shape_matrix(PieceKind::I, Rotation::East);
    assert!(i.iter().all(|row| row[2] == 1));
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(get_shape(kind, r), get_shape(kind, Rotation::North));
    }
}

#[test]
fn test_unobstructed_rotation_round_trip() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Tetromino::spawn(kind);
        piece.y = 8;
        for dir in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
            let there = try_rotate(&board, &piece, dir).unwrap();
            assert_eq!(there.kick, (0, 0));
            let back = try_rotate(&board, &there.piece, dir.reverse()).unwrap();
            assert_eq!(back.kick, (0, 0));
            assert_eq!(back.piece, piece, "{kind:?} {dir:?}");
        }
    }
}

#[test]
fn test_first_legal_kick_wins() {
    let mut board = Board::new();
    let piece = Tetromino {
        kind: PieceKind::T,
        rotation: Rotation::North,
        x: 4,
        y: 10,
    };
    // Block the in-place east footprint: box column 1, row 2 -> (5, 12).
    board.set(5, 12, Some(PieceKind::Z));

    let r = try_rotate(&board, &piece, RotationDirection::Clockwise).unwrap();
    let offsets = kick_offsets(KickFamily::Jlstz, Rotation::North, Rotation::East);
    assert_eq!(r.kick, offsets[1]);
    assert_eq!(r.piece.rotation, Rotation::East);
    assert_eq!((r.piece.x, r.piece.y), (4 + offsets[1].0, 10 + offsets[1].1));
}

#[test]
fn test_rejected_rotation_leaves_piece_alone() {
    let mut board = Board::new();
    for y in 0..20 {
        board.fill_row_except(y, PieceKind::Z, &[]);
    }
    let piece = Tetromino {
        kind: PieceKind::I,
        rotation: Rotation::North,
        x: 3,
        y: 5,
    };
    for (x, y) in piece.cells() {
        board.set(x, y, None);
    }
    assert!(piece.fits(&board));
    assert!(try_rotate(&board, &piece, RotationDirection::Clockwise).is_none());
}

#[test]
fn test_kick_families() {
    assert_eq!(KickFamily::of(PieceKind::O), KickFamily::O);
    assert_eq!(KickFamily::of(PieceKind::I), KickFamily::I);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(KickFamily::of(kind), KickFamily::Jlstz);
    }
    assert_eq!(kick_offsets(KickFamily::O, Rotation::North, Rotation::East).to_vec(), vec![(0i8, 0i8)]);
    assert_eq!(kick_offsets(KickFamily::I, Rotation::North, Rotation::East).len(), 5);
}
