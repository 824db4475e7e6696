//! Shape catalog - the seven tetrominoes in each rotation state
//!
//! Shapes use the SRS layout: four mino offsets inside a 4x4 bounding box,
//! x to the right, y downward. Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Offset of a single mino relative to the piece origin (top-left of its box)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Side length of every bounding box.
pub const BOX_SIZE: usize = 4;

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => match rotation {
            Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
            Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
            Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
            Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
        },
        // Square is identical in every state.
        PieceKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        PieceKind::T => match rotation {
            Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::S => match rotation {
            Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
            Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
            Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::Z => match rotation {
            Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
            Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
        },
        PieceKind::J => match rotation {
            Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
            Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
        },
        PieceKind::L => match rotation {
            Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
            Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
        },
    }
}

/// Rendered form of a shape: a 4x4 matrix of 0 / piece id.
pub fn shape_matrix(kind: PieceKind, rotation: Rotation) -> [[u8; BOX_SIZE]; BOX_SIZE] {
    let mut m = [[0u8; BOX_SIZE]; BOX_SIZE];
    for (dx, dy) in get_shape(kind, rotation) {
        m[dy as usize][dx as usize] = kind.id();
    }
    m
}

/// Width in columns of the spawn-orientation shape.
pub fn spawn_width(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Canonical spawn origin for a piece.
///
/// Horizontally centered: 3-wide pieces cover columns 3..=5, the I covers
/// 3..=6 and the O covers 4..=5. The I sits on row 1 of its box, so its
/// origin is one row above the board to make it appear on row 0.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let x = ((BOARD_WIDTH - spawn_width(kind)) / 2) as i8;
    match kind {
        PieceKind::I => (x, -1),
        // Minos sit in box columns 1..=2.
        PieceKind::O => (x - 1, 0),
        _ => (x, 0),
    }
}
