//! Super Rotation System resolver
//!
//! A rotation computes the shape of the target state and then tries a short,
//! ordered list of origin offsets ("kicks"). The first offset that yields a
//! legal placement wins; if none does, the rotation is rejected.
//!
//! Kick data is the standard SRS table converted to y-down coordinates.
//! Reference: https://tetris.wiki/SRS

use crate::board::Board;
use crate::collision::is_valid;
use crate::game_state::Tetromino;
use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation, RotationDirection};

/// Pieces that share a kick table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KickFamily {
    /// Square: rotates in place.
    O,
    /// Long bar: its own asymmetric table.
    I,
    /// J, L, S, T, Z.
    Jlstz,
}

impl KickFamily {
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::O => KickFamily::O,
            PieceKind::I => KickFamily::I,
            _ => KickFamily::Jlstz,
        }
    }
}

/// One row of the kick table.
#[derive(Debug, Clone, Copy)]
pub struct KickEntry {
    pub family: KickFamily,
    pub from: Rotation,
    pub to: Rotation,
    pub offsets: &'static [(i8, i8)],
}

const fn entry(
    family: KickFamily,
    from: Rotation,
    to: Rotation,
    offsets: &'static [(i8, i8)],
) -> KickEntry {
    KickEntry {
        family,
        from,
        to,
        offsets,
    }
}

/// Kick offsets keyed by (family, from, to).
pub static KICK_TABLE: [KickEntry; 16] = {
    use KickFamily::{Jlstz, I};
    use Rotation::{East as E, North as N, South as S, West as W};
    [
        entry(Jlstz, N, E, &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]),
        entry(Jlstz, E, N, &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]),
        entry(Jlstz, E, S, &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]),
        entry(Jlstz, S, E, &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]),
        entry(Jlstz, S, W, &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]),
        entry(Jlstz, W, S, &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]),
        entry(Jlstz, W, N, &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]),
        entry(Jlstz, N, W, &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]),
        entry(I, N, E, &[(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)]),
        entry(I, E, N, &[(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)]),
        entry(I, E, S, &[(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)]),
        entry(I, S, E, &[(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)]),
        entry(I, S, W, &[(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)]),
        entry(I, W, S, &[(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)]),
        entry(I, W, N, &[(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)]),
        entry(I, N, W, &[(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)]),
    ]
};

const IN_PLACE: &[(i8, i8)] = &[(0, 0)];

/// Ordered offsets to try for a transition.
///
/// The O family, and any transition missing from the table, only tries the
/// unshifted placement.
pub fn kick_offsets(family: KickFamily, from: Rotation, to: Rotation) -> &'static [(i8, i8)] {
    KICK_TABLE
        .iter()
        .find(|e| e.family == family && e.from == from && e.to == to)
        .map_or(IN_PLACE, |e| e.offsets)
}

/// Result of a successful rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotated {
    pub piece: Tetromino,
    /// Offset that was applied; (0, 0) when no kick was needed.
    pub kick: (i8, i8),
}

/// Rotate `piece` on `board`, committing to the first legal kick.
pub fn try_rotate(board: &Board, piece: &Tetromino, direction: RotationDirection) -> Option<Rotated> {
    let to = piece.rotation.rotate(direction);
    let shape = get_shape(piece.kind, to);

    kick_offsets(KickFamily::of(piece.kind), piece.rotation, to)
        .iter()
        .find(|&&(dx, dy)| {
            is_valid(board, &shape, piece.x.saturating_add(dx), piece.y.saturating_add(dy))
        })
        .map(|&(dx, dy)| Rotated {
            piece: Tetromino {
                rotation: to,
                ..piece.shifted(dx, dy)
            },
            kick: (dx, dy),
        })
}
