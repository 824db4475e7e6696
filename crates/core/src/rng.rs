//! RNG module - uniform piece generation and the look-ahead queue
//!
//! Pieces are drawn independently and uniformly from the seven kinds (no bag).
//! The generator is a small LCG so a game is fully replayable from its seed.

use crate::types::{PieceKind, NEXT_QUEUE_LEN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in [0, max). Uses the high bits, which have the longest period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform choice over the seven kinds.
pub fn random_piece(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// Fixed-length look-ahead queue.
///
/// Every dequeue is paired with exactly one enqueue, so the length never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    pieces: [PieceKind; NEXT_QUEUE_LEN],
    rng: SimpleRng,
}

impl NextQueue {
    pub fn new(seed: u32) -> Self {
        Self::from_rng(SimpleRng::new(seed))
    }

    /// Fill a fresh queue from an existing generator.
    pub fn from_rng(mut rng: SimpleRng) -> Self {
        let mut pieces = [PieceKind::I; NEXT_QUEUE_LEN];
        for slot in &mut pieces {
            *slot = random_piece(&mut rng);
        }
        Self { pieces, rng }
    }

    /// Head of the queue.
    pub fn peek(&self) -> PieceKind {
        self.pieces[0]
    }

    /// Remove the head and append one freshly generated piece.
    pub fn pop(&mut self) -> PieceKind {
        let head = self.pieces[0];
        self.pieces.rotate_left(1);
        self.pieces[NEXT_QUEUE_LEN - 1] = random_piece(&mut self.rng);
        head
    }

    pub fn as_slice(&self) -> &[PieceKind; NEXT_QUEUE_LEN] {
        &self.pieces
    }

    /// Generator after the pieces already queued.
    pub fn rng(&self) -> &SimpleRng {
        &self.rng
    }
}
