//! Scoring module - line-clear points, drop bonuses, levels and speed curve

use crate::types::{
    COINS_PER_LINE, HARD_DROP_POINTS_PER_CELL, LEVEL_INTERVALS_MS, LINES_PER_LEVEL, LINE_SCORES,
    MAX_LEVEL, SOFT_DROP_POINTS, TETRIS_COIN_BONUS,
};

/// Rows in a tetris.
pub const TETRIS_LINES: usize = 4;

/// Points for clearing `lines` rows in one lock at `level`.
///
/// `level` is the level in force before the clear is applied. Clears of more
/// than four rows (only reachable from a prepared board) pay the tetris rate.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_SCORES[lines.min(TETRIS_LINES)].saturating_mul(level.max(1))
}

/// soft drop: +1 per step, hard drop: +2 per cell
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Level for a running line total: every 10 lines, starting at 1, capped.
pub fn level_for_lines(total_lines: u32) -> u32 {
    (total_lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Gravity interval for a level. Out-of-range levels clamp to the table ends.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let idx = level.clamp(1, MAX_LEVEL) - 1;
    LEVEL_INTERVALS_MS[idx as usize]
}

/// Coins awarded for a clear.
pub fn coins_for_clear(lines: usize) -> u32 {
    let base = COINS_PER_LINE * lines as u32;
    if lines >= TETRIS_LINES {
        base + TETRIS_COIN_BONUS
    } else {
        base
    }
}
