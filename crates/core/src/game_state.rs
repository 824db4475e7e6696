//! Game state module - the top-level state machine
//!
//! [`GameState::reduce`] maps (state, action) to the next state. It consumes
//! the previous value, so a caller can never observe a half-applied
//! transition, and it is total: an action that does not apply in the current
//! state returns the state unchanged.
//!
//! Lifecycle: a fresh state has an empty board, no active piece, a full next
//! queue and is not started. `Start` spawns the first piece. A piece lives
//! until it locks; the lock spawns the next one. Game over is reached when a
//! spawn position is blocked or a piece locks mostly above the board.

use log::{debug, info};

use crate::achievements;
use crate::board::Board;
use crate::collision::{drop_distance, is_valid};
use crate::pieces::{get_shape, spawn_position, PieceShape, BOX_SIZE};
use crate::rng::NextQueue;
use crate::scoring::{
    coins_for_clear, drop_score, gravity_interval_ms, level_for_lines, line_clear_score,
    TETRIS_LINES,
};
use crate::settings::Settings;
use crate::shop;
use crate::srs;
use crate::stats::Stats;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Origin of the 4x4 box. May be negative in y while spawning.
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// A piece in rotation state 0 at its canonical spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape()
            .into_iter()
            .map(move |(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    pub fn fits(&self, board: &Board) -> bool {
        is_valid(board, &self.shape(), self.x, self.y)
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Line-clear points (drop bonuses are not included).
    pub points: u32,
    /// The piece locked mostly above the board and ended the game.
    pub lock_out: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: NextQueue,
    hold: Option<PieceKind>,
    can_hold: bool,
    game_over: bool,
    paused: bool,
    started: bool,
    stats: Stats,
    settings: Settings,
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Create a not-yet-started game with the given RNG seed
    pub fn new(seed: u32, settings: Settings) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: NextQueue::new(seed),
            hold: None,
            can_hold: true,
            game_over: false,
            paused: false,
            started: false,
            stats: Stats::default(),
            settings,
            last_lock: None,
        }
    }

    /// Replace the board. For puzzles, replays and tests.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the active piece. For puzzles, replays and tests.
    ///
    /// The origin is clamped to a band around the board so that every later
    /// move, kick and drop stays well inside `i8`.
    pub fn with_active(mut self, piece: Tetromino) -> Self {
        let box_size = BOX_SIZE as i8;
        self.active = Some(Tetromino {
            x: piece.x.clamp(-box_size, BOARD_WIDTH as i8),
            y: piece.y.clamp(-(BOARD_HEIGHT as i8), BOARD_HEIGHT as i8),
            ..piece
        });
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Seed the long-lived progress (high score, rewards) of a fresh game.
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_queue(&self) -> &[PieceKind; NEXT_QUEUE_LEN] {
        self.next.as_slice()
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    /// Started, not paused and not over: the only state in which the piece moves.
    pub fn is_live(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Gravity cadence for the current level.
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.stats.level)
    }

    /// Row the active piece would land on (ghost piece).
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let distance = drop_distance(&self.board, &active.shape(), active.x, active.y);
        Some(active.y.saturating_add(distance))
    }

    /// Apply one action and return the resulting state.
    pub fn reduce(mut self, action: GameAction) -> Self {
        self.apply(action);
        self
    }

    fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::Pause(explicit) => self.pause(explicit),
            GameAction::Start => self.start(),
            GameAction::Reset => self.reset(),
            GameAction::BuyItem(item) => {
                if self.started && !self.paused {
                    shop::buy(&mut self.stats, item);
                }
            }
            _ if action.is_gameplay() && !self.is_live() => {}
            GameAction::MoveLeft => {
                self.try_move(-1, 0);
            }
            GameAction::MoveRight => {
                self.try_move(1, 0);
            }
            GameAction::Rotate(direction) => self.rotate(direction),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::Tick => self.tick(),
        }
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.paused = false;
        info!("game started");
        if self.active.is_none() {
            self.spawn();
        }
    }

    fn pause(&mut self, explicit: Option<bool>) {
        if !self.started || self.game_over {
            return;
        }
        self.paused = explicit.unwrap_or(!self.paused);
    }

    /// Fresh board, queue and counters. High score, achievements, inventory,
    /// currency and settings carry over.
    fn reset(&mut self) {
        let stats = self.stats.carry_over();
        debug!("reset; high score {}", stats.high_score);
        *self = Self {
            board: Board::new(),
            active: None,
            next: NextQueue::from_rng(self.next.rng().clone()),
            hold: None,
            can_hold: true,
            game_over: false,
            paused: false,
            started: false,
            stats,
            settings: std::mem::take(&mut self.settings),
            last_lock: None,
        };
    }

    /// Dequeue the next piece onto the board, or end the game if its spawn
    /// position is blocked.
    fn spawn(&mut self) {
        if self.game_over {
            return;
        }
        let piece = Tetromino::spawn(self.next.peek());
        if !piece.fits(&self.board) {
            info!("game over: {} blocked at spawn", piece.kind.as_str());
            self.active = None;
            self.game_over = true;
            self.stats.record_high_score();
            return;
        }

        self.next.pop();
        self.active = Some(piece);
        self.stats.pieces_spawned = self.stats.pieces_spawned.saturating_add(1);
        debug!("spawned {}", piece.kind.as_str());
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dx, dy);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            true
        } else {
            false
        }
    }

    fn rotate(&mut self, direction: RotationDirection) {
        let Some(active) = self.active else {
            return;
        };
        if let Some(rotated) = srs::try_rotate(&self.board, &active, direction) {
            self.active = Some(rotated.piece);
        }
    }

    /// One manual step down, or a lock if the piece has landed.
    fn soft_drop(&mut self) {
        if self.try_move(0, 1) {
            self.stats.add_score(drop_score(1, false));
        } else {
            self.lock();
        }
    }

    fn hard_drop(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        let distance = drop_distance(&self.board, &active.shape(), active.x, active.y);
        self.active = Some(active.shifted(0, distance));
        self.stats.add_score(drop_score(distance as u32, true));
        self.lock();
    }

    fn tick(&mut self) {
        if self.active.is_none() {
            self.spawn();
            return;
        }
        self.stats.elapsed_ms = self
            .stats
            .elapsed_ms
            .saturating_add(self.gravity_interval_ms() as u64);
        if !self.try_move(0, 1) {
            self.lock();
        }
    }

    fn hold(&mut self) {
        if !self.settings.hold_enabled || !self.can_hold {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        match self.hold.replace(active.kind) {
            None => {
                self.active = None;
                self.spawn();
            }
            Some(held) => {
                let piece = Tetromino::spawn(held);
                if piece.fits(&self.board) {
                    self.active = Some(piece);
                } else {
                    info!("game over: held {} blocked at spawn", held.as_str());
                    self.active = None;
                    self.game_over = true;
                    self.stats.record_high_score();
                }
            }
        }
        self.can_hold = false;
    }

    /// Merge the active piece into the board, clear rows, score, and spawn
    /// the next piece.
    fn lock(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let mut hidden = 0usize;
        for (x, y) in piece.cells() {
            if y < 0 {
                hidden += 1;
            } else {
                self.board.set(x, y, Some(piece.kind));
            }
        }

        let cleared = self.board.clear_full_rows().len();
        let level_before = self.stats.level;
        let points = line_clear_score(cleared, level_before);
        if cleared > 0 {
            let stats = &mut self.stats;
            stats.lines_cleared = stats.lines_cleared.saturating_add(cleared as u32);
            stats.add_score(points);
            stats.currency = stats.currency.saturating_add(coins_for_clear(cleared));
            if cleared >= TETRIS_LINES {
                stats.tetrises += 1;
            }
            stats.level = level_for_lines(stats.lines_cleared).max(level_before);
            debug!("cleared {cleared} line(s) for {points}");
            if stats.level > level_before {
                info!("level {}", stats.level);
            }
        }

        self.stats.record_high_score();
        achievements::unlock_met(&mut self.stats);
        self.can_hold = true;

        // Lock out: most of the piece never made it onto the board.
        let lock_out = hidden * 2 > piece.shape().len();
        self.last_lock = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            lock_out,
        });

        if lock_out {
            info!("game over: {} locked above the board", piece.kind.as_str());
            self.game_over = true;
        } else {
            self.spawn();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, Settings::default())
    }
}

/// Borrowing form of [`GameState::reduce`].
pub fn reduce(state: &GameState, action: GameAction) -> GameState {
    state.clone().reduce(action)
}
