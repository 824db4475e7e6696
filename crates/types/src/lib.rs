//! Shared vocabulary for the blockfall workspace.
//!
//! Everything here is plain data: piece kinds, rotation states, the closed
//! action vocabulary the engine accepts, and the constants that pin down the
//! playfield and the speed curve. Nothing in this crate performs I/O.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - Rows above the board (negative y) are addressable only by a falling piece
//!
//! # Gravity by Level
//!
//! Levels start at 1 and advance every 10 cleared lines, capped at
//! [`MAX_LEVEL`]. Each level has a fixed gravity interval:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 650ms |
//! | 4 | 500ms |
//! | 5 | 400ms |
//! | 6 | 320ms |
//! | 7 | 250ms |
//! | 8 | 200ms |
//! | 9 | 160ms |
//! | 10 | 120ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, RotationDirection, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
//! assert_eq!(PieceKind::L.id(), 7);
//!
//! assert_eq!(Rotation::North.rotate(RotationDirection::Clockwise), Rotation::East);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Length of the look-ahead queue. Constant for the lifetime of a game.
pub const NEXT_QUEUE_LEN: usize = 5;

/// Frame pacing used by the terminal front end (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Highest level tier. The speed curve is flat beyond it.
pub const MAX_LEVEL: u32 = 10;

/// Gravity interval per level, index 0 = level 1.
pub const LEVEL_INTERVALS_MS: [u32; MAX_LEVEL as usize] =
    [1000, 800, 650, 500, 400, 320, 250, 200, 160, 120];

/// Base points for clearing N lines in one lock, multiplied by the level.
///
/// - 1 line: 40
/// - 2 lines: 100
/// - 3 lines: 300
/// - 4 lines: 1200
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per successful manual soft-drop step.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell travelled by a hard drop.
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Coins earned per cleared line.
pub const COINS_PER_LINE: u32 = 10;

/// Extra coins for a 4-line clear.
pub const TETRIS_COIN_BONUS: u32 = 20;

/// The seven tetromino piece kinds
///
/// Each kind has a stable numeric id (1..=7) used by the board grid and the
/// persisted snapshot; 0 is reserved for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Numeric cell id (1..=7).
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]. Returns `None` for 0 and anything above 7.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Direction of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub fn reverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation (state 0)
/// - **East**: Rotated 90° clockwise (state 1)
/// - **South**: Rotated 180° (state 2)
/// - **West**: Rotated 90° counter-clockwise (state 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation state as 0..=3.
    pub fn index(self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation state from any integer, taken modulo 4.
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// assert_eq!(Rotation::from_index(-1), Rotation::West);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Target state for a rotation request.
    pub fn rotate(self, direction: RotationDirection) -> Self {
        let step = match direction {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        };
        Self::from_index(self.index() as i32 + step)
    }

    pub fn rotate_cw(self) -> Self {
        self.rotate(RotationDirection::Clockwise)
    }

    pub fn rotate_ccw(self) -> Self {
        self.rotate(RotationDirection::CounterClockwise)
    }
}

/// Items sold by the shop. Purchases only touch the inventory and balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopItem {
    NeonTheme,
    RetroTheme,
    GoldenBlocks,
}

impl ShopItem {
    pub const ALL: [ShopItem; 3] = [ShopItem::NeonTheme, ShopItem::RetroTheme, ShopItem::GoldenBlocks];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "neon_theme" => Some(ShopItem::NeonTheme),
            "retro_theme" => Some(ShopItem::RetroTheme),
            "golden_blocks" => Some(ShopItem::GoldenBlocks),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShopItem::NeonTheme => "neon_theme",
            ShopItem::RetroTheme => "retro_theme",
            ShopItem::GoldenBlocks => "golden_blocks",
        }
    }
}

/// The closed set of inputs the engine accepts.
///
/// Every variant is handled by the reducer for every reachable state; an
/// action that does not apply leaves the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate with SRS wall kicks
    Rotate(RotationDirection),
    /// Drop piece one cell down (with soft drop scoring)
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Swap the active piece with the hold slot (once per piece)
    Hold,
    /// Toggle pause, or set it explicitly
    Pause(Option<bool>),
    /// Start a fresh game session, keeping high score, rewards and settings
    Reset,
    /// Begin play on a not-yet-started state
    Start,
    /// One gravity step
    Tick,
    /// Spend currency on a shop item
    BuyItem(ShopItem),
}

impl GameAction {
    /// Parse a payload-free action name (camelCase, case-insensitive).
    ///
    /// `rotate` and `rotateCw` both mean clockwise. Shop purchases carry a
    /// payload and are written `buyItem:<item>`.
    ///
    /// ```
    /// use blockfall_types::{GameAction, RotationDirection, ShopItem};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(
    ///     GameAction::from_str("rotateCcw"),
    ///     Some(GameAction::Rotate(RotationDirection::CounterClockwise))
    /// );
    /// assert_eq!(
    ///     GameAction::from_str("buyItem:neon_theme"),
    ///     Some(GameAction::BuyItem(ShopItem::NeonTheme))
    /// );
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(item) = lower.strip_prefix("buyitem:") {
            return ShopItem::from_str(item).map(GameAction::BuyItem);
        }
        match lower.as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" | "rotatecw" => Some(GameAction::Rotate(RotationDirection::Clockwise)),
            "rotateccw" => Some(GameAction::Rotate(RotationDirection::CounterClockwise)),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause(None)),
            "reset" => Some(GameAction::Reset),
            "start" => Some(GameAction::Start),
            "tick" => Some(GameAction::Tick),
            _ => None,
        }
    }

    /// Whether the action drives the falling piece.
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::Rotate(_)
                | GameAction::SoftDrop
                | GameAction::HardDrop
                | GameAction::Hold
                | GameAction::Tick
        )
    }
}

/// Payload-free actions a physical input can be bound to.
///
/// Serialized as camelCase names so key maps read naturally in a save file:
/// `{"left": "moveLeft", "space": "hardDrop"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Binding {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
    Hold,
    Pause,
    Reset,
    Start,
}

impl Binding {
    pub fn action(self) -> GameAction {
        match self {
            Binding::MoveLeft => GameAction::MoveLeft,
            Binding::MoveRight => GameAction::MoveRight,
            Binding::RotateCw => GameAction::Rotate(RotationDirection::Clockwise),
            Binding::RotateCcw => GameAction::Rotate(RotationDirection::CounterClockwise),
            Binding::SoftDrop => GameAction::SoftDrop,
            Binding::HardDrop => GameAction::HardDrop,
            Binding::Hold => GameAction::Hold,
            Binding::Pause => GameAction::Pause(None),
            Binding::Reset => GameAction::Reset,
            Binding::Start => GameAction::Start,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Numeric form of a cell (0 = empty, 1..=7 = piece id).
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ids_roundtrip_and_reserve_zero() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PieceKind::from_id(0), None);
        assert_eq!(PieceKind::from_id(8), None);
        assert_eq!(cell_id(None), 0);
        assert_eq!(cell_id(Some(PieceKind::Z)), 5);
    }

    #[test]
    fn rotation_wraps_modulo_four() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
        assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
        assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    }

    #[test]
    fn level_table_is_strictly_decreasing() {
        for pair in LEVEL_INTERVALS_MS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn bindings_map_to_payload_free_actions() {
        assert_eq!(Binding::Pause.action(), GameAction::Pause(None));
        assert_eq!(
            Binding::RotateCw.action(),
            GameAction::Rotate(RotationDirection::Clockwise)
        );
        assert!(Binding::HardDrop.action().is_gameplay());
        assert!(!Binding::Reset.action().is_gameplay());
    }

    #[test]
    fn serde_names_match_save_format() {
        assert_eq!(serde_json::to_string(&PieceKind::I).unwrap(), "\"i\"");
        assert_eq!(serde_json::to_string(&Binding::HardDrop).unwrap(), "\"hardDrop\"");
        assert_eq!(
            serde_json::to_string(&ShopItem::GoldenBlocks).unwrap(),
            "\"golden_blocks\""
        );
    }
}
