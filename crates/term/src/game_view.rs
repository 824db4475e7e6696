//! GameView: draws a [`GameState`] into a terminal framebuffer.
//!
//! Pure (no I/O). Honors the player's settings: ghost piece on or off, hold
//! panel hidden when hold is disabled, number of next pieces shown, theme.

use crate::core::{GameState, Theme, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, ShopItem, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub well: Rgb,
    pub grid: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    /// Indexed by `PieceKind::id() - 1`.
    pub pieces: [Rgb; 7],
}

const CLASSIC: Palette = Palette {
    well: Rgb::new(30, 30, 40),
    grid: Rgb::new(90, 90, 100),
    border: Rgb::new(200, 200, 200),
    text: Rgb::new(220, 220, 220),
    pieces: [
        Rgb::new(80, 220, 220),
        Rgb::new(240, 220, 80),
        Rgb::new(200, 120, 220),
        Rgb::new(100, 220, 120),
        Rgb::new(220, 80, 80),
        Rgb::new(80, 120, 220),
        Rgb::new(255, 165, 0),
    ],
};

const NEON: Palette = Palette {
    well: Rgb::new(10, 0, 20),
    grid: Rgb::new(60, 20, 90),
    border: Rgb::new(255, 0, 200),
    text: Rgb::new(0, 255, 240),
    pieces: [
        Rgb::new(0, 255, 255),
        Rgb::new(255, 255, 0),
        Rgb::new(255, 0, 255),
        Rgb::new(57, 255, 20),
        Rgb::new(255, 20, 80),
        Rgb::new(40, 120, 255),
        Rgb::new(255, 140, 0),
    ],
};

const RETRO: Palette = Palette {
    well: Rgb::new(15, 25, 15),
    grid: Rgb::new(40, 70, 40),
    border: Rgb::new(140, 200, 120),
    text: Rgb::new(160, 220, 140),
    pieces: [
        Rgb::new(150, 230, 130),
        Rgb::new(190, 220, 110),
        Rgb::new(120, 200, 110),
        Rgb::new(170, 240, 150),
        Rgb::new(100, 170, 90),
        Rgb::new(140, 210, 120),
        Rgb::new(200, 240, 170),
    ],
};

const GOLD: Rgb = Rgb::new(255, 200, 40);

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Classic => &CLASSIC,
            Theme::Neon => &NEON,
            Theme::Retro => &RETRO,
        }
    }

    pub fn piece(&self, kind: PieceKind) -> Rgb {
        self.pieces[(kind.id() - 1) as usize]
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left corner of the well's border and the palette in use.
struct Frame<'a> {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    palette: &'a Palette,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let settings = state.settings();
        let palette = Palette::for_theme(settings.theme);
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
            palette,
        };

        let well = CellStyle::new(palette.grid, palette.well).dim();
        fb.fill_rect(frame.x + 1, frame.y + 1, w - 2, h - 2, ' ', well);
        self.draw_border(fb, &frame);

        // Locked cells. Golden Blocks recolors everything already on the stack.
        let golden = state.stats().owned(ShopItem::GoldenBlocks) > 0;
        for (y, row) in state.board().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => {
                        let fg = if golden { GOLD } else { palette.piece(*kind) };
                        let style = CellStyle::new(fg, palette.well).bold();
                        self.fill_cell(fb, &frame, x, y, '█', style);
                    }
                    None => self.fill_cell(fb, &frame, x, y, '·', well),
                }
            }
        }

        if let Some(active) = state.active() {
            if settings.ghost_piece {
                if let Some(ghost_y) = state.ghost_y() {
                    let ghost = Tetromino { y: ghost_y, ..active };
                    let style = CellStyle::new(palette.piece(active.kind), palette.well).dim();
                    self.draw_piece(fb, &frame, &ghost, '░', style);
                }
            }
            let style = CellStyle::new(palette.piece(active.kind), palette.well).bold();
            self.draw_piece(fb, &frame, &active, '█', style);
        }

        self.draw_side_panel(fb, state, &frame, viewport);

        let overlay = if state.game_over() {
            Some("GAME OVER")
        } else if !state.started() {
            Some("PRESS ENTER")
        } else if state.paused() {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, &frame, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: &Frame) {
        let style = CellStyle::new(frame.palette.border, Rgb::default());
        let (x, y, w, h) = (frame.x, frame.y, frame.w, frame.h);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Visible minos only; rows above the board are skipped.
    fn draw_piece(&self, fb: &mut FrameBuffer, frame: &Frame, piece: &Tetromino, ch: char, style: CellStyle) {
        for (x, y) in piece.cells() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: &Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, frame: &Frame, viewport: Viewport) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::new(frame.palette.text, Rgb::default()).bold();
        let value = CellStyle::new(frame.palette.text, Rgb::default());
        let stats = state.stats();
        let settings = state.settings();

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", stats.score),
            ("HIGH", stats.high_score.max(stats.score)),
            ("LEVEL", stats.level),
            ("LINES", stats.lines_cleared),
            ("COINS", stats.currency),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        if settings.hold_enabled {
            fb.put_str(panel_x, y, "HOLD", label);
            let style = if state.can_hold() { value } else { value.dim() };
            fb.put_str(panel_x, y + 1, state.hold_piece().map_or("-", piece_letter), style);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        for (i, kind) in state.next_queue().iter().take(settings.visible_next()).enumerate() {
            let row = y.saturating_add(1 + i as u16);
            if row >= viewport.height {
                break;
            }
            let style = CellStyle::new(frame.palette.piece(*kind), Rgb::default());
            fb.put_str(panel_x, row, piece_letter(*kind), if i == 0 { style.bold() } else { style });
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: &Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
        PieceKind::J => "J",
        PieceKind::L => "L",
    }
}
