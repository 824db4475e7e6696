use blockfall::core::{Board, GameState, Settings, Stats, Tetromino, Theme};
use blockfall::term::{FrameBuffer, GameView, Palette, Viewport};
use blockfall::types::{GameAction, PieceKind, Rotation, ShopItem};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).map_or(' ', |g| g.ch));
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1, Settings::default());
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the board is 20x20, 22x22 with its border.
    let fb = view.render(&state, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    let state = GameState::new(1, Settings::default()).with_board(board);

    let fb = GameView::default().render(&state, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(
        fb.get(x0, y0).unwrap().style.fg,
        Palette::for_theme(Theme::Classic).piece(PieceKind::I)
    );
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let stats = Stats {
        score: 1234,
        currency: 75,
        ..Stats::default()
    };
    let state = GameState::new(1, Settings::default())
        .reduce(GameAction::Start)
        .with_stats(stats)
        .reduce(GameAction::Hold);

    let fb = GameView::default().render(&state, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for label in ["SCORE", "1234", "HIGH", "LEVEL", "LINES", "COINS", "75", "HOLD", "NEXT"] {
        assert!(all.contains(label), "missing {label}");
    }
}

#[test]
fn term_view_shows_paused_and_game_over() {
    let paused = GameState::new(1, Settings::default())
        .reduce(GameAction::Start)
        .reduce(GameAction::Pause(None));
    let fb = GameView::default().render(&paused, Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("PAUSED"));

    let mut over = GameState::new(1, Settings::default()).reduce(GameAction::Start);
    while !over.game_over() {
        over = over.reduce(GameAction::HardDrop);
    }
    let fb = GameView::default().render(&over, Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_golden_blocks_recolor_the_stack() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    let mut stats = Stats::default();
    stats.inventory.insert(ShopItem::GoldenBlocks, 1);
    let piece = Tetromino {
        kind: PieceKind::T,
        rotation: Rotation::North,
        x: 4,
        y: 5,
    };
    let state = GameState::new(1, Settings::default())
        .with_board(board)
        .with_stats(stats)
        .with_active(piece);

    let fb = GameView::default().render(&state, Viewport::new(22, 22));
    let locked = fb.get(1, 20).unwrap().style.fg;
    assert_ne!(locked, Palette::for_theme(Theme::Classic).piece(PieceKind::I));
}
