use tui_blockfall::core::{color_of, GameLoop, SequenceSource};
use tui_blockfall::term::{AnchorY, GameView, Rgb, Viewport};
use tui_blockfall::types::{GameAction, PieceKind, LOCKED_CELL_COLOR};

fn game(kinds: &[PieceKind]) -> GameLoop<SequenceSource> {
    GameLoop::new(15, 30, SequenceSource::new(kinds.to_vec()))
}

#[test]
fn term_view_renders_border_corners() {
    let g = game(&[PieceKind::I]);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 15*2 by 30*1 => 30x30, plus border => 32x32
    let fb = view.render(g.state(), Viewport::new(32, 32));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(31, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 31).unwrap().ch, '└');
    assert_eq!(fb.get(31, 31).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut g = game(&[PieceKind::I]);
    g.board_mut().set(0, 29);

    let fb = GameView::default().render(g.state(), Viewport::new(32, 32));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 29;
    for x in [1, 2] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(LOCKED_CELL_COLOR));
    }
    assert_ne!(fb.get(3, y0).unwrap().ch, '█');
}

#[test]
fn term_view_draws_falling_piece_in_its_color() {
    let g = game(&[PieceKind::I]);
    let fb = GameView::default().render(g.state(), Viewport::new(32, 32));

    // I spawns at column 5, row 0 => x = 1 + 5*2 .. 1 + 9*2, y = 1.
    let color = Rgb::from(color_of(PieceKind::I));
    for x in 11..19 {
        let cell = fb.get(x, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color);
    }
    assert_eq!(fb.get(10, 1).unwrap().ch, '·');
    assert_eq!(fb.get(19, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_rotated_piece_inside_the_frame() {
    let mut g = game(&[PieceKind::I]);
    g.apply(GameAction::Rotate);
    let fb = GameView::default().render(g.state(), Viewport::new(32, 32));
    assert_eq!(fb.row_text(0).chars().filter(|&c| c == '█').count(), 0);
    for y in 1..5 {
        assert_eq!(fb.get(11, y).unwrap().ch, '█');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut g = game(&[PieceKind::I, PieceKind::T]);
    for col in 0..15 {
        if !(5..9).contains(&col) {
            g.board_mut().set(col, 29);
        }
    }
    while g.tick() == tui_blockfall::core::StepOutcome::Moved {}
    assert_eq!(g.state().score(), 100);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(g.state(), Viewport::new(80, 32));

    // start_x = (80 - 32) / 2 = 24, panel at 24 + 32 + 2 = 58.
    assert_eq!(fb.get(24, 0).unwrap().ch, '┌');
    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("100"));
    assert!(fb.row_text(3).contains("LINES"));
    assert_eq!(fb.get(58, 4).unwrap().ch, '1');
    assert!(fb.row_text(6).contains("NEXT"));
}

#[test]
fn term_view_omits_side_panel_when_narrow() {
    let g = game(&[PieceKind::I]);
    let fb = GameView::default().render(g.state(), Viewport::new(32, 32));
    for y in 0..32 {
        assert!(!fb.row_text(y).contains("SCORE"));
    }
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut g = game(&[PieceKind::O]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    g.apply(GameAction::TogglePause);
    let fb = view.render(g.state(), Viewport::new(32, 32));
    assert!((0..32).any(|y| fb.row_text(y).contains("PAUSED")));

    g.apply(GameAction::TogglePause);
    g.board_mut().set(6, 2);
    g.tick();
    assert!(g.state().game_over());

    let fb = view.render(g.state(), Viewport::new(32, 32));
    assert!((0..32).any(|y| fb.row_text(y).contains("GAME OVER")));
    assert!(!(0..32).any(|y| fb.row_text(y).contains("PAUSED")));
}

#[test]
fn term_view_warns_when_board_does_not_fit() {
    let g = game(&[PieceKind::I]);
    let view = GameView::default();

    // A 30-row board needs 32 lines.
    let fb = view.render(g.state(), Viewport::new(80, 24));
    assert!(fb.row_text(23).contains("TERMINAL TOO SMALL"));

    let fb = view.render(g.state(), Viewport::new(80, 32));
    assert!(!(0..32).any(|y| fb.row_text(y).contains("TERMINAL TOO SMALL")));
}

#[test]
fn term_view_survives_boards_wider_than_the_terminal_can_address() {
    let g = GameLoop::new(40_000, 30, SequenceSource::new(vec![PieceKind::I]));
    let fb = GameView::default().render(g.state(), Viewport::new(80, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert!(fb.row_text(23).contains("TERMINAL TOO SMALL"));
}
