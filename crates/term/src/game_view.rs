//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board and the lookahead preview are both painted through the core's
//! [`DrawSurface`] interface; this module only decides where a grid cell lands in
//! the framebuffer and what glyph it gets.

use crate::core::{shape_of, DrawSurface, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, MAX_SHAPE_EXTENT};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const FILLED: char = '█';
const TOO_SMALL: &str = "TERMINAL TOO SMALL";

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Grid-to-framebuffer mapping for one rectangular area.
///
/// Cells outside `cols x rows` are clipped, which drops the parts of a freshly
/// spawned piece that still sit above row 0.
struct GridCanvas<'a> {
    fb: &'a mut FrameBuffer,
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
    cols: u16,
    rows: u16,
}

impl GridCanvas<'_> {
    fn paint(&mut self, col: u16, row: u16, ch: char, style: CellStyle) {
        let px = self.x.saturating_add(col.saturating_mul(self.cell_w));
        let py = self.y.saturating_add(row.saturating_mul(self.cell_h));
        self.fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

impl DrawSurface for GridCanvas<'_> {
    fn fill_cell(&mut self, col: i32, row: i32, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let style = CellStyle::new(color.into(), BOARD_BG).bold();
        self.paint(col as u16, row as u16, FILLED, style);
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let cols = state.board().cols();
        let rows = state.board().rows();
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let mut canvas = GridCanvas {
            fb: &mut *fb,
            x: start_x + 1,
            y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cols,
            rows,
        };

        // Grid dots under everything; cells past the viewport edge are skipped.
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        let vis_cols = cols.min(viewport.width.div_ceil(self.cell_w.max(1)));
        let vis_rows = rows.min(viewport.height.div_ceil(self.cell_h.max(1)));
        for row in 0..vis_rows {
            for col in 0..vis_cols {
                canvas.paint(col, row, '·', empty);
            }
        }

        state.draw(&mut canvas);

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, state, viewport, panel_x, start_y);

        if state.game_over() {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["GAME OVER", "R to restart"]);
        } else if state.paused() {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        }

        if frame_w > viewport.width || frame_h > viewport.height {
            draw_too_small(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let preview_w = MAX_SHAPE_EXTENT * self.cell_w;
        if panel_x >= viewport.width || viewport.width - panel_x < preview_w.max(12) {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, state.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, state.rows_cleared(), value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, state.next_kind().as_str(), hint);
        y += 1;

        // Spawn orientations are at most two rows tall.
        let next = shape_of(state.next_kind());
        let box_h = 2 * self.cell_h;
        let off_x = (preview_w - next.width() as u16 * self.cell_w) / 2;
        let off_y = box_h.saturating_sub(next.height() as u16 * self.cell_h) / 2;
        let mut preview = GridCanvas {
            fb: &mut *fb,
            x: panel_x + off_x,
            y: y + off_y,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cols: next.width() as u16,
            rows: next.height() as u16,
        };
        state.draw_preview(&mut preview);
        y += box_h + 1;

        for line in ["←→ move", "↑ rotate", "↓ drop", "P pause", "R reset", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

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

/// Warning on the bottom line when the board frame is clipped.
fn draw_too_small(fb: &mut FrameBuffer, viewport: Viewport) {
    let style = CellStyle::new(Rgb::new(255, 200, 0), PANEL_BG).bold();
    let x = viewport.width.saturating_sub(TOO_SMALL.len() as u16) / 2;
    fb.put_str(x, viewport.height.saturating_sub(1), TOO_SMALL, style);
}

/// Centered lines over the middle of the board frame.
fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let top = y + (h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, top + i as u16, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameLoop, SequenceSource};
    use crate::types::PieceKind;

    #[test]
    fn preview_is_centered_in_its_box() {
        // O is 2 cells wide; the box is 6 cells (12 columns) wide.
        let game = GameLoop::new(15, 30, SequenceSource::new(vec![PieceKind::I, PieceKind::O]));
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(game.state(), Viewport::new(60, 32));

        // frame_w = 32, start_x = (60 - 32) / 2 = 14, panel_x = 48; NEXT label at y = 6,
        // preview box at y = 7..9, O occupies columns 4..8 of the box.
        let panel_x = 48;
        assert_eq!(fb.get(panel_x, 6).unwrap().ch, 'N');
        assert_eq!(fb.get(panel_x + 4, 7).unwrap().ch, FILLED);
        assert_eq!(fb.get(panel_x + 7, 8).unwrap().ch, FILLED);
        assert_eq!(fb.get(panel_x + 3, 7).unwrap().ch, ' ');
        assert_eq!(fb.get(panel_x + 8, 7).unwrap().ch, ' ');
    }

    #[test]
    fn canvas_clips_cells_above_the_board() {
        let mut fb = FrameBuffer::new(10, 5);
        let mut canvas = GridCanvas {
            fb: &mut fb,
            x: 1,
            y: 1,
            cell_w: 2,
            cell_h: 1,
            cols: 4,
            rows: 3,
        };
        canvas.fill_cell(0, -1, Color::new(1, 2, 3));
        canvas.fill_cell(4, 0, Color::new(1, 2, 3));
        canvas.fill_cell(1, 2, Color::new(1, 2, 3));

        let filled: Vec<_> = (0..5u16)
            .flat_map(|y| (0..10u16).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().ch == FILLED)
            .collect();
        assert_eq!(filled, vec![(3, 3), (4, 3)]);
    }
}
