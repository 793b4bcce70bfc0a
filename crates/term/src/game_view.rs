//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Tile, GRID_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(60, 58, 50);
const EMPTY_BG: Rgb = Rgb::new(90, 85, 75);
const PANEL_MIN_W: u16 = 12;

/// Screen-space rectangle of the drawn board (border included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles and around the edge.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a 4-digit value with padding and stays roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    fn inner_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (
            n * self.tile_w + (n + 1) * self.gap,
            n * self.tile_h + (n + 1) * self.gap,
        )
    }

    /// Where the board lands for a given viewport (centred).
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let (inner_w, inner_h) = self.inner_size();
        let w = inner_w + 2;
        let h = inner_h + 2;
        BoardRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Top-left screen position of the tile at `(row, col)`.
    pub fn tile_origin(&self, rect: BoardRect, row: usize, col: usize) -> (u16, u16) {
        let (r, c) = (row as u16, col as u16);
        (
            rect.x + 1 + self.gap + c * (self.tile_w + self.gap),
            rect.y + 1 + self.gap + r * (self.tile_h + self.gap),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        fb.clear(CellStyle::default().cell(' '));

        let rect = self.board_rect(viewport);
        let (inner_w, inner_h) = self.inner_size();
        let board = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);

        fb.fill_rect(rect.x + 1, rect.y + 1, inner_w, inner_h, ' ', board);
        fb.draw_box(rect.x, rect.y, rect.w, rect.h, CellStyle::default());

        for (r, row) in state.grid().rows().iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, rect, r, c, value);
            }
        }

        self.draw_side_panel(fb, state, viewport, rect);

        match state.status() {
            GameStatus::Won => self.draw_overlay_text(fb, rect, " YOU WIN! "),
            GameStatus::Lost => self.draw_overlay_text(fb, rect, " GAME OVER "),
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, rect: BoardRect, row: usize, col: usize, value: Tile) {
        let (x, y) = self.tile_origin(rect, row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let label = if value == 0 {
            String::from("·")
        } else {
            value.to_string()
        };
        fb.put_str_centered(x, y + self.tile_h / 2, self.tile_w, &label, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport, rect: BoardRect) {
        let panel_x = rect.x.saturating_add(rect.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let undo = if state.can_undo() {
            "u"
        } else {
            "-"
        };
        let entries = [
            ("SCORE", state.score().to_string()),
            ("MOVES", state.moves().to_string()),
            ("BEST", state.grid().max_tile().to_string()),
            ("UNDO", undo.to_string()),
        ];

        let mut y = rect.y;
        for (name, text) in entries.iter() {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }

        if y < viewport.height {
            let dim = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0));
            fb.put_str(panel_x, y, "arrows/hjkl", dim);
            fb.put_str(panel_x, y.saturating_add(1), "q quit", dim);
            if state.undo_enabled() {
                fb.put_str(panel_x, y.saturating_add(2), "u undo", dim);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, rect: BoardRect, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(rect.x, rect.y + rect.h / 2, rect.w, text, style);
    }
}

/// Background darkens-to-warm as tiles grow; large tiles switch to light text.
fn tile_style(value: Tile) -> CellStyle {
    let bg = match value {
        0 => EMPTY_BG,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = match value {
        0 => Rgb::new(120, 115, 105),
        2 | 4 => Rgb::new(119, 110, 101),
        _ => Rgb::new(249, 246, 242),
    };
    let style = CellStyle::new(fg, bg);
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_size() {
        let view = GameView::default();
        let rect = view.board_rect(Viewport::new(35, 19));
        // 4 tiles * 7 + 5 gaps, plus border.
        assert_eq!((rect.w, rect.h), (35, 19));
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn tile_origins_step_by_tile_and_gap() {
        let view = GameView::default();
        let rect = view.board_rect(Viewport::new(35, 19));
        assert_eq!(view.tile_origin(rect, 0, 0), (2, 2));
        assert_eq!(view.tile_origin(rect, 0, 1), (10, 2));
        assert_eq!(view.tile_origin(rect, 3, 3), (26, 14));
    }

    #[test]
    fn big_tiles_are_bold() {
        assert!(!tile_style(2).bold);
        assert!(tile_style(2048).bold);
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
    }
}
