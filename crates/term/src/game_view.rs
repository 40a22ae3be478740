//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Color};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CONTROLS_HINT: &str = "←→ move  ↑ rotate  ↓ down  q quit";

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

/// Draws the board, the falling piece and a status line.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Terminal size of the bordered board (status line excluded).
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.columns.saturating_mul(self.cell_w).saturating_add(2),
            snap.rows.saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One spare line below the frame for the status text.
        let start_y = viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2;

        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        // Cells past the viewport edge are never drawn.
        let visible_rows = snap.rows.min(viewport.height);
        let visible_cols = snap.columns.min((viewport.width / self.cell_w).saturating_add(1));
        for row in 0..visible_rows {
            let y = start_y.saturating_add(1).saturating_add(row);
            for col in 0..visible_cols {
                let x = start_x
                    .saturating_add(1)
                    .saturating_add(col.saturating_mul(self.cell_w));
                match snap.visible_cell(row, col) {
                    Some(Cell::Occupied(color)) => {
                        let style = CellStyle::new(color_rgb(color), BOARD_BG).bold();
                        fb.fill_rect(x, y, self.cell_w, 1, '█', style);
                    }
                    _ => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
                        fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
                        fb.put_char(x, y, '·', style);
                    }
                }
            }
        }

        let status_y = start_y.saturating_add(frame_h);
        if snap.game_over {
            let banner = CellStyle::new(Rgb::new(255, 80, 80), Rgb::new(0, 0, 0)).bold();
            let banner_y = start_y.saturating_add(frame_h / 2);
            put_centered(fb, start_x, frame_w, banner_y, " GAME OVER ", banner);
            put_centered(fb, start_x, frame_w, status_y, "q quit", CellStyle::default());
        } else {
            let hint = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0));
            put_centered(fb, start_x, frame_w, status_y, CONTROLS_HINT, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Terminal color for a piece color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Purple => Rgb::new(170, 90, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}
