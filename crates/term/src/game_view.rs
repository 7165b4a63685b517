//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Ink};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Character used for the field frame
pub const FRAME_CHAR: char = '@';

/// Character used for occupied cells
pub const BLOCK_CHAR: char = '█';

/// Character used for empty cells inside the frame
pub const EMPTY_CHAR: char = ' ';

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

/// Draws the field, a frame around it and a small side panel.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up typical terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the framed field in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            FIELD_WIDTH as u16 * self.cell_w + 2,
            FIELD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// The framed field is centered horizontally and pinned to the top row.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;

        self.draw_frame(fb, start_x, frame_w, frame_h);

        for row in 0..FIELD_HEIGHT {
            for col in 0..FIELD_WIDTH {
                let (ch, ink) = if snap.is_active_cell(row, col) {
                    (BLOCK_CHAR, Ink::Active)
                } else if snap.is_occupied(row, col) {
                    (BLOCK_CHAR, Ink::Settled)
                } else {
                    (EMPTY_CHAR, Ink::Empty)
                };
                let x = start_x + 1 + col as u16 * self.cell_w;
                for dx in 0..self.cell_w {
                    fb.put(x + dx, 1 + row as u16, ch, ink);
                }
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2);

        if snap.game_over {
            let text = " GAME OVER ";
            let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, frame_h / 2, text, Ink::Banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, w: u16, h: u16) {
        for dx in 0..w {
            fb.put(x + dx, 0, FRAME_CHAR, Ink::Frame);
            fb.put(x + dx, h - 1, FRAME_CHAR, Ink::Frame);
        }
        for y in 1..h - 1 {
            fb.put(x, y, FRAME_CHAR, Ink::Frame);
            fb.put(x + w - 1, y, FRAME_CHAR, Ink::Frame);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16) {
        if x.saturating_add(12) > fb.width() {
            return;
        }

        fb.put_str(x, 1, "PIECE", Ink::Label);
        let piece = snap.active.map(|a| a.kind.as_str()).unwrap_or("-");
        fb.put_str(x, 2, piece, Ink::Text);

        fb.put_str(x, 4, "SPAWNED", Ink::Label);
        fb.put_str(x, 5, &snap.pieces_spawned.to_string(), Ink::Text);

        fb.put_str(x, 7, "SEED", Ink::Label);
        fb.put_str(x, 8, &snap.seed.to_string(), Ink::Text);

        let help = ["<- -> move", "down  drop", "up  rotate", "q     quit"];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(x, 10 + i as u16, line, Ink::Text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_accounts_for_cell_width() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0).frame_size(), (12, 22));
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 22));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(!text.contains("SEED"));
    }
}
