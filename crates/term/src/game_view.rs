//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_pairs_core::snapshot::GameSnapshot;
use tui_pairs_types::{Tile, GRID_COLUMNS};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

const FACE_DOWN: CellStyle = CellStyle::plain(Rgb::new(170, 180, 200), Rgb::new(55, 65, 85));
const FACE_UP: CellStyle = CellStyle::plain(Rgb::new(30, 30, 40), Rgb::new(235, 235, 235));
const MATCHED: CellStyle = CellStyle {
    fg: Rgb::new(210, 245, 225),
    bg: Rgb::new(45, 110, 80),
    bold: false,
    dim: true,
};
const HEADER: CellStyle = CellStyle {
    fg: Rgb::new(230, 230, 230),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const HINT: CellStyle = CellStyle {
    fg: Rgb::new(150, 150, 160),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: true,
};
const CURSOR: CellStyle = CellStyle {
    fg: Rgb::new(250, 210, 90),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const BANNER: CellStyle = CellStyle {
    fg: Rgb::new(120, 230, 160),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};

/// Format elapsed play time as `MM:SS`.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Renders the card grid, the move/time header, and the victory banner.
pub struct GameView {
    card_w: u16,
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
    columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 9,
            card_h: 3,
            gap_x: 2,
            gap_y: 1,
            columns: GRID_COLUMNS as u16,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into an existing framebuffer, reusing its allocation.
    ///
    /// `cursor_index` is the tile the keyboard cursor is on, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor_index: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        self.draw_header(fb, snap);

        let grid_x = 1u16;
        let grid_y = 2u16;

        if snap.tiles.is_empty() {
            fb.put_str(grid_x, grid_y, "no tiles - press n for a new game", HINT);
        }

        for (i, tile) in snap.tiles.iter().enumerate() {
            let col = (i as u16) % self.columns;
            let row = (i as u16) / self.columns;
            let px = grid_x + col * (self.card_w + self.gap_x);
            let py = grid_y + row * (self.card_h + self.gap_y);
            self.draw_card(fb, tile, px, py, cursor_index == Some(i));
        }

        if snap.victory {
            let tile_count = snap.tiles.len() as u16;
            let rows = (tile_count + self.columns - 1) / self.columns;
            let banner_y = grid_y + rows * (self.card_h + self.gap_y) + 1;
            let banner = format!(
                "victory in {} moves - time {}",
                snap.moves,
                format_elapsed(snap.elapsed_seconds)
            );
            fb.put_str(grid_x, banner_y, &banner, BANNER);
        }

        fb.put_str(
            grid_x,
            viewport.height.saturating_sub(1),
            "arrows move  enter flip  n new  r reset  q quit",
            HINT,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor_index: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor_index, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let state = if snap.locked {
            "settling"
        } else {
            snap.phase.as_str()
        };
        let header = format!(
            "moves {:<3}  time {}  [{}]",
            snap.moves,
            format_elapsed(snap.elapsed_seconds),
            state
        );
        fb.put_str(1, 0, &header, HEADER);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, tile: &Tile, px: u16, py: u16, selected: bool) {
        let style = if tile.matched {
            MATCHED
        } else if tile.revealed {
            FACE_UP
        } else {
            FACE_DOWN
        };

        fb.fill_rect(px, py, self.card_w, self.card_h, ' ', style);

        let label = if tile.face_up() {
            tile.pair_key.as_str()
        } else {
            "?"
        };
        let label_x = px + self.card_w.saturating_sub(label.chars().count() as u16) / 2;
        let label_style = CellStyle {
            bold: selected || style.bold,
            ..style
        };
        fb.put_str(label_x, py + self.card_h / 2, label, label_style);

        if tile.revealed && !tile.matched && tile.reveal_count > 1 {
            let count = format!("x{}", tile.reveal_count);
            let count_x = px + self.card_w.saturating_sub(count.chars().count() as u16 + 1);
            fb.put_str(count_x, py + self.card_h - 1, &count, CellStyle { dim: true, ..style });
        }

        if selected {
            fb.put_char(px.saturating_sub(1), py + self.card_h / 2, '>', CURSOR);
            fb.put_char(px + self.card_w, py + self.card_h / 2, '<', CURSOR);
        }
    }
}
