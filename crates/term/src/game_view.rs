//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 40x22 world rarely fits a terminal at two columns per cell, so
//! the view scrolls: the camera centers on the hero (or on the last
//! known hero position once killed) and clamps to the grid edges. A
//! one-row HUD strip under the playfield shows level, diamonds left,
//! time left and the mute marker.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{HeroFacing, Tile, GRID_HEIGHT, GRID_WIDTH};

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

/// A lightweight terminal renderer for the cave view.
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

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it only resizes
    /// when the terminal does.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if viewport.width < self.cell_w + 2 || viewport.height < self.cell_h + 3 {
            return;
        }

        // How much of the world fits, frame and HUD row excluded.
        let view_cols = (((viewport.width - 2) / self.cell_w) as usize).min(GRID_WIDTH);
        let view_rows = (((viewport.height - 3) / self.cell_h) as usize).min(GRID_HEIGHT);

        let (cam_row, cam_col) = camera_origin(snap.hero_pos, view_rows, view_cols);

        let frame_w = view_cols as u16 * self.cell_w + 2;
        let frame_h = view_rows as u16 * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_frame(fb, start_x, start_y, frame_w, frame_h, border);

        for vy in 0..view_rows {
            for vx in 0..view_cols {
                let tile = snap.tiles[cam_row + vy][cam_col + vx];
                let (ch, style) = tile_glyph(tile, snap.facing);
                let px = start_x + 1 + vx as u16 * self.cell_w;
                let py = start_y + 1 + vy as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_hud(fb, snap, start_x, start_y + frame_h, frame_w);

        if snap.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        } else if snap.level_banner {
            let text = format!(" LEVEL {} ", snap.level + 1);
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut cx = x;
        fb.put_str(cx, y, "LEVEL ", label);
        cx += 6;
        fb.put_u32(cx, y, snap.level as u32 + 1, value);
        cx += 4;

        fb.put_str(cx, y, "DIAMONDS ", label);
        cx += 9;
        fb.put_u32(cx, y, snap.diamonds, value);
        cx += 5;

        fb.put_str(cx, y, "TIME ", label);
        cx += 5;
        fb.put_u32(cx, y, snap.time.max(0) as u32, value);

        if !snap.sound_enabled {
            fb.put_char(x + w.saturating_sub(1), y, 'M', label);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(160, 30, 30),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Top-left world cell of the camera: centered on the hero, clamped to
/// the grid so the view never shows past the border.
fn camera_origin(hero: (usize, usize), view_rows: usize, view_cols: usize) -> (usize, usize) {
    let row = hero
        .0
        .saturating_sub(view_rows / 2)
        .min(GRID_HEIGHT - view_rows);
    let col = hero
        .1
        .saturating_sub(view_cols / 2)
        .min(GRID_WIDTH - view_cols);
    (row, col)
}

fn tile_glyph(tile: Tile, facing: HeroFacing) -> (char, CellStyle) {
    let bg = Rgb::new(20, 20, 26);
    let style = |fg, bold| CellStyle {
        fg,
        bg,
        bold,
        dim: false,
    };

    match tile {
        Tile::Tunnel => (' ', style(Rgb::new(80, 80, 90), false)),
        Tile::Wall => ('▒', style(Rgb::new(150, 100, 60), false)),
        Tile::Metal => ('█', style(Rgb::new(110, 120, 140), false)),
        Tile::Ground => ('░', style(Rgb::new(120, 85, 50), false)),
        Tile::Rock => ('●', style(Rgb::new(170, 170, 170), false)),
        Tile::Diamond => ('◆', style(Rgb::new(90, 220, 230), true)),
        Tile::Box => ('▣', style(Rgb::new(220, 140, 220), false)),
        Tile::Fly => ('✶', style(Rgb::new(120, 220, 120), true)),
        Tile::Door => ('◫', style(Rgb::new(240, 210, 90), true)),
        Tile::Crash => ('▚', style(Rgb::new(240, 90, 60), true)),
        Tile::Hero => {
            let ch = match facing {
                HeroFacing::Right => '▶',
                HeroFacing::Left => '◀',
                HeroFacing::Neutral2 => '☻',
                _ => '☺',
            };
            (ch, style(Rgb::new(250, 230, 120), true))
        }
    }
}
