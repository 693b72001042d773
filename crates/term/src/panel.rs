//! LED panel emulation for the terminal.
//!
//! `MatrixPanel` stands in for the physical column-scanned display: it latches
//! whatever the refresh path streams through `DisplayPort` and can then be
//! painted onto a surface. Rendering is pure (no I/O) so it can be
//! unit-tested.

use matrix_tetris_engine::DisplayPort;
use matrix_tetris_types::{MATRIX_COLS, MATRIX_ROWS};

use crate::surface::{Surface, Tone};

/// Scoreboard state shown beside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub halted: bool,
    pub game_over: bool,
}

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

/// A terminal stand-in for the 16x32 LED matrix.
///
/// Column writes arrive through [`DisplayPort`] exactly as the hardware would
/// see them: a one-hot column select plus 32 row bits, least significant bit
/// at the top of the panel.
pub struct MatrixPanel {
    cols: [u32; MATRIX_COLS],
    /// LED cell width in terminal columns.
    cell_w: u16,
}

impl Default for MatrixPanel {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cols: [0; MATRIX_COLS],
            cell_w: 2,
        }
    }
}

impl MatrixPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[u32; MATRIX_COLS] {
        &self.cols
    }

    /// Render the latched panel contents onto an existing surface.
    ///
    /// Callers can reuse a surface across frames; it only reallocates when
    /// the terminal size changes.
    pub fn render_into(&self, hud: &Hud, viewport: Viewport, surface: &mut Surface) {
        surface.resize(viewport.width, viewport.height);
        surface.wipe();

        let panel_px_w = (MATRIX_COLS as u16) * self.cell_w;
        let panel_px_h = MATRIX_ROWS as u16;
        let frame_w = panel_px_w + 2;
        let frame_h = panel_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(surface, start_x, start_y, frame_w, frame_h);

        for (x, &rows) in self.cols.iter().enumerate() {
            for y in 0..MATRIX_ROWS {
                let (ch, tone) = if rows & (1 << y) != 0 {
                    ('█', Tone::LedLit)
                } else {
                    ('·', Tone::LedDark)
                };
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;
                surface.fill(px, py, self.cell_w, 1, ch, tone);
            }
        }

        self.draw_side_panel(surface, hud, viewport, start_x, start_y, frame_w);

        if hud.game_over {
            self.draw_banner(surface, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if hud.halted {
            self.draw_banner(surface, start_x, start_y, frame_w, frame_h, "HALTED");
        }
    }

    fn draw_border(&self, surface: &mut Surface, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        surface.put(x, y, '┌', Tone::Border);
        surface.put(x + w - 1, y, '┐', Tone::Border);
        surface.put(x, y + h - 1, '└', Tone::Border);
        surface.put(x + w - 1, y + h - 1, '┘', Tone::Border);

        for dx in 1..w - 1 {
            surface.put(x + dx, y, '─', Tone::Border);
            surface.put(x + dx, y + h - 1, '─', Tone::Border);
        }
        for dy in 1..h - 1 {
            surface.put(x, y + dy, '│', Tone::Border);
            surface.put(x + w - 1, y + dy, '│', Tone::Border);
        }
    }

    fn draw_side_panel(
        &self,
        surface: &mut Surface,
        hud: &Hud,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", hud.score),
            ("LEVEL", hud.level),
            ("LINES", hud.lines),
        ] {
            surface.put_str(panel_x, y, name, Tone::Label);
            y = y.saturating_add(1);
            surface.put_str(panel_x, y, &v.to_string(), Tone::Value);
            y = y.saturating_add(2);
        }
    }

    fn draw_banner(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        surface.put_str(x, mid_y, text, Tone::Banner);
    }
}

impl DisplayPort for MatrixPanel {
    fn write_column(&mut self, select: u16, rows: u32) {
        // The real latch only decodes a single asserted select line.
        if select.count_ones() != 1 {
            return;
        }
        let idx = select.trailing_zeros() as usize;
        if idx < MATRIX_COLS {
            self.cols[idx] = rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_column_latches_by_select_line() {
        let mut panel = MatrixPanel::new();
        panel.write_column(1 << 0, 0xDEAD_BEEF);
        panel.write_column(1 << 15, 0x8000_0001);
        assert_eq!(panel.columns()[0], 0xDEAD_BEEF);
        assert_eq!(panel.columns()[15], 0x8000_0001);
        assert_eq!(panel.columns()[7], 0);
    }

    #[test]
    fn test_write_column_ignores_invalid_select() {
        let mut panel = MatrixPanel::new();
        panel.write_column(0, 0xFFFF_FFFF);
        panel.write_column(0b11, 0xFFFF_FFFF);
        assert!(panel.columns().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_render_tones_lit_and_dark_cells() {
        let mut panel = MatrixPanel::new();
        // Column 0, top row lit.
        panel.write_column(1 << 0, 1);

        let viewport = Viewport::new(60, 40);
        let mut surface = Surface::new(viewport.width, viewport.height);
        panel.render_into(&Hud::default(), viewport, &mut surface);

        let frame_w = (MATRIX_COLS as u16) * 2 + 2;
        let frame_h = MATRIX_ROWS as u16 + 2;
        let start_x = (viewport.width - frame_w) / 2;
        let start_y = (viewport.height - frame_h) / 2;
        assert_eq!(
            surface.get(start_x + 1, start_y + 1).map(|c| c.tone),
            Some(Tone::LedLit)
        );
        assert_eq!(
            surface.get(start_x + 1, start_y + 2).map(|c| c.tone),
            Some(Tone::LedDark)
        );
    }

    #[test]
    fn test_render_game_over_banner() {
        let panel = MatrixPanel::new();
        let hud = Hud {
            game_over: true,
            ..Default::default()
        };
        let viewport = Viewport::new(60, 40);
        let mut surface = Surface::new(viewport.width, viewport.height);
        panel.render_into(&hud, viewport, &mut surface);

        let row: String = (0..viewport.width)
            .filter_map(|x| surface.get(x, viewport.height / 2).map(|c| c.ch))
            .collect();
        assert!(row.contains("GAME OVER"));
    }
}
