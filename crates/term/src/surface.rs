//! Drawing surface with the host's fixed palette.
//!
//! The terminal host only ever draws a handful of distinct looks: lit and
//! dark LEDs, the panel border, HUD text, and the overlay banner. Cells carry
//! a palette tone instead of free-form colors, and the renderer resolves the
//! palette once at encode time.

/// 24-bit RGB color; only the palette below produces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The closed set of looks the host draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Empty screen space outside the panel.
    #[default]
    Blank,
    /// The frame around the LED grid.
    Border,
    /// An LED that is on.
    LedLit,
    /// An LED that is off (grid dot).
    LedDark,
    /// HUD heading text.
    Label,
    /// HUD numbers.
    Value,
    /// The GAME OVER / HALTED banner.
    Banner,
}

impl Tone {
    /// Palette entry: foreground, background, bold.
    ///
    /// The LED tones share a warm dark background so the grid reads as one
    /// physical panel; everything else sits on plain black.
    pub const fn palette(self) -> (Rgb, Rgb, bool) {
        match self {
            Tone::Blank => (Rgb::new(220, 220, 220), Rgb::new(0, 0, 0), false),
            Tone::Border => (Rgb::new(200, 200, 200), Rgb::new(0, 0, 0), false),
            Tone::LedLit => (Rgb::new(255, 80, 40), Rgb::new(24, 16, 16), true),
            Tone::LedDark => (Rgb::new(60, 44, 44), Rgb::new(24, 16, 16), false),
            Tone::Label => (Rgb::new(220, 220, 220), Rgb::new(0, 0, 0), true),
            Tone::Value => (Rgb::new(200, 200, 200), Rgb::new(0, 0, 0), false),
            Tone::Banner => (Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), true),
        }
    }
}

/// One drawn character and its tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            tone: Tone::Blank,
        }
    }
}

/// A flat grid of toned characters for one terminal frame.
///
/// The panel wipes and repaints the whole surface every refresh; the only
/// reallocation ever needed is a terminal resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match the surface to the terminal size, keeping the allocation when
    /// nothing changed.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.cells
                .resize((width as usize) * (height as usize), Cell::default());
        }
    }

    /// Reset every cell to blank space.
    pub fn wipe(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Draw one character. Writes outside the surface are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, tone };
        }
    }

    /// Draw a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) {
        for (i, ch) in s.chars().enumerate() {
            match x.checked_add(i as u16) {
                Some(cx) if cx < self.width => self.put(cx, y, ch, tone),
                _ => break,
            }
        }
    }

    /// Fill a rectangle with one character.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, tone: Tone) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, tone);
            }
        }
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }
}
