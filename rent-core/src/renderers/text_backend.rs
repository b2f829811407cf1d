// rent-core/src/renderers/text_backend.rs
//! A plotters drawing backend whose pixels are terminal character cells.

use std::io::{self, Write};

use plotters_backend::text_anchor::{HPos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontTransform,
};

/// Strokes fainter than this are mesh decoration and are not drawn.
const MIN_VISIBLE_ALPHA: f64 = 0.3;

/// Character-cell canvas that prints itself to `out` on `present`.
pub struct TextBackend<'a, W: Write> {
    out: &'a mut W,
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl<'a, W: Write> TextBackend<'a, W> {
    pub fn new(out: &'a mut W, (width, height): (u32, u32)) -> Self {
        Self {
            out,
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        }
    }

    fn put(&mut self, (x, y): BackendCoord, ch: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }
}

/// Background colours erase, dark colours ink, faint ones are skipped.
fn ink(color: BackendColor, ch: char) -> Option<char> {
    if color.alpha < MIN_VISIBLE_ALPHA {
        return None;
    }
    let (r, g, b) = color.rgb;
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    Some(if luma > 200.0 { ' ' } else { ch })
}

fn stroke_char(from: BackendCoord, to: BackendCoord) -> char {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    if dy == 0 {
        '-'
    } else if dx == 0 {
        '|'
    } else if (dx > 0) == (dy < 0) {
        // Screen y grows downwards.
        '/'
    } else {
        '\\'
    }
}

impl<W: Write> DrawingBackend for TextBackend<'_, W> {
    type ErrorType = io::Error;

    fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<io::Error>> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<io::Error>> {
        for row in self.cells.chunks(self.width as usize) {
            let line: String = row.iter().collect();
            writeln!(self.out, "{}", line.trim_end()).map_err(DrawingErrorKind::DrawingError)?;
        }
        self.out.flush().map_err(DrawingErrorKind::DrawingError)
    }

    fn draw_pixel(&mut self, point: BackendCoord, color: BackendColor) -> Result<(), DrawingErrorKind<io::Error>> {
        if let Some(ch) = ink(color, '*') {
            self.put(point, ch);
        }
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> Result<(), DrawingErrorKind<io::Error>> {
        let Some(ch) = ink(style.color(), stroke_char(from, to)) else {
            return Ok(());
        };

        // Bresenham over the cell grid.
        let (mut x, mut y) = from;
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        let sx = if from.0 < to.0 { 1 } else { -1 };
        let sy = if from.1 < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put((x, y), ch);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<io::Error>> {
        let len = text.chars().count() as u32;
        Ok(match style.transform() {
            FontTransform::Rotate90 | FontTransform::Rotate270 => (1, len),
            _ => (len, 1),
        })
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<io::Error>> {
        let len = text.chars().count() as i32;
        let anchor = style.anchor();

        match style.transform() {
            FontTransform::Rotate90 | FontTransform::Rotate270 => {
                let top = pos.1 - len / 2;
                for (i, ch) in text.chars().enumerate() {
                    self.put((pos.0, top + i as i32), ch);
                }
            }
            _ => {
                let left = match anchor.h_pos {
                    HPos::Left => pos.0,
                    HPos::Center => pos.0 - len / 2,
                    HPos::Right => pos.0 - len,
                };
                let row = match anchor.v_pos {
                    VPos::Bottom => pos.1 - 1,
                    _ => pos.1,
                };
                for (i, ch) in text.chars().enumerate() {
                    self.put((left + i as i32, row), ch);
                }
            }
        }
        Ok(())
    }
}
