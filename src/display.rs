//! Terminal drawing surface — all terminal I/O lives here.
//!
//! The game draws in canvas pixels.  `TerminalCanvas` rasterises those calls
//! onto a grid of character cells and pushes the whole grid to the terminal
//! once per frame, so a frame is never shown half-drawn.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use triangle_shooter::entities::Rect;
use triangle_shooter::render::{Surface, TextAlign};

const FILL: char = '█';
const BLANK: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

impl Cell {
    const EMPTY: Cell = Cell {
        glyph: BLANK,
        color: Color::Reset,
    };
}

pub struct TerminalCanvas {
    canvas_width: f32,
    canvas_height: f32,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    align: TextAlign,
}

impl TerminalCanvas {
    pub fn new(canvas_width: f32, canvas_height: f32, cols: u16, rows: u16) -> Self {
        Self {
            canvas_width,
            canvas_height,
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols as usize * rows as usize],
            align: TextAlign::Left,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::EMPTY; cols as usize * rows as usize];
    }

    fn scale_x(&self) -> f32 {
        self.cols as f32 / self.canvas_width
    }

    fn scale_y(&self) -> f32 {
        self.rows as f32 / self.canvas_height
    }

    /// Writes outside the grid are clipped.
    fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }

    /// Half-open cell range covering the canvas interval `[start, end)`.
    /// Never empty, so thin shapes stay visible.
    fn span(start: f32, end: f32, scale: f32) -> (i32, i32) {
        let first = (start * scale).floor() as i32;
        let last = ((end * scale).ceil() as i32).max(first + 1);
        (first, last)
    }

    /// Flush the cell grid to the terminal.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut current: Option<Color> = None;
        for (row, line) in self.cells.chunks(self.cols.max(1) as usize).enumerate() {
            out.queue(cursor::MoveTo(0, row as u16))?;
            for cell in line {
                // Only emit a colour change when it actually changes
                if current != Some(cell.color) {
                    out.queue(style::SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                out.queue(Print(cell.glyph))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl Surface for TerminalCanvas {
    fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (c0, c1) = Self::span(rect.x, rect.right(), self.scale_x());
        let (r0, r1) = Self::span(rect.y, rect.bottom(), self.scale_y());
        let cell = Cell { glyph: FILL, color };
        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, cell);
            }
        }
    }

    fn fill_triangle(&mut self, points: [(f32, f32); 3], color: Color) {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let (c0, c1) = Self::span(min_x, max_x, sx);
        let (r0, r1) = Self::span(min_y, max_y, sy);
        let cell = Cell { glyph: FILL, color };

        let mut filled = false;
        for row in r0..r1 {
            for col in c0..c1 {
                let centre = ((col as f32 + 0.5) / sx, (row as f32 + 0.5) / sy);
                if point_in_triangle(centre, &points) {
                    self.set(col, row, cell);
                    filled = true;
                }
            }
        }

        // Smaller than a cell: mark the apex so the shape doesn't vanish
        if !filled {
            let apex = points
                .iter()
                .copied()
                .fold(points[0], |top, p| if p.1 < top.1 { p } else { top });
            self.set((apex.0 * sx).floor() as i32, (apex.1 * sy).floor() as i32, cell);
        }
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, color: Color) {
        if self.rows == 0 {
            return;
        }
        let len = text.chars().count() as i32;
        let mut col = (x * self.scale_x()).floor() as i32;
        if self.align == TextAlign::Center {
            col -= len / 2;
        }
        // `y` is the baseline; place the row at the vertical middle of the glyphs
        let row = (((y - font_px / 2.0) * self.scale_y()).floor() as i32)
            .clamp(0, self.rows as i32 - 1);
        for (i, glyph) in text.chars().enumerate() {
            self.set(col + i as i32, row, Cell { glyph, color });
        }
    }
}

/// Same-side test against all three edges; points on an edge count as inside.
fn point_in_triangle(p: (f32, f32), tri: &[(f32, f32); 3]) -> bool {
    let edge = |a: (f32, f32), b: (f32, f32)| (p.0 - b.0) * (a.1 - b.1) - (a.0 - b.0) * (p.1 - b.1);
    let d1 = edge(tri[0], tri[1]);
    let d2 = edge(tri[1], tri[2]);
    let d3 = edge(tri[2], tri[0]);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
