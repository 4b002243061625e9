use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Maps the 800×500 logical playfield onto a block of terminal cells.
///
/// Row 0 holds the HUD and the last row the power-up gauge, so the
/// playfield spans rows `top..top + rows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub top: u16,
}

impl Viewport {
    pub fn from_terminal(width: u16, height: u16) -> Self {
        Viewport {
            cols: width.max(1),
            rows: height.saturating_sub(2).max(1),
            top: 1,
        }
    }

    /// Last terminal row in use (the gauge row).
    pub fn bottom(&self) -> u16 {
        self.top + self.rows
    }

    fn cell_width(&self) -> f32 {
        CANVAS_WIDTH / self.cols as f32
    }

    fn cell_height(&self) -> f32 {
        CANVAS_HEIGHT / self.rows as f32
    }

    /// Terminal cell containing a logical point, or `None` off the playfield.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..CANVAS_WIDTH).contains(&x) || !(0.0..CANVAS_HEIGHT).contains(&y) {
            return None;
        }
        let col = ((x / self.cell_width()) as u16).min(self.cols - 1);
        let row = ((y / self.cell_height()) as u16).min(self.rows - 1);
        Some((col, self.top + row))
    }

    /// Logical centre of a terminal cell, clamped into the playfield.
    pub fn to_logical(&self, col: u16, row: u16) -> (f32, f32) {
        let col = col.min(self.cols - 1);
        let row = row.saturating_sub(self.top).min(self.rows - 1);
        (
            (col as f32 + 0.5) * self.cell_width(),
            (row as f32 + 0.5) * self.cell_height(),
        )
    }

    /// Cells whose centres fall inside the circle.  A circle smaller than a
    /// cell still covers the cell under its centre.
    pub fn disc(&self, x: f32, y: f32, radius: f32) -> Vec<(u16, u16)> {
        let mut cells = Vec::new();
        let (cw, ch) = (self.cell_width(), self.cell_height());
        let first_col = ((x - radius) / cw).floor().max(0.0) as u16;
        let last_col = (((x + radius) / cw).floor().max(0.0) as u16).min(self.cols - 1);
        let first_row = ((y - radius) / ch).floor().max(0.0) as u16;
        let last_row = (((y + radius) / ch).floor().max(0.0) as u16).min(self.rows - 1);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let cx = (col as f32 + 0.5) * cw;
                let cy = (row as f32 + 0.5) * ch;
                if (cx - x).powi(2) + (cy - y).powi(2) <= radius * radius {
                    cells.push((col, self.top + row));
                }
            }
        }

        if cells.is_empty() {
            cells.extend(self.to_cell(x, y));
        }
        cells
    }
}
