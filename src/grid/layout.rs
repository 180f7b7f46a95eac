use super::config::GridConfig;
use smallvec::SmallVec;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// What touching a cell does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Silent,
    Drum,
    /// Flattened index into the note region, row-major.
    Note(usize),
}

/// Grid geometry for one canvas size. Cheap to recompute; never cached
/// across a resize.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub width: f32,
    pub height: f32,
    pub rows: usize,
    pub columns: usize,
    pub cell_size: f32,
    note_rows: Range<usize>,
    note_cols: Range<usize>,
}

impl GridLayout {
    /// Returns `None` for a zero-sized or non-finite canvas, or a config
    /// without rows.
    pub fn compute(config: &GridConfig, width: f32, height: f32) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }
        if config.rows == 0 {
            return None;
        }
        let rows = config.rows;
        let cell_size = height / rows as f32;
        let columns = config.columns.columns_for(width, height, cell_size);

        let row_end = rows.saturating_sub(config.margins.bottom);
        let note_rows = config.margins.top.min(row_end)..row_end;
        let col_end = columns.saturating_sub(config.drums.right);
        let note_cols = config.drums.left.min(col_end)..col_end;

        Some(Self {
            width,
            height,
            rows,
            columns,
            cell_size,
            note_rows,
            note_cols,
        })
    }

    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size).floor() as usize;
        let row = (y / self.cell_size).floor() as usize;
        (row < self.rows && col < self.columns).then_some(Cell { row, col })
    }

    /// `None` for cells outside the grid. Margin rows win over drum columns.
    pub fn classify(&self, cell: Cell) -> Option<CellRole> {
        if cell.row >= self.rows || cell.col >= self.columns {
            return None;
        }
        if !self.note_rows.contains(&cell.row) {
            return Some(CellRole::Silent);
        }
        if !self.note_cols.contains(&cell.col) {
            return Some(CellRole::Drum);
        }
        let index = (cell.row - self.note_rows.start) * self.note_columns()
            + (cell.col - self.note_cols.start);
        Some(CellRole::Note(index))
    }

    pub fn locate(&self, x: f32, y: f32) -> Option<(Cell, CellRole)> {
        let cell = self.cell_at(x, y)?;
        self.classify(cell).map(|role| (cell, role))
    }

    pub fn note_columns(&self) -> usize {
        self.note_cols.len()
    }

    pub fn note_rows(&self) -> usize {
        self.note_rows.len()
    }

    pub fn note_cell_count(&self) -> usize {
        self.note_rows() * self.note_columns()
    }

    pub fn flat_index(&self, cell: Cell) -> usize {
        cell.row * self.columns + cell.col
    }

    pub fn cell_from_index(&self, index: usize) -> Option<Cell> {
        if self.columns == 0 {
            return None;
        }
        let cell = Cell {
            row: index / self.columns,
            col: index % self.columns,
        };
        (cell.row < self.rows).then_some(cell)
    }

    /// Top-left corner of a cell in canvas pixels.
    pub fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        (
            cell.col as f32 * self.cell_size,
            cell.row as f32 * self.cell_size,
        )
    }

    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        let (x, y) = self.cell_origin(cell);
        let half = self.cell_size * 0.5;
        (x + half, y + half)
    }

    /// Width actually covered by cells; fixed presets may leave a gutter.
    pub fn grid_width(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    /// Column ranges that trigger drums (left edge first).
    pub fn drum_column_ranges(&self) -> SmallVec<[Range<usize>; 2]> {
        let mut out = SmallVec::new();
        if self.note_rows.is_empty() {
            return out;
        }
        if self.note_cols.start > 0 {
            out.push(0..self.note_cols.start);
        }
        if self.note_cols.end < self.columns {
            out.push(self.note_cols.end..self.columns);
        }
        out
    }

    pub fn note_row_span(&self) -> Range<usize> {
        self.note_rows.clone()
    }
}
