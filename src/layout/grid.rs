//! Optimum grid partition
//!
//! Picks the row/column split that gives each item the largest area inside
//! the target rectangle, then breaks ties by compactness (the fraction of
//! cells actually occupied).

use serde::Serialize;

use super::{Point, Rect, Size};

/// Rows and columns of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Fraction of cells occupied by `n` items
    pub fn compactness(&self, n: usize) -> f32 {
        if self.cells() == 0 {
            return 0.0;
        }
        n as f32 / self.cells() as f32
    }
}

/// Item size and centres for `n` items laid out in a grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub shape: GridShape,
    pub item_size: Size,
    /// Item centres in row-major order, top row first
    pub cells: Vec<Point>,
}

/// Choose rows and columns for `n` items of `aspect_ratio` (height / width)
/// separated by `margin` inside `area`.
///
/// Returns `rows: 0, cols: 0` for `n == 0`. When no candidate leaves a
/// positive item size the fallback is a single column.
pub fn compute_grid(n: usize, area: Size, aspect_ratio: f32, margin: f32) -> GridShape {
    if n == 0 {
        return GridShape { rows: 0, cols: 0 };
    }

    let mut best = GridShape { rows: n, cols: 1 };
    if aspect_ratio <= 0.0 || !aspect_ratio.is_finite() {
        return best;
    }

    let mut max_area = 0.0_f32;
    let mut max_compactness = 0.0_f32;

    for rows in 1..=n {
        let max_height = (area.height - (rows as f32 + 1.0) * margin) / rows as f32;
        let max_width = max_height / aspect_ratio;

        // No column count can beat the row's upper bound
        if max_height <= 0.0 || max_height * max_width < max_area {
            continue;
        }

        for cols in (1..=n).rev() {
            if rows * cols < n {
                break;
            }

            let width = ((area.width - (cols as f32 + 1.0) * margin) / cols as f32).min(max_width);
            if width <= 0.0 {
                continue;
            }
            let height = (width * aspect_ratio).min(max_height);
            let item_area = width * height;
            let compactness = n as f32 / (rows * cols) as f32;

            if item_area > max_area || (item_area == max_area && compactness > max_compactness) {
                max_area = item_area;
                max_compactness = compactness;
                best = GridShape { rows, cols };
            }
        }
    }

    tracing::debug!(
        "Grid for {} items in {}x{}: {}x{} (area {:.1})",
        n, area.width, area.height, best.rows, best.cols, max_area
    );
    best
}

/// Lay out `n` items inside `bounds`.
///
/// Rows are stacked top-down around the centre of `bounds`; every row is
/// centred horizontally, so a short last row sits in the middle.
pub fn layout_grid(n: usize, bounds: Rect, aspect_ratio: f32, margin: f32) -> GridLayout {
    let shape = compute_grid(n, bounds.size, aspect_ratio, margin);
    if n == 0 {
        return GridLayout { shape, item_size: Size::default(), cells: Vec::new() };
    }

    let item_size = item_size(shape, bounds.size, aspect_ratio, margin);
    let step = Size::new(item_size.width + margin, item_size.height + margin);
    let center = bounds.center();

    let top_y = center.y + 0.5 * (shape.rows as f32 - 1.0) * step.height;

    let mut cells = Vec::with_capacity(n);
    for row in 0..shape.rows {
        let placed = cells.len();
        if placed == n {
            break;
        }
        let row_cols = shape.cols.min(n - placed);
        let left_x = center.x - 0.5 * (row_cols as f32 - 1.0) * step.width;
        let y = top_y - row as f32 * step.height;

        for col in 0..row_cols {
            cells.push(Point::new(left_x + col as f32 * step.width, y));
        }
    }

    GridLayout { shape, item_size, cells }
}

fn item_size(shape: GridShape, area: Size, aspect_ratio: f32, margin: f32) -> Size {
    let cols = shape.cols as f32;
    let rows = shape.rows as f32;

    let width = (area.width - (cols + 1.0) * margin) / cols;
    let height = ((area.height - (rows + 1.0) * margin) / rows).min(width * aspect_ratio);

    Size::new(height / aspect_ratio, height)
}
