//! Dense height×width grid with inclusive-rectangle updates.

use crate::core::command::Rect;
use crate::core::semantics::Transform;

/// Dense grid of non-negative cell values.
///
/// Cells live in one flat, contiguous buffer indexed `row * width + col`,
/// which keeps the O(area) rectangle writes cache-friendly. Rectangle
/// operations are applied eagerly to the actual cells; there is no lazy
/// propagation, because assign and toggle transforms do not compose under
/// prefix-sum tricks.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Fresh grid with every cell zero.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![0; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// True if the rectangle lies fully inside this grid.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.r1() < self.height && rect.c1() < self.width
    }

    /// Replace every cell in the inclusive rectangle with `transform(cell)`.
    ///
    /// The rectangle must satisfy [`Grid::contains`]; the engine checks this
    /// before mutating anything.
    pub fn apply(&mut self, rect: &Rect, transform: Transform) {
        for r in rect.r0()..=rect.r1() {
            let row = r * self.width;
            for cell in &mut self.cells[row + rect.c0()..=row + rect.c1()] {
                *cell = transform(*cell);
            }
        }
    }

    /// Current value of one cell. Test and debugging accessor.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.width + col]
    }

    /// Sum of all cell values, widened so a full grid of large counters
    /// cannot overflow the accumulator.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&cell| u64::from(cell)).sum()
    }
}
