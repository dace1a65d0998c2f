//! Drives an ordered command sequence through one grid.

use thiserror::Error;

use crate::core::command::{Command, Mode};
use crate::core::grid::Grid;
use crate::core::semantics;

/// Fatal run failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A command's rectangle does not fit the configured grid. The run
    /// aborts before the offending command mutates anything; earlier
    /// mutations are discarded with the grid. Out-of-range coordinates are
    /// never clamped.
    #[error("command {position} (`{command}`) exceeds the {height}x{width} grid")]
    InvalidRectangle {
        /// 1-based position of the offending command in the sequence.
        position: usize,
        command: Command,
        height: usize,
        width: usize,
    },
}

/// Grid engine with fixed dimensions.
///
/// Each run allocates one fresh zero grid, owns it exclusively, applies
/// every command in document order, and drops the grid once the aggregate
/// is read. Running the same commands under both modes takes two runs on
/// two independent grids; mode never changes mid-run.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    height: usize,
    width: usize,
}

impl Engine {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Apply `commands` in order to a fresh grid and return the total.
    ///
    /// Commands must never be reordered: the transforms do not commute
    /// (toggle then turn_off differs from turn_off then toggle on the same
    /// cell). The per-cell transform is resolved once per command from the
    /// semantics table.
    pub fn run(&self, commands: &[Command], mode: Mode) -> Result<u64, EngineError> {
        let mut grid = Grid::new(self.height, self.width);
        for (index, command) in commands.iter().enumerate() {
            if !grid.contains(&command.rect) {
                return Err(EngineError::InvalidRectangle {
                    position: index + 1,
                    command: *command,
                    height: self.height,
                    width: self.width,
                });
            }
            grid.apply(&command.rect, semantics::transform(mode, command.kind));
        }
        Ok(grid.total())
    }
}
