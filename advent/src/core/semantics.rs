//! Per-cell transform table for the command kinds under each mode.

use crate::core::command::{Kind, Mode};

/// A pure per-cell transform: total, no hidden state, no side effects.
pub type Transform = fn(u32) -> u32;

/// Look up the transform for a command kind under a mode.
///
/// Resolved once per command; the returned fn pointer is then applied to
/// every cell in the command's rectangle, so dispatch cost never scales
/// with rectangle area.
pub fn transform(mode: Mode, kind: Kind) -> Transform {
    match (mode, kind) {
        (Mode::Binary, Kind::TurnOn) => |_| 1,
        (Mode::Binary, Kind::TurnOff) => |_| 0,
        (Mode::Binary, Kind::Toggle) => |x| 1 - x,
        (Mode::Counter, Kind::TurnOn) => |x| x + 1,
        // Floor at zero: a counter cell never goes negative.
        (Mode::Counter, Kind::TurnOff) => |x| x.saturating_sub(1),
        (Mode::Counter, Kind::Toggle) => |x| x + 2,
    }
}
