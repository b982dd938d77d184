//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{Square, Timeline};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell, and that
/// cell goes from empty to a mark.
///
/// Marks are never removed or overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by exactly one newly placed mark"
    }
}
