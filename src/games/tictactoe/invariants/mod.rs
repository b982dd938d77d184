//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every selection.
//! They are testable independently and checked as postconditions in debug
//! builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

type Check<S> = (fn(&S) -> bool, &'static str);

fn collect<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 3] = [
            (I1::holds, I1::description()),
            (I2::holds, I2::description()),
            (I3::holds, I3::description()),
        ];
        collect(&checks, state)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 2] = [
            (I1::holds, I1::description()),
            (I2::holds, I2::description()),
        ];
        collect(&checks, state)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod single_cell_delta;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);
