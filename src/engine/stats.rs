//! Analysis statistics
//!
//! Counters collected during one fixpoint run, providing insight into
//! convergence behavior and worklist churn.

/// Statistics collected during one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Number of values seeded during initialization.
    pub values_seeded: usize,
    /// Worklist items popped.
    pub items_popped: u64,
    /// Recomputations that produced a changed abstract value.
    pub updates: u64,
    /// Recomputations that left the stored value unchanged.
    pub stable_recomputes: u64,
    /// Dependents pushed after a change.
    pub reenqueues: u64,
    /// Pushes skipped because the value was already pending.
    pub duplicates_skipped: u64,
    /// Peak worklist length observed.
    pub peak_worklist: usize,
}

impl EngineStats {
    /// Total recomputations performed.
    pub fn recomputes(&self) -> u64 {
        self.updates + self.stable_recomputes
    }
}
