//! Fringe trait

use crate::path::StepId;

/// A discovered but not yet expanded node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FringeEntry {
    /// Path step that reached the node
    pub step: StepId,
    /// Sum of edge weights from the start
    pub cost: f64,
    /// Ordering key for priority fringes
    pub priority: f64,
}

/// Ordering discipline for the search fringe.
///
/// The traversal loop is the same for every strategy; only the order in
/// which `pop` hands back entries differs.
pub trait Fringe {
    fn push(&mut self, entry: FringeEntry);

    fn pop(&mut self) -> Option<FringeEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
