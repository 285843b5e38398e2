//! Parent-pointer path storage
//!
//! Every fringe entry refers to a step in the arena instead of carrying its
//! own copy of the path. Entries that share a prefix share its steps, and
//! the full path is unwound once when the goal is popped.

/// Index of a step in a [`PathArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepId(usize);

#[derive(Debug)]
struct Step<N> {
    node: N,
    parent: Option<StepId>,
}

/// Append-only store of path steps owned by one search call
#[derive(Debug)]
pub struct PathArena<N> {
    steps: Vec<Step<N>>,
}

impl<N> Default for PathArena<N> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<N: Clone> PathArena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new path at `node`
    pub fn root(&mut self, node: N) -> StepId {
        self.push(node, None)
    }

    /// Extend the path ending at `parent` by `node`
    pub fn extend(&mut self, parent: StepId, node: N) -> StepId {
        self.push(node, Some(parent))
    }

    fn push(&mut self, node: N, parent: Option<StepId>) -> StepId {
        let id = StepId(self.steps.len());
        self.steps.push(Step { node, parent });
        id
    }

    /// Node at the end of the path ending at `step`
    pub fn node(&self, step: StepId) -> &N {
        &self.steps[step.0].node
    }

    /// Full path from the root to `step`, inclusive
    pub fn unwind(&self, step: StepId) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(step);
        while let Some(id) = current {
            let step = &self.steps[id.0];
            path.push(step.node.clone());
            current = step.parent;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefix() {
        let mut arena = PathArena::new();
        let a = arena.root("A");
        let b = arena.extend(a, "B");
        let c = arena.extend(b, "C");
        let d = arena.extend(b, "D");

        assert_eq!(arena.unwind(c), vec!["A", "B", "C"]);
        assert_eq!(arena.unwind(d), vec!["A", "B", "D"]);
        assert_eq!(arena.unwind(a), vec!["A"]);
        assert_eq!(*arena.node(d), "D");
        assert_eq!(arena.len(), 4);
    }
}
