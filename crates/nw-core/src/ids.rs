use core::fmt;
use core::num::NonZeroUsize;

/// Public, 1-based identifier of a node in a network.
///
/// - the wrapped value is the id callers see (`1..=N`)
/// - `NonZero` enables `Option<NodeId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Create a NodeId from a 0-based matrix index.
    pub fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// The 1-based id.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Recover the 0-based matrix index.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.get())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
