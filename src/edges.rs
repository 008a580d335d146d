//! Edge sources for graph construction.
//!
//! The edges of the graph can be supplied in two ways: as a positional adjacency
//! list aligned with the input node sequence, or as a callback that resolves a
//! node's outgoing edges on demand. [`EdgeSource`] is the union of the two forms;
//! graph construction consumes it one node at a time.

use crate::error::{SortError, SortResult};

/// Where the outgoing edges of each node come from.
///
/// With [`flip_edges`](crate::TopoSort::flip_edges) enabled the same data is
/// interpreted as *incoming* edges instead; the source itself is direction-agnostic.
pub enum EdgeSource<'a, N> {
    /// Positional form: the i-th entry lists the outgoing edges of the i-th input node
    Adjacency(Vec<Vec<N>>),
    /// Callback form: resolves a node's outgoing edges on demand
    Callback(Box<dyn Fn(&N) -> Vec<N> + 'a>),
}

impl<'a, N> EdgeSource<'a, N> {
    /// Wrap an edge-resolving function.
    pub fn from_fn<F>(edges: F) -> Self
    where
        F: Fn(&N) -> Vec<N> + 'a,
    {
        EdgeSource::Callback(Box::new(edges))
    }

    /// Check the positional form against the number of input nodes.
    ///
    /// Runs before any node is processed; the callback form always passes.
    pub(crate) fn check_alignment(&self, node_count: usize) -> SortResult<()> {
        match self {
            EdgeSource::Adjacency(lists) if lists.len() != node_count => {
                Err(SortError::AdjacencyMismatch {
                    nodes: node_count,
                    lists: lists.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Resolve the outgoing edges of `node`, the `index`-th node of the input sequence.
    ///
    /// The positional form gives up ownership of its entry; each entry is read once.
    pub(crate) fn resolve(&mut self, index: usize, node: &N) -> Vec<N> {
        match self {
            EdgeSource::Adjacency(lists) => {
                lists.get_mut(index).map(std::mem::take).unwrap_or_default()
            }
            EdgeSource::Callback(edges) => edges(node),
        }
    }
}

impl<'a, N> From<Vec<Vec<N>>> for EdgeSource<'a, N> {
    fn from(lists: Vec<Vec<N>>) -> Self {
        EdgeSource::Adjacency(lists)
    }
}

impl<N> std::fmt::Debug for EdgeSource<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeSource::Adjacency(lists) => {
                f.debug_tuple("Adjacency").field(&lists.len()).finish()
            }
            EdgeSource::Callback(_) => f.debug_tuple("Callback").finish(),
        }
    }
}
