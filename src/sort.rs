//! The sorting phase and the public API.
//!
//! [`TopoSort`] is a consuming builder: configure the node sequence and the edge
//! source, optionally flip the edge direction, attach an emission callback or a
//! node filter, then call [`sort`](TopoSort::sort). [`topo_sort`] covers the
//! common positional, un-flipped case in one call.

use std::hash::Hash;

use crate::edges::EdgeSource;
use crate::error::{SortError, SortResult};
use crate::graph::DependencyGraph;

#[cfg(feature = "tracing")]
use tracing::{debug, error, trace};

/// Build and run a topological sort over a set of nodes.
///
/// Nodes are opaque caller-supplied identifiers; any `Clone + Eq + Hash` type
/// works. The input order of `nodes` defines tie-break priority among nodes
/// that become ready at the same time (see [`sort`](TopoSort::sort)).
///
/// # Examples
///
/// ```
/// use toposort::TopoSort;
///
/// let order = TopoSort::new(["a", "b", "c", "d"])
///     .edges(vec![
///         vec!["b", "c"], // a -> b, a -> c
///         vec!["c", "d"], // b -> c, b -> d
///         vec!["d"],      // c -> d
///         vec![],
///     ])
///     .sort()?;
///
/// assert_eq!(order, ["a", "b", "c", "d"]);
/// # Ok::<(), toposort::SortError>(())
/// ```
///
/// Edges can also be resolved on demand:
///
/// ```
/// use toposort::TopoSort;
///
/// let order = TopoSort::new([1, 2, 3])
///     .edges_with(|n: &i32| if *n < 3 { vec![n + 1] } else { vec![] })
///     .sort()?;
///
/// assert_eq!(order, [1, 2, 3]);
/// # Ok::<(), toposort::SortError>(())
/// ```
pub struct TopoSort<'a, N> {
    nodes: Vec<N>,
    edges: Option<EdgeSource<'a, N>>,
    flip: bool,
    on_emit: Option<Box<dyn FnMut(&N) + 'a>>,
    filter: Option<Box<dyn Fn(&N) -> bool + 'a>>,
}

impl<'a, N: Clone + Eq + Hash> TopoSort<'a, N> {
    /// Start a sort over the given node sequence.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        TopoSort {
            nodes: nodes.into_iter().collect(),
            edges: None,
            flip: false,
            on_emit: None,
            filter: None,
        }
    }

    /// Supply edges up front.
    ///
    /// Accepts anything convertible into an [`EdgeSource`]; in particular a
    /// `Vec<Vec<N>>` whose i-th entry lists the outgoing edges of the i-th
    /// input node. The list must cover every input node, filtered or not.
    pub fn edges<E>(mut self, edges: E) -> Self
    where
        E: Into<EdgeSource<'a, N>>,
    {
        self.edges = Some(edges.into());
        self
    }

    /// Supply edges lazily via a callback.
    ///
    /// The callback is consulted once per non-filtered input node and never
    /// for filtered ones.
    pub fn edges_with<F>(mut self, edges: F) -> Self
    where
        F: Fn(&N) -> Vec<N> + 'a,
    {
        self.edges = Some(EdgeSource::from_fn(edges));
        self
    }

    /// Interpret the supplied edges as *incoming* rather than outgoing.
    ///
    /// The roles of the two internal tables are swapped after construction,
    /// so the produced order reverses dependency direction: for the same
    /// node/edge data, a flipped sort walks the graph from sinks to sources.
    pub fn flip_edges(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Invoke `action` on each node as it is emitted.
    ///
    /// Called exactly once per output node, synchronously, in output order,
    /// before the node's dependents are resolved. The callback sees the node
    /// by reference; the node itself still ends up in the returned order.
    pub fn on_emit<F>(mut self, action: F) -> Self
    where
        F: FnMut(&N) + 'a,
    {
        self.on_emit = Some(Box::new(action));
        self
    }

    /// Exclude nodes for which `exclude` returns true.
    ///
    /// Excluded nodes take no part in the sort: they hold no degree entry, do
    /// not appear in the output, and do not count toward cycle detection. The
    /// predicate is applied to edge targets as well, so edges to or from an
    /// excluded node are dropped as if the node never existed.
    pub fn filter<F>(mut self, exclude: F) -> Self
    where
        F: Fn(&N) -> bool + 'a,
    {
        self.filter = Some(Box::new(exclude));
        self
    }

    /// Run Kahn's algorithm and return the nodes in dependency order.
    ///
    /// Ready nodes are processed as a stack: among nodes that become ready at
    /// the same time, the most recently readied one is emitted first.
    ///
    /// Every edge endpoint must itself appear in the input sequence. A target
    /// that was never listed as a node still flows through the bookkeeping but
    /// makes the final count check fail.
    ///
    /// # Errors
    ///
    /// - [`SortError::MissingEdgeSource`] / [`SortError::AdjacencyMismatch`]
    ///   if the edge configuration is unusable; detected before any node is
    ///   processed, so the emission callback never fires.
    /// - [`SortError::CycleDetected`] if the graph restricted to non-filtered
    ///   nodes is not acyclic. No partial order is returned and the error does
    ///   not identify the cycle.
    pub fn sort(self) -> SortResult<Vec<N>> {
        let TopoSort {
            nodes,
            edges,
            flip,
            mut on_emit,
            filter,
        } = self;

        let mut edges = edges.ok_or(SortError::MissingEdgeSource)?;
        edges.check_alignment(nodes.len())?;

        #[cfg(feature = "tracing")]
        debug!(node_count = nodes.len(), flip, "starting topological sort");

        let skip = |node: &N| filter.as_ref().is_some_and(|exclude| exclude(node));
        let mut graph = DependencyGraph::build(nodes, &mut edges, skip);

        if flip {
            graph.flip();
        }

        let mut ready = graph.seeds();
        let mut sorted = Vec::with_capacity(graph.expected);

        while let Some(node) = ready.pop() {
            if let Some(action) = on_emit.as_mut() {
                action(&node);
            }

            #[cfg(feature = "tracing")]
            trace!(emitted = sorted.len() + 1, ready = ready.len(), "node emitted");

            if let Some(targets) = graph.outgoing.get(&node) {
                for target in targets {
                    if let Some(predecessors) = graph.incoming.get_mut(target) {
                        // One occurrence per resolution: duplicate edges are
                        // independent constraints. Order within the entry is
                        // irrelevant, only emptiness is.
                        if let Some(position) = predecessors.iter().position(|p| p == &node) {
                            predecessors.swap_remove(position);
                            if predecessors.is_empty() {
                                ready.push(target.clone());
                            }
                        }
                    }
                }
            }

            sorted.push(node);
        }

        if sorted.len() != graph.expected {
            #[cfg(feature = "tracing")]
            error!(
                sorted = sorted.len(),
                expected = graph.expected,
                "topological sort failed"
            );

            return Err(SortError::CycleDetected {
                sorted: sorted.len(),
                expected: graph.expected,
            });
        }

        #[cfg(feature = "tracing")]
        debug!(sorted = sorted.len(), "topological sort completed");

        Ok(sorted)
    }
}

/// Sort `nodes` against a positional adjacency list.
///
/// Shorthand for the common case; equivalent to
/// `TopoSort::new(nodes).edges(adjacency).sort()`. Every edge endpoint must
/// itself appear in `nodes`.
///
/// # Examples
///
/// ```
/// use toposort::topo_sort;
///
/// let order = topo_sort(["lib", "app"], vec![vec!["app"], vec![]])?;
/// assert_eq!(order, ["lib", "app"]);
/// # Ok::<(), toposort::SortError>(())
/// ```
///
/// # Errors
///
/// Returns [`SortError::AdjacencyMismatch`] if `adjacency` does not cover
/// every node, and [`SortError::CycleDetected`] if the graph is not acyclic.
pub fn topo_sort<N, I>(nodes: I, adjacency: Vec<Vec<N>>) -> SortResult<Vec<N>>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = N>,
{
    TopoSort::new(nodes).edges(adjacency).sort()
}
