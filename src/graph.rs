//! Graph construction for the sorting phase.
//!
//! Builds the outgoing table and the predecessor (degree) table from the input
//! nodes and the configured edge source, applying the node filter as it goes.
//! The tables are local to one sort invocation and discarded with it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::edges::EdgeSource;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Adjacency bookkeeping for one sort invocation.
///
/// `incoming` is the degree table: each entry holds the node's currently
/// unresolved predecessors, one occurrence per edge. A node is ready exactly
/// when its entry is empty. Every node referenced as an edge endpoint has an
/// entry, so a node first seen as an edge target can still reach zero degree.
pub(crate) struct DependencyGraph<N> {
    /// node -> outgoing edge targets, one occurrence per edge
    pub(crate) outgoing: HashMap<N, Vec<N>>,
    /// node -> unresolved predecessors, one occurrence per edge
    pub(crate) incoming: HashMap<N, Vec<N>>,
    /// nodes in the order they first entered the degree table
    pub(crate) discovered: Vec<N>,
    /// count of non-filtered input nodes; the expected output length
    pub(crate) expected: usize,
}

impl<N: Clone + Eq + Hash> DependencyGraph<N> {
    /// Materialize both tables from the input sequence.
    ///
    /// Nodes for which `skip` returns true are left out entirely, and edges
    /// pointing at a skipped node are dropped at resolution time, so skipped
    /// nodes never hold a degree entry open.
    pub(crate) fn build<F>(nodes: Vec<N>, edges: &mut EdgeSource<'_, N>, skip: F) -> Self
    where
        F: Fn(&N) -> bool,
    {
        let mut graph = DependencyGraph {
            outgoing: HashMap::with_capacity(nodes.len()),
            incoming: HashMap::with_capacity(nodes.len()),
            discovered: Vec::with_capacity(nodes.len()),
            expected: 0,
        };

        for (index, node) in nodes.into_iter().enumerate() {
            if skip(&node) {
                continue;
            }

            let targets: Vec<N> = edges
                .resolve(index, &node)
                .into_iter()
                .filter(|target| !skip(target))
                .collect();

            // The node may already have a degree entry from an earlier edge.
            if let Entry::Vacant(entry) = graph.incoming.entry(node.clone()) {
                graph.discovered.push(node.clone());
                entry.insert(Vec::new());
            }

            for target in &targets {
                match graph.incoming.entry(target.clone()) {
                    Entry::Vacant(entry) => {
                        graph.discovered.push(target.clone());
                        entry.insert(vec![node.clone()]);
                    }
                    Entry::Occupied(mut entry) => entry.get_mut().push(node.clone()),
                }
            }

            graph.outgoing.insert(node, targets);
            graph.expected += 1;
        }

        #[cfg(feature = "tracing")]
        debug!(
            node_count = graph.expected,
            table_size = graph.incoming.len(),
            "dependency graph built"
        );

        graph
    }

    /// Swap the roles of the two tables, reversing traversal direction.
    pub(crate) fn flip(&mut self) {
        std::mem::swap(&mut self.outgoing, &mut self.incoming);
    }

    /// Nodes whose degree entry is already empty, in discovery order.
    ///
    /// Forms the initial ready stack; the last seed is popped first.
    pub(crate) fn seeds(&self) -> Vec<N> {
        self.discovered
            .iter()
            .filter(|node| self.incoming.get(*node).is_some_and(|preds| preds.is_empty()))
            .cloned()
            .collect()
    }
}
