//! Topological Sort
//!
//! A small, deterministic topological sorter built on Kahn's algorithm, for
//! callers that need to process items in dependency order: build steps,
//! package installs, task graphs.
//!
//! # Features
//!
//! - **Opaque nodes**: any `Clone + Eq + Hash` identifier works; node contents
//!   are never interpreted.
//! - **Two edge forms**: a positional adjacency list aligned with the input
//!   sequence, or a callback resolving a node's edges on demand.
//! - **Flippable direction**: interpret the supplied edges as incoming instead
//!   of outgoing and the produced order reverses.
//! - **Node filtering**: exclude nodes (and every edge touching them) as if
//!   they never existed in the input.
//! - **Emission callback**: observe each node synchronously, in output order,
//!   the moment it is emitted.
//! - **Deterministic tie-breaking**: the ready set is a stack, so among ties
//!   the most recently readied node is emitted first.
//! - **All-or-nothing**: the caller gets a complete valid order or an error,
//!   never a partial one.
//!
//! # Quick Start
//!
//! ```
//! use toposort::TopoSort;
//!
//! // a -> {b, c}, b -> {c, d}, c -> {d}, d -> {}
//! let order = TopoSort::new(["a", "b", "c", "d"])
//!     .edges(vec![vec!["b", "c"], vec!["c", "d"], vec!["d"], vec![]])
//!     .sort()?;
//!
//! assert_eq!(order, ["a", "b", "c", "d"]);
//! # Ok::<(), toposort::SortError>(())
//! ```
//!
//! # Supplying Edges
//!
//! The positional form pairs the i-th adjacency entry with the i-th input
//! node, and must cover every input node. The callback form is consulted once
//! per non-filtered node:
//!
//! ```
//! use std::collections::HashMap;
//! use toposort::TopoSort;
//!
//! let deps: HashMap<&str, Vec<&str>> =
//!     [("app", vec![]), ("lib", vec!["app"])].into_iter().collect();
//!
//! let order = TopoSort::new(["app", "lib"])
//!     .edges_with(|n| deps[n].clone())
//!     .sort()?;
//!
//! assert_eq!(order, ["lib", "app"]);
//! # Ok::<(), toposort::SortError>(())
//! ```
//!
//! Every edge endpoint must itself appear in the input sequence.
//!
//! # Flipped Edges
//!
//! With [`TopoSort::flip_edges`] the same adjacency data is read as *incoming*
//! edges, reversing dependency direction. For the graph above the flipped sort
//! walks from sinks to sources:
//!
//! ```
//! use toposort::TopoSort;
//!
//! let order = TopoSort::new(["a", "b", "c", "d"])
//!     .edges(vec![vec!["b", "c"], vec!["c", "d"], vec!["d"], vec![]])
//!     .flip_edges(true)
//!     .sort()?;
//!
//! assert_eq!(order, ["d", "c", "b", "a"]);
//! # Ok::<(), toposort::SortError>(())
//! ```
//!
//! # Filtering and Emission
//!
//! ```
//! use toposort::TopoSort;
//!
//! let mut emitted = Vec::new();
//!
//! let order = TopoSort::new(["a", "b", "c", "d"])
//!     .edges(vec![vec!["b", "c"], vec!["c", "d"], vec!["d"], vec![]])
//!     .filter(|n| *n == "c")
//!     .on_emit(|n| emitted.push(*n))
//!     .sort()?;
//!
//! assert_eq!(order, ["a", "b", "d"]); // c and its edges are gone
//! assert_eq!(emitted, order);
//! # Ok::<(), toposort::SortError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`SortResult<T>`], an alias for
//! `Result<T, SortError>`. Configuration problems (no edge source, positional
//! list out of step with the nodes) surface before any node is processed;
//! [`SortError::CycleDetected`] surfaces only after the ready set is exhausted
//! and reports how many nodes could be ordered, not which cycle remained:
//!
//! ```
//! use toposort::{topo_sort, SortError};
//!
//! let result = topo_sort(["a", "b"], vec![vec!["b"], vec!["a"]]);
//! assert!(matches!(result, Err(SortError::CycleDetected { .. })));
//! ```
//!
//! # Optional Tracing Support
//!
//! Enable the `tracing` feature for debug events at graph construction and
//! completion plus per-emission trace events, with zero overhead when the
//! feature is off: the instrumentation is conditionally compiled and the
//! `tracing` crate is not even linked.
//!
//! ```toml
//! [dependencies]
//! toposort = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! Control verbosity with `RUST_LOG=toposort=debug` (or `=trace`) once a
//! `tracing-subscriber` is installed.

// Module declarations
mod edges;
mod error;
mod graph;
mod sort;

// Public re-exports
pub use edges::EdgeSource;
pub use error::{SortError, SortResult};
pub use sort::{topo_sort, TopoSort};
