//! # Flipped Edges: Declaring Prerequisites Instead of Dependents
//!
//! The same adjacency data can be read in either direction. Here each node
//! lists its *prerequisites*; flipping the edges makes prerequisites come
//! first without rewriting the data.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example flipped
//! ```

use std::collections::HashMap;
use toposort::TopoSort;

fn main() -> Result<(), toposort::SortError> {
    let prerequisites: HashMap<&str, Vec<&str>> = [
        ("deploy", vec!["test", "package"]),
        ("package", vec!["build"]),
        ("test", vec!["build"]),
        ("build", vec![]),
    ]
    .into_iter()
    .collect();

    let order = TopoSort::new(["deploy", "package", "test", "build"])
        .edges_with(|step| prerequisites[step].clone())
        .flip_edges(true)
        .sort()?;

    println!("pipeline: {order:?}");
    Ok(())
}
