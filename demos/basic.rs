//! # Getting Started: Sorting a Dependency Graph
//!
//! Sorts a small build graph with the positional edge form.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example basic
//! ```
//!
//! ## Expected Output
//! ```text
//! build order: ["toolchain", "codegen", "parser", "cli"]
//! ```

use toposort::TopoSort;

fn main() -> Result<(), toposort::SortError> {
    // Each list holds the targets the node points at: a component must be
    // built before everything it points at.
    let order = TopoSort::new(["toolchain", "parser", "codegen", "cli"])
        .edges(vec![
            vec!["parser", "codegen"], // toolchain -> parser, codegen
            vec!["cli"],               // parser -> cli
            vec!["parser"],            // codegen -> parser
            vec![],
        ])
        .sort()?;

    println!("build order: {order:?}");
    Ok(())
}
