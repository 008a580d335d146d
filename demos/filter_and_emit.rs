//! # Filtering Nodes and Observing Emission
//!
//! Excludes optional components from an install plan and prints each kept
//! component the moment it is emitted.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example filter_and_emit
//! ```

use toposort::TopoSort;

const OPTIONAL: &[&str] = &["docs", "examples"];

fn main() -> Result<(), toposort::SortError> {
    let order = TopoSort::new(["core", "docs", "api", "examples", "app"])
        .edges(vec![
            vec!["docs", "api"],      // core -> docs, api
            vec![],                   // docs
            vec!["examples", "app"],  // api -> examples, app
            vec![],                   // examples
            vec![],                   // app
        ])
        .filter(|component| OPTIONAL.contains(component))
        .on_emit(|component| println!("installing {component}"))
        .sort()?;

    println!("installed {} components: {order:?}", order.len());
    Ok(())
}
