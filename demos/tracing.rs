//! # Tracing Example
//!
//! Demonstrates the optional tracing feature for visibility into graph
//! construction and emission order.
//!
//! ## Running This Example
//!
//! ```bash
//! # Debug level: graph construction and completion events
//! RUST_LOG=toposort=debug cargo run --example tracing --features tracing
//!
//! # Trace level: one event per emitted node
//! RUST_LOG=toposort=trace cargo run --example tracing --features tracing
//! ```

use toposort::TopoSort;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), toposort::SortError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toposort=debug")),
        )
        .init();

    let order = TopoSort::new(["a", "b", "c", "d"])
        .edges(vec![vec!["b", "c"], vec!["c", "d"], vec!["d"], vec![]])
        .sort()?;

    println!("order: {order:?}");
    Ok(())
}
