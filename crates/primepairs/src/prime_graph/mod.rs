//! Prime-sum graph: builder, Hamiltonian path search, and start-vertex driver.
//!
//! Purpose
//! - Connect `v` and `w` in `[1,N]` whenever `v + w` is prime, then look for a
//!   Hamiltonian path. Any such path is an arrangement of `[1,N]` in which all
//!   adjacent pairs sum to a prime.
//!
//! Why this design
//! - The search is exhaustive backtracking over an explicit frontier stack of
//!   enter/leave steps, so depth is bounded by the heap and not the call stack.
//! - One path buffer is pushed and popped in place; the graph is read-only.
//! - Diagnostics go through [`SearchObserver`]; observers see every visit and
//!   backtrack but cannot steer the search.
//!
//! Layout
//! - `types.rs` (graph, path, config, stats), `build.rs` (graph construction),
//!   `search.rs` (single-start search), `driver.rs` (retry over starts),
//!   `observe.rs` (tracing and counting hooks), `verify.rs` (path checker).

mod build;
pub mod cfg;
mod driver;
mod observe;
mod search;
mod types;
mod verify;

pub use build::{build_graph, build_graph_with};
pub use driver::{find_hamiltonian_path, find_path, solve, solve_graph};
pub use observe::{Counter, SearchObserver, Tracer};
pub use search::hamilton;
pub use types::{ExploreOrder, Graph, Path, SearchCfg, SearchStats, Solution, Vertex};
pub use verify::verify_path;

#[cfg(test)]
mod tests;
