//! Prime pairs: arrange `[1,N]` so that every adjacent pair sums to a prime.
//!
//! The numbers become vertices of an undirected graph with an edge wherever the
//! sum is prime; an arrangement is a Hamiltonian path in that graph.
//!
//! API Policy
//! - `api` is the curated surface used by the CLI and benches. Module paths
//!   below it may move.

pub mod api;
pub mod error;
pub mod prime_graph;
pub mod primes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PathViolation, PrimePairsError};

/// Common imports for callers.
pub mod prelude {
    pub use crate::prime_graph::{
        build_graph, find_path, solve, ExploreOrder, Graph, Path, SearchCfg, Solution, Vertex,
    };
    pub use crate::primes::{is_prime, PrimeOracle, PrimeTable};
}
