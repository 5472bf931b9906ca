//! Curated API (UNSTABLE).
//!
//! Prefer these re-exports over deep module paths.

// Errors
pub use crate::error::{PathViolation, PrimePairsError};
// Primality
pub use crate::primes::{is_prime, PrimeOracle, PrimeTable, TrialDivision};
// Graph, search and driver
pub use crate::prime_graph::cfg::{DEFAULT_SHUFFLE_SEED, DEFAULT_START};
pub use crate::prime_graph::{
    build_graph, build_graph_with, find_hamiltonian_path, find_path, hamilton, solve, solve_graph,
    verify_path, Counter, ExploreOrder, Graph, Path, SearchCfg, SearchObserver, SearchStats,
    Solution, Tracer, Vertex,
};
