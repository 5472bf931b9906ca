//! Error types for invalid input and for path verification.
//!
//! The search itself never fails: "no path" is an ordinary outcome reported as a
//! path shorter than N. These errors cover malformed input only.

use thiserror::Error;

use crate::prime_graph::Vertex;

/// Rejected input to graph construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimePairsError {
    #[error("N must be at least 1, got {0}")]
    EmptyRange(u32),
    #[error("vertex {vertex} is outside [1,{n}]")]
    VertexOutOfRange { vertex: Vertex, n: u32 },
    #[error("self-loop on vertex {0}")]
    SelfLoop(Vertex),
}

/// First reason a sequence fails to be a prime-pairs arrangement of `[1,N]`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathViolation {
    #[error("expected {expected} vertices, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("vertex {0} is outside the range")]
    OutOfRange(Vertex),
    #[error("vertex {0} appears more than once")]
    Repeated(Vertex),
    #[error("{a} + {b} = {sum} is not prime")]
    NotPrime { a: Vertex, b: Vertex, sum: u64 },
}
