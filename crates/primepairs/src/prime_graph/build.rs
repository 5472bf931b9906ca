//! Graph construction: `v ~ w` iff `v != w` and `v + w` is prime.

use crate::error::PrimePairsError;
use crate::primes::{PrimeOracle, PrimeTable};

use super::types::{Graph, Vertex};

/// Build the prime-sum graph on `1..=n`.
///
/// Precomputes a [`PrimeTable`] up to `2n` so every pair check is a lookup.
pub fn build_graph(n: u32) -> Result<Graph, PrimePairsError> {
    if n < 1 {
        return Err(PrimePairsError::EmptyRange(n));
    }
    let table = PrimeTable::for_range(n);
    build_graph_with(n, &table)
}

/// Build the prime-sum graph on `1..=n` with a caller-supplied oracle.
///
/// The oracle must be correct for every sum up to `2n - 1`.
pub fn build_graph_with<O: PrimeOracle + ?Sized>(
    n: u32,
    oracle: &O,
) -> Result<Graph, PrimePairsError> {
    if n < 1 {
        return Err(PrimePairsError::EmptyRange(n));
    }
    let adj = (1..=n)
        .map(|v| {
            (1..=n)
                .filter(|&w| w != v && oracle.is_prime(pair_sum(v, w)))
                .collect::<Vec<Vertex>>()
        })
        .collect();
    Ok(Graph { adj })
}

#[inline]
pub(crate) fn pair_sum(v: Vertex, w: Vertex) -> u64 {
    u64::from(v) + u64::from(w)
}
