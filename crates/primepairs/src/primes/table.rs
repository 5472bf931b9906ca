//! Precomputed prime table for O(1) membership checks.

use super::oracle::{is_prime, PrimeOracle};

/// All primes `<= limit`, as a sorted list plus a membership bitmap.
///
/// Built once per graph build and read-only afterwards. Queries above `limit`
/// are outside the contract (checked in debug builds only).
#[derive(Clone, Debug)]
pub struct PrimeTable {
    limit: u64,
    primes: Vec<u64>,
    member: Vec<bool>,
}

impl PrimeTable {
    /// Table of every prime `<= limit`, filled by trial division.
    pub fn up_to(limit: u64) -> Self {
        let len = usize::try_from(limit).map_or(usize::MAX, |l| l.saturating_add(1));
        let mut member = vec![false; len];
        let mut primes = Vec::new();
        for x in 2..=limit {
            if is_prime(x) {
                member[x as usize] = true;
                primes.push(x);
            }
        }
        Self {
            limit,
            primes,
            member,
        }
    }

    /// Table covering every pair sum of distinct values in `[1,n]`.
    pub fn for_range(n: u32) -> Self {
        Self::up_to(2 * u64::from(n))
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Sorted ascending.
    #[inline]
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    #[inline]
    pub fn contains(&self, x: u64) -> bool {
        debug_assert!(
            x <= self.limit,
            "prime table queried at {x} beyond its limit {}",
            self.limit
        );
        usize::try_from(x)
            .ok()
            .and_then(|i| self.member.get(i))
            .copied()
            .unwrap_or(false)
    }
}

impl PrimeOracle for PrimeTable {
    #[inline]
    fn is_prime(&self, x: u64) -> bool {
        self.contains(x)
    }
}
