//! Independent check that a sequence is a prime-pairs arrangement of `[1,N]`.

use crate::error::PathViolation;
use crate::primes::PrimeOracle;

use super::build::pair_sum;
use super::types::Vertex;

/// `Ok` iff `path` is a permutation of `1..=n` whose adjacent pairs all sum to a
/// prime under `oracle`. Reports the first violation found.
pub fn verify_path<O: PrimeOracle + ?Sized>(
    path: &[Vertex],
    n: u32,
    oracle: &O,
) -> Result<(), PathViolation> {
    if path.len() != n as usize {
        return Err(PathViolation::WrongLength {
            expected: n as usize,
            found: path.len(),
        });
    }
    let mut seen = vec![false; n as usize];
    for &v in path {
        if !(1..=n).contains(&v) {
            return Err(PathViolation::OutOfRange(v));
        }
        let slot = &mut seen[(v - 1) as usize];
        if *slot {
            return Err(PathViolation::Repeated(v));
        }
        *slot = true;
    }
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let sum = pair_sum(a, b);
        if !oracle.is_prime(sum) {
            return Err(PathViolation::NotPrime { a, b, sum });
        }
    }
    Ok(())
}
