//! Trial-division primality and the oracle trait.

/// Anything that can decide primality for the sums seen during graph build.
pub trait PrimeOracle {
    fn is_prime(&self, x: u64) -> bool;
}

/// Stateless oracle backed by [`is_prime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TrialDivision;

impl PrimeOracle for TrialDivision {
    #[inline]
    fn is_prime(&self, x: u64) -> bool {
        is_prime(x)
    }
}

/// Trial division by 2 and by every odd `d <= ceil(sqrt(x))`.
///
/// Exact for all inputs: 0 and 1 are not prime, 2 is.
pub fn is_prime(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    if x % 2 == 0 {
        return x == 2;
    }
    let bound = ceil_sqrt(x);
    let mut d = 3;
    while d <= bound {
        if x % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest `r` with `r * r >= x`, corrected after the float estimate.
fn ceil_sqrt(x: u64) -> u64 {
    let mut r = (x as f64).sqrt() as u64;
    while r.saturating_mul(r) > x {
        r -= 1;
    }
    while r.saturating_mul(r) < x {
        r += 1;
    }
    r
}
