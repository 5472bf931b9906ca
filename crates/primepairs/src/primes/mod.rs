//! Primality oracles.
//!
//! Purpose
//! - Answer "is `x` prime?" for the pair sums that define graph edges.
//! - Two interchangeable implementations behind [`PrimeOracle`]: plain trial
//!   division, and a [`PrimeTable`] precomputed once per graph build.
//!
//! Contract
//! - A table only answers for `x <= table.limit()`. Building the graph for N
//!   needs a table covering `2N`; [`PrimeTable::for_range`] does exactly that.

mod oracle;
mod table;

pub use oracle::{is_prime, PrimeOracle, TrialDivision};
pub use table::PrimeTable;
