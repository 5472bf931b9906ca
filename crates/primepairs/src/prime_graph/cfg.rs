//! Search defaults (internal).
//!
//! Policy
//! - The driver always starts at vertex 1 unless told otherwise. A path from 1
//!   has been found for every N tried so far, but that is not proven, so the
//!   driver still falls back to every other start.

use super::types::Vertex;

/// First start vertex tried by the driver.
pub const DEFAULT_START: Vertex = 1;
/// Seed used by `ExploreOrder::Shuffled` when the caller does not pick one.
pub const DEFAULT_SHUFFLE_SEED: u64 = 0x5eed_0f_9a1e;
