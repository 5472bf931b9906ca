//! Data types for the prime-sum graph and search results.
//!
//! Kept small and explicit to make `build`, `search` and `driver` easy to read.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use super::cfg::DEFAULT_START;
use crate::error::PrimePairsError;

/// A number in `[1,N]`; identity is its value.
pub type Vertex = u32;

/// Undirected graph on `1..=N` stored as adjacency lists.
///
/// Invariants: no self-loops; `w ∈ neighbors(v)` iff `v ∈ neighbors(w)`;
/// every list is ascending. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    pub(super) adj: Vec<Vec<Vertex>>, // adj[v - 1] = neighbours of v
}

impl Graph {
    /// Undirected graph on `1..=n` with the given edges (duplicates are merged).
    ///
    /// Useful for graphs that do not come from pair sums, e.g. disconnected ones.
    pub fn from_edges(n: u32, edges: &[(Vertex, Vertex)]) -> Result<Self, PrimePairsError> {
        if n < 1 {
            return Err(PrimePairsError::EmptyRange(n));
        }
        let mut adj = vec![Vec::new(); n as usize];
        for &(v, w) in edges {
            for x in [v, w] {
                if !(1..=n).contains(&x) {
                    return Err(PrimePairsError::VertexOutOfRange { vertex: x, n });
                }
            }
            if v == w {
                return Err(PrimePairsError::SelfLoop(v));
            }
            adj[(v - 1) as usize].push(w);
            adj[(w - 1) as usize].push(v);
        }
        for row in &mut adj {
            row.sort_unstable();
            row.dedup();
        }
        Ok(Self { adj })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Largest vertex, i.e. N.
    #[inline]
    pub fn max_vertex(&self) -> Vertex {
        self.adj.len() as Vertex
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        v >= 1 && (v as usize) <= self.adj.len()
    }

    /// Ascending neighbours of `v`; empty for vertices outside the graph.
    #[inline]
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        if self.contains(v) {
            &self.adj[(v - 1) as usize]
        } else {
            &[]
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        1..=self.max_vertex()
    }

    /// `(v, neighbours of v)` for every vertex, ascending.
    pub fn adjacency(&self) -> impl Iterator<Item = (Vertex, &[Vertex])> {
        self.adj
            .iter()
            .enumerate()
            .map(|(i, row)| (i as Vertex + 1, row.as_slice()))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Ordered sequence of distinct vertices. Complete when it covers the graph.
///
/// Renders as the permutation itself, e.g. `[1, 4, 3, 2, 5]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(pub Vec<Vertex>);

impl Path {
    #[inline]
    pub fn is_complete(&self, graph: &Graph) -> bool {
        !graph.is_empty() && self.0.len() == graph.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Vertex> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Vertex];
    fn deref(&self) -> &[Vertex] {
        &self.0
    }
}

impl From<Vec<Vertex>> for Path {
    fn from(v: Vec<Vertex>) -> Self {
        Self(v)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Order in which the unvisited neighbours of a vertex are explored.
///
/// The candidate set is always "neighbour list minus current path"; this only
/// decides which candidate is tried first. It changes which valid path is
/// found, never whether one is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploreOrder {
    /// Smallest unvisited neighbour first.
    #[default]
    Ascending,
    /// Largest first: candidates pushed in list order onto the frontier.
    Descending,
    /// Seeded permutation per expansion; reproducible for a given seed and start.
    Shuffled { seed: u64 },
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    pub order: ExploreOrder,
    /// First start vertex tried by the driver; the rest follow in ascending order.
    pub preferred_start: Vertex,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            order: ExploreOrder::Ascending,
            preferred_start: DEFAULT_START,
        }
    }
}

/// Work counters accumulated over all start vertices of one driver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub visits: u64,
    pub backtracks: u64,
    pub starts_tried: u32,
    /// Times the driver moved on after a start found no full path.
    pub restarts: u32,
}

/// Outcome of solving one N.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub n: u32,
    pub found: bool,
    /// Complete when `found`; otherwise whatever the last search left (usually empty).
    pub path: Path,
    pub stats: SearchStats,
}
