//! Single-start Hamiltonian path search over an explicit frontier.
//!
//! The frontier holds `Enter(x)` and `Leave` steps. Expanding `v` pushes, for
//! every unvisited neighbour `x`, a `Leave` followed by `Enter(x)`; the last
//! pushed neighbour is explored first. Popping `Leave` retracts the newest path
//! vertex. The frontier starts as `[Leave, Enter(start)]`, so exhausting it
//! leaves the path empty.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::observe::SearchObserver;
use super::types::{ExploreOrder, Graph, Path, SearchCfg, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Enter(Vertex),
    Leave,
}

/// Search for a Hamiltonian path starting at `start`.
///
/// Returns a complete path on success. On exhaustion, or when `start` is not a
/// vertex of `graph`, the returned path is shorter than the graph (empty).
pub fn hamilton<O: SearchObserver + ?Sized>(
    graph: &Graph,
    start: Vertex,
    cfg: SearchCfg,
    obs: &mut O,
) -> Path {
    Searcher::new(graph, cfg).run(start, obs)
}

/// Reusable search buffers; the driver keeps one across all start vertices.
pub(super) struct Searcher<'a> {
    g: &'a Graph,
    cfg: SearchCfg,
    on_path: Vec<bool>, // on_path[v - 1]
    path: Vec<Vertex>,
    frontier: Vec<Step>,
    candidates: Vec<Vertex>,
    rng: Option<StdRng>,
}

impl<'a> Searcher<'a> {
    pub(super) fn new(g: &'a Graph, cfg: SearchCfg) -> Self {
        Self {
            g,
            cfg,
            on_path: vec![false; g.len()],
            path: Vec::with_capacity(g.len()),
            frontier: Vec::new(),
            candidates: Vec::new(),
            rng: None,
        }
    }

    pub(super) fn run<O: SearchObserver + ?Sized>(&mut self, start: Vertex, obs: &mut O) -> Path {
        self.reset(start);
        if !self.g.contains(start) {
            return Path::default();
        }
        obs.on_start(start);
        let size = self.g.len();
        self.frontier.push(Step::Leave);
        self.frontier.push(Step::Enter(start));
        while let Some(step) = self.frontier.pop() {
            match step {
                Step::Enter(v) => {
                    obs.on_visit(v, &self.path);
                    self.path.push(v);
                    self.on_path[(v - 1) as usize] = true;
                    if self.path.len() == size {
                        break;
                    }
                    self.expand(v);
                }
                Step::Leave => {
                    if let Some(v) = self.path.pop() {
                        self.on_path[(v - 1) as usize] = false;
                        obs.on_backtrack(v, &self.path);
                    }
                }
            }
        }
        let found = std::mem::take(&mut self.path);
        self.path.reserve(size);
        Path(found)
    }

    fn reset(&mut self, start: Vertex) {
        self.path.clear();
        self.frontier.clear();
        self.on_path.iter_mut().for_each(|b| *b = false);
        self.rng = match self.cfg.order {
            ExploreOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(mix(seed, start))),
            _ => None,
        };
    }

    /// Push `Leave, Enter(x)` for every neighbour of `v` not on the path.
    fn expand(&mut self, v: Vertex) {
        let on_path = &self.on_path;
        self.candidates.clear();
        self.candidates.extend(
            self.g
                .neighbors(v)
                .iter()
                .copied()
                .filter(|&x| !on_path[(x - 1) as usize]),
        );
        match self.cfg.order {
            // Last pushed is explored first.
            ExploreOrder::Ascending => self.candidates.reverse(),
            ExploreOrder::Descending => {}
            ExploreOrder::Shuffled { .. } => {
                if let Some(rng) = self.rng.as_mut() {
                    self.candidates.shuffle(rng);
                }
            }
        }
        for &x in &self.candidates {
            self.frontier.push(Step::Leave);
            self.frontier.push(Step::Enter(x));
        }
    }
}

/// SplitMix64-style mixing of the seed with the start vertex.
fn mix(seed: u64, start: Vertex) -> u64 {
    let mut x = seed ^ u64::from(start).wrapping_mul(0x9e3779b97f4a7c15);
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}
