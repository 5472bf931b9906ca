//! Start-vertex driver: retry the search from every vertex until one succeeds.

use crate::error::PrimePairsError;

use super::build::build_graph;
use super::observe::{Counter, SearchObserver};
use super::search::Searcher;
use super::types::{Graph, Path, SearchCfg, Solution, Vertex};

/// Find a Hamiltonian path, trying `preferred_start` first and then every other
/// vertex in ascending order.
///
/// Returns the first complete path. If no start succeeds, returns the path left
/// by the last attempt, which is shorter than the graph; callers compare its
/// length with N to tell the two apart.
pub fn find_hamiltonian_path<O: SearchObserver + ?Sized>(
    graph: &Graph,
    preferred_start: Vertex,
    cfg: SearchCfg,
    obs: &mut O,
) -> Path {
    let mut searcher = Searcher::new(graph, cfg);
    let mut last = Path::default();
    let mut failed: Option<Vertex> = None;
    for start in start_order(graph.max_vertex(), preferred_start) {
        if let Some(prev) = failed {
            obs.on_restart(prev, start);
        }
        last = searcher.run(start, obs);
        if last.is_complete(graph) {
            return last;
        }
        failed = Some(start);
    }
    last
}

/// [`find_hamiltonian_path`] starting from `cfg.preferred_start`.
pub fn find_path<O: SearchObserver + ?Sized>(graph: &Graph, cfg: SearchCfg, obs: &mut O) -> Path {
    find_hamiltonian_path(graph, cfg.preferred_start, cfg, obs)
}

/// Run the driver on a prebuilt graph and collect counters.
pub fn solve_graph<O: SearchObserver + ?Sized>(
    graph: &Graph,
    cfg: SearchCfg,
    obs: &mut O,
) -> Solution {
    let mut counter = Counter::default();
    let path = find_path(graph, cfg, &mut (&mut counter, obs));
    Solution {
        n: graph.max_vertex(),
        found: path.is_complete(graph),
        path,
        stats: counter.stats(),
    }
}

/// Build the graph for `[1,n]` and search it silently.
pub fn solve(n: u32, cfg: SearchCfg) -> Result<Solution, PrimePairsError> {
    let graph = build_graph(n)?;
    Ok(solve_graph(&graph, cfg, &mut ()))
}

/// `preferred` (when it is a vertex) followed by the remaining vertices ascending.
pub(super) fn start_order(n: Vertex, preferred: Vertex) -> impl Iterator<Item = Vertex> {
    let first = (1..=n).contains(&preferred).then_some(preferred);
    first
        .into_iter()
        .chain((1..=n).filter(move |&v| Some(v) != first))
}
