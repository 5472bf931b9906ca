//! Timing probe for the prime-pairs search over a range of N.
//!
//! Purpose
//! - Give a quick, reproducible feel for how graph build and search scale with N
//!   and how often the driver needs a start other than 1.
//!
//! Usage
//!   cargo run --release -p primepairs --example search_timing -- 60

use std::time::Instant;

use primepairs::api::*;

fn main() {
    let max_n: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(40);

    for n in 1..=max_n {
        let build_start = Instant::now();
        let graph = build_graph(n).expect("n >= 1");
        let build_ms = build_start.elapsed().as_secs_f64() * 1e3;

        let search_start = Instant::now();
        let solution = solve_graph(&graph, SearchCfg::default(), &mut ());
        let search_ms = search_start.elapsed().as_secs_f64() * 1e3;

        if solution.found {
            verify_path(&solution.path, n, &TrialDivision).expect("driver returned a valid path");
        }
        println!(
            "n={n} edges={} found={} starts={} visits={} build_ms={build_ms:.3} search_ms={search_ms:.3}",
            graph.edge_count(),
            solution.found,
            solution.stats.starts_tried,
            solution.stats.visits,
        );
    }
}
