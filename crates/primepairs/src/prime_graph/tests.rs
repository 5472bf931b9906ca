//! Behavioural tests for graph construction, search and the driver.

use super::driver::start_order;
use super::*;
use crate::error::{PathViolation, PrimePairsError};
use crate::primes::{PrimeTable, TrialDivision};
use proptest::prelude::*;

fn run(n: u32, cfg: SearchCfg) -> Path {
    let g = build_graph(n).unwrap();
    find_path(&g, cfg, &mut ())
}

fn with_order(order: ExploreOrder) -> SearchCfg {
    SearchCfg {
        order,
        ..SearchCfg::default()
    }
}

#[test]
fn build_rejects_empty_range() {
    assert_eq!(build_graph(0), Err(PrimePairsError::EmptyRange(0)));
    assert_eq!(
        build_graph_with(0, &TrialDivision),
        Err(PrimePairsError::EmptyRange(0))
    );
}

#[test]
fn n4_graph_has_exactly_the_prime_sum_edges() {
    let g = build_graph(4).unwrap();
    assert_eq!(g.len(), 4);
    assert_eq!(g.neighbors(1), &[2, 4]); // 3, 5
    assert_eq!(g.neighbors(2), &[1, 3]); // 3, 5
    assert_eq!(g.neighbors(3), &[2, 4]); // 5, 7
    assert_eq!(g.neighbors(4), &[1, 3]); // 5, 7
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn single_vertex_graph_has_no_edges_and_a_trivial_path() {
    let g = build_graph(1).unwrap();
    assert!(g.neighbors(1).is_empty());
    assert_eq!(g.edge_count(), 0);
    let p = find_path(&g, SearchCfg::default(), &mut ());
    assert_eq!(p.as_slice(), &[1]);
    assert!(p.is_complete(&g));
}

#[test]
fn n2_has_the_single_pair() {
    let p = run(2, SearchCfg::default());
    assert_eq!(p.as_slice(), &[1, 2]);
}

#[test]
fn n4_path_depends_on_order_but_is_always_valid() {
    assert_eq!(run(4, with_order(ExploreOrder::Ascending)).as_slice(), &[1, 2, 3, 4]);
    assert_eq!(run(4, with_order(ExploreOrder::Descending)).as_slice(), &[1, 4, 3, 2]);
    let shuffled = run(4, with_order(ExploreOrder::Shuffled { seed: 7 }));
    assert!(verify_path(&shuffled, 4, &TrialDivision).is_ok());
}

#[test]
fn n9_is_found_from_vertex_one() {
    let g = build_graph(9).unwrap();
    let mut counter = Counter::default();
    let p = find_path(&g, SearchCfg::default(), &mut counter);
    assert_eq!(p.len(), 9);
    assert_eq!(p[0], 1);
    assert_eq!(counter.starts, 1);
    assert_eq!(counter.restarts, 0);
    verify_path(&p, 9, &TrialDivision).unwrap();
}

#[test]
fn hamilton_from_outside_the_graph_returns_empty() {
    let g = build_graph(5).unwrap();
    let mut counter = Counter::default();
    assert!(hamilton(&g, 0, SearchCfg::default(), &mut counter).is_empty());
    assert!(hamilton(&g, 6, SearchCfg::default(), &mut counter).is_empty());
    assert_eq!(counter, Counter::default());
}

#[test]
fn hamilton_exhausts_to_an_empty_path() {
    // Star centred on 1: no Hamiltonian path starts at the centre.
    let g = Graph::from_edges(3, &[(1, 2), (1, 3)]).unwrap();
    let mut counter = Counter::default();
    let p = hamilton(&g, 1, SearchCfg::default(), &mut counter);
    assert!(p.is_empty());
    assert_eq!(counter.visits, 3);
    assert_eq!(counter.backtracks, 3);
}

#[test]
fn driver_falls_back_to_later_starts() {
    let g = Graph::from_edges(3, &[(1, 2), (1, 3)]).unwrap();
    let mut counter = Counter::default();
    let p = find_path(&g, SearchCfg::default(), &mut counter);
    assert_eq!(p.as_slice(), &[2, 1, 3]);
    assert_eq!(counter.starts, 2);
    assert_eq!(counter.restarts, 1);
    assert_eq!(counter.visits, 6);
    assert_eq!(counter.backtracks, 3);
}

#[test]
fn driver_tries_every_start_before_reporting_failure() {
    let g = Graph::from_edges(4, &[(1, 2), (3, 4)]).unwrap();
    let mut counter = Counter::default();
    let p = find_path(&g, SearchCfg::default(), &mut counter);
    assert!(!p.is_complete(&g));
    assert!(p.len() < 4);
    assert_eq!(counter.starts, 4);
    assert_eq!(counter.restarts, 3);

    let sol = solve_graph(&g, SearchCfg::default(), &mut ());
    assert!(!sol.found);
    assert_eq!(sol.stats.starts_tried, 4);
    assert_eq!(sol.stats.restarts, 3);
}

#[test]
fn preferred_start_goes_first_then_the_rest_ascending() {
    assert_eq!(start_order(4, 3).collect::<Vec<_>>(), vec![3, 1, 2, 4]);
    assert_eq!(start_order(4, 1).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(start_order(4, 0).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(start_order(4, 9).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn preferred_start_is_honoured_when_a_path_exists_from_it() {
    let g = build_graph(10).unwrap();
    let p = find_hamiltonian_path(&g, 4, SearchCfg::default(), &mut ());
    assert_eq!(p.len(), 10);
    assert_eq!(p[0], 4);
    verify_path(&p, 10, &TrialDivision).unwrap();
}

#[test]
fn from_edges_validates_input() {
    assert_eq!(Graph::from_edges(0, &[]), Err(PrimePairsError::EmptyRange(0)));
    assert_eq!(
        Graph::from_edges(3, &[(1, 4)]),
        Err(PrimePairsError::VertexOutOfRange { vertex: 4, n: 3 })
    );
    assert_eq!(
        Graph::from_edges(3, &[(2, 2)]),
        Err(PrimePairsError::SelfLoop(2))
    );
    let g = Graph::from_edges(3, &[(3, 1), (1, 3), (2, 1)]).unwrap();
    assert_eq!(g.neighbors(1), &[2, 3]);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn path_renders_as_the_permutation() {
    assert_eq!(Path(vec![1, 4, 3, 2, 5]).to_string(), "[1, 4, 3, 2, 5]");
    assert_eq!(Path(vec![1]).to_string(), "[1]");
    assert_eq!(Path::default().to_string(), "[]");
}

#[test]
fn verify_reports_the_first_violation() {
    let o = TrialDivision;
    assert_eq!(
        verify_path(&[1, 2], 3, &o),
        Err(PathViolation::WrongLength {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(verify_path(&[1, 2, 4], 3, &o), Err(PathViolation::OutOfRange(4)));
    assert_eq!(verify_path(&[1, 2, 1], 3, &o), Err(PathViolation::Repeated(1)));
    assert_eq!(
        verify_path(&[1, 3, 2], 3, &o),
        Err(PathViolation::NotPrime { a: 1, b: 3, sum: 4 })
    );
    assert_eq!(verify_path(&[1, 2, 3], 3, &o), Ok(()));
}

#[test]
fn solve_reports_found_path_and_counters() {
    let sol = solve(6, SearchCfg::default()).unwrap();
    assert!(sol.found);
    assert_eq!(sol.n, 6);
    assert_eq!(sol.path.len(), 6);
    assert_eq!(sol.stats.starts_tried, 1);
    assert_eq!(sol.stats.restarts, 0);
    assert!(sol.stats.visits >= 6);
    assert_eq!(solve(0, SearchCfg::default()), Err(PrimePairsError::EmptyRange(0)));
}

#[test]
fn shuffled_order_is_reproducible_per_seed() {
    let cfg = with_order(ExploreOrder::Shuffled { seed: 42 });
    assert_eq!(run(14, cfg), run(14, cfg));
}

#[test]
fn observers_do_not_change_the_result() {
    for order in [
        ExploreOrder::Ascending,
        ExploreOrder::Descending,
        ExploreOrder::Shuffled { seed: 3 },
    ] {
        let cfg = with_order(order);
        let g = build_graph(12).unwrap();
        let silent = find_path(&g, cfg, &mut ());
        let traced = find_path(&g, cfg, &mut Tracer);
        let mut counter = Counter::default();
        let counted = find_path(&g, cfg, &mut (Tracer, &mut counter));
        assert_eq!(silent, traced);
        assert_eq!(silent, counted);
        assert!(counter.visits >= 12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn graph_is_symmetric_without_self_loops(n in 1u32..80) {
        let g = build_graph(n).unwrap();
        for (v, row) in g.adjacency() {
            prop_assert!(!row.contains(&v));
            prop_assert!(row.windows(2).all(|w| w[0] < w[1]));
            for &w in row {
                prop_assert!(g.neighbors(w).contains(&v));
                prop_assert!(crate::primes::is_prime(u64::from(v) + u64::from(w)));
            }
        }
    }

    #[test]
    fn graph_build_is_idempotent_and_oracle_independent(n in 1u32..60) {
        let a = build_graph(n).unwrap();
        let b = build_graph(n).unwrap();
        let c = build_graph_with(n, &TrialDivision).unwrap();
        let d = build_graph_with(n, &PrimeTable::for_range(n)).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
        prop_assert_eq!(&a, &d);
    }

    #[test]
    fn found_paths_are_prime_pairs_permutations(n in 1u32..=16, seed in any::<u64>()) {
        for order in [ExploreOrder::Ascending, ExploreOrder::Descending, ExploreOrder::Shuffled { seed }] {
            let p = run(n, with_order(order));
            prop_assert_eq!(p.len(), n as usize);
            prop_assert_eq!(verify_path(&p, n, &TrialDivision), Ok(()));
        }
    }
}
