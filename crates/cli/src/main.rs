use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use primepairs::api::*;
use serde::Serialize;
use std::path::{Path as FsPath, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser, Debug)]
#[command(name = "primepairs")]
#[command(
    about = "Arrange positive numbers in the range [1,N] such that all adjacent pairs sum to a prime number"
)]
struct Cmd {
    /// Enable additional output (search trace on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Find one arrangement of [1,N]
    Solve(SolveArgs),
    /// Solve every N in an inclusive range and print one summary line per N
    Scan {
        from: u32,
        to: u32,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// The inclusive upper limit of the range
    #[arg(value_name = "N", default_value_t = 9)]
    n: u32,
    /// Print the graph as well as the sequence
    #[arg(short = 'g', long)]
    print_graph: bool,
    /// Write the solution as JSON (plus a provenance sidecar)
    #[arg(long)]
    out: Option<PathBuf>,
    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args, Debug, Clone, Copy)]
struct SearchArgs {
    /// Which unvisited neighbour to explore first
    #[arg(long, value_enum, default_value_t = OrderArg::Ascending)]
    order: OrderArg,
    /// Seed for `--order shuffled`
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_SEED)]
    seed: u64,
    /// First start vertex to try
    #[arg(long, default_value_t = DEFAULT_START)]
    start: Vertex,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OrderArg {
    Ascending,
    Descending,
    Shuffled,
}

impl SearchArgs {
    fn cfg(&self) -> SearchCfg {
        let order = match self.order {
            OrderArg::Ascending => ExploreOrder::Ascending,
            OrderArg::Descending => ExploreOrder::Descending,
            OrderArg::Shuffled => ExploreOrder::Shuffled { seed: self.seed },
        };
        SearchCfg {
            order,
            preferred_start: self.start,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(max_level(cmd.verbose))
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Scan { from, to, search } => scan(from, to, search),
        Action::Report => report(),
    }
}

/// `-v` must let every `Tracer` event through.
fn max_level(verbose: bool) -> Level {
    if verbose {
        Tracer::LEVEL
    } else {
        Level::INFO
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let cfg = args.search.cfg();
    tracing::debug!(n = args.n, "building graph");
    let graph = build_graph(args.n)?;
    if args.print_graph {
        for line in render_adjacency(&graph) {
            println!("{line}");
        }
    }
    tracing::debug!(edges = graph.edge_count(), "done building graph");

    let solution = solve_graph(&graph, cfg, &mut Tracer);
    tracing::info!(
        n = solution.n,
        found = solution.found,
        visits = solution.stats.visits,
        starts = solution.stats.starts_tried,
        restarts = solution.stats.restarts,
        "solve"
    );
    println!("{}", render_outcome(&solution));

    if let Some(out) = args.out {
        write_solution(&out, &solution, &cfg)?;
    }
    Ok(())
}

fn scan(from: u32, to: u32, search: SearchArgs) -> Result<()> {
    if from < 1 || from > to {
        bail!("scan range must satisfy 1 <= FROM <= TO, got [{from},{to}]");
    }
    let cfg = search.cfg();
    tracing::info!(from, to, ?cfg, "scan");
    for n in from..=to {
        let graph = build_graph(n)?;
        let solution = solve_graph(&graph, cfg, &mut Tracer);
        println!("{}", render_scan_line(&solution));
    }
    Ok(())
}

#[derive(Serialize)]
struct Report {
    code_rev: Option<&'static str>,
    version: &'static str,
}

fn report() -> Result<()> {
    let obj = Report {
        code_rev: provenance::code_rev(),
        version: primepairs::VERSION,
    };
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// One `k: [neighbours]` line per vertex.
fn render_adjacency(graph: &Graph) -> Vec<String> {
    graph
        .adjacency()
        .map(|(v, row)| format!("{v}: {row:?}"))
        .collect()
}

fn render_outcome(solution: &Solution) -> String {
    if solution.found {
        solution.path.to_string()
    } else {
        format!(
            "No prime-pairs path found with the numbers [1,{}]",
            solution.n
        )
    }
}

fn render_scan_line(solution: &Solution) -> String {
    format!(
        "n={} found={} visits={} backtracks={} starts={} restarts={}",
        solution.n,
        solution.found,
        solution.stats.visits,
        solution.stats.backtracks,
        solution.stats.starts_tried,
        solution.stats.restarts
    )
}

fn write_solution(out: &FsPath, solution: &Solution, cfg: &SearchCfg) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(solution)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(&provenance::Payload::new(solution, cfg, out))?;
    tracing::info!(out = %out.display(), provenance = %sidecar.display(), "wrote solution");
    Ok(())
}
