//! Run record written next to a `--out` solution file.
//!
//! `n6.json` gets `n6.provenance.json`: which build produced it, with which
//! search settings, and how much work the search did.

use anyhow::{Context, Result};
use primepairs::api::{ExploreOrder, SearchCfg, SearchStats, Solution, Vertex};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct Payload {
    pub version: &'static str,
    pub code_rev: Option<&'static str>,
    pub n: u32,
    pub found: bool,
    pub order: ExploreOrder,
    pub preferred_start: Vertex,
    pub stats: SearchStats,
    pub solution_file: String,
}

impl Payload {
    pub fn new(solution: &Solution, cfg: &SearchCfg, solution_file: &Path) -> Self {
        Self {
            version: primepairs::VERSION,
            code_rev: code_rev(),
            n: solution.n,
            found: solution.found,
            order: cfg.order,
            preferred_start: cfg.preferred_start,
            stats: solution.stats,
            solution_file: solution_file.to_string_lossy().into_owned(),
        }
    }
}

/// Commit baked in at build time via `GIT_COMMIT`, if any.
pub fn code_rev() -> Option<&'static str> {
    option_env!("GIT_COMMIT").filter(|rev| !rev.is_empty())
}

pub fn sidecar_path(solution_file: &Path) -> PathBuf {
    solution_file.with_extension("provenance.json")
}

/// Write the sidecar for `payload.solution_file` and return its path.
pub fn write_sidecar(payload: &Payload) -> Result<PathBuf> {
    let path = sidecar_path(Path::new(&payload.solution_file));
    std::fs::write(&path, serde_json::to_vec_pretty(payload)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
