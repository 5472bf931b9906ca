//! Diagnostic hooks for the search.
//!
//! Observers are notified of each search start, each visit, each backtrack, and
//! each driver retry. They get read-only views, so they cannot change results.

use tracing::Level;

use super::types::{SearchStats, Vertex};

/// Callbacks fired by [`hamilton`](super::hamilton) and the driver.
///
/// All methods default to no-ops; `()` is the silent observer.
pub trait SearchObserver {
    /// A single-start search begins at `start`.
    fn on_start(&mut self, _start: Vertex) {}
    /// `vertex` is about to be appended to `path`.
    fn on_visit(&mut self, _vertex: Vertex, _path: &[Vertex]) {}
    /// `vertex` was removed; `path` is what remains.
    fn on_backtrack(&mut self, _vertex: Vertex, _path: &[Vertex]) {}
    /// No full path from `failed`; the driver moves on to `next`.
    fn on_restart(&mut self, _failed: Vertex, _next: Vertex) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_start(&mut self, start: Vertex) {
        (**self).on_start(start)
    }
    fn on_visit(&mut self, vertex: Vertex, path: &[Vertex]) {
        (**self).on_visit(vertex, path)
    }
    fn on_backtrack(&mut self, vertex: Vertex, path: &[Vertex]) {
        (**self).on_backtrack(vertex, path)
    }
    fn on_restart(&mut self, failed: Vertex, next: Vertex) {
        (**self).on_restart(failed, next)
    }
}

/// Fan out to two observers, left first.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn on_start(&mut self, start: Vertex) {
        self.0.on_start(start);
        self.1.on_start(start);
    }
    fn on_visit(&mut self, vertex: Vertex, path: &[Vertex]) {
        self.0.on_visit(vertex, path);
        self.1.on_visit(vertex, path);
    }
    fn on_backtrack(&mut self, vertex: Vertex, path: &[Vertex]) {
        self.0.on_backtrack(vertex, path);
        self.1.on_backtrack(vertex, path);
    }
    fn on_restart(&mut self, failed: Vertex, next: Vertex) {
        self.0.on_restart(failed, next);
        self.1.on_restart(failed, next);
    }
}

/// Emits `tracing` events at DEBUG for every start, visit, backtrack and retry.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracer;

impl Tracer {
    /// Level of every event this observer emits.
    pub const LEVEL: Level = Level::DEBUG;
}

impl SearchObserver for Tracer {
    fn on_start(&mut self, start: Vertex) {
        tracing::event!(Tracer::LEVEL, start, "search");
    }
    fn on_visit(&mut self, vertex: Vertex, path: &[Vertex]) {
        tracing::event!(Tracer::LEVEL, vertex, ?path, "visit");
    }
    fn on_backtrack(&mut self, vertex: Vertex, path: &[Vertex]) {
        tracing::event!(Tracer::LEVEL, vertex, ?path, "backtrack");
    }
    fn on_restart(&mut self, failed: Vertex, next: Vertex) {
        tracing::event!(Tracer::LEVEL, failed, next, "no path from start, retrying");
    }
}

/// Counts work done; see [`Counter::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    pub visits: u64,
    pub backtracks: u64,
    pub starts: u32,
    pub restarts: u32,
}

impl Counter {
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            visits: self.visits,
            backtracks: self.backtracks,
            starts_tried: self.starts,
            restarts: self.restarts,
        }
    }
}

impl SearchObserver for Counter {
    fn on_start(&mut self, _start: Vertex) {
        self.starts += 1;
    }
    fn on_visit(&mut self, _vertex: Vertex, _path: &[Vertex]) {
        self.visits += 1;
    }
    fn on_backtrack(&mut self, _vertex: Vertex, _path: &[Vertex]) {
        self.backtracks += 1;
    }
    fn on_restart(&mut self, _failed: Vertex, _next: Vertex) {
        self.restarts += 1;
    }
}
