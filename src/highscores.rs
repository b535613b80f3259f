//! Session leaderboard of finished runs
//!
//! Runs are ranked by how far they got, not just by points: the wave reached
//! comes first, then score, then the shorter run. A run that never scored
//! and never cleared a wave is not recorded.

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_RUNS: usize = 10;

/// Outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Wave the run ended on
    pub wave: u32,
    pub score: u32,
    /// Simulation ticks the run lasted
    pub ticks: u64,
}

impl RunRecord {
    pub fn new(wave: u32, score: u32, ticks: u64) -> Self {
        Self { wave, score, ticks }
    }

    /// Made any progress at all
    pub fn counts(&self) -> bool {
        self.score > 0 || self.wave > 1
    }

    fn rank_key(&self) -> (Reverse<u32>, Reverse<u32>, u64) {
        (Reverse(self.wave), Reverse(self.score), self.ticks)
    }

    /// `Less` when `self` ranks above `other`
    pub fn rank_cmp(&self, other: &RunRecord) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

/// Best runs of the session, best first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position (0-based) the run would take; equal runs go after the
    /// ones already on the board
    fn slot(&self, run: &RunRecord) -> usize {
        self.runs
            .partition_point(|kept| kept.rank_cmp(run) != Ordering::Greater)
    }

    /// Rank (1-based) the run would get, None if it would not make the board
    pub fn potential_rank(&self, run: &RunRecord) -> Option<usize> {
        if !run.counts() {
            return None;
        }
        let slot = self.slot(run);
        (slot < MAX_RUNS).then_some(slot + 1)
    }

    /// Record a finished run, returning its rank if it made the board
    pub fn record(&mut self, run: RunRecord) -> Option<usize> {
        let rank = self.potential_rank(&run)?;
        self.runs.insert(rank - 1, run);
        self.runs.truncate(MAX_RUNS);
        log::info!(
            "Run #{rank}: wave {} score {} in {} ticks",
            run.wave,
            run.score,
            run.ticks
        );
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn best(&self) -> Option<&RunRecord> {
        self.runs.first()
    }
}
