//! Injected progress reporting.
//!
//! The orchestrator pushes one update per completed match into a sink
//! supplied by the caller. There is no global progress state, so several
//! arenas can run in one process without stepping on each other. Reporting
//! is observational only: the scoreboard is already updated by the time a
//! sink sees it.

use std::time::Duration;

use crate::scoreboard::Scoreboard;

/// Everything a display layer needs to narrate a running batch.
#[derive(Debug, Clone, Copy)]
pub struct ProgressUpdate<'a> {
    /// 1-based ordinal of the match that just finished.
    pub index: u32,
    /// Total matches in the batch.
    pub total: u32,
    /// Wall-clock time of the finished match.
    pub match_time: Duration,
    /// Wall-clock time since the batch started.
    pub elapsed: Duration,
    /// Mean match time times the matches still to play.
    pub eta: Duration,
    /// Tally including the match that just finished.
    pub scoreboard: &'a Scoreboard,
}

/// Receiver for per-match updates.
///
/// An error ends the batch, but only after the match result has been folded
/// into the scoreboard.
pub trait ProgressSink {
    fn on_match_complete(&mut self, update: &ProgressUpdate<'_>) -> anyhow::Result<()>;
}

impl<F: FnMut(&ProgressUpdate<'_>) -> anyhow::Result<()>> ProgressSink for F {
    fn on_match_complete(&mut self, update: &ProgressUpdate<'_>) -> anyhow::Result<()> {
        self(update)
    }
}

/// Prints one status line per completed match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn on_match_complete(&mut self, update: &ProgressUpdate<'_>) -> anyhow::Result<()> {
        let score = update.scoreboard;
        println!(
            "({}/{}) match {:.3}s | total {:.1}s | eta {:.1}s | score {}-{}-{}",
            update.index,
            update.total,
            update.match_time.as_secs_f64(),
            update.elapsed.as_secs_f64(),
            update.eta.as_secs_f64(),
            score.wins_a,
            score.wins_b,
            score.draws
        );
        Ok(())
    }
}
