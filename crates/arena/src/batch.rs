//! Batch orchestration with seat alternation.

use std::time::Instant;

use game_core::{Game, MatchError, Policy};
use thiserror::Error;
use tracing::debug;

use crate::match_runner::MatchRunner;
use crate::progress::{ProgressSink, ProgressUpdate};
use crate::scoreboard::Scoreboard;

/// Batch parameters.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Number of matches to play.
    pub num_matches: u32,
    /// Print turn-by-turn positions while matches run.
    pub verbose: bool,
    /// Abort a match as a contract violation after this many plies
    /// (None = no bound).
    pub max_plies: Option<u32>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            num_matches: 10,
            verbose: false,
            max_plies: Some(1000),
        }
    }
}

/// Why a batch was abandoned. No partial scoreboard survives either case.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A policy or the rule set broke its contract in the given match; the
    /// tally up to that point is discarded rather than reported.
    #[error("match {index} aborted: {source}")]
    Match {
        index: u32,
        #[source]
        source: MatchError,
    },
    /// The progress sink failed. The match named by `index` was already
    /// folded into the (now discarded) tally when the sink was invoked.
    #[error("progress reporting failed after match {index}: {source}")]
    Progress {
        index: u32,
        #[source]
        source: anyhow::Error,
    },
}

/// Pits two policies against each other over a batch of matches.
///
/// Which policy sits first flips between consecutive matches so first-move
/// advantage cancels out of the comparison; the scoreboard stays keyed by
/// policy identity throughout.
pub struct Arena<G: Game> {
    game: G,
    config: ArenaConfig,
    display: Option<Box<dyn Fn(&G::Position)>>,
    progress: Option<Box<dyn ProgressSink>>,
}

impl<G: Game> Arena<G> {
    pub fn new(game: G, config: ArenaConfig) -> Self {
        Self {
            game,
            config,
            display: None,
            progress: None,
        }
    }

    /// Replace the rule set's own stdout rendering in verbose mode.
    pub fn with_display(mut self, display: impl Fn(&G::Position) + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Attach a per-match progress receiver.
    pub fn with_progress(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Play the configured number of matches and return the final tally.
    ///
    /// Policy A sits first in match 1 and the seats swap every match; with
    /// an odd batch one policy sits first once more than the other, which
    /// is accepted rather than corrected. Matches run strictly in order,
    /// one at a time.
    pub fn play_batch(
        &mut self,
        policy_a: &mut dyn Policy<G>,
        policy_b: &mut dyn Policy<G>,
    ) -> Result<Scoreboard, BatchError> {
        let mut scoreboard = Scoreboard::default();
        let mut a_plays_first = true;
        let batch_start = Instant::now();

        for index in 1..=self.config.num_matches {
            let mut runner = MatchRunner::new(&self.game)
                .verbose(self.config.verbose)
                .max_plies(self.config.max_plies);
            if let Some(display) = self.display.as_deref() {
                runner = runner.with_display(display);
            }

            let match_start = Instant::now();
            let outcome = if a_plays_first {
                runner.run(policy_a, policy_b)
            } else {
                runner.run(policy_b, policy_a)
            }
            .map_err(|source| BatchError::Match { index, source })?;
            let match_time = match_start.elapsed();

            // Record before reporting: observability must not corrupt the tally.
            scoreboard.record(outcome, a_plays_first);
            debug!(index, %outcome, a_plays_first, "match recorded");

            if let Some(sink) = self.progress.as_mut() {
                let elapsed = batch_start.elapsed();
                let eta = (elapsed / index) * (self.config.num_matches - index);
                let update = ProgressUpdate {
                    index,
                    total: self.config.num_matches,
                    match_time,
                    elapsed,
                    eta,
                    scoreboard: &scoreboard,
                };
                sink.on_match_complete(&update)
                    .map_err(|source| BatchError::Progress { index, source })?;
            }

            a_plays_first = !a_plays_first;
        }

        Ok(scoreboard)
    }
}
