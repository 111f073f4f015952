//! Search orchestration: the view state and the delayed completions that feed it.
//!
//! Every trigger on a non-blank query spawns one background thread that sleeps
//! for the configured delay, runs the filter and overview lookups, and sends
//! the outcome back over a channel. The owning view drains the channel on its
//! own loop. Pending searches are never cancelled: when several are in flight
//! each one overwrites the state as it lands, and the first to land already
//! clears `loading`.

use crate::catalog::{self, SearchResult};
use crate::logging;
use crate::overview;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// The four values the view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub loading: bool,
    pub overview: String,
}

impl ViewState {
    /// Overview and cards are only drawn once loading is over and something matched.
    pub fn shows_results(&self) -> bool {
        !self.loading && !self.results.is_empty()
    }
}

/// Outcome of a finished search, computed on the background thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCompletion {
    /// Query as it was when the search was triggered
    pub query: String,
    pub results: Vec<SearchResult>,
    pub overview: &'static str,
}

impl SearchCompletion {
    pub fn compute(query: String) -> Self {
        let results = catalog::search(&query);
        let overview = overview::overview_for(&query);
        Self {
            query,
            results,
            overview,
        }
    }
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Blank query, nothing changed
    Ignored,
    /// A delayed completion was scheduled
    Scheduled,
}

/// Owns the view state and the channel completions arrive on.
pub struct SearchSession {
    pub state: ViewState,
    delay: Duration,
    in_flight: usize,
    bg_receiver: Receiver<SearchCompletion>,
    bg_sender: Sender<SearchCompletion>,
}

impl SearchSession {
    pub fn new(delay: Duration) -> Self {
        let (bg_sender, bg_receiver) = unbounded();
        Self {
            state: ViewState::default(),
            delay,
            in_flight: 0,
            bg_receiver,
            bg_sender,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of scheduled completions that have not landed yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Start a search for the current query.
    ///
    /// Blank queries are dropped silently. Otherwise `loading` goes up and a
    /// completion is scheduled regardless of what else is pending.
    pub fn trigger(&mut self) -> TriggerOutcome {
        if self.state.query.trim().is_empty() {
            logging::log_search_ignored();
            return TriggerOutcome::Ignored;
        }

        self.state.loading = true;
        self.in_flight += 1;
        logging::log_search_triggered(&self.state.query, self.delay, self.in_flight);

        let tx = self.bg_sender.clone();
        let query = self.state.query.clone();
        let delay = self.delay;

        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(SearchCompletion::compute(query));
        });

        TriggerOutcome::Scheduled
    }

    /// Apply every completion that has already arrived. Returns how many were applied.
    pub fn process_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.bg_receiver.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Block until one completion arrives (and apply it) or `timeout` elapses.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.bg_receiver.recv_timeout(timeout) {
            Ok(completion) => {
                self.apply(completion);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply(&mut self, completion: SearchCompletion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        logging::log_search_completed(&completion.query, completion.results.len(), self.in_flight);

        self.state.results = completion.results;
        self.state.overview = completion.overview.to_string();
        self.state.loading = false;
    }
}
