//! Consumer-side job feed.
//!
//! The HTTP surface is stateless; `JobFeed` is the state a dashboard client
//! keeps between searches. Nothing in the server binary drives it, so its
//! items are exercised only through the tests here and in the mock repository.
#![allow(dead_code)]

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::query::JobFilters;

/// Handle for one dispatched search. Only the most recently issued ticket may
/// update the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Consumer-side feed state: current filters, last accepted results, and a
/// monotonic request sequence.
///
/// Searches may resolve out of order. A response is applied only when it
/// belongs to the latest dispatched request; older ones are dropped so a slow
/// early query can never overwrite a newer result. After `close` every
/// completion is dropped.
#[derive(Debug, Default)]
pub struct JobFeed {
    filters: JobFilters,
    jobs: Vec<JobPosting>,
    latest: u64,
    loading: bool,
    closed: bool,
}

impl JobFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Records new filters and issues the ticket the eventual response must carry.
    pub fn dispatch(&mut self, filters: JobFilters) -> SearchTicket {
        self.latest += 1;
        self.filters = filters;
        self.loading = true;
        SearchTicket(self.latest)
    }

    /// Applies a finished search. Returns `true` when the feed changed.
    ///
    /// Failures keep the last known results; they are logged, never surfaced
    /// as a crash.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<JobPosting>, AppError>,
    ) -> bool {
        if self.closed {
            debug!(ticket = ticket.0, "feed closed, dropping search response");
            return false;
        }
        if ticket.0 != self.latest {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "dropping stale search response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(jobs) => {
                self.jobs = jobs;
                true
            }
            Err(err) => {
                warn!("job search failed, keeping previous results: {err}");
                false
            }
        }
    }

    /// Tears the feed down; in-flight searches will be ignored when they land.
    pub fn close(&mut self) {
        self.closed = true;
        self.loading = false;
    }
}
