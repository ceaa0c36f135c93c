//! Batch configuration, per-batch outcomes and run summaries

use crate::constants::{
    ADD_MEMBER_REQUEST_KEY, ADD_MEMBER_RESULTS_KEY, DEFAULT_BATCH_DELAY_SECS, DEFAULT_BATCH_SIZE,
    DEFAULT_BATCH_TIMEOUT_SECS, DEFAULT_SYNC_MAX, DELETE_MEMBER_REQUEST_KEY,
    DELETE_MEMBER_RESULTS_KEY,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Kind of membership mutation a batch performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchOperation {
    /// Add members to the managed group
    Add,
    /// Remove members from the managed group
    Drop,
}

impl BatchOperation {
    /// Phases in the order they must run: drops before adds
    pub const PHASE_ORDER: [Self; 2] = [Self::Drop, Self::Add];

    /// Envelope key of the Grouper request body
    pub fn request_key(self) -> &'static str {
        match self {
            Self::Add => ADD_MEMBER_REQUEST_KEY,
            Self::Drop => DELETE_MEMBER_REQUEST_KEY,
        }
    }

    /// Envelope key of the Grouper response body
    pub fn results_key(self) -> &'static str {
        match self {
            Self::Add => ADD_MEMBER_RESULTS_KEY,
            Self::Drop => DELETE_MEMBER_RESULTS_KEY,
        }
    }

    /// Past-tense verb for log lines
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Drop => "dropped",
        }
    }
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Drop => f.write_str("drop"),
        }
    }
}

/// Batching and safety settings for one synchronization run
///
/// Deserialization goes through [`BatchConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BatchConfigFields")]
pub struct BatchConfig {
    batch_size: usize,
    batch_timeout: Duration,
    batch_delay: Duration,
    sync_max: usize,
}

#[derive(Deserialize)]
struct BatchConfigFields {
    batch_size: usize,
    batch_timeout: Duration,
    batch_delay: Duration,
    sync_max: usize,
}

impl TryFrom<BatchConfigFields> for BatchConfig {
    type Error = Error;

    fn try_from(fields: BatchConfigFields) -> Result<Self> {
        Self::new(
            fields.batch_size,
            fields.batch_timeout,
            fields.batch_delay,
            fields.sync_max,
        )
    }
}

impl BatchConfig {
    /// Create a batch configuration; `batch_size` must be positive
    pub fn new(
        batch_size: usize,
        batch_timeout: Duration,
        batch_delay: Duration,
        sync_max: usize,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::invalid_argument("batch_size must be greater than 0"));
        }
        if batch_timeout.is_zero() {
            return Err(Error::invalid_argument(
                "batch_timeout must be greater than 0",
            ));
        }
        Ok(Self {
            batch_size,
            batch_timeout,
            batch_delay,
            sync_max,
        })
    }

    /// Maximum members per remote request
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Deadline for each remote request
    pub fn batch_timeout(&self) -> Duration {
        self.batch_timeout
    }

    /// Pause after every batch
    pub fn batch_delay(&self) -> Duration {
        self.batch_delay
    }

    /// Maximum adds plus drops permitted in one run
    pub fn sync_max(&self) -> usize {
        self.sync_max
    }

    /// Whether a delta of this size would be refused
    pub fn exceeds_sync_max(&self, total_delta: usize) -> bool {
        total_delta > self.sync_max
    }

    /// Number of batches needed for `members` members
    pub fn batch_count(&self, members: usize) -> usize {
        members.div_ceil(self.batch_size)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_timeout: Duration::from_secs(DEFAULT_BATCH_TIMEOUT_SECS),
            batch_delay: Duration::from_secs(DEFAULT_BATCH_DELAY_SECS),
            sync_max: DEFAULT_SYNC_MAX,
        }
    }
}

/// Result of a single remote mutation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchResult {
    /// The service reported success
    Success,
    /// The service reported another code, or the request failed; carries the reason
    Failure(String),
}

impl BatchResult {
    /// Whether the batch succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Outcome of one submitted batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Mutation performed
    pub operation: BatchOperation,
    /// Position of the batch within its phase, starting at 1
    pub batch_index: usize,
    /// Members in the batch
    pub member_count: usize,
    /// Wall-clock duration of the request
    pub duration_seconds: f64,
    /// What the service reported
    pub result: BatchResult,
}

/// Final state of a synchronization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    /// Refused at the safety gate; nothing was submitted
    Aborted {
        /// Adds plus drops that were pending
        total_delta: usize,
        /// Configured threshold
        sync_max: usize,
    },
    /// Every batch of both phases was attempted
    Completed,
    /// Stopped between batches on request
    Cancelled,
}

/// Summary of one synchronization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// How the run ended
    pub status: SyncStatus,
    /// Every batch outcome, in submission order
    pub outcomes: Vec<BatchOutcome>,
}

impl SyncReport {
    /// Report for a run refused at the safety gate
    pub fn aborted(total_delta: usize, sync_max: usize) -> Self {
        Self {
            status: SyncStatus::Aborted {
                total_delta,
                sync_max,
            },
            outcomes: Vec::new(),
        }
    }

    /// Whether the run was refused at the safety gate
    pub fn is_aborted(&self) -> bool {
        matches!(self.status, SyncStatus::Aborted { .. })
    }

    /// Number of batches the service accepted
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_success()).count()
    }

    /// Batches that failed
    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| !o.result.is_success())
    }

    /// Whether any batch failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
