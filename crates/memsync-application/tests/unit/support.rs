//! In-memory test doubles for the synchronizer ports

use async_trait::async_trait;
use memsync_application::BatchSynchronizer;
use memsync_domain::error::{Error, Result};
use memsync_domain::events::SyncEvent;
use memsync_domain::ports::{GroupMembershipProvider, Pacer, SyncEventSink};
use memsync_domain::value_objects::{
    BatchConfig, BatchOperation, Credentials, GroupQueryResult, MemberId, MembershipSet,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted reply for one call
#[derive(Clone)]
pub enum Reply {
    Code(&'static str),
    Timeout,
    Network,
    /// Never answers within the deadline
    Hang,
}

/// One recorded remote call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub operation: BatchOperation,
    pub members: Vec<String>,
    pub timeout: Duration,
}

/// Group service double that records calls and replies from a script
#[derive(Default)]
pub struct FakeGroupService {
    calls: Mutex<Vec<Call>>,
    script: Mutex<HashMap<usize, Reply>>,
}

impl FakeGroupService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Reply to the `call_number`-th call (starting at 1) with `reply`
    pub fn script(self: Arc<Self>, call_number: usize, reply: Reply) -> Arc<Self> {
        self.script.lock().unwrap().insert(call_number, reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroupMembershipProvider for FakeGroupService {
    async fn submit_batch(
        &self,
        operation: BatchOperation,
        members: &[MemberId],
        _target: &GroupQueryResult,
        timeout: Duration,
    ) -> Result<String> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Call {
                operation,
                members: members.iter().map(|m| m.as_str().to_string()).collect(),
                timeout,
            });
            calls.len()
        };
        let reply = self
            .script
            .lock()
            .unwrap()
            .get(&call_number)
            .cloned()
            .unwrap_or(Reply::Code("SUCCESS"));
        match reply {
            Reply::Code(code) => Ok(code.to_string()),
            Reply::Timeout => Err(Error::timeout(timeout)),
            Reply::Network => Err(Error::network("connection refused")),
            Reply::Hang => {
                tokio::time::sleep(timeout * 10).await;
                Ok("SUCCESS".to_string())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "fake"
    }
}

/// Pacer double that records requested pauses without sleeping
#[derive(Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses.lock().unwrap().push(delay);
    }
}

/// Event sink double that keeps every event
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SyncEventSink for RecordingSink {
    fn emit(&self, event: &SyncEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Wired synchronizer plus handles on its doubles
pub struct Harness {
    pub service: Arc<FakeGroupService>,
    pub pacer: Arc<RecordingPacer>,
    pub sink: Arc<RecordingSink>,
    pub synchronizer: BatchSynchronizer,
}

impl Harness {
    pub fn new(service: Arc<FakeGroupService>) -> Self {
        let pacer = RecordingPacer::new();
        let sink = RecordingSink::new();
        let synchronizer = BatchSynchronizer::new(service.clone(), pacer.clone(), sink.clone());
        Self {
            service,
            pacer,
            sink,
            synchronizer,
        }
    }
}

pub fn members(ids: &[&str]) -> MembershipSet {
    ids.iter().copied().collect()
}

/// Member set `prefix0000 .. prefix{count-1}`
pub fn generated(prefix: &str, count: usize) -> MembershipSet {
    (0..count)
        .map(|i| MemberId::new(format!("{prefix}{i:04}")))
        .collect()
}

pub fn group(managed: MembershipSet) -> GroupQueryResult {
    GroupQueryResult::new(
        "arizona.edu:dept:library:patrons",
        "https://grouper.example.edu/grouper-ws/servicesRest/json/v2_2_001/groups/patrons/members",
        Credentials::new("grouper-svc", "secret"),
        managed,
    )
}

pub fn config(batch_size: usize, delay_secs: u64, sync_max: usize) -> BatchConfig {
    BatchConfig::new(
        batch_size,
        Duration::from_secs(30),
        Duration::from_secs(delay_secs),
        sync_max,
    )
    .expect("valid batch config")
}
