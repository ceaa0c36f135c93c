//! Tests for the batch synchronizer

use crate::support::{FakeGroupService, Harness, Reply, config, generated, group, members};
use memsync_domain::Error;
use memsync_domain::events::SyncEvent;
use memsync_domain::value_objects::{
    BatchOperation, BatchResult, Credentials, DeltaResult, GroupQueryResult, MembershipSet,
    SyncStatus,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_threshold_exceeded_makes_no_calls() {
    let harness = Harness::new(FakeGroupService::new());
    let authoritative = generated("add", 250);
    let target = group(generated("drop", 10));
    let delta = DeltaResult::new(&authoritative, &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(25, 1, 100), &target)
        .await
        .expect("threshold is not an error");

    assert!(harness.service.calls().is_empty());
    assert!(harness.pacer.pauses().is_empty());
    assert_eq!(
        report.status,
        SyncStatus::Aborted {
            total_delta: 260,
            sync_max: 100
        }
    );
    assert_eq!(
        harness.sink.events(),
        vec![SyncEvent::ThresholdExceeded {
            total_delta: 260,
            sync_max: 100
        }]
    );
}

#[tokio::test]
async fn test_total_equal_to_sync_max_is_allowed() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(MembershipSet::new());
    let delta = DeltaResult::new(&members(&["A", "B"]), &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(10, 0, 2), &target)
        .await
        .unwrap();

    assert_eq!(report.status, SyncStatus::Completed);
    assert_eq!(harness.service.calls().len(), 1);
}

#[tokio::test]
async fn test_adds_split_into_batches_with_delay() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(MembershipSet::new());
    let delta = DeltaResult::new(&members(&["A", "B", "C", "D", "E"]), &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(2, 3, 1000), &target)
        .await
        .unwrap();

    let calls = harness.service.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.operation == BatchOperation::Add));
    let sizes: Vec<usize> = calls.iter().map(|c| c.members.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(calls[0].members, vec!["A", "B"]);
    assert_eq!(calls[2].members, vec!["E"]);

    assert_eq!(harness.pacer.pauses(), vec![Duration::from_secs(3); 3]);
    assert_eq!(report.succeeded(), 3);
    assert!(!report.has_failures());
}

#[tokio::test]
async fn test_zero_delay_never_pauses() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(members(&["X", "Y"]));
    let delta = DeltaResult::new(&members(&["A"]), &target);

    harness
        .synchronizer
        .synchronize(&delta, &config(1, 0, 1000), &target)
        .await
        .unwrap();

    assert_eq!(harness.service.calls().len(), 3);
    assert!(harness.pacer.pauses().is_empty());
    assert!(
        !harness
            .sink
            .events()
            .iter()
            .any(|e| matches!(e, SyncEvent::Pausing { .. }))
    );
}

#[tokio::test]
async fn test_drops_complete_before_first_add() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(members(&["D1", "D2", "D3"]));
    let delta = DeltaResult::new(&members(&["A1", "A2", "A3"]), &target);

    harness
        .synchronizer
        .synchronize(&delta, &config(2, 0, 1000), &target)
        .await
        .unwrap();

    let operations: Vec<BatchOperation> = harness
        .service
        .calls()
        .iter()
        .map(|c| c.operation)
        .collect();
    assert_eq!(
        operations,
        vec![
            BatchOperation::Drop,
            BatchOperation::Drop,
            BatchOperation::Add,
            BatchOperation::Add,
        ]
    );
}

#[tokio::test]
async fn test_failed_batch_does_not_stop_the_run() {
    let service = FakeGroupService::new()
        .script(1, Reply::Code("PROBLEM_DELETING_MEMBERS"))
        .script(3, Reply::Timeout)
        .script(4, Reply::Network);
    let harness = Harness::new(service);
    let target = group(members(&["D1", "D2"]));
    let delta = DeltaResult::new(&members(&["A1", "A2", "A3"]), &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(1, 0, 1000), &target)
        .await
        .unwrap();

    assert_eq!(harness.service.calls().len(), 5);
    assert_eq!(report.status, SyncStatus::Completed);
    assert_eq!(report.outcomes.len(), 5);
    assert_eq!(report.succeeded(), 2);

    assert_eq!(
        report.outcomes[0].result,
        BatchResult::Failure("PROBLEM_DELETING_MEMBERS".to_string())
    );
    assert!(report.outcomes[1].result.is_success());
    match &report.outcomes[2].result {
        BatchResult::Failure(reason) => assert!(reason.contains("timed out")),
        BatchResult::Success => panic!("Expected timeout failure"),
    }
    match &report.outcomes[3].result {
        BatchResult::Failure(reason) => assert!(reason.contains("connection refused")),
        BatchResult::Success => panic!("Expected network failure"),
    }
    assert!(report.outcomes[4].result.is_success());
}

#[tokio::test(start_paused = true)]
async fn test_unresponsive_provider_is_cut_off_at_batch_timeout() {
    let service = FakeGroupService::new().script(1, Reply::Hang);
    let harness = Harness::new(service);
    let target = group(MembershipSet::new());
    let delta = DeltaResult::new(&members(&["A", "B"]), &target);

    let started = tokio::time::Instant::now();
    let report = harness
        .synchronizer
        .synchronize(&delta, &config(1, 0, 1000), &target)
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(300));
    assert_eq!(harness.service.calls().len(), 2);
    assert_eq!(report.status, SyncStatus::Completed);
    match &report.outcomes[0].result {
        BatchResult::Failure(reason) => assert!(reason.contains("timed out")),
        BatchResult::Success => panic!("Expected timeout failure"),
    }
    assert!(report.outcomes[1].result.is_success());
}

#[tokio::test]
async fn test_success_code_requires_exact_match() {
    let service = FakeGroupService::new()
        .script(1, Reply::Code("SUCCESS_ALREADY_EXISTED"))
        .script(2, Reply::Code("SUCC"));
    let harness = Harness::new(service);
    let target = group(MembershipSet::new());
    let delta = DeltaResult::new(&members(&["A", "B"]), &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(1, 0, 1000), &target)
        .await
        .unwrap();

    assert_eq!(report.succeeded(), 0);
    assert_eq!(report.failures().count(), 2);
}

#[tokio::test]
async fn test_batch_indices_restart_per_phase() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(members(&["D1", "D2"]));
    let delta = DeltaResult::new(&members(&["A1", "A2", "A3"]), &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(1, 0, 1000), &target)
        .await
        .unwrap();

    let indices: Vec<(BatchOperation, usize)> = report
        .outcomes
        .iter()
        .map(|o| (o.operation, o.batch_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            (BatchOperation::Drop, 1),
            (BatchOperation::Drop, 2),
            (BatchOperation::Add, 1),
            (BatchOperation::Add, 2),
            (BatchOperation::Add, 3),
        ]
    );
}

#[tokio::test]
async fn test_timeout_is_passed_to_provider() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(MembershipSet::new());
    let delta = DeltaResult::new(&members(&["A"]), &target);

    harness
        .synchronizer
        .synchronize(&delta, &config(5, 0, 10), &target)
        .await
        .unwrap();

    assert_eq!(harness.service.calls()[0].timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn test_event_sequence() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(members(&["D"]));
    let delta = DeltaResult::new(&members(&["A"]), &target);

    harness
        .synchronizer
        .synchronize(&delta, &config(5, 1, 10), &target)
        .await
        .unwrap();

    let kinds: Vec<&'static str> = harness
        .sink
        .events()
        .iter()
        .map(|e| match e {
            SyncEvent::SyncStarted { .. } => "sync_started",
            SyncEvent::PhaseStarted { .. } => "phase_started",
            SyncEvent::BatchStarted { .. } => "batch_started",
            SyncEvent::BatchCompleted(_) => "batch_completed",
            SyncEvent::Pausing { .. } => "pausing",
            SyncEvent::PhaseFinished { .. } => "phase_finished",
            SyncEvent::SyncFinished { .. } => "sync_finished",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "sync_started",
            "phase_started",
            "batch_started",
            "batch_completed",
            "pausing",
            "phase_finished",
            "phase_started",
            "batch_started",
            "batch_completed",
            "pausing",
            "phase_finished",
            "sync_finished",
        ]
    );
}

#[tokio::test]
async fn test_empty_delta_submits_nothing() {
    let harness = Harness::new(FakeGroupService::new());
    let target = group(members(&["A"]));
    let delta = DeltaResult::new(&members(&["A"]), &target);

    let report = harness
        .synchronizer
        .synchronize(&delta, &config(5, 1, 0), &target)
        .await
        .unwrap();

    assert_eq!(report.status, SyncStatus::Completed);
    assert!(harness.service.calls().is_empty());
    assert!(harness.pacer.pauses().is_empty());
}

#[tokio::test]
async fn test_malformed_target_fails_before_any_call() {
    let harness = Harness::new(FakeGroupService::new());
    let target = GroupQueryResult::new(
        "lib:patrons",
        "",
        Credentials::new("svc", "secret"),
        MembershipSet::new(),
    );
    let delta = DeltaResult::new(&members(&["A"]), &target);

    let result = harness
        .synchronizer
        .synchronize(&delta, &config(5, 0, 10), &target)
        .await;

    assert!(matches!(result, Err(Error::MalformedInput { .. })));
    assert!(harness.service.calls().is_empty());
    assert!(harness.sink.events().is_empty());
}

#[tokio::test]
async fn test_cancellation_stops_between_batches() {
    let harness = Harness::new(FakeGroupService::new());
    let token = CancellationToken::new();
    token.cancel();
    let synchronizer = harness.synchronizer.with_cancellation(token);
    let target = group(members(&["D1", "D2"]));
    let delta = DeltaResult::new(&members(&["A1"]), &target);

    let report = synchronizer
        .synchronize(&delta, &config(1, 0, 10), &target)
        .await
        .unwrap();

    assert_eq!(report.status, SyncStatus::Cancelled);
    assert!(report.outcomes.is_empty());
    assert!(harness.service.calls().is_empty());
    assert!(harness.sink.events().contains(&SyncEvent::Cancelled {
        operation: BatchOperation::Drop,
        completed_batches: 0,
    }));
}
