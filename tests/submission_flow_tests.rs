//! End-to-end create/edit submission flows against the in-memory store.

mod support;

use batchguard::api::BatchId;
use batchguard::models::parse_batch_roster_json_str;
use batchguard::services::{create_batch, update_batch, SubmissionError};
use batchguard::store::{BatchRepository, LocalBatchStore};
use chrono::Weekday;
use support::{batch, candidate};

fn seeded_store() -> LocalBatchStore {
    let roster = parse_batch_roster_json_str(
        r#"{
            "batches": [
                {
                    "id": "b-math",
                    "name": "Math101",
                    "course": "course-math",
                    "instructor": "I1",
                    "status": "active",
                    "days": ["Monday", "Wednesday"],
                    "time": "09:30 AM - 10:30 AM"
                }
            ]
        }"#,
    )
    .unwrap();
    LocalBatchStore::with_roster(roster)
}

#[tokio::test]
async fn create_clear_candidate_appends_to_roster() {
    let store = seeded_store();
    let c = candidate(&["I1"], &[Weekday::Fri], 540, 600);

    let created = create_batch(&store, c).await.unwrap();
    assert!(!created.id.value().is_empty());
    assert_eq!(created.time_range, "09:00 AM - 10:00 AM");

    let batches = store.list_batches().await.unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].id, created.id);
}

#[tokio::test]
async fn create_conflicting_candidate_surfaces_exact_message() {
    let store = seeded_store();
    let c = candidate(&["I1"], &[Weekday::Mon], 540, 600);

    let err = create_batch(&store, c).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Conflict detected! This time slot overlaps with existing batch: \"Math101\" for the selected instructor(s)."
    );

    // Aborted submission must not touch the roster.
    assert_eq!(store.list_batches().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_invalid_candidate_reports_issues() {
    let store = seeded_store();
    let mut c = candidate(&["I1"], &[Weekday::Fri], 540, 600);
    c.name = String::new();
    c.days.clear();

    match create_batch(&store, c).await.unwrap_err() {
        SubmissionError::Invalid(issues) => {
            assert_eq!(issues.len(), 2);
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[tokio::test]
async fn update_unchanged_schedule_does_not_self_conflict() {
    let store = seeded_store();
    // Same instructor/day/slot as the stored Math101.
    let c = candidate(&["I1"], &[Weekday::Mon], 570, 630);

    let id = BatchId::new("b-math");
    let updated = update_batch(&store, &id, c).await.unwrap();
    assert_eq!(updated.id, id);
}

#[tokio::test]
async fn update_keeps_roster_position_and_status() {
    let store = seeded_store();
    store
        .insert_batch(batch(
            "b-tail",
            "Tail",
            &["I2"],
            &[Weekday::Tue],
            "08:00 AM - 09:00 AM",
        ))
        .await
        .unwrap();

    let id = BatchId::new("b-math");
    let mut c = candidate(&["I1"], &[Weekday::Mon], 570, 630);
    c.name = "Math101 Renamed".to_string();
    update_batch(&store, &id, c).await.unwrap();

    let batches = store.list_batches().await.unwrap();
    assert_eq!(batches[0].name, "Math101 Renamed");
    assert!(batches[0].status.is_active());
    assert_eq!(batches[1].name, "Tail");
}

#[tokio::test]
async fn update_against_other_batch_still_conflicts() {
    let store = seeded_store();
    store
        .insert_batch(batch(
            "b-phys",
            "Physics A",
            &["I1"],
            &[Weekday::Mon],
            "11:00 AM - 12:00 PM",
        ))
        .await
        .unwrap();

    // Edit Physics A into Math101's slot.
    let id = BatchId::new("b-phys");
    let c = candidate(&["I1"], &[Weekday::Mon], 570, 630);
    let err = update_batch(&store, &id, c).await.unwrap_err();
    assert!(matches!(
        err,
        SubmissionError::Conflict { ref batch_name } if batch_name == "Math101"
    ));
}

#[tokio::test]
async fn update_missing_batch_is_store_error() {
    let store = seeded_store();
    let id = BatchId::new("b-ghost");
    let c = candidate(&["I1"], &[Weekday::Fri], 540, 600);

    match update_batch(&store, &id, c).await.unwrap_err() {
        SubmissionError::Store(err) => assert!(err.is_not_found()),
        other => panic!("expected Store error, got {:?}", other),
    }
}
