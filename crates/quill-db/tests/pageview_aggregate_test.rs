//! Integration tests for pageview recording and aggregation.
//!
//! Ignored by default; run the slow tier with `cargo test -- --ignored`
//! against the database configured via `DATABASE_URL`.

use quill_core::{rank_visits, PageviewRepository, RecordPageviewRequest};
use quill_db::test_fixtures::{unique_path_prefix, TestDatabase};

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_insert_stamps_fresh_timestamp_per_record() {
    let test_db = TestDatabase::new().await;
    let prefix = unique_path_prefix();

    for _ in 0..2 {
        test_db
            .db
            .pageviews
            .insert(RecordPageviewRequest {
                path: prefix.clone(),
                user_agent: Some("integration-test".to_string()),
            })
            .await
            .expect("Failed to record visit");
    }

    let visits: Vec<_> = test_db
        .db
        .pageviews
        .list()
        .await
        .expect("Failed to list visits")
        .into_iter()
        .filter(|v| v.path == prefix)
        .collect();

    assert_eq!(visits.len(), 2);
    // Timestamps are assigned per insert, not once at startup
    assert!(visits[0].recorded_at_utc < visits[1].recorded_at_utc);

    test_db.delete_pageviews_with_prefix(&prefix).await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_recorded_visits_rank_by_path() {
    let test_db = TestDatabase::new().await;
    let prefix = unique_path_prefix();

    let paths = [
        format!("{}/", prefix),
        format!("{}/", prefix),
        format!("{}/notes/1", prefix),
        format!("{}/analytics", prefix),
    ];
    for path in &paths {
        test_db
            .db
            .pageviews
            .insert(RecordPageviewRequest {
                path: path.clone(),
                user_agent: None,
            })
            .await
            .expect("Failed to record visit");
    }

    let all_visits: Vec<_> = test_db
        .db
        .pageviews
        .list()
        .await
        .expect("Failed to list visits")
        .into_iter()
        .filter(|v| v.path.starts_with(&prefix))
        .collect();
    let ranked = rank_visits(&all_visits);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].path, format!("{}/", prefix));
    assert_eq!(ranked[0].count, 2);
    let total: u64 = ranked.iter().map(|p| p.count).sum();
    assert_eq!(total, paths.len() as u64);

    test_db.delete_pageviews_with_prefix(&prefix).await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_count_by_path_matches_in_memory_ranking() {
    let test_db = TestDatabase::new().await;
    let prefix = unique_path_prefix();

    let paths = [
        format!("{}/", prefix),
        format!("{}/", prefix),
        format!("{}/notes/1", prefix),
        format!("{}/analytics", prefix),
    ];
    for path in &paths {
        test_db
            .db
            .pageviews
            .insert(RecordPageviewRequest {
                path: path.clone(),
                user_agent: None,
            })
            .await
            .expect("Failed to record visit");
    }

    let grouped: Vec<_> = test_db
        .db
        .pageviews
        .count_by_path()
        .await
        .expect("Grouped query failed")
        .into_iter()
        .filter(|p| p.path.starts_with(&prefix))
        .collect();

    let all_visits: Vec<_> = test_db
        .db
        .pageviews
        .list()
        .await
        .expect("Failed to list visits")
        .into_iter()
        .filter(|v| v.path.starts_with(&prefix))
        .collect();

    // The grouped query and the in-memory pass agree entry for entry
    assert_eq!(grouped, rank_visits(&all_visits));
    assert_eq!(grouped[0].path, format!("{}/", prefix));
    assert_eq!(grouped[0].count, 2);
    for pair in grouped.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }

    test_db.delete_pageviews_with_prefix(&prefix).await;
}
