//! Integration tests for the calculation history repository.
//!
//! Exercises append / list-recent / latest against a real database.

use chrono::NaiveTime;
use sleepwise_core::sleep_cycle::{Direction, NewCalculation};
use sleepwise_db::repositories::calculation_repo::RECENT_HISTORY_LIMIT;
use sleepwise_db::repositories::CalculationRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_calculation(direction: Direction, hour: u32, minute: u32) -> NewCalculation {
    NewCalculation {
        direction,
        target_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// append
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn append_assigns_id_and_created_at(pool: PgPool) {
    let record = CalculationRepo::append(&pool, &new_calculation(Direction::Bedtime, 23, 0))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.mode, "bedtime");
    assert_eq!(record.target_time, "23:00");
    assert!(record.created_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn append_assigns_increasing_ids(pool: PgPool) {
    let first = CalculationRepo::append(&pool, &new_calculation(Direction::Wakeup, 7, 0))
        .await
        .unwrap();
    let second = CalculationRepo::append(&pool, &new_calculation(Direction::Wakeup, 7, 0))
        .await
        .unwrap();

    assert!(second.id > first.id, "identical inputs still get distinct ids");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn record_serializes_with_wire_field_names(pool: PgPool) {
    let record = CalculationRepo::append(&pool, &new_calculation(Direction::Wakeup, 6, 45))
        .await
        .unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["mode"], "wakeup");
    assert_eq!(json["targetTime"], "06:45");
    assert!(json["id"].is_i64());
    assert!(json["createdAt"].is_string());
}

// ---------------------------------------------------------------------------
// list_recent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_recent_empty(pool: PgPool) {
    let records = CalculationRepo::list_recent(&pool, RECENT_HISTORY_LIMIT)
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_recent_is_newest_first(pool: PgPool) {
    for minute in [0, 15, 30] {
        CalculationRepo::append(&pool, &new_calculation(Direction::Wakeup, 7, minute))
            .await
            .unwrap();
    }

    let records = CalculationRepo::list_recent(&pool, RECENT_HISTORY_LIMIT)
        .await
        .unwrap();

    let times: Vec<&str> = records.iter().map(|r| r.target_time.as_str()).collect();
    assert_eq!(times, ["07:30", "07:15", "07:00"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_recent_caps_at_limit(pool: PgPool) {
    for minute in 0..12 {
        CalculationRepo::append(&pool, &new_calculation(Direction::Bedtime, 22, minute))
            .await
            .unwrap();
    }

    let records = CalculationRepo::list_recent(&pool, RECENT_HISTORY_LIMIT)
        .await
        .unwrap();

    assert_eq!(records.len(), 10);
    assert_eq!(records[0].target_time, "22:11");
    assert_eq!(records[9].target_time, "22:02");
}

// ---------------------------------------------------------------------------
// latest
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn latest_on_empty_store_is_none(pool: PgPool) {
    let latest = CalculationRepo::latest(&pool).await.unwrap();
    assert!(latest.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn latest_returns_most_recent(pool: PgPool) {
    CalculationRepo::append(&pool, &new_calculation(Direction::Wakeup, 7, 0))
        .await
        .unwrap();
    let newest = CalculationRepo::append(&pool, &new_calculation(Direction::Bedtime, 23, 30))
        .await
        .unwrap();

    let latest = CalculationRepo::latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest, newest);
}

// ---------------------------------------------------------------------------
// count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_tracks_appends(pool: PgPool) {
    assert_eq!(CalculationRepo::count(&pool).await.unwrap(), 0);

    CalculationRepo::append(&pool, &new_calculation(Direction::Wakeup, 7, 0))
        .await
        .unwrap();
    CalculationRepo::append(&pool, &new_calculation(Direction::Bedtime, 22, 30))
        .await
        .unwrap();

    assert_eq!(CalculationRepo::count(&pool).await.unwrap(), 2);
}
