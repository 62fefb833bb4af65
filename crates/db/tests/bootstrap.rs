use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    sleepwise_db::health_check(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM calculations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "calculations should start empty");
}

/// The mode column only accepts the two known directions.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mode_check_constraint(pool: PgPool) {
    let result = sqlx::query("INSERT INTO calculations (mode, target_time) VALUES ('nap', '07:00')")
        .execute(&pool)
        .await;

    let err = result.expect_err("unknown mode should be rejected");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("ck_calculations_mode"));
}

#[test]
fn pool_config_defaults() {
    let config = sleepwise_db::PoolConfig::default();
    assert_eq!(config.max_connections, 20);
    assert_eq!(config.acquire_timeout_secs, 5);
    assert_eq!(config.idle_timeout_secs, 30);
}
