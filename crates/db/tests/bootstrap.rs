use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    vowplan_db::health_check(&pool).await.unwrap();

    let tables = [
        "events",
        "event_setup_progress",
        "ceremonies",
        "hotels",
        "accommodations",
        "transport_groups",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Only the eight recognized step ids may be stored as the current step.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_current_step_rejects_whatsapp(pool: PgPool) {
    let (event_id,): (i64,) = sqlx::query_as(
        "INSERT INTO events (title, start_date, end_date) \
         VALUES ('Check', '2026-05-01', '2026-05-01') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let err = sqlx::query(
        "INSERT INTO event_setup_progress (event_id, current_step) VALUES ($1, 'whatsapp')",
    )
    .bind(event_id)
    .execute(&pool)
    .await
    .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}
