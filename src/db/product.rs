use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Check product existence by id.");
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT *
        FROM product
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute fetch query: {:?}", err);
        "".to_string()
    })
}

// Overwrites the aggregate, never increments it.
pub async fn set_rate(pool: &PgPool, id: i32, rate: f64) -> Result<(), String> {
    let query_span = tracing::info_span!("Writing the recomputed product rating.");
    sqlx::query(
        r#"
        UPDATE product
        SET
            rate = $1,
            updated_at = NOW()
        WHERE id = $2
        "#,
    )
    .bind(rate)
    .bind(id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| {
        tracing::info!("Product {} rating set to {}", id, rate);
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update product rate".to_string()
    })
}
