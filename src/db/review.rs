use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetching all reviews, newest first.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT *
        FROM review
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute fetch query: {:?}", err);
        "".to_string()
    })
}

pub async fn count(pool: &PgPool) -> Result<i64, String> {
    let query_span = tracing::info_span!("Counting all reviews.");
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM review"#)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "".to_string()
        })
}

pub async fn fetch_by_product(
    pool: &PgPool,
    product_id: i32,
    skip: i64,
    limit: i64,
) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetching a page of the product's reviews.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT *
        FROM review
        WHERE product_id = $1
        ORDER BY created_at DESC
        OFFSET $2
        LIMIT $3
        "#,
    )
    .bind(product_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute fetch query: {:?}", err);
        "".to_string()
    })
}

pub async fn fetch_all_by_product(
    pool: &PgPool,
    product_id: i32,
) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetching every review of the product.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT *
        FROM review
        WHERE product_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(product_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute fetch query: {:?}", err);
        "".to_string()
    })
}

pub async fn count_by_product(pool: &PgPool, product_id: i32) -> Result<i64, String> {
    let query_span = tracing::info_span!("Counting the product's reviews.");
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM review WHERE product_id = $1"#)
        .bind(product_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "".to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Review>, String> {
    let query_span = tracing::info_span!("Fetching the review by ID.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT *
        FROM review
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

pub async fn insert(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving new review details into the database.");
    sqlx::query_as::<_, models::Review>(
        r#"
        INSERT INTO review (rate, title, description, product_id, user_id, user_name, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(review.rate)
    .bind(review.title)
    .bind(review.description)
    .bind(review.product_id)
    .bind(review.user_id)
    .bind(review.user_name)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Updating review details in the database.");
    sqlx::query_as::<_, models::Review>(
        r#"
        UPDATE review
        SET
            rate = $1,
            title = $2,
            description = $3,
            updated_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(review.rate)
    .bind(review.title)
    .bind(review.description)
    .bind(review.id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Deleting the review from the database.");
    sqlx::query(r#"DELETE FROM review WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "Failed to delete".to_string()
        })
}
