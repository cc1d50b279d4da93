use crate::db;
use crate::models;
use sqlx::PgPool;

/// Storage seam of the review service. Reads come back newest first;
/// `insert` assigns the id and timestamps. Allows mocking in tests and
/// swapping implementations.
#[async_trait::async_trait]
pub trait ReviewStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<models::Review>, String>;
    async fn count(&self) -> Result<i64, String>;
    async fn fetch_by_product(
        &self,
        product_id: i32,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<models::Review>, String>;
    async fn fetch_all_by_product(&self, product_id: i32) -> Result<Vec<models::Review>, String>;
    async fn count_by_product(&self, product_id: i32) -> Result<i64, String>;
    async fn fetch(&self, id: i32) -> Result<Option<models::Review>, String>;
    async fn insert(&self, review: models::Review) -> Result<models::Review, String>;
    async fn update(&self, review: models::Review) -> Result<models::Review, String>;
    async fn delete(&self, id: i32) -> Result<bool, String>;
    async fn fetch_product(&self, product_id: i32) -> Result<Option<models::Product>, String>;
    async fn set_product_rate(&self, product_id: i32, rate: f64) -> Result<(), String>;
}

pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ReviewStore for PgReviewStore {
    async fn fetch_all(&self) -> Result<Vec<models::Review>, String> {
        db::review::fetch_all(&self.pool).await
    }

    async fn count(&self) -> Result<i64, String> {
        db::review::count(&self.pool).await
    }

    async fn fetch_by_product(
        &self,
        product_id: i32,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<models::Review>, String> {
        db::review::fetch_by_product(&self.pool, product_id, skip, limit).await
    }

    async fn fetch_all_by_product(&self, product_id: i32) -> Result<Vec<models::Review>, String> {
        db::review::fetch_all_by_product(&self.pool, product_id).await
    }

    async fn count_by_product(&self, product_id: i32) -> Result<i64, String> {
        db::review::count_by_product(&self.pool, product_id).await
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Review>, String> {
        db::review::fetch(&self.pool, id).await
    }

    async fn insert(&self, review: models::Review) -> Result<models::Review, String> {
        db::review::insert(&self.pool, review).await
    }

    async fn update(&self, review: models::Review) -> Result<models::Review, String> {
        db::review::update(&self.pool, review).await
    }

    async fn delete(&self, id: i32) -> Result<bool, String> {
        db::review::delete(&self.pool, id).await
    }

    async fn fetch_product(&self, product_id: i32) -> Result<Option<models::Product>, String> {
        db::product::fetch(&self.pool, product_id).await
    }

    async fn set_product_rate(&self, product_id: i32, rate: f64) -> Result<(), String> {
        db::product::set_rate(&self.pool, product_id, rate).await
    }
}
