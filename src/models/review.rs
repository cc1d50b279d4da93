use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Default, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub rate: i32, // 1..=5, enforced at the form boundary
    pub title: String,
    pub description: String,
    pub product_id: i32,
    pub user_id: String,   // external identity id of the author
    pub user_name: String, // author display name, captured at creation
    pub created_at: DateTime<Utc>, // descending sort key for listings
    pub updated_at: DateTime<Utc>,
}
