use chrono::{DateTime, Utc};
use serde::Serialize;

// Catalog entity owned elsewhere; this service only ever writes `rate`,
// the arithmetic mean over the product's current reviews (0 when none).
#[derive(Debug, Clone, Serialize, Default, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub rate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
