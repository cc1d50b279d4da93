use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize, Default, PartialEq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// Outward shape of a review. The internal row id never leaves the service;
/// the nested author keeps its own identifier. Applied uniformly to single
/// items and lists.
#[derive(Debug, Serialize, Default, PartialEq)]
pub struct Public {
    pub rate: i32,
    pub title: String,
    pub description: String,
    pub product_id: i32,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl From<models::Review> for Public {
    fn from(review: models::Review) -> Self {
        Self {
            rate: review.rate,
            title: review.title,
            description: review.description,
            product_id: review.product_id,
            author: Author {
                id: review.user_id,
                name: review.user_name,
            },
            created_at: review.created_at,
        }
    }
}
