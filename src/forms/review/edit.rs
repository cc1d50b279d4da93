use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct EditReview {
    #[serde(default, deserialize_with = "super::lenient_rate")]
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rate: Option<i32>,
    #[validate(max_length = 255)]
    pub title: Option<String>,
    #[validate(max_length = 5000)]
    pub description: Option<String>,
}

impl EditReview {
    // Empty strings are treated like absent fields and leave the review
    // untouched.
    pub fn apply(self, review: &mut models::Review) {
        if let Some(title) = self.title.filter(|title| !title.is_empty()) {
            review.title = title;
        }

        if let Some(description) = self.description.filter(|description| !description.is_empty()) {
            review.description = description;
        }

        if let Some(rate) = self.rate {
            review.rate = rate;
        }
    }
}
