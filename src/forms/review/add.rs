use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct AddReview {
    #[serde(default, deserialize_with = "super::lenient_rate")]
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rate: Option<i32>, // absent or unparseable falls back to the default rate
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub title: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub description: String,
}
