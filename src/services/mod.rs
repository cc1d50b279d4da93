mod error;
mod review;
mod store;


pub use error::ReviewError;
pub use review::{ReviewPage, ReviewService, DEFAULT_RATE};
pub use store::{PgReviewStore, ReviewStore};
