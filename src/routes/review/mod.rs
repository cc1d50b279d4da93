mod add;
mod delete;
mod edit;
mod get;

pub use add::*;
pub use delete::*;
pub use edit::*;
pub use get::*;

use crate::models;
use crate::services::ReviewError;
use actix_web::web::ReqData;
use std::sync::Arc;

// Mutations require a resolved identity; the middleware leaves anonymous
// requests without one.
fn required_user(
    user: Option<ReqData<Arc<models::User>>>,
) -> Result<ReqData<Arc<models::User>>, ReviewError> {
    user.ok_or_else(|| ReviewError::Forbidden("authentication required".to_string()))
}
