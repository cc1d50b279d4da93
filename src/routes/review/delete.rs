use super::required_user;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::ReviewService;
use crate::views;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete review.", skip_all)]
#[delete("/{review_id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    let user = required_user(user)?;
    let (review_id,) = path.into_inner();

    service.delete(review_id, &user).await?;

    Ok(JsonResponse::<views::review::Public>::build().ok("Review deleted"))
}
