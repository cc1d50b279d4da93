use super::required_user;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{ReviewError, ReviewService};
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::convert::Into;
use std::sync::Arc;

#[tracing::instrument(name = "Add review.", skip_all)]
#[post("/product/{product_id}")]
pub async fn add_handler(
    path: web::Path<(i32,)>,
    form: web::Json<forms::review::Add>,
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    let user = required_user(user)?;
    let (product_id,) = path.into_inner();
    let form = form.into_inner();
    form.validate()
        .map_err(|errors| ReviewError::InvalidInput(errors.to_string()))?;

    let review = service.create(product_id, form, &user).await?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::review::Public>::into(review))
        .ok("Review created"))
}
