use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use crate::views;
use actix_web::{get, web, Responder, Result};
use std::convert::Into;

#[tracing::instrument(name = "List reviews.", skip_all)]
#[get("")]
pub async fn list_handler(
    query: web::Query<forms::review::ListQuery>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    let query = query.into_inner();
    let page = service
        .list(query.page, query.limit, query.q.as_deref())
        .await?;

    let reviews = page
        .reviews
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::review::Public>>();

    Ok(JsonResponse::build()
        .set_list(reviews)
        .set_total(page.total)
        .ok("OK"))
}

#[tracing::instrument(name = "List reviews by product.", skip_all)]
#[get("/product/{product_id}")]
pub async fn product_list_handler(
    path: web::Path<(i32,)>,
    query: web::Query<forms::review::ListQuery>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    let (product_id,) = path.into_inner();
    let query = query.into_inner();
    let page = service
        .list_by_product(product_id, query.page, query.limit)
        .await?;

    let reviews = page
        .reviews
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::review::Public>>();

    Ok(JsonResponse::build()
        .set_list(reviews)
        .set_total(page.total)
        .ok("OK"))
}
