use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use crate::services::{PgReviewStore, ReviewService};
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let store = Arc::new(PgReviewStore::new(pg_pool.clone()));
    let review_service = web::Data::new(ReviewService::new(
        store,
        settings.default_page_size,
        settings.serialize_product_updates,
    ));

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);
    let token_cache = web::Data::new(middleware::authentication::TokenCache::new(
        Duration::from_secs(60),
    ));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(settings.clone())
            .app_data(pg_pool.clone())
            .app_data(review_service.clone())
            .app_data(token_cache.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/review")
                    .service(routes::review::list_handler)
                    .service(routes::review::product_list_handler)
                    .service(routes::review::add_handler)
                    .service(routes::review::edit_handler)
                    .service(routes::review::delete_handler),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
