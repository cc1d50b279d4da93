use actix_web::{get, web, App, HttpServer, Responder};
use reviewer::configuration::{get_configuration, DatabaseSettings, Settings};
use reviewer::forms;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

/// Boots the app on a random port against a throwaway database, with a mock
/// auth server standing in for the external identity provider. Returns None
/// (skipping the test) when Postgres is unreachable.
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let auth_listener =
        TcpListener::bind("127.0.0.1:0").expect("Failed to bind port for the mock auth server");
    configuration.auth_url = format!(
        "http://127.0.0.1:{}/me",
        auth_listener.local_addr().unwrap().port()
    );
    let _ = tokio::spawn(mock_auth_server(auth_listener));
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    spawn_app_with_configuration(configuration).await
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping test: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = reviewer::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

#[allow(dead_code)]
pub async fn seed_product(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(r#"INSERT INTO product (name, price) VALUES ($1, $2) RETURNING id"#)
        .bind(name)
        .bind(9.99)
        .fetch_one(pool)
        .await
        .expect("Failed to seed a product")
}

#[allow(dead_code)]
pub async fn product_rate(pool: &PgPool, product_id: i32) -> f64 {
    sqlx::query_scalar::<_, f64>(r#"SELECT rate FROM product WHERE id = $1"#)
        .bind(product_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read the product rate")
}

#[get("")]
async fn mock_auth() -> actix_web::Result<impl Responder> {
    let user = forms::user::User {
        id: "test_user_id".to_string(),
        first_name: "Test".to_string(),
        last_name: "Reviewer".to_string(),
        email: "test@example.com".to_string(),
        role: "user".to_string(),
    };

    Ok(web::Json(forms::user::UserForm { user }))
}

async fn mock_auth_server(listener: TcpListener) -> std::io::Result<()> {
    HttpServer::new(|| App::new().service(web::scope("/me").service(mock_auth)))
        .listen(listener)
        .expect("Failed to listen on the mock auth port")
        .run()
        .await
}
