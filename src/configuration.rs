use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub auth_url: String,
    /// Page size used by listings when `_limit` is absent or non-numeric.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
    /// When enabled, mutations and the rating recomputation they trigger are
    /// serialized per product. Off by default: the aggregate is
    /// last-writer-wins under concurrent mutations and settles once no
    /// mutation is in flight.
    #[serde(default)]
    pub serialize_product_updates: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

fn default_page_size() -> i64 {
    10
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::default().separator("__"))
        .build()?
        .try_deserialize()
}
