use std::env;

/// Runtime configuration, read once at startup. The original system kept two
/// near-identical server files (one reading the connection string from the
/// environment, one hardcoding a local address); a single config object with
/// defaults covers both deployments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "Ecommerce".to_string());

        Self {
            host,
            port,
            database_url,
            database_name,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
