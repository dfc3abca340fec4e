//! Server configuration loaded from environment variables.

use std::time::Duration;

/// | Env Var              | Default             |
/// |----------------------|---------------------|
/// | `DATABASE_URL`       | `sqlite://notes.db` |
/// | `HOST`               | `127.0.0.1`         |
/// | `PORT`               | `8000`              |
/// | `FETCH_TIMEOUT_SECS` | `5`                 |
/// | `FETCH_USE_PROXY`    | `true`              |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Upper bound on a single recipe page fetch.
    pub fetch_timeout: Duration,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` for recipe page fetches.
    pub fetch_use_proxy: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://notes.db".into());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let fetch_timeout_secs: u64 = std::env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("FETCH_TIMEOUT_SECS must be a valid u64");

        let fetch_use_proxy: bool = std::env::var("FETCH_USE_PROXY")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("FETCH_USE_PROXY must be true or false");

        Self {
            database_url,
            host,
            port,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            fetch_use_proxy,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://notes.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            fetch_timeout: Duration::from_secs(5),
            fetch_use_proxy: true,
        }
    }
}
