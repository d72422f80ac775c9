/// Server configuration constants and environment parsing.
///
/// The listening port and production mode come from the environment, the
/// way the original deployment supplied them.

/// Port used when the `PORT` environment variable is absent or unparsable.
pub const DEFAULT_PORT: u16 = 8080;

/// Bind address used when `BIND_ADDR` is absent.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Directory holding the client build, served in production mode.
pub const STATIC_DIR: &str = "front/build";

/// Environment value that enables static asset serving.
pub const PRODUCTION_ENV: &str = "production";

/// Runtime server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    /// Serve the client build with an `index.html` catch-all.
    pub serve_static: bool,
}

impl ServerConfig {
    /// Read the configuration from `PORT`, `BIND_ADDR` and `APP_ENV`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let serve_static = std::env::var("APP_ENV")
            .map(|env| env == PRODUCTION_ENV)
            .unwrap_or(false);
        ServerConfig {
            port,
            bind_addr,
            serve_static,
        }
    }
}
