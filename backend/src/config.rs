use std::env;

const DEFAULT_PORT: u16 = 3004;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5501";

/// Process configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port (`PORT`).
    pub port: u16,
    /// Origin allowed to make cross-origin requests (`CORS_ORIGIN`).
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        Self { port, cors_origin }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3004);
        assert_eq!(config.cors_origin, "http://localhost:5501");
    }
}
