use std::env;

const DEFAULT_API_KEY: &str = "test-api-key";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Process-wide settings, fixed at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model_name: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Builds a config with the given secret and model and default bind address.
    pub fn new(api_key: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_name: model_name.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        // Try root .env first, then fallback to local .env
        let skip_root_env = env::var("SKIP_ROOT_ENV").is_ok();
        if skip_root_env {
            dotenvy::dotenv().ok();
        } else if dotenvy::from_path("../../.env").is_err() {
            dotenvy::dotenv().ok();
        }

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // config/*.toml first, APP__SECTION__KEY variables override it
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let api_key = match settings
            .get_string("auth.api_key")
            .or_else(|_| env::var("AI_SERVICE_API_KEY"))
        {
            Ok(key) if !key.is_empty() => key,
            _ if app_env == "prod" => {
                return Err(config::ConfigError::Message(
                    "AI_SERVICE_API_KEY must be set in production".to_string(),
                ));
            }
            _ => {
                tracing::warn!("Using default AI_SERVICE_API_KEY (dev mode only!)");
                DEFAULT_API_KEY.to_string()
            }
        };

        let model_name = settings
            .get_string("ai.model")
            .or_else(|_| env::var("AI_MODEL"))
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let host = settings
            .get_string("server.host")
            .or_else(|_| env::var("HOST"))
            .unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match settings
            .get_string("server.port")
            .or_else(|_| env::var("PORT"))
        {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            api_key,
            model_name,
            host,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, config::ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| config::ConfigError::Message(format!("Invalid port '{}': {}", raw, e)))
}
