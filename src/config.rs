use crate::error::ConfigError;

pub struct Config {
    pub database_url: String,
    pub max_connections: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => {
                Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| ConfigError::InvalidEnvValue {
                            var: "DATABASE_MAX_CONNECTIONS".to_string(),
                            reason: format!("expected a positive integer, got {value:?}"),
                        })?,
                )
            }
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
