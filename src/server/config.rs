use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Marks the session cookie `Secure`. Enable when served over HTTPS.
    pub secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            secure_cookie: match std::env::var("SESSION_SECURE_COOKIE") {
                Ok(value) => parse_bool("SESSION_SECURE_COOKIE", value)?,
                Err(_) => false,
            },
        })
    }
}

fn parse_bool(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_boolean_spellings() {
        assert!(parse_bool("X", "TRUE".to_string()).unwrap());
        assert!(parse_bool("X", " 1 ".to_string()).unwrap());
        assert!(!parse_bool("X", "no".to_string()).unwrap());
    }

    #[test]
    fn rejects_other_values() {
        assert!(matches!(
            parse_bool("SESSION_SECURE_COOKIE", "maybe".to_string()),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
