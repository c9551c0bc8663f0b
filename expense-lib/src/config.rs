use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};

const DEFAULT_PORT: u16 = 2565;
const DEFAULT_MAX_POOL_SIZE: u32 = 10;

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    /// When set, every request must carry exactly this `Authorization` header.
    pub auth_token: Option<String>,
    pub honeycomb_api_key: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

impl Config {
    /// Reads `config.toml` if one can be found, the environment otherwise. `PORT` in the
    /// environment always wins.
    pub fn load() -> Result<Config, anyhow::Error> {
        let mut config = match find_config_file() {
            Some(path) => Config::from_file(path)?,
            None => Config::from_env()?,
        };
        if let Some(port) = read_optional_env("PORT")? {
            config.port = port;
        }
        Ok(config)
    }

    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Config::from_toml(config.as_str())
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        let config: Config = toml::from_str(config).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = read_env("DATABASE_URL")?;
        let port = read_optional_env("PORT")?.unwrap_or(DEFAULT_PORT);
        let max_pool_size = read_optional_env("MAX_POOL_SIZE")?.unwrap_or(DEFAULT_MAX_POOL_SIZE);
        let auth_token = env::var("AUTH_TOKEN").ok();
        let honeycomb_api_key = env::var("HONEYCOMB_API_KEY").ok();

        let config = Config {
            database_url,
            port,
            max_pool_size,
            auth_token,
            honeycomb_api_key,
        };
        Ok(config)
    }
}

fn find_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}

fn read_optional_env<T>(key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => {
            let value = value
                .parse()
                .with_context(|| format!("Unable to parse {} value", key))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_filled_in() {
        let config = Config::from_toml(r#"database_url = "postgres://localhost/expenses""#).unwrap();

        assert_eq!(
            config,
            Config {
                database_url: "postgres://localhost/expenses".to_string(),
                port: 2565,
                max_pool_size: 10,
                auth_token: None,
                honeycomb_api_key: None,
            }
        );
    }

    #[test]
    fn auth_token_is_read() {
        let config = Config::from_toml(
            r#"
            database_url = "postgres://localhost/expenses"
            port = 8080
            auth_token = "November 10, 2009"
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.auth_token.as_deref(), Some("November 10, 2009"));
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = Config::from_toml("port = 8080");
        assert!(result.is_err());
    }
}
