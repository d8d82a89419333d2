use serde::{Deserialize, Serialize};
use std::path::Path;
use std::fs;

pub const DEFAULT_SERVER_URL: &str = "https://b.greshilov.me/reds";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub server_url: Option<String>,
    pub secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            secret: None,
        }
    }
}

impl Config {
    pub fn load() -> std::result::Result<Config, Box<dyn std::error::Error>> {
        Self::load_from("config.json")
    }

    pub fn load_from(config_path: &str) -> std::result::Result<Config, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, config_path: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// The shared key never ships compiled in. Resolution order: explicit
    /// argument, then SECRET_KEY from the environment, then the config file.
    pub fn resolve_secret(&self, secret_arg: Option<String>) -> std::result::Result<String, Box<dyn std::error::Error>> {
        if let Some(secret) = secret_arg {
            return Ok(secret);
        }

        if let Ok(secret) = std::env::var("SECRET_KEY") {
            if !secret.is_empty() {
                return Ok(secret);
            }
        }

        if let Some(secret) = &self.secret {
            return Ok(secret.clone());
        }

        Err("No secret configured: pass it as the last argument, set SECRET_KEY, or add \"secret\" to config.json".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from("does-not-exist.json").unwrap();
        assert_eq!(config.server_url.as_deref(), Some(DEFAULT_SERVER_URL));
        assert!(config.secret.is_none());
    }

    #[test]
    fn config_file_round_trips() {
        let path = std::env::temp_dir().join(format!("reds-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap().to_string();

        let config = Config {
            server_url: Some("http://127.0.0.1:8000".to_string()),
            secret: Some("hunter2".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(loaded.secret.as_deref(), Some("hunter2"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn secret_resolution_prefers_the_argument() {
        let config = Config {
            server_url: None,
            secret: Some("from-config".to_string()),
        };

        let secret = config.resolve_secret(Some("from-arg".to_string())).unwrap();
        assert_eq!(secret, "from-arg");
    }

    #[test]
    fn secret_resolution_falls_back_to_config_then_errors() {
        // The only test touching SECRET_KEY, so clearing it is safe
        std::env::remove_var("SECRET_KEY");

        let config = Config {
            server_url: None,
            secret: Some("from-config".to_string()),
        };
        assert_eq!(config.resolve_secret(None).unwrap(), "from-config");

        let bare = Config {
            server_url: None,
            secret: None,
        };
        assert!(bare.resolve_secret(None).is_err());
    }
}
