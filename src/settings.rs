use crate::responder::Tuning;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Open conversations kept in memory before the stalest is dropped.
    pub max_sessions: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { max_sessions: 1024 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub sessions: SessionSettings,
    pub tuning: Tuning,
}

impl Settings {
    /// Reads `<name>.toml` when present, then `MINDEASE_*` variables
    /// (`MINDEASE_TUNING__FOLLOW_UP_CHANCE=0.5`). Missing keys fall back to
    /// the built-in defaults.
    pub fn load(name: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("MINDEASE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration '{}'", name))?;
        Self::from_config(settings)
    }

    fn from_config(settings: config::Config) -> Result<Self> {
        let settings: Settings = settings
            .try_deserialize()
            .context("Configuration has an unexpected shape")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        if self.sessions.max_sessions == 0 {
            anyhow::bail!("sessions.max_sessions must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> Result<Settings> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::from_config(settings)
    }

    #[test]
    fn empty_file_gives_defaults() {
        let settings = parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tuning.follow_up_after_turn, 2);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let settings = parse(
            r#"
            [server]
            port = 9000

            [tuning]
            suggestion_chance = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.tuning.suggestion_chance, 0.5);
        assert_eq!(settings.tuning.encourage_chance, 0.4);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(parse("[tuning]\nfollow_up_chance = -0.1").is_err());
        assert!(parse("[sessions]\nmax_sessions = 0").is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let settings = Settings::load("does-not-exist/Config").unwrap();
        assert_eq!(settings.tuning, Tuning::default());
    }
}
