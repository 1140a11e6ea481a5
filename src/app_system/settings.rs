use serde::Deserialize;

/// Runtime settings, read from `INVENTORY__*` environment variables over
/// built-in defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Shown in the menu banner.
    pub shop_name: String,
    /// Bound on queued requests to the inventory actor.
    pub channel_capacity: usize,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_env(config::Environment::with_prefix("INVENTORY").separator("__"))
    }

    fn from_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("shop_name", "El Kevin")?
            .set_default("channel_capacity", 32_i64)?
            .set_default("log_filter", "info")?
            .add_source(env.try_parsing(true))
            .build()?;

        s.try_deserialize()
    }
}
