use crate::bot::state::def::{BotConfig, BotError, BotResult, BotSecrets};

impl BotSecrets {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let discord_token = get("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(BotError::ConfigMissing("DISCORD_TOKEN"))?;

        Ok(Self { discord_token })
    }
}

impl BotConfig {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let debug = match get("BOT_DEBUG") {
            Some(value) => parse_flag("BOT_DEBUG", &value)?,
            None => false,
        };
        let prefix = get("BOT_PREFIX").map(|p| p.trim().to_string()).unwrap_or_default();

        Ok(Self { debug, prefix })
    }

    /// Default `tracing` filter directive when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn parse_flag(key: &'static str, value: &str) -> BotResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BotError::InvalidConfig { key, value: value.to_string() }),
    }
}
