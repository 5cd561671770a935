use thiserror::Error;

use crate::bot::registry::registry::RegistryError;

pub type BotResult<T> = Result<T, BotError>;

pub struct BotSecrets {
    pub discord_token: String,
}

#[derive(Clone, Debug, Default)]
pub struct BotConfig {
    pub debug: bool,
    //Prefix the event loop strips before dispatch, empty = none
    pub prefix: String,
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Discord error: {0}")]
    Serenity(#[from] serenity::Error),
    #[error("Missing environment variable: {0}")]
    ConfigMissing(&'static str),
    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Bot has already been started")]
    AlreadyStarted,
    #[error("{0}")]
    Custom(String),
}
