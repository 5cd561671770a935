mod bot;

use bot::{
    commands::internal_modules,
    state::def::{BotConfig, BotResult, BotSecrets},
    Bot,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_directive())))
        .init();

    if let Err(e) = run(config).await {
        error!("Error running bot: {e}");
        std::process::exit(1);
    }
}

async fn run(config: BotConfig) -> BotResult<()> {
    let secrets = BotSecrets::from_env()?;
    let bot = Bot::new(secrets, config);

    // Rejections are already logged by the registry
    let loaded = bot.register_modules(internal_modules()).await.into_iter().filter(|r| r.is_ok()).count();
    info!("{loaded} internal module(s) loaded");

    bot.start().await
}
