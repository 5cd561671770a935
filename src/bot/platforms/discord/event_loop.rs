use std::sync::Arc;

use serenity::{all::{Context, EventHandler, GatewayIntents, Message, Ready}, async_trait, Client};
use tracing::info;

use crate::bot::{
    chat_event::chat_event::{ChatEvent, ChatUser},
    dispatcher::dispatcher::dispatch_message,
    handler::handler::ChatClient,
    platforms::discord::discord::DiscordClient,
    state::def::BotResult,
    Bot,
};

struct Handler {
    bot: Arc<Bot>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(content) = strip_prefix(&self.bot.config.prefix, &msg.content) else {
            return;
        };

        let event = ChatEvent::new(
            msg.channel_id.get(),
            ChatUser { id: msg.author.id.get(), name: msg.author.name.clone() },
            content,
        );
        let client: Arc<dyn ChatClient> = Arc::new(DiscordClient::new(&ctx));

        dispatch_message(&self.bot, client, event).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

/// Message text left for the dispatcher once the configured prefix is removed.
pub fn strip_prefix<'a>(prefix: &str, content: &'a str) -> Option<&'a str> {
    if prefix.is_empty() {
        Some(content)
    } else {
        content.strip_prefix(prefix)
    }
}

pub async fn run_discord_bot(bot: Arc<Bot>) -> BotResult<()> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&bot.secrets.discord_token, intents)
        .event_handler(Handler { bot: bot.clone() })
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down Discord connection");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await?;
    Ok(())
}
