use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use serenity::all::{Cache, ChannelId, Context, GuildId, Http, Mentionable, RoleId, UserId};
use tracing::debug;

use crate::bot::{chat_event::chat_event::RoleInfo, handler::handler::ChatClient, state::def::{BotError, BotResult}};

/// `ChatClient` backed by serenity's HTTP client and gateway cache.
pub struct DiscordClient {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordClient {
    pub fn new(ctx: &Context) -> Self {
        Self { http: ctx.http.clone(), cache: ctx.cache.clone() }
    }
}

#[async_trait]
impl ChatClient for DiscordClient {
    async fn send_message(&self, channel_id: u64, message: &str) -> BotResult<()> {
        ChannelId::new(channel_id).say(&self.http, message).await?;
        Ok(())
    }

    async fn user_mention(&self, user_id: u64) -> BotResult<String> {
        let user = UserId::new(user_id).to_user(&self.http).await?;
        Ok(user.mention().to_string())
    }

    async fn channel_guild(&self, channel_id: u64) -> BotResult<Option<u64>> {
        let channel = ChannelId::new(channel_id).to_channel(&self.http).await?;
        Ok(channel.guild().map(|c| c.guild_id.get()))
    }

    async fn guild_roles(&self, guild_id: u64) -> BotResult<Vec<RoleInfo>> {
        let mut roles: Vec<_> = GuildId::new(guild_id).roles(&self.http).await?.into_values().collect();
        roles.sort_by_key(|role| role.position);

        Ok(roles.into_iter().map(|role| RoleInfo { id: role.id.get(), name: role.name }).collect())
    }

    async fn add_member_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> BotResult<()> {
        self.http
            .add_member_role(GuildId::new(guild_id), UserId::new(user_id), RoleId::new(role_id), None)
            .await?;
        Ok(())
    }

    async fn remove_member_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> BotResult<()> {
        self.http
            .remove_member_role(GuildId::new(guild_id), UserId::new(user_id), RoleId::new(role_id), None)
            .await?;
        Ok(())
    }

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> BotResult<Vec<u64>> {
        let member = GuildId::new(guild_id).member(&self.http, UserId::new(user_id)).await?;
        Ok(member.roles.iter().map(|role| role.get()).collect())
    }

    async fn member_permissions(&self, channel_id: u64, user_id: u64) -> BotResult<u64> {
        let Some(channel) = ChannelId::new(channel_id).to_channel(&self.http).await?.guild() else {
            return Ok(0);
        };
        let member = channel.guild_id.member(&self.http, UserId::new(user_id)).await?;

        // Guild refs from the cache must not live across an await
        let cached = self.cache.guild(channel.guild_id).map(|guild| guild.user_permissions_in(&channel, &member));
        let permissions = cached_or_fetch(cached, async {
            debug!("Guild {} not cached yet, fetching it", channel.guild_id);
            let guild = channel.guild_id.to_partial_guild(&self.http).await?;
            Ok::<_, BotError>(guild.user_permissions_in(&channel, &member))
        })
        .await?;

        Ok(permissions.bits())
    }
}

/// Uses the cached value when there is one, otherwise awaits `fetch`.
async fn cached_or_fetch<T>(cached: Option<T>, fetch: impl Future<Output = BotResult<T>>) -> BotResult<T> {
    match cached {
        Some(value) => Ok(value),
        None => fetch.await,
    }
}
