use async_trait::async_trait;

use crate::bot::{chat_event::chat_event::RoleInfo, state::def::BotResult};

/// Everything a command handler may ask of the chat platform.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(&self, channel_id: u64, message: &str) -> BotResult<()>;

    /// Resolves a user and returns the text that mentions them.
    async fn user_mention(&self, user_id: u64) -> BotResult<String>;

    /// Guild (group) the channel belongs to, `None` for direct messages.
    async fn channel_guild(&self, channel_id: u64) -> BotResult<Option<u64>>;

    async fn guild_roles(&self, guild_id: u64) -> BotResult<Vec<RoleInfo>>;

    async fn add_member_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> BotResult<()>;

    async fn remove_member_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> BotResult<()>;

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> BotResult<Vec<u64>>;

    /// Raw permission bitmask of `user_id` in `channel_id`.
    async fn member_permissions(&self, channel_id: u64, user_id: u64) -> BotResult<u64>;
}
