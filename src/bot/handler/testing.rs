use std::{collections::HashMap, sync::{Arc, Mutex}};

use async_trait::async_trait;

use crate::bot::{chat_event::chat_event::{ChatEvent, ChatUser, RoleInfo}, handler::handler::ChatClient, state::def::{BotConfig, BotError, BotResult, BotSecrets}, Bot};

pub const CHANNEL: u64 = 10;
pub const GUILD: u64 = 20;

/// In-memory platform that records every reply.
#[derive(Default)]
pub struct RecordingClient {
    pub sent: Mutex<Vec<(u64, String)>>,
    pub roles: Vec<RoleInfo>,
    pub members: Mutex<HashMap<u64, Vec<u64>>>,
    pub users: Vec<u64>,
    pub permissions: u64,
    pub guild: Option<u64>,
    /// Roles the platform refuses to add or remove.
    pub locked_roles: Vec<u64>,
}

impl RecordingClient {
    pub fn replies(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
    }

    fn check_role(&self, role_id: u64) -> BotResult<()> {
        if self.locked_roles.contains(&role_id) {
            Err(BotError::Custom("Missing Permissions".into()))
        } else {
            Ok(())
        }
    }

    pub fn roles_of(&self, user_id: u64) -> Vec<u64> {
        self.members.lock().unwrap().get(&user_id).cloned().unwrap_or_default()
    }
}

pub fn test_bot() -> Arc<Bot> {
    Bot::new(BotSecrets { discord_token: "test".into() }, BotConfig::default())
}

pub fn event(message: &str) -> ChatEvent {
    ChatEvent::new(CHANNEL, ChatUser { id: 1, name: "tester".into() }, message)
}

#[async_trait]
impl ChatClient for RecordingClient {
    async fn send_message(&self, channel_id: u64, message: &str) -> BotResult<()> {
        self.sent.lock().unwrap().push((channel_id, message.to_string()));
        Ok(())
    }

    async fn user_mention(&self, user_id: u64) -> BotResult<String> {
        if self.users.contains(&user_id) {
            Ok(format!("<@{user_id}>"))
        } else {
            Err(BotError::Custom(format!("Unknown user {user_id}")))
        }
    }

    async fn channel_guild(&self, _channel_id: u64) -> BotResult<Option<u64>> {
        Ok(self.guild)
    }

    async fn guild_roles(&self, _guild_id: u64) -> BotResult<Vec<RoleInfo>> {
        Ok(self.roles.clone())
    }

    async fn add_member_role(&self, _guild_id: u64, user_id: u64, role_id: u64) -> BotResult<()> {
        self.check_role(role_id)?;
        self.members.lock().unwrap().entry(user_id).or_default().push(role_id);
        Ok(())
    }

    async fn remove_member_role(&self, _guild_id: u64, user_id: u64, role_id: u64) -> BotResult<()> {
        self.check_role(role_id)?;
        if let Some(roles) = self.members.lock().unwrap().get_mut(&user_id) {
            roles.retain(|r| *r != role_id);
        }
        Ok(())
    }

    async fn member_roles(&self, _guild_id: u64, user_id: u64) -> BotResult<Vec<u64>> {
        Ok(self.roles_of(user_id))
    }

    // Outside a guild nobody holds guild permissions, same as on Discord
    async fn member_permissions(&self, _channel_id: u64, _user_id: u64) -> BotResult<u64> {
        Ok(if self.guild.is_some() { self.permissions } else { 0 })
    }
}
