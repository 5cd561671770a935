use core::fmt;
use std::fmt::Display;

use crate::bot::{chat_event::chat_event::ChatEvent, handler::handler::ChatClient, state::def::BotResult};

/// Permission bits handlers check, matching the platform's bitmask layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Permission {
    ManageRoles,
}

impl Permission {
    pub const fn bits(self) -> u64 {
        match self {
            Permission::ManageRoles => 1 << 28,
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Permission::ManageRoles => "manage roles",
        };
        write!(f, "{}", s)
    }
}

pub async fn has_permission(client: &dyn ChatClient, event: &ChatEvent, required: Permission) -> BotResult<bool> {
    let granted = client.member_permissions(event.channel_id, event.user.id).await?;
    Ok(granted & required.bits() != 0)
}
