use tracing::{debug, error, warn};

use crate::bot::{
    chat_event::chat_event::{parse_mention, ChatEvent, RoleInfo},
    commands::{rolemanager::commands::{remove_all_roles_command, remove_role_command, set_role_command}, Module},
    handler::handler::ChatClient,
    permissions::permissions::{has_permission, Permission},
    replies::Replies,
    state::def::BotResult,
    tokenizer::tokenizer::tokenize,
};

pub mod commands;

pub const MODULE_NAME: &str = "rolemanager";

pub fn module() -> Module {
    Module::new(MODULE_NAME)
        .command(set_role_command())
        .command(remove_role_command())
        .command(remove_all_roles_command())
}

/// The member a role command acts on, resolved from `<@user> ...` arguments.
pub struct RoleTarget {
    pub guild_id: u64,
    pub user_id: u64,
    pub mention: String,
    pub args: Vec<String>,
}

/// Server check, permission check, argument parsing and member lookup shared by the role
/// commands.
///
/// Returns `None` once the user has been told what went wrong.
pub async fn resolve_target(client: &dyn ChatClient, event: &ChatEvent, arg_count: usize, usage: &str) -> BotResult<Option<RoleTarget>> {
    let Some(guild_id) = client.channel_guild(event.channel_id).await? else {
        client.send_message(event.channel_id, &Replies::guild_only()).await?;
        return Ok(None);
    };

    if !has_permission(client, event, Permission::ManageRoles).await? {
        client.send_message(event.channel_id, &Replies::no_permission()).await?;
        return Ok(None);
    }

    let args = match tokenize(&event.message) {
        Ok(args) if args.len() == arg_count => args,
        Ok(args) => {
            warn!("{usage}: expected {arg_count} arguments, got {args:?}");
            client.send_message(event.channel_id, &Replies::usage(usage)).await?;
            return Ok(None);
        }
        Err(e) => {
            warn!("{usage}: {e}");
            client.send_message(event.channel_id, &Replies::usage(usage)).await?;
            return Ok(None);
        }
    };

    let Some(user_id) = parse_mention(&args[1]) else {
        client.send_message(event.channel_id, &Replies::username_invalid()).await?;
        return Ok(None);
    };

    let mention = match client.user_mention(user_id).await {
        Ok(mention) => mention,
        Err(e) => {
            debug!("Error getting user {user_id}: {e}");
            client.send_message(event.channel_id, &Replies::username_invalid()).await?;
            return Ok(None);
        }
    };

    Ok(Some(RoleTarget { guild_id, user_id, mention, args }))
}

/// Logs a failed platform call and tells the user, so the handler can return normally.
pub async fn report_failure(client: &dyn ChatClient, event: &ChatEvent, command: &str, result: BotResult<()>) -> BotResult<()> {
    if let Err(e) = result {
        error!("{command} requested by {} failed: {e}", event.user);
        client.send_message(event.channel_id, &Replies::command_failed(command)).await?;
    }
    Ok(())
}

/// First guild role with exactly this name.
pub fn find_role<'a>(roles: &'a [RoleInfo], name: &str) -> Option<&'a RoleInfo> {
    roles.iter().find(|role| role.name == name)
}
