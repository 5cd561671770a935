use tracing::{debug, warn};

use crate::bot::{
    chat_event::chat_event::ChatEvent,
    commands::{commands::Command, rolemanager::{find_role, report_failure, resolve_target}},
    handler::handler::ChatClient,
    replies::Replies,
    state::def::BotResult,
};

pub fn set_role_command() -> Command {
    Command::new("setrole", "Adds a role to a user.", |_bot, client, event| {
        Box::pin(async move {
            let result = set_role(client.as_ref(), &event).await;
            report_failure(client.as_ref(), &event, "setrole", result).await
        })
    })
    .alias("sr")
    .usage(SET_ROLE_USAGE)
}

pub fn remove_role_command() -> Command {
    Command::new("removerole", "Removes a role from a user.", |_bot, client, event| {
        Box::pin(async move {
            let result = remove_role(client.as_ref(), &event).await;
            report_failure(client.as_ref(), &event, "removerole", result).await
        })
    })
    .alias("rr")
    .usage(REMOVE_ROLE_USAGE)
}

pub fn remove_all_roles_command() -> Command {
    Command::new("removeallroles", "Removes all of a user's roles.", |_bot, client, event| {
        Box::pin(async move {
            let result = remove_all_roles(client.as_ref(), &event).await;
            report_failure(client.as_ref(), &event, "removeallroles", result).await
        })
    })
    .alias("rar")
    .usage(REMOVE_ALL_ROLES_USAGE)
}

const SET_ROLE_USAGE: &str = "setrole <@user> <role>";
const REMOVE_ROLE_USAGE: &str = "removerole <@user> <role>";
const REMOVE_ALL_ROLES_USAGE: &str = "removeallroles <@user>";

async fn set_role(client: &dyn ChatClient, event: &ChatEvent) -> BotResult<()> {
    let Some(target) = resolve_target(client, event, 3, SET_ROLE_USAGE).await? else {
        return Ok(());
    };
    let role_name = &target.args[2];

    let roles = client.guild_roles(target.guild_id).await?;
    let Some(role) = find_role(&roles, role_name) else {
        client.send_message(event.channel_id, &Replies::role_missing(role_name)).await?;
        return Ok(());
    };

    client.add_member_role(target.guild_id, target.user_id, role.id).await?;
    client.send_message(event.channel_id, &Replies::role_added(role_name, &target.mention)).await
}

async fn remove_role(client: &dyn ChatClient, event: &ChatEvent) -> BotResult<()> {
    let Some(target) = resolve_target(client, event, 3, REMOVE_ROLE_USAGE).await? else {
        return Ok(());
    };
    let role_name = &target.args[2];

    let roles = client.guild_roles(target.guild_id).await?;
    let Some(role) = find_role(&roles, role_name) else {
        client.send_message(event.channel_id, &Replies::role_missing(role_name)).await?;
        return Ok(());
    };

    client.remove_member_role(target.guild_id, target.user_id, role.id).await?;
    client.send_message(event.channel_id, &Replies::role_removed(role_name, &target.mention)).await
}

async fn remove_all_roles(client: &dyn ChatClient, event: &ChatEvent) -> BotResult<()> {
    let Some(target) = resolve_target(client, event, 2, REMOVE_ALL_ROLES_USAGE).await? else {
        return Ok(());
    };

    let member_roles = client.member_roles(target.guild_id, target.user_id).await?;
    if member_roles.is_empty() {
        return client.send_message(event.channel_id, &Replies::no_roles(&target.mention)).await;
    }

    // Roles the bot may not touch (managed or above its own) must not stop the others
    let total = member_roles.len();
    let mut kept = 0;
    for role_id in member_roles {
        debug!("Removing role {role_id} from {}", target.user_id);
        if let Err(e) = client.remove_member_role(target.guild_id, target.user_id, role_id).await {
            warn!("Could not remove role {role_id} from {}: {e}", target.user_id);
            kept += 1;
        }
    }

    let reply = if kept == 0 {
        Replies::all_roles_removed(&target.mention)
    } else {
        Replies::some_roles_kept(&target.mention, kept, total)
    };
    client.send_message(event.channel_id, &reply).await
}
