use crate::bot::commands::commands::Command;

pub struct Replies;

impl Replies {
    pub fn no_permission() -> String {
        "You don't have permission to do this.".to_string()
    }

    pub fn username_invalid() -> String {
        "Username invalid.".to_string()
    }

    pub fn guild_only() -> String {
        "This command can only be used in a server.".to_string()
    }

    pub fn usage(usage: &str) -> String {
        format!("Usage: {usage}")
    }

    pub fn role_missing(role: &str) -> String {
        format!("Role \"{role}\" does not exist.")
    }

    pub fn role_added(role: &str, mention: &str) -> String {
        format!("Role \"{role}\" has been added to {mention}")
    }

    pub fn role_removed(role: &str, mention: &str) -> String {
        format!("Role \"{role}\" has been removed from {mention}")
    }

    pub fn no_roles(mention: &str) -> String {
        format!("{mention} has no roles.")
    }

    pub fn all_roles_removed(mention: &str) -> String {
        format!("All roles have been removed from {mention}")
    }

    pub fn some_roles_kept(mention: &str, kept: usize, total: usize) -> String {
        format!("Removed {} of {total} roles from {mention}, {kept} could not be removed.", total - kept)
    }

    pub fn command_failed(command: &str) -> String {
        format!("Something went wrong while running {command}, please try again later.")
    }

    pub fn help_line(command: &Command) -> String {
        match &command.alias {
            Some(alias) => format!("{} ({}) - {}", command.name, alias, command.description),
            None => format!("{} - {}", command.name, command.description),
        }
    }

    pub fn help_empty() -> String {
        "No commands are registered.".to_string()
    }
}
