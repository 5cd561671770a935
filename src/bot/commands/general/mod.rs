use crate::bot::{commands::{commands::Command, Module}, replies::Replies};

pub const MODULE_NAME: &str = "general";

pub fn module() -> Module {
    Module::new(MODULE_NAME).command(help_command())
}

pub fn help_command() -> Command {
    Command::new("help", "Lists every available command.", |bot, client, event| {
        Box::pin(async move {
            let lines: Vec<String> = bot.registry.commands().await.iter().map(|cmd| Replies::help_line(cmd)).collect();

            let reply = if lines.is_empty() { Replies::help_empty() } else { lines.join("\n") };
            client.send_message(event.channel_id, &reply).await
        })
    })
    .alias("h")
}
