use std::sync::Arc;

use futures::future::BoxFuture;

use crate::bot::{chat_event::chat_event::ChatEvent, handler::handler::ChatClient, state::def::BotResult, Bot};

pub type HandlerFuture = BoxFuture<'static, BotResult<()>>;

/// Uniform call contract for every command.
///
/// Handlers own argument parsing and every reply to the user. An `Err` is only logged by
/// the dispatcher, so anything the user should see has to be sent before returning.
pub trait CommandHandler: Send + Sync {
    fn execute(&self, bot: Arc<Bot>, client: Arc<dyn ChatClient>, event: ChatEvent) -> HandlerFuture;
}

pub struct FnHandler<F> {
    func: F,
}

impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(Arc<Bot>, Arc<dyn ChatClient>, ChatEvent) -> HandlerFuture + Send + Sync + 'static,
{
    fn execute(&self, bot: Arc<Bot>, client: Arc<dyn ChatClient>, event: ChatEvent) -> HandlerFuture {
        (self.func)(bot, client, event)
    }
}

pub struct Command {
    pub name: String,
    pub alias: Option<String>,
    pub description: String,
    pub usage: String,
    /// Name of the module that registered this command, filled in by `Module::command`.
    pub module: String,
    pub handler: Arc<dyn CommandHandler>,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(Arc<Bot>, Arc<dyn ChatClient>, ChatEvent) -> HandlerFuture + Send + Sync + 'static,
    {
        Self::with_handler(name, description, Arc::new(FnHandler { func }))
    }

    pub fn with_handler(name: impl Into<String>, description: impl Into<String>, handler: Arc<dyn CommandHandler>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            alias: None,
            description: description.into(),
            module: String::new(),
            handler,
        }
    }

    /// An empty alias means "no alias".
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Every text this command answers to: the name, then the alias if any.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alias.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(name: &str) -> Command {
        Command::new(name, "does nothing", |_, _, _| Box::pin(async { Ok(()) }))
    }

    #[test]
    fn keys_include_alias() {
        let cmd = noop("setrole").alias("sr");
        assert_eq!(cmd.keys().collect::<Vec<_>>(), vec!["setrole", "sr"]);
    }

    #[test]
    fn empty_alias_is_none() {
        let cmd = noop("setrole").alias("");
        assert!(cmd.alias.is_none());
        assert_eq!(cmd.keys().count(), 1);
    }

    #[test]
    fn usage_defaults_to_name() {
        assert_eq!(noop("help").usage, "help");
        assert_eq!(noop("help").usage("help [command]").usage, "help [command]");
    }
}
