use std::{future::Future, sync::Arc};

use futures::future::BoxFuture;

use crate::bot::{commands::commands::Command, Bot};

pub mod commands;
pub mod general;
pub mod rolemanager;

/// One-time hook run after the bot starts.
pub type ModuleInit = Arc<dyn Fn(Arc<Bot>) -> BoxFuture<'static, ()> + Send + Sync>;

/// A named bundle of commands, handed over to the registry as a whole.
pub struct Module {
    pub name: String,
    pub commands: Vec<Command>,
    pub init: Option<ModuleInit>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), commands: Vec::new(), init: None }
    }

    pub fn command(mut self, mut command: Command) -> Self {
        command.module = self.name.clone();
        self.commands.push(command);
        self
    }

    pub fn on_init<F, Fut>(mut self, init: F) -> Self
    where
        F: Fn(Arc<Bot>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.init = Some(Arc::new(move |bot| Box::pin(init(bot))));
        self
    }
}

/// Modules bundled with the bot.
pub fn internal_modules() -> Vec<Module> {
    vec![general::module(), rolemanager::module()]
}
