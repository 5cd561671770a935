use std::sync::{atomic::{AtomicBool, Ordering}, Arc};

use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::bot::{
    commands::{Module, ModuleInit},
    platforms::discord::event_loop::run_discord_bot,
    registry::registry::CommandRegistry,
    runtime::module_runtime::ModuleTasks,
    state::def::{BotConfig, BotError, BotResult, BotSecrets},
};

pub mod chat_event;
pub mod commands;
pub mod dispatcher;
pub mod handler;
pub mod permissions;
pub mod platforms;
pub mod registry;
pub mod replies;
pub mod runtime;
pub mod state;
pub mod tokenizer;

pub struct Bot {
    pub registry: CommandRegistry,
    pub config: BotConfig,
    pub(crate) secrets: BotSecrets,
    started: AtomicBool,
    tasks: Mutex<ModuleTasks>,
}

impl Bot {
    pub fn new(secrets: BotSecrets, config: BotConfig) -> Arc<Self> {
        Arc::new(Self {
            registry: CommandRegistry::new(),
            config,
            secrets,
            started: AtomicBool::new(false),
            tasks: Mutex::new(ModuleTasks::default()),
        })
    }

    /// Registers a module. Once the bot has started, its init hook is launched right away.
    pub async fn register_module(self: &Arc<Self>, module: Module) -> BotResult<()> {
        let name = module.name.clone();
        let init = module.init.clone();
        self.registry.register_module(module).await?;

        if let Some(init) = init {
            let mut tasks = self.tasks.lock().await;
            if tasks.is_open() {
                self.start_init(&mut tasks, &name, init);
            }
        }

        Ok(())
    }

    /// Registers every module on its own task and waits for all of them.
    ///
    /// Results come back in the order the modules were given.
    pub async fn register_modules(self: &Arc<Self>, modules: Vec<Module>) -> Vec<BotResult<()>> {
        let tasks = modules.into_iter().map(|module| {
            let bot = self.clone();
            tokio::spawn(async move { bot.register_module(module).await })
        });

        join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined.unwrap_or_else(|e| Err(BotError::Custom(format!("Registration task failed: {e}")))))
            .collect()
    }

    fn start_init(self: &Arc<Self>, tasks: &mut ModuleTasks, module: &str, init: ModuleInit) -> bool {
        let bot = self.clone();
        let started = tasks.add_task(module, move || tokio::spawn(init(bot)));
        if started {
            debug!("Starting init of module {module}");
        }
        started
    }

    /// Starts the init hook of every registered module and of every module registered from
    /// now on. Hooks run concurrently, in no order, once per module.
    ///
    /// The tracker lock is held while reading the registry, so a module registered at the
    /// same time is started exactly once by whichever side sees it first.
    pub(crate) async fn spawn_module_inits(self: &Arc<Self>) -> usize {
        let mut tasks = self.tasks.lock().await;
        tasks.open();

        let mut started = 0;
        for (module, init) in self.registry.module_inits().await {
            if self.start_init(&mut tasks, &module, init) {
                started += 1;
            }
        }
        started
    }

    /// Blocks until every init hook started so far has returned.
    pub async fn wait_for_inits(&self) {
        let tasks = self.tasks.lock().await.take();
        tasks.join().await;
    }

    /// Runs module init hooks and the Discord connection until Ctrl-C.
    pub async fn start(self: &Arc<Self>) -> BotResult<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(BotError::AlreadyStarted);
        }

        self.spawn_module_inits().await;
        let result = run_discord_bot(self.clone()).await;

        let tasks = self.tasks.lock().await.close();
        tasks.shutdown();
        match &result {
            Ok(()) => info!("Bot is now sleeping."),
            Err(e) => error!("Discord connection failed: {e}"),
        }

        result
    }
}
