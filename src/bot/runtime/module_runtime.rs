use std::collections::HashSet;

use tokio::task::JoinHandle;
use tracing::error;

/// Init hooks started by the bot, one task per module.
///
/// Hooks are only started while the tracker is open, and at most once per module name.
#[derive(Default)]
pub struct ModuleTasks {
    tasks: Vec<(String, JoinHandle<()>)>,
    started: HashSet<String>,
    open: bool,
}

/// Hook tasks taken out of a [`ModuleTasks`], so they can be awaited without holding its lock.
pub struct InitTasks {
    tasks: Vec<(String, JoinHandle<()>)>,
}

impl ModuleTasks {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Spawns the hook of `module` unless it already ran or the tracker is closed.
    pub fn add_task(&mut self, module: &str, spawn: impl FnOnce() -> JoinHandle<()>) -> bool {
        if !self.open || !self.started.insert(module.to_string()) {
            return false;
        }
        self.tasks.push((module.to_string(), spawn()));
        true
    }

    pub fn take(&mut self) -> InitTasks {
        InitTasks { tasks: std::mem::take(&mut self.tasks) }
    }

    /// Stops accepting hooks and hands back the ones still tracked.
    pub fn close(&mut self) -> InitTasks {
        self.open = false;
        self.take()
    }
}

impl InitTasks {
    /// Waits for every hook to finish.
    pub async fn join(self) {
        for (module, task) in self.tasks {
            if let Err(e) = task.await {
                error!("Init of module {module} failed: {e}");
            }
        }
    }

    pub fn shutdown(self) {
        for (_, task) in self.tasks {
            task.abort();
        }
    }
}
