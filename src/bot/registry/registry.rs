use std::{collections::{HashMap, HashSet}, sync::Arc};

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::bot::commands::{commands::Command, Module, ModuleInit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Failed to load module {module}: a module with the same name has already been registered")]
    DuplicateModule { module: String },
    #[error("Failed to load module {module}: module {owner} has already registered command/alias {name}")]
    DuplicateCommand { module: String, name: String, owner: String },
    #[error("Failed to load module {module:?}: module and command names must not be empty")]
    EmptyName { module: String },
}

/// What the registry keeps of a module once it has been accepted.
pub struct RegisteredModule {
    pub name: String,
    pub commands: Vec<Arc<Command>>,
    pub init: Option<ModuleInit>,
}

#[derive(Default)]
struct RegistryState {
    //Names and aliases share one namespace
    commands: HashMap<String, Arc<Command>>,
    modules: HashMap<String, Arc<RegisteredModule>>,
}

/// Maps command text to commands. Grows only; both maps change under one write lock.
#[derive(Default)]
pub struct CommandRegistry {
    state: RwLock<RegistryState>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module and all of its commands, or nothing at all.
    pub async fn register_module(&self, module: Module) -> Result<(), RegistryError> {
        let mut state = self.state.write().await;

        if let Err(e) = state.check(&module) {
            error!("{e}");
            return Err(e);
        }

        let Module { name, commands, init } = module;
        let commands: Vec<Arc<Command>> = commands.into_iter().map(Arc::new).collect();

        for command in &commands {
            for key in command.keys() {
                debug!("Registered command/alias: {key}");
                state.commands.insert(key.to_string(), Arc::clone(command));
            }
        }

        state.modules.insert(name.clone(), Arc::new(RegisteredModule { name: name.clone(), commands, init }));
        info!("Loaded module: {name}");

        Ok(())
    }

    pub async fn lookup(&self, key: &str) -> Option<Arc<Command>> {
        self.state.read().await.commands.get(key).cloned()
    }

    pub async fn module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().await.modules.keys().cloned().collect();
        names.sort();
        names
    }

    /// Every registered command once, sorted by name.
    pub async fn commands(&self) -> Vec<Arc<Command>> {
        let state = self.state.read().await;
        let mut commands: Vec<Arc<Command>> = state
            .modules
            .values()
            .flat_map(|module| module.commands.iter().cloned())
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    /// Init hooks of the registered modules, paired with the module name.
    pub async fn module_inits(&self) -> Vec<(String, ModuleInit)> {
        let state = self.state.read().await;
        state
            .modules
            .values()
            .filter_map(|module| module.init.clone().map(|init| (module.name.clone(), init)))
            .collect()
    }

    /// Number of command texts (names plus aliases) currently claimed.
    pub async fn len(&self) -> usize {
        self.state.read().await.commands.len()
    }
}

impl RegistryState {
    fn check(&self, module: &Module) -> Result<(), RegistryError> {
        if module.name.is_empty() {
            return Err(RegistryError::EmptyName { module: module.name.clone() });
        }
        if self.modules.contains_key(&module.name) {
            return Err(RegistryError::DuplicateModule { module: module.name.clone() });
        }

        let mut claimed = HashSet::new();
        for command in &module.commands {
            if command.name.is_empty() {
                return Err(RegistryError::EmptyName { module: module.name.clone() });
            }

            for key in command.keys() {
                let owner = match self.commands.get(key) {
                    Some(existing) => Some(existing.module.clone()),
                    None if !claimed.insert(key) => Some(module.name.clone()),
                    None => None,
                };

                if let Some(owner) = owner {
                    return Err(RegistryError::DuplicateCommand {
                        module: module.name.clone(),
                        name: key.to_string(),
                        owner,
                    });
                }
            }
        }

        Ok(())
    }
}
