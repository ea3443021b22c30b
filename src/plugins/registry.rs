//! Plugin registry for managing registered plugins

use std::collections::HashMap;
use log::info;

use super::Plugin;

/// Registry of plugins, kept in registration order
#[derive(Default)]
pub struct PluginRegistry {
    /// Registered plugins in load order
    plugins: Vec<Box<dyn Plugin>>,
    /// Position of each plugin by id
    index: HashMap<String, usize>,
}

impl PluginRegistry {
    /// Create a new plugin registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin; ids must be unique
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), String> {
        let id = plugin.id().to_string();

        if self.index.contains_key(&id) {
            return Err(format!("Plugin '{}' is already registered", id));
        }

        info!("Registering plugin: {}", id);
        self.index.insert(id, self.plugins.len());
        self.plugins.push(plugin);

        Ok(())
    }

    /// Check whether a plugin with this id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Plugins in load order
    pub fn plugins_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Plugin>> {
        self.plugins.iter_mut()
    }

    /// Get the number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{Hook, HookContext, HookResult};

    struct TestPlugin {
        id: String,
    }

    impl Plugin for TestPlugin {
        fn id(&self) -> &str {
            &self.id
        }

        fn handle_hook(&mut self, _hook: &Hook, _context: &mut HookContext<'_>) -> HookResult {
            HookResult::Continue
        }
    }

    fn plugin(id: &str) -> Box<dyn Plugin> {
        Box::new(TestPlugin { id: id.to_string() })
    }

    #[test]
    fn test_register_plugin() {
        let mut registry = PluginRegistry::new();
        assert!(registry.is_empty());

        registry.register(plugin("menu")).unwrap();
        registry.register(plugin("notes")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("notes"));
        let ids: Vec<String> = registry.plugins_mut().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, ["menu", "notes"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("menu")).unwrap();
        assert!(registry.register(plugin("menu")).is_err());
        assert_eq!(registry.len(), 1);
    }
}
