//! Plugin system modelled on the presentation's lifecycle.
//! Plugins are registered once and called for each hook they listen to.

pub mod hooks;
pub mod registry;
mod tableofcontents;

use log::{debug, error, info};

use crate::config::DeckConfig;
use crate::deck::Deck;

pub use hooks::{Hook, HookContext, HookResult};
pub use registry::PluginRegistry;
pub use tableofcontents::TableOfContentsPlugin;

/// Plugin trait that all plugins must implement
pub trait Plugin {
    /// Unique plugin id
    fn id(&self) -> &str;

    /// Hooks this plugin wants to listen to
    fn register_hooks(&self) -> Vec<Hook> {
        vec![Hook::Init]
    }

    /// Handle a hook event
    fn handle_hook(&mut self, hook: &Hook, context: &mut HookContext<'_>) -> HookResult;
}

/// Runs registered plugins against a presentation
pub struct PluginHost {
    config: DeckConfig,
    registry: PluginRegistry,
}

impl PluginHost {
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            registry: PluginRegistry::new(),
        }
    }

    /// Host with the table of contents plugin registered
    pub fn with_table_of_contents(config: DeckConfig) -> Self {
        let mut host = Self::new(config);
        // A fresh registry cannot hold a duplicate id
        let _ = host.register(Box::new(TableOfContentsPlugin::new()));
        host
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), String> {
        self.registry.register(plugin)
    }

    /// Dispatch `hook` to every plugin listening to it, in registration order.
    ///
    /// Plugin errors are logged and do not stop the remaining plugins.
    /// Returns the number of plugins that reported an error.
    pub fn run_hook(&mut self, hook: &Hook, deck: &mut dyn Deck) -> usize {
        let mut failures = 0;
        let mut context = HookContext::new(deck, &self.config);

        for plugin in self.registry.plugins_mut() {
            if !plugin.register_hooks().contains(hook) {
                continue;
            }

            debug!("Running hook '{}' for plugin {}", hook.name(), plugin.id());
            match plugin.handle_hook(hook, &mut context) {
                HookResult::Continue => {}
                HookResult::StopPropagation => {
                    debug!("Plugin {} stopped propagation of '{}'", plugin.id(), hook.name());
                    break;
                }
                HookResult::Error(message) => {
                    error!("Plugin {} failed on '{}': {}", plugin.id(), hook.name(), message);
                    failures += 1;
                }
            }
        }

        failures
    }

    /// Run the initialization lifecycle: `init`, then `ready`
    pub fn initialize(&mut self, deck: &mut dyn Deck) -> usize {
        info!("Initializing {} plugin(s)", self.registry.len());
        self.run_hook(&Hook::Init, deck) + self.run_hook(&Hook::Ready, deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{MemoryDeck, Slide, SlideNode};

    struct Recorder {
        id: String,
        result: fn() -> HookResult,
        calls: Vec<String>,
    }

    impl Plugin for Recorder {
        fn id(&self) -> &str {
            &self.id
        }

        fn register_hooks(&self) -> Vec<Hook> {
            vec![Hook::Init, Hook::Ready]
        }

        fn handle_hook(&mut self, hook: &Hook, context: &mut HookContext<'_>) -> HookResult {
            self.calls.push(hook.name().to_string());
            let _ = context.deck.insert_slide(1, &self.id);
            (self.result)()
        }
    }

    fn recorder(id: &str, result: fn() -> HookResult) -> Box<dyn Plugin> {
        Box::new(Recorder {
            id: id.to_string(),
            result,
            calls: Vec::new(),
        })
    }

    #[test]
    fn test_errors_do_not_stop_other_plugins() {
        let mut host = PluginHost::new(DeckConfig::default());
        host.register(recorder("failing", || HookResult::Error("nope".to_string()))).unwrap();
        host.register(recorder("working", || HookResult::Continue)).unwrap();

        let mut deck = MemoryDeck::new(vec![]);
        let failures = host.run_hook(&Hook::Init, &mut deck);

        assert_eq!(failures, 1);
        assert_eq!(deck.children(), ["working", "failing"]);
    }

    #[test]
    fn test_stop_propagation() {
        let mut host = PluginHost::new(DeckConfig::default());
        host.register(recorder("first", || HookResult::StopPropagation)).unwrap();
        host.register(recorder("second", || HookResult::Continue)).unwrap();

        let mut deck = MemoryDeck::new(vec![]);
        assert_eq!(host.run_hook(&Hook::Init, &mut deck), 0);
        assert_eq!(deck.children(), ["first"]);
    }

    #[test]
    fn test_initialize_runs_table_of_contents() {
        let mut host = PluginHost::with_table_of_contents(DeckConfig::default());
        let mut deck = MemoryDeck::new(vec![
            Slide::new(vec![SlideNode::element("h1", "Title")], 0),
            Slide::new(vec![SlideNode::element("h2", "Part one")], 1),
        ]);

        assert_eq!(host.initialize(&mut deck), 0);
        assert_eq!(deck.children().len(), 3);
        assert!(deck.children()[1].contains("<td>Part one</td>"));
    }
}
