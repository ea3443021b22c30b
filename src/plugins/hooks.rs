//! Lifecycle hooks plugins can take part in

use crate::config::DeckConfig;
use crate::deck::Deck;

/// Points in the presentation lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Presentation is initializing, slides may still be added
    Init,
    /// Presentation is ready
    Ready,
    /// Custom hook
    Custom(String),
}

impl Hook {
    /// Get the name of the hook
    pub fn name(&self) -> &str {
        match self {
            Hook::Init => "init",
            Hook::Ready => "ready",
            Hook::Custom(name) => name,
        }
    }

    /// Create a hook from its name
    pub fn from_name(name: &str) -> Self {
        match name {
            "init" => Hook::Init,
            "ready" => Hook::Ready,
            _ => Hook::Custom(name.to_string()),
        }
    }
}

/// Context passed to hook handlers
pub struct HookContext<'a> {
    /// The presentation being processed
    pub deck: &'a mut dyn Deck,
    /// The presentation's configuration object
    pub config: &'a DeckConfig,
}

impl<'a> HookContext<'a> {
    pub fn new(deck: &'a mut dyn Deck, config: &'a DeckConfig) -> Self {
        Self { deck, config }
    }
}

/// Result of a hook execution
#[derive(Debug, PartialEq, Eq)]
pub enum HookResult {
    /// Continue with the next plugin
    Continue,
    /// Stop propagation to other plugins
    StopPropagation,
    /// Error occurred
    Error(String),
}

impl From<String> for HookResult {
    fn from(error: String) -> Self {
        HookResult::Error(error)
    }
}

impl From<&str> for HookResult {
    fn from(error: &str) -> Self {
        HookResult::Error(error.to_string())
    }
}
