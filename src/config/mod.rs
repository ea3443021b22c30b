mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_config, load_config_or_default};
pub use validation::validate_options;
pub use defaults::*;
