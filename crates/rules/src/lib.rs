pub mod error;
pub mod loader;
pub mod matcher;
pub mod resolver;
pub mod selector;
pub mod whitelist;

pub use error::ConfigError;
pub use loader::{ConfigFormat, load_settings, validate_settings};
pub use resolver::resolve;
pub use selector::select_for_target;
pub use whitelist::is_whitelisted;
