pub mod config;
pub mod error;
pub mod message;
pub mod options;
pub mod rule;
pub mod target;

pub use config::{
    HostRule, PathRule, RedactionConfig, Settings, WhitelistHost, WhitelistPath,
};
pub use error::CoreError;
pub use message::{Headers, MessageKind, NormalizedHttpMessage};
pub use options::{RedactionOptions, UnknownContentPolicy};
pub use rule::{MASK_TOKEN, RedactionRule, WILDCARD, wildcard_rule};
pub use target::RedactionTargetType;
