//! Redaction of HTTP requests and responses before they are logged.
//!
//! The engine takes a [`NormalizedHttpMessage`] and the rules that apply to
//! its URL, and returns a sanitized copy: query parameters, headers and
//! structured body fields named by the rules are masked or removed. Every
//! entry point is infallible; malformed bodies degrade to fixed placeholder
//! strings instead of errors.

pub mod body;
mod error;
mod field;
pub mod headers;
pub mod query;
pub mod redactor;

pub use body::{ContentKind, redact_body, redact_body_with};
pub use headers::redact_headers;
pub use query::redact_query;
pub use redactor::{ConfiguredRedactor, IntoMessageUrl, MessageRedactor, redact};

pub use httpscrub_core::{
    MASK_TOKEN, NormalizedHttpMessage, RedactionOptions, RedactionRule, RedactionTargetType,
    Settings, UnknownContentPolicy,
};
