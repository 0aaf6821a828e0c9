pub mod check;
pub mod redact;
pub mod resolve;
pub mod validate;
