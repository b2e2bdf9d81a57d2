//! Web-specific middleware and extractors.

pub mod session;
