//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: tools that forward validated calls
//! to the scraping API.

pub mod tools;
