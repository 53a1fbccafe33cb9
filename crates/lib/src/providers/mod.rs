//! # Providers
//!
//! Clients for the external services the assistant depends on.

pub mod ai;
