//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`discover`] - Discover flags around a coordinate
//! - [`search`] - Discover flags around a searched place

pub mod common;
pub mod config;
pub mod discover;
pub mod search;
