//! Core types for plantarium
//!
//! This crate contains domain types shared across all other crates.

mod env_config;
mod plant;
mod seed;

pub use env_config::*;
pub use plant::*;
pub use seed::*;
