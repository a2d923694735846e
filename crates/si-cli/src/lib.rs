//! Space Invaders news feed CLI library.
//!
//! This crate provides the CLI interface and the orchestration around the
//! parser: page cache, configuration, rendering and git publishing.

pub mod cache;
mod cli;
pub mod commands;
mod config;
pub mod git;

pub use cli::{Cli, Commands, ParseArgs, RenderArgs, RunArgs};
pub use config::Config;
