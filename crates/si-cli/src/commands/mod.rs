//! CLI subcommand implementations.

pub mod parse;
pub mod render;
pub mod run;
pub mod status;
