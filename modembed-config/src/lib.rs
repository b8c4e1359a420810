//! Configuration for modembed.
//!
//! Settings come from an optional `embed.toml`:
//!
//! ```toml
//! [embed]
//! extensions = [".sl", ".swz"]
//! namespace = "swazi"
//! ```
//!
//! Every field is optional and falls back to [`EmbedConfig::default`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{
    ConfigFile, DEFAULT_COMMAND, DEFAULT_EXTENSIONS, DEFAULT_INCLUDE, DEFAULT_NAMESPACE,
    EmbedConfig,
};
pub use error::{Error, Result, SourceContext};
pub use file::{EmbedToml, parse_config};
