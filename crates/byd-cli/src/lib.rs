//! # byd-cli
//!
//! Terminal front end for BYD (Build Your Dictionary).
//!
//! - [`app`]: the interactive menu with its search, quiz and browse modes
//! - [`commands`]: one-shot commands (`lookup`, `add`, `list`, `stats`)
//! - [`config`]: the TOML configuration file
//! - [`console`]: the terminal seam used by the interactive modes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod console;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
