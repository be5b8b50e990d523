//! Tally driver.
//!
//! Everything around the evaluator that a deployment needs: configuration
//! from the environment, the JSON response contract, logging setup and the
//! `tally` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod response;

pub use cli::{parse_args, CliError, Command};
pub use commands::Outcome;
pub use config::{Config, ConfigError};
pub use response::{ApiResponse, ResponseBody, Status};
