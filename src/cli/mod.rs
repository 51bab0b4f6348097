//! CLI module
//!
//! Command-line interface over the resource services.
//!
//! # Commands
//!
//! - `ping` - Verify the token
//! - `accounts` / `account` - List or fetch accounts
//! - `transactions` / `transaction` - List or fetch transactions
//! - `categories` / `category` / `categorize` - Browse and assign categories
//! - `tags` / `tag` / `untag` - Browse and edit transaction tags
//! - `webhooks` / `webhook-*` - Manage webhooks and their delivery logs

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
