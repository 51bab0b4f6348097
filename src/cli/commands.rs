//! CLI commands and argument parsing

use crate::config::{BASE_URL_ENV, TOKEN_ENV};
use crate::models::{AccountType, OwnershipType, TransactionStatus};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line client for the Up banking API
#[derive(Parser, Debug)]
#[command(name = "up-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Personal access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, env = BASE_URL_ENV, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Abandon the whole command after this many seconds
    #[arg(long, global = true)]
    pub deadline: Option<u64>,

    /// Maximum pages fetched per list call (at least 1)
    #[arg(long, global = true)]
    pub max_pages: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the token is accepted
    Ping,

    /// List accounts
    Accounts {
        /// Filter by account type
        #[arg(long)]
        account_type: Option<AccountTypeArg>,

        /// Filter by ownership
        #[arg(long)]
        ownership: Option<OwnershipArg>,

        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show one account
    Account {
        /// Account ID
        id: String,
    },

    /// List transactions
    Transactions {
        /// Restrict to one account
        #[arg(long)]
        account: Option<String>,

        /// Filter by status
        #[arg(long)]
        status: Option<StatusArg>,

        /// Created at or after (RFC 3339)
        #[arg(long)]
        since: Option<DateTime<Utc>>,

        /// Created before (RFC 3339)
        #[arg(long)]
        until: Option<DateTime<Utc>>,

        /// Category ID
        #[arg(long)]
        category: Option<String>,

        /// Tag label
        #[arg(long)]
        tag: Option<String>,

        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show one transaction
    Transaction {
        /// Transaction ID
        id: String,
    },

    /// List categories
    Categories {
        /// Only children of this category
        #[arg(long)]
        parent: Option<String>,
    },

    /// Show one category
    Category {
        /// Category ID
        id: String,
    },

    /// Set or clear the category of a transaction
    Categorize {
        /// Transaction ID
        transaction: String,

        /// Category ID to assign
        #[arg(long, conflicts_with = "clear", required_unless_present = "clear")]
        category: Option<String>,

        /// Remove the current category
        #[arg(long)]
        clear: bool,
    },

    /// List tags
    Tags {
        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Add tags to a transaction
    Tag {
        /// Transaction ID
        transaction: String,

        /// Tag labels
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a transaction
    Untag {
        /// Transaction ID
        transaction: String,

        /// Tag labels
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// List webhooks
    Webhooks {
        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Register a webhook
    WebhookCreate {
        /// Delivery URL
        url: String,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a webhook
    WebhookDelete {
        /// Webhook ID
        id: String,
    },

    /// Send a ping event to a webhook
    WebhookPing {
        /// Webhook ID
        id: String,
    },

    /// List delivery logs of a webhook
    WebhookLogs {
        /// Webhook ID
        id: String,

        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountTypeArg {
    Saver,
    Transactional,
    HomeLoan,
}

impl From<AccountTypeArg> for AccountType {
    fn from(arg: AccountTypeArg) -> Self {
        match arg {
            AccountTypeArg::Saver => AccountType::Saver,
            AccountTypeArg::Transactional => AccountType::Transactional,
            AccountTypeArg::HomeLoan => AccountType::HomeLoan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OwnershipArg {
    Individual,
    Joint,
}

impl From<OwnershipArg> for OwnershipType {
    fn from(arg: OwnershipArg) -> Self {
        match arg {
            OwnershipArg::Individual => OwnershipType::Individual,
            OwnershipArg::Joint => OwnershipType::Joint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Held,
    Settled,
}

impl From<StatusArg> for TransactionStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Held => TransactionStatus::Held,
            StatusArg::Settled => TransactionStatus::Settled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_transactions_filters() {
        let cli = Cli::try_parse_from([
            "up-client",
            "--token",
            "t",
            "transactions",
            "--status",
            "settled",
            "--since",
            "2024-01-01T00:00:00Z",
            "--page-size",
            "50",
        ])
        .unwrap();

        match cli.command {
            Commands::Transactions {
                status,
                since,
                page_size,
                account,
                ..
            } => {
                assert_eq!(status, Some(StatusArg::Settled));
                assert_eq!(since.unwrap().to_rfc3339(), "2024-01-01T00:00:00+00:00");
                assert_eq!(page_size, Some(50));
                assert!(account.is_none());
            }
            other => panic!("Expected Transactions, got {other:?}"),
        }
    }

    #[test]
    fn test_categorize_requires_category_or_clear() {
        let result = Cli::try_parse_from(["up-client", "--token", "t", "categorize", "tx-1"]);
        assert!(result.is_err());

        let cli =
            Cli::try_parse_from(["up-client", "--token", "t", "categorize", "tx-1", "--clear"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Categorize { clear: true, .. }));
    }

    #[test]
    fn test_account_type_arg_conversion() {
        assert_eq!(AccountType::from(AccountTypeArg::HomeLoan), AccountType::HomeLoan);
        assert_eq!(OwnershipType::from(OwnershipArg::Joint), OwnershipType::Joint);
    }
}
