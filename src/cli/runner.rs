//! CLI runner - executes commands

use crate::cancel::CancellationToken;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ClientConfig, TOKEN_ENV};
use crate::error::{Error, Result};
use crate::http::Client;
use crate::pagination::ListOptions;
use crate::services::{ListAccountsOptions, ListCategoriesOptions, ListTransactionsOptions};
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// Ctrl-C fires the cancellation token, abandoning the request in flight.
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        let ctx = self.context();

        let interrupt = ctx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, cancelling");
                interrupt.cancel();
            }
        });

        self.dispatch(&client, &ctx).await
    }

    async fn dispatch(&self, client: &Client, ctx: &CancellationToken) -> Result<()> {
        match &self.cli.command {
            Commands::Ping => {
                let ping = client.utility().ping(ctx).await?;
                info!("API status: {}", ping.meta.status_emoji);
                self.emit(&ping)
            }
            Commands::Accounts {
                account_type,
                ownership,
                page_size,
            } => {
                let opts = ListAccountsOptions {
                    list: list_options(*page_size),
                    account_type: account_type.map(Into::into),
                    ownership_type: ownership.map(Into::into),
                };
                let accounts = client.accounts().list(ctx, Some(&opts)).await?;
                debug!("Fetched {} accounts", accounts.len());
                self.emit(&accounts.data)
            }
            Commands::Account { id } => self.emit(&client.accounts().get(ctx, id).await?),
            Commands::Transactions {
                account,
                status,
                since,
                until,
                category,
                tag,
                page_size,
            } => {
                let opts = ListTransactionsOptions {
                    list: list_options(*page_size),
                    status: status.map(Into::into),
                    since: *since,
                    until: *until,
                    category: category.clone(),
                    tag: tag.clone(),
                };
                let service = client.transactions();
                let transactions = match account {
                    Some(account_id) => service.list_by_account(ctx, account_id, Some(&opts)).await?,
                    None => service.list(ctx, Some(&opts)).await?,
                };
                debug!("Fetched {} transactions", transactions.len());
                self.emit(&transactions.data)
            }
            Commands::Transaction { id } => {
                self.emit(&client.transactions().get(ctx, id).await?)
            }
            Commands::Categories { parent } => {
                let opts = ListCategoriesOptions {
                    parent: parent.clone(),
                };
                let categories = client.categories().list(ctx, Some(&opts)).await?;
                self.emit(&categories.data)
            }
            Commands::Category { id } => self.emit(&client.categories().get(ctx, id).await?),
            Commands::Categorize {
                transaction,
                category,
                clear,
            } => {
                let service = client.categories();
                match category {
                    Some(category_id) if !*clear => {
                        service
                            .update_transaction_category(ctx, transaction, category_id)
                            .await?;
                    }
                    _ => service.remove_transaction_category(ctx, transaction).await?,
                }
                self.emit(&json!({ "transaction": transaction, "category": category }))
            }
            Commands::Tags { page_size } => {
                let opts = list_options(*page_size);
                let tags = client.tags().list(ctx, Some(&opts)).await?;
                self.emit(&tags.data)
            }
            Commands::Tag { transaction, tags } => {
                client
                    .tags()
                    .add_to_transaction(ctx, transaction, tags)
                    .await?;
                self.emit(&json!({ "transaction": transaction, "added": tags }))
            }
            Commands::Untag { transaction, tags } => {
                client
                    .tags()
                    .remove_from_transaction(ctx, transaction, tags)
                    .await?;
                self.emit(&json!({ "transaction": transaction, "removed": tags }))
            }
            Commands::Webhooks { page_size } => {
                let opts = list_options(*page_size);
                let webhooks = client.webhooks().list(ctx, Some(&opts)).await?;
                self.emit(&webhooks.data)
            }
            Commands::WebhookCreate { url, description } => {
                let webhook = client
                    .webhooks()
                    .create(ctx, url, description.as_deref())
                    .await?;
                self.emit(&webhook)
            }
            Commands::WebhookDelete { id } => {
                client.webhooks().delete(ctx, id).await?;
                self.emit(&json!({ "deleted": id }))
            }
            Commands::WebhookPing { id } => self.emit(&client.webhooks().ping(ctx, id).await?),
            Commands::WebhookLogs { id, page_size } => {
                let opts = list_options(*page_size);
                let logs = client.webhooks().list_logs(ctx, id, Some(&opts)).await?;
                self.emit(&logs.data)
            }
        }
    }

    /// Build the API client from global flags
    fn client(&self) -> Result<Client> {
        let token = self
            .cli
            .token
            .clone()
            .ok_or_else(|| Error::missing_field(TOKEN_ENV))?;

        let mut builder = ClientConfig::builder().timeout(Duration::from_secs(self.cli.timeout));
        if let Some(base_url) = &self.cli.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(max_pages) = self.cli.max_pages {
            builder = builder.max_pages(max_pages);
        }

        Client::with_config(token, builder.build())
    }

    /// Token covering the whole command
    fn context(&self) -> CancellationToken {
        match self.cli.deadline {
            Some(seconds) => CancellationToken::with_timeout(Duration::from_secs(seconds)),
            None => CancellationToken::new(),
        }
    }

    /// Print a value as JSON on stdout
    fn emit<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
        .map_err(Error::Encode)?;
        println!("{rendered}");
        Ok(())
    }
}

fn list_options(page_size: Option<u32>) -> ListOptions {
    ListOptions {
        page_size,
        ..ListOptions::default()
    }
}
