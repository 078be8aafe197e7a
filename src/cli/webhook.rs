//! Webhook-related CLI commands
//!
//! This module provides commands for managing the authenticated user's
//! webhook subscriptions to accounts, datasets and projects.

use clap::Subcommand;

use crate::api::webhooks;
use crate::client::Client;
use crate::models::SubscriptionCreateRequest;

use super::base::{evaluate_and_print_response, Matcher};

/// What a webhook subscription is attached to.
#[derive(Subcommand, Debug)]
pub enum WebhookTarget {
    /// An organization or user account
    Account {
        /// Identifier of the account
        user: String,
    },

    /// A dataset
    Dataset {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,
    },

    /// A project
    Project {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project
        projectid: String,
    },
}

/// Subcommands for managing webhook subscriptions
#[derive(Subcommand, Debug)]
pub enum WebhookSubCommand {
    /// List every webhook subscription of the authenticated user
    List,

    /// Show the subscription to an account, dataset or project
    Retrieve {
        #[command(subcommand)]
        target: WebhookTarget,
    },

    /// Subscribe to events on an account, dataset or project
    Subscribe {
        /// Events to subscribe to
        #[arg(short, long, value_delimiter = ',', default_value = "ALL")]
        events: Vec<String>,

        #[command(subcommand)]
        target: WebhookTarget,
    },

    /// Remove the subscription to an account, dataset or project
    Unsubscribe {
        #[command(subcommand)]
        target: WebhookTarget,
    },
}

/// Implementation of the Matcher trait for WebhookSubCommand
impl Matcher for WebhookSubCommand {
    /// Process the webhook subcommand using the given client
    fn process(self, client: &Client) {
        match self {
            WebhookSubCommand::List => {
                evaluate_and_print_response(webhooks::list(client));
            }
            WebhookSubCommand::Retrieve { target } => {
                let response = match target {
                    WebhookTarget::Account { user } => {
                        webhooks::retrieve_account_subscription(client, &user)
                    }
                    WebhookTarget::Dataset { owner, datasetid } => {
                        webhooks::retrieve_dataset_subscription(client, &owner, &datasetid)
                    }
                    WebhookTarget::Project { owner, projectid } => {
                        webhooks::retrieve_project_subscription(client, &owner, &projectid)
                    }
                };
                evaluate_and_print_response(response);
            }
            WebhookSubCommand::Subscribe { events, target } => {
                let body = SubscriptionCreateRequest { events };
                let response = match target {
                    WebhookTarget::Account { user } => {
                        webhooks::subscribe_to_account(client, &user, &body)
                    }
                    WebhookTarget::Dataset { owner, datasetid } => {
                        webhooks::subscribe_to_dataset(client, &owner, &datasetid, &body)
                    }
                    WebhookTarget::Project { owner, projectid } => {
                        webhooks::subscribe_to_project(client, &owner, &projectid, &body)
                    }
                };
                evaluate_and_print_response(response);
            }
            WebhookSubCommand::Unsubscribe { target } => {
                let response = match target {
                    WebhookTarget::Account { user } => {
                        webhooks::unsubscribe_from_account(client, &user)
                    }
                    WebhookTarget::Dataset { owner, datasetid } => {
                        webhooks::unsubscribe_from_dataset(client, &owner, &datasetid)
                    }
                    WebhookTarget::Project { owner, projectid } => {
                        webhooks::unsubscribe_from_project(client, &owner, &projectid)
                    }
                };
                evaluate_and_print_response(response);
            }
        };
    }
}
