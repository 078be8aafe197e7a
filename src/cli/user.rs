//! User-related CLI commands
//!
//! This module provides commands for:
//! - Showing the authenticated user's profile
//! - Looking up other users and organizations
//! - Listing datasets and projects by relationship to the user

use clap::{Subcommand, ValueEnum};

use crate::api::users;
use crate::client::Client;

use super::base::{evaluate_and_print_response, Matcher};

/// How a dataset or project relates to the authenticated user.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Relationship {
    /// Owned by the user
    Own,
    /// Liked by the user
    Liked,
    /// The user is a contributor
    Contributing,
}

/// Subcommands for user profiles and their resources
#[derive(Subcommand, Debug)]
pub enum UserSubCommand {
    /// Show the profile of the authenticated user
    Me,

    /// Show the profile of another user or organization
    Retrieve {
        /// Identifier of the user or organization
        agentid: String,
    },

    /// List the authenticated user's datasets
    Datasets {
        /// Which datasets to list
        #[arg(value_enum, default_value_t = Relationship::Own)]
        relationship: Relationship,
    },

    /// List the authenticated user's projects
    Projects {
        /// Which projects to list
        #[arg(value_enum, default_value_t = Relationship::Own)]
        relationship: Relationship,
    },
}

/// Implementation of the Matcher trait for UserSubCommand
impl Matcher for UserSubCommand {
    /// Process the user subcommand using the given client
    fn process(self, client: &Client) {
        match self {
            UserSubCommand::Me => {
                evaluate_and_print_response(users::me(client));
            }
            UserSubCommand::Retrieve { agentid } => {
                evaluate_and_print_response(users::retrieve(client, &agentid));
            }
            UserSubCommand::Datasets { relationship } => {
                let response = match relationship {
                    Relationship::Own => users::datasets_owned(client),
                    Relationship::Liked => users::datasets_liked(client),
                    Relationship::Contributing => users::datasets_contributing(client),
                };
                evaluate_and_print_response(response);
            }
            UserSubCommand::Projects { relationship } => {
                let response = match relationship {
                    Relationship::Own => users::projects_owned(client),
                    Relationship::Liked => users::projects_liked(client),
                    Relationship::Contributing => users::projects_contributing(client),
                };
                evaluate_and_print_response(response);
            }
        };
    }
}
