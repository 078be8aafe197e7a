//! Project-related CLI commands
//!
//! This module provides commands for project management tasks like:
//! - Creating, replacing, updating and deleting projects
//! - Retrieving project definitions, including past versions
//! - Linking and unlinking datasets

use std::path::PathBuf;

use clap::Subcommand;

use crate::api::projects;
use crate::client::Client;
use crate::models::ProjectCreateOrUpdateRequest;

use super::base::{evaluate_and_print_response, parse_file, Matcher};

/// Subcommands for managing projects on data.world
#[derive(Subcommand, Debug)]
pub enum ProjectSubCommand {
    /// Retrieve a project definition
    Retrieve {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project
        projectid: String,

        /// Version of the project to retrieve, defaults to the latest
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Create a project
    Create {
        /// Account to create the project under
        owner: String,

        /// Path to the JSON/YAML file containing the project body
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Create a project with a chosen id, or reset an existing one
    Replace {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project
        projectid: String,

        /// Path to the JSON/YAML file containing the project body
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Update selected attributes of a project
    Update {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project
        projectid: String,

        /// Path to the JSON/YAML file containing the attributes to update
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Delete a project and all associated data
    Delete {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project to delete
        projectid: String,
    },

    /// Link a dataset to a project
    Link {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project
        projectid: String,

        /// Account the dataset belongs to
        dataset_owner: String,

        /// Identifier of the dataset to link
        datasetid: String,
    },

    /// Remove a linked dataset from a project
    Unlink {
        /// Account the project belongs to
        owner: String,

        /// Identifier of the project
        projectid: String,

        /// Account the dataset belongs to
        dataset_owner: String,

        /// Identifier of the dataset to unlink
        datasetid: String,
    },
}

/// Implementation of the Matcher trait for ProjectSubCommand
impl Matcher for ProjectSubCommand {
    /// Process the project subcommand using the given client
    fn process(self, client: &Client) {
        match self {
            ProjectSubCommand::Retrieve {
                owner,
                projectid,
                version,
            } => {
                let response = match version {
                    Some(version) => {
                        projects::retrieve_version(client, &owner, &projectid, &version)
                    }
                    None => projects::retrieve(client, &owner, &projectid),
                };
                evaluate_and_print_response(response);
            }
            ProjectSubCommand::Create { owner, body } => {
                let body: ProjectCreateOrUpdateRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response = projects::create(client, &owner, &body);
                evaluate_and_print_response(response);
            }
            ProjectSubCommand::Replace {
                owner,
                projectid,
                body,
            } => {
                let body: ProjectCreateOrUpdateRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response = projects::create_or_replace(client, &owner, &projectid, &body);
                evaluate_and_print_response(response);
            }
            ProjectSubCommand::Update {
                owner,
                projectid,
                body,
            } => {
                let body: ProjectCreateOrUpdateRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response = projects::update(client, &owner, &projectid, &body);
                evaluate_and_print_response(response);
            }
            ProjectSubCommand::Delete { owner, projectid } => {
                let response = projects::delete(client, &owner, &projectid);
                evaluate_and_print_response(response);
            }
            ProjectSubCommand::Link {
                owner,
                projectid,
                dataset_owner,
                datasetid,
            } => {
                let response =
                    projects::link_dataset(client, &owner, &projectid, &dataset_owner, &datasetid);
                evaluate_and_print_response(response);
            }
            ProjectSubCommand::Unlink {
                owner,
                projectid,
                dataset_owner,
                datasetid,
            } => {
                let response = projects::unlink_dataset(
                    client,
                    &owner,
                    &projectid,
                    &dataset_owner,
                    &datasetid,
                );
                evaluate_and_print_response(response);
            }
        };
    }
}
