//! Dataset-related CLI commands
//!
//! This module provides commands for dataset management tasks like:
//! - Creating, replacing, updating and deleting datasets
//! - Retrieving dataset definitions, including past versions
//! - Downloading a dataset as a .zip archive
//! - Triggering a sync of files added from URLs or streams

use std::path::PathBuf;

use clap::Subcommand;

use crate::api::{datasets, files};
use crate::client::Client;
use crate::models::{
    DatasetCreateRequest, DatasetReplaceRequest, DatasetUpdateRequest, SuccessResponse,
};

use super::base::{evaluate_and_print_response, parse_file, save_with_progress, Matcher};

/// Subcommands for managing datasets on data.world
#[derive(Subcommand, Debug)]
pub enum DatasetSubCommand {
    /// Retrieve a dataset definition
    Retrieve {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Version of the dataset to retrieve, defaults to the latest
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Create a dataset
    Create {
        /// Account to create the dataset under
        owner: String,

        /// Path to the JSON/YAML file containing the dataset body
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Create a dataset with a chosen id, or reset an existing one
    Replace {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Path to the JSON/YAML file containing the dataset body
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Update selected attributes of a dataset
    Update {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Path to the JSON/YAML file containing the attributes to update
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Delete a dataset and all associated data
    Delete {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset to delete
        datasetid: String,
    },

    /// Process the latest data for files added from URLs or streams
    Sync {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset to sync
        datasetid: String,
    },

    /// Download the dataset as a .zip archive
    Download {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset to download
        datasetid: String,

        /// Path to save the archive to
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// Implementation of the Matcher trait for DatasetSubCommand
impl Matcher for DatasetSubCommand {
    /// Process the dataset subcommand by matching on the variant and
    /// executing the appropriate API call
    ///
    /// # Arguments
    /// * `client` - The [`Client`] used to make API requests
    fn process(self, client: &Client) {
        match self {
            DatasetSubCommand::Retrieve {
                owner,
                datasetid,
                version,
            } => {
                let response = match version {
                    Some(version) => {
                        datasets::retrieve_version(client, &owner, &datasetid, &version)
                    }
                    None => datasets::retrieve(client, &owner, &datasetid),
                };
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Create { owner, body } => {
                let body: DatasetCreateRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response = datasets::create(client, &owner, &body);
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Replace {
                owner,
                datasetid,
                body,
            } => {
                let body: DatasetReplaceRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response = datasets::create_or_replace(client, &owner, &datasetid, &body);
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Update {
                owner,
                datasetid,
                body,
            } => {
                let body: DatasetUpdateRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response = datasets::update(client, &owner, &datasetid, &body);
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Delete { owner, datasetid } => {
                let response = datasets::delete(client, &owner, &datasetid);
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Sync { owner, datasetid } => {
                let response = files::sync(client, &owner, &datasetid);
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Download {
                owner,
                datasetid,
                out,
            } => {
                let archive = format!("{}.zip", datasetid);
                let response = files::download_dataset(client, &owner, &datasetid)
                    .and_then(|response| save_with_progress(response, &out, &archive))
                    .map(|_| SuccessResponse {
                        message: Some(format!("ZIP file saved to {}", out.display())),
                    });

                evaluate_and_print_response(response);
            }
        };
    }
}
