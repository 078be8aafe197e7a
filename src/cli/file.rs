//! File-related CLI commands
//!
//! This module provides commands for file management tasks like:
//! - Adding files from URLs to a dataset
//! - Uploading local files, with progress reporting
//! - Downloading files as originally uploaded
//! - Deleting single files from a dataset

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::api::files;
use crate::client::Client;
use crate::models::{FileCreateRequest, SuccessResponse};
use crate::progress::transfer_bar;

use super::base::{evaluate_and_print_response, parse_file, save_with_progress, Matcher};

/// Subcommands for managing files within a dataset
#[derive(Subcommand, Debug)]
pub enum FileSubCommand {
    /// Add files published on the web via their URLs
    Add {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Path to the JSON/YAML file containing the list of files to add
        #[arg(short, long)]
        body: PathBuf,
    },

    /// Upload a local file to a dataset
    Upload {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Path to the file to upload
        path: PathBuf,

        /// Name to store the file under, defaults to the local file name
        #[arg(short, long)]
        name: Option<String>,

        /// Expand an uploaded .zip into its member files server-side
        #[arg(long)]
        expand_archive: bool,
    },

    /// Download a file as originally uploaded
    Download {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Name of the file to download
        filename: String,

        /// Path to save the file to, defaults to the file name
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete a single file from a dataset
    Delete {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Name of the file to delete
        filename: String,
    },
}

/// Implementation of command processing for file-related operations
impl Matcher for FileSubCommand {
    /// Processes the file subcommand using the provided client
    ///
    /// # Arguments
    /// * `client` - The [`Client`] for making API requests
    fn process(self, client: &Client) {
        match self {
            FileSubCommand::Add {
                owner,
                datasetid,
                body,
            } => {
                let body: Vec<FileCreateRequest> =
                    parse_file(body).expect("Failed to parse the file");
                let response = files::add_from_urls(client, &owner, &datasetid, &body);
                evaluate_and_print_response(response);
            }
            FileSubCommand::Upload {
                owner,
                datasetid,
                path,
                name,
                expand_archive,
            } => {
                let filename = name.unwrap_or_else(|| local_file_name(&path));
                let response =
                    upload_with_progress(client, &owner, &datasetid, &filename, &path, expand_archive);
                evaluate_and_print_response(response);
            }
            FileSubCommand::Download {
                owner,
                datasetid,
                filename,
                out,
            } => {
                let out = out.unwrap_or_else(|| PathBuf::from(&filename));
                let response = files::download(client, &owner, &datasetid, &filename)
                    .and_then(|response| save_with_progress(response, &out, &filename))
                    .map(|_| SuccessResponse {
                        message: Some(format!("File saved to {}", out.display())),
                    });
                evaluate_and_print_response(response);
            }
            FileSubCommand::Delete {
                owner,
                datasetid,
                filename,
            } => {
                let response = files::delete(client, &owner, &datasetid, &filename);
                evaluate_and_print_response(response);
            }
        };
    }
}

/// Uploads a local file behind a transfer bar.
fn upload_with_progress(
    client: &Client,
    owner: &str,
    datasetid: &str,
    filename: &str,
    path: &PathBuf,
    expand_archive: bool,
) -> crate::error::Result<SuccessResponse> {
    let file = File::open(path)?;
    let size = file.metadata().ok().map(|metadata| metadata.len());

    let bar = transfer_bar(size, filename);
    let reader = bar.wrap_read(file);

    let response = files::upload_stream(client, owner, datasetid, filename, reader, expand_archive);
    bar.finish();
    response
}

/// The final component of the path, as the name to store the file under.
fn local_file_name(path: &PathBuf) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
        .unwrap_or_default()
}
