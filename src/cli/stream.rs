//! Stream-related CLI commands
//!
//! This module provides commands for working with append-only streams:
//! - Appending records from a file or from stdin
//! - Deleting previously appended records
//! - Retrieving and updating the stream schema

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::api::streams;
use crate::client::Client;
use crate::models::StreamSchemaUpdateRequest;

use super::base::{evaluate_and_print_response, parse_file, Matcher};

/// Subcommands for working with streams on data.world
#[derive(Subcommand, Debug)]
pub enum StreamSubCommand {
    /// Append records to a stream, creating it if needed
    Append {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Identifier of the stream
        streamid: String,

        /// Path to the file with records to append, stdin when omitted
        #[arg(short, long)]
        body: Option<PathBuf>,
    },

    /// Delete all records previously appended to a stream
    DeleteRecords {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Identifier of the stream
        streamid: String,
    },

    /// Retrieve the schema of a stream
    Schema {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Identifier of the stream
        streamid: String,
    },

    /// Set or update the schema of a stream
    SetSchema {
        /// Account the dataset belongs to
        owner: String,

        /// Identifier of the dataset
        datasetid: String,

        /// Identifier of the stream
        streamid: String,

        /// Path to the JSON/YAML file containing the schema
        #[arg(short, long)]
        body: PathBuf,
    },
}

/// Implementation of the Matcher trait for StreamSubCommand
impl Matcher for StreamSubCommand {
    /// Process the stream subcommand using the given client
    fn process(self, client: &Client) {
        match self {
            StreamSubCommand::Append {
                owner,
                datasetid,
                streamid,
                body,
            } => {
                let response = match body {
                    Some(path) => {
                        let file = File::open(path).expect("Failed to open the records file");
                        streams::append(client, &owner, &datasetid, &streamid, file)
                    }
                    None => streams::append(client, &owner, &datasetid, &streamid, std::io::stdin()),
                };
                evaluate_and_print_response(response);
            }
            StreamSubCommand::DeleteRecords {
                owner,
                datasetid,
                streamid,
            } => {
                let response = streams::delete_records(client, &owner, &datasetid, &streamid);
                evaluate_and_print_response(response);
            }
            StreamSubCommand::Schema {
                owner,
                datasetid,
                streamid,
            } => {
                let response = streams::retrieve_schema(client, &owner, &datasetid, &streamid);
                evaluate_and_print_response(response);
            }
            StreamSubCommand::SetSchema {
                owner,
                datasetid,
                streamid,
                body,
            } => {
                let body: StreamSchemaUpdateRequest =
                    parse_file(body).expect("Failed to parse the file");
                let response =
                    streams::set_or_update_schema(client, &owner, &datasetid, &streamid, &body);
                evaluate_and_print_response(response);
            }
        };
    }
}
