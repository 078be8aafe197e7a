//! Query-related CLI commands
//!
//! This module provides commands for working with queries:
//! - Creating, updating and deleting saved queries
//! - Running saved, SQL and SPARQL queries
//! - Listing the saved queries of a dataset or project

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::api::queries;
use crate::client::Client;
use crate::error::Result;
use crate::models::{
    QueryCreateRequest, QueryUpdateRequest, SavedQueryExecutionRequest, SparqlQueryRequest,
    SqlQueryRequest, SuccessResponse,
};

use super::base::{evaluate_and_print_response, exit_with_error, parse_file, Matcher};

/// Subcommands for working with queries on data.world
#[derive(Subcommand, Debug)]
pub enum QuerySubCommand {
    /// Retrieve a saved query definition
    Retrieve {
        /// Identifier of the saved query
        queryid: String,

        /// Version of the query to retrieve, defaults to the latest
        #[arg(short, long)]
        version: Option<String>,
    },

    /// Create a saved query in a dataset or project
    Create {
        /// Account the dataset or project belongs to
        owner: String,

        /// Identifier of the dataset or project
        id: String,

        /// Path to the JSON/YAML file containing the query body
        #[arg(short, long)]
        body: PathBuf,

        /// Treat the target as a project rather than a dataset
        #[arg(short, long)]
        project: bool,
    },

    /// Update a saved query in a dataset or project
    Update {
        /// Account the dataset or project belongs to
        owner: String,

        /// Identifier of the dataset or project
        id: String,

        /// Identifier of the saved query
        queryid: String,

        /// Path to the JSON/YAML file containing the query body
        #[arg(short, long)]
        body: PathBuf,

        /// Treat the target as a project rather than a dataset
        #[arg(short, long)]
        project: bool,
    },

    /// Delete a saved query from a dataset or project
    Delete {
        /// Account the dataset or project belongs to
        owner: String,

        /// Identifier of the dataset or project
        id: String,

        /// Identifier of the saved query
        queryid: String,

        /// Treat the target as a project rather than a dataset
        #[arg(short, long)]
        project: bool,
    },

    /// List the saved queries of a dataset or project
    List {
        /// Account the dataset or project belongs to
        owner: String,

        /// Identifier of the dataset or project
        id: String,

        /// Treat the target as a project rather than a dataset
        #[arg(short, long)]
        project: bool,
    },

    /// Run a saved query
    Run {
        /// Identifier of the saved query to run
        queryid: String,

        /// Media type to request for the results, e.g. 'text/csv'
        #[arg(short, long, default_value = "application/json")]
        accept: String,

        /// Path to the JSON/YAML file with parameters for the query
        #[arg(short, long)]
        body: Option<PathBuf>,

        /// Path to save the results to instead of printing them
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Run a SQL query against a dataset or project
    Sql {
        /// Account the dataset or project belongs to
        owner: String,

        /// Identifier of the dataset or project
        id: String,

        /// The SQL query to run
        query: String,

        /// Media type to request for the results, e.g. 'text/csv'
        #[arg(short, long, default_value = "application/json")]
        accept: String,

        /// Include the table schema in the results
        #[arg(long)]
        include_table_schema: bool,

        /// Path to save the results to instead of printing them
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Run a SPARQL query against a dataset or project
    Sparql {
        /// Account the dataset or project belongs to
        owner: String,

        /// Identifier of the dataset or project
        id: String,

        /// The SPARQL query to run
        query: String,

        /// Media type to request for the results
        #[arg(short, long, default_value = "application/sparql-results+json")]
        accept: String,

        /// Path to save the results to instead of printing them
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Implementation of the Matcher trait for QuerySubCommand
impl Matcher for QuerySubCommand {
    /// Process the query subcommand using the given client
    fn process(self, client: &Client) {
        match self {
            QuerySubCommand::Retrieve { queryid, version } => {
                let response = match version {
                    Some(version) => queries::retrieve_version(client, &queryid, &version),
                    None => queries::retrieve(client, &queryid),
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::Create {
                owner,
                id,
                body,
                project,
            } => {
                let body: QueryCreateRequest = parse_file(body).expect("Failed to parse the file");
                let response = if project {
                    queries::create_in_project(client, &owner, &id, &body)
                } else {
                    queries::create_in_dataset(client, &owner, &id, &body)
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::Update {
                owner,
                id,
                queryid,
                body,
                project,
            } => {
                let body: QueryUpdateRequest = parse_file(body).expect("Failed to parse the file");
                let response = if project {
                    queries::update_in_project(client, &owner, &id, &queryid, &body)
                } else {
                    queries::update_in_dataset(client, &owner, &id, &queryid, &body)
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::Delete {
                owner,
                id,
                queryid,
                project,
            } => {
                let response = if project {
                    queries::delete_in_project(client, &owner, &id, &queryid)
                } else {
                    queries::delete_in_dataset(client, &owner, &id, &queryid)
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::List { owner, id, project } => {
                let response = if project {
                    queries::list_for_project(client, &owner, &id)
                } else {
                    queries::list_for_dataset(client, &owner, &id)
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::Run {
                queryid,
                accept,
                body,
                out,
            } => {
                let body: SavedQueryExecutionRequest = match body {
                    Some(path) => parse_file(path).expect("Failed to parse the file"),
                    None => SavedQueryExecutionRequest::default(),
                };

                let response = match out {
                    Some(out) => {
                        queries::execute_saved_and_save(client, &queryid, &accept, out, &body)
                    }
                    None => queries::execute_saved(client, &queryid, &accept, &body)
                        .and_then(print_results),
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::Sql {
                owner,
                id,
                query,
                accept,
                include_table_schema,
                out,
            } => {
                let body = SqlQueryRequest {
                    query,
                    include_table_schema: include_table_schema.then_some(true),
                };

                let response = match out {
                    Some(out) => {
                        queries::execute_sql_and_save(client, &owner, &id, &accept, out, &body)
                    }
                    None => queries::execute_sql(client, &owner, &id, &accept, &body)
                        .and_then(print_results),
                };
                evaluate_and_print_response(response);
            }
            QuerySubCommand::Sparql {
                owner,
                id,
                query,
                accept,
                out,
            } => {
                let body = SparqlQueryRequest { query };

                let response = match out {
                    Some(out) => {
                        queries::execute_sparql_and_save(client, &owner, &id, &accept, out, &body)
                    }
                    None => queries::execute_sparql(client, &owner, &id, &accept, &body)
                        .and_then(print_results),
                };
                evaluate_and_print_response(response);
            }
        };
    }
}

/// Streams query results straight to stdout, bypassing the JSON printer
/// so any requested media type comes out verbatim.
fn print_results(response: reqwest::blocking::Response) -> Result<SuccessResponse> {
    let mut response = response;
    let mut stdout = io::stdout();

    match io::copy(&mut response, &mut stdout) {
        Ok(_) => {
            let _ = stdout.flush();
            std::process::exit(exitcode::OK);
        }
        Err(e) => exit_with_error(&e.into()),
    }
}
