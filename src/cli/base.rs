//! Base functionality for the data.world CLI
//!
//! This module provides core utilities and traits used across the CLI including:
//! - Response printing and exit code selection
//! - File parsing for JSON/YAML request bodies
//! - Streaming downloads with progress reporting
//! - Common traits for command processing

use std::error::Error as StdError;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use atty::Stream;
use colored::Colorize;
use colored_json::prelude::*;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::progress::transfer_bar;

/// Trait for processing CLI subcommands
///
/// Implementors define how to handle their specific subcommand variant
/// using the provided API client.
pub trait Matcher {
    /// Process this subcommand using the given client
    ///
    /// # Arguments
    /// * `client` - The [`Client`] for making API requests
    fn process(self, client: &Client);
}

/// Evaluates an API response and prints the result, or exits with a code
/// describing the failure
///
/// # Arguments
/// * `response` - The Result containing either a response body or an [`Error`]
///
/// # Type Parameters
/// * `T` - The type of a successful response body
pub fn evaluate_and_print_response<T: Serialize>(response: Result<T>) {
    match response {
        Ok(body) => print_response(&body),
        Err(e) => exit_with_error(&e),
    }
}

/// Prints a response body as pretty JSON, colorized on a terminal
///
/// If the output is being redirected to a file or pipe, only the raw JSON
/// is printed so the output stays usable in scripts.
pub fn print_response<T: Serialize>(body: &T) {
    let json = serde_json::to_string_pretty(body).expect("response bodies serialize");

    if atty::is(Stream::Stdout) {
        println!("{}", success_message());
        println!("{}\n", json.to_colored_json_auto().unwrap());
    } else {
        println!("{}", json);
    }
}

/// Prints the error and terminates the process with an exit code matching
/// the failure class
pub fn exit_with_error(error: &Error) -> ! {
    eprintln!("\n{} {}\n", "Error:".red().bold(), error);

    let code = match error {
        Error::Remote { .. } => exitcode::DATAERR,
        Error::Io(_) => exitcode::IOERR,
        _ => exitcode::SOFTWARE,
    };

    std::process::exit(code);
}

/// Parses a JSON or YAML file into the specified type
///
/// # Arguments
/// * `path` - Path to the file to parse
///
/// # Type Parameters
/// * `P` - The path-like type for the file path
/// * `T` - The target type to deserialize into
///
/// # Returns
/// * `Ok(T)` - Successfully parsed file contents
/// * `Err` - File reading or parsing error
pub fn parse_file<P, T>(path: P) -> std::result::Result<T, Box<dyn StdError>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;

    if let Ok(content) = serde_json::from_str(&content) {
        Ok(content)
    } else if let Ok(content) = serde_yaml::from_str(&content) {
        Ok(content)
    } else {
        Err("Failed to parse the file as either JSON or YAML".into())
    }
}

/// Streams a response body to disk behind a transfer bar
///
/// # Arguments
/// * `response` - The open response stream to drain
/// * `path` - Where to write the payload
/// * `name` - Label shown next to the bar
pub fn save_with_progress(response: Response, path: &Path, name: &str) -> Result<()> {
    let bar = transfer_bar(response.content_length(), name);
    let mut reader = bar.wrap_read(response);
    let mut file = File::create(path)?;

    io::copy(&mut reader, &mut file)?;
    bar.finish();
    Ok(())
}

/// Returns a formatted success message string
fn success_message() -> String {
    format!(
        "{} {} - Received the following response: \n",
        "└── ".bold(),
        "🎉 Success!".green().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Probe {
        title: String,
        visibility: String,
    }

    #[test]
    fn test_parse_file_accepts_json() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.json");
        fs::write(&path, r#"{"title": "My Dataset", "visibility": "OPEN"}"#).unwrap();

        // Act
        let parsed: Probe = parse_file(&path).unwrap();

        // Assert
        assert_eq!(parsed.title, "My Dataset");
        assert_eq!(parsed.visibility, "OPEN");
    }

    #[test]
    fn test_parse_file_accepts_yaml() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.yaml");
        fs::write(&path, "title: My Dataset\nvisibility: OPEN\n").unwrap();

        // Act
        let parsed: Probe = parse_file(&path).unwrap();

        // Assert
        assert_eq!(parsed.title, "My Dataset");
        assert_eq!(parsed.visibility, "OPEN");
    }

    #[test]
    fn test_parse_file_rejects_garbage() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.txt");
        fs::write(&path, "{not json: and not yaml: [").unwrap();

        // Act
        let parsed = parse_file::<_, Probe>(&path);

        // Assert
        assert!(parsed.is_err());
    }
}
