//! Authentication commands and profile management
//!
//! This module provides functionality for:
//! - Storing named authentication profiles in the system keyring
//! - Pointing a profile at a non-default deployment host
//! - Retrieving stored credentials when building the API client

use clap::Subcommand;
use colored::Colorize;
use keyring::Entry;

use crate::client::Client;

use super::base::Matcher;

/// Keyring service name under which all profiles are stored.
const KEYRING_SERVICE: &str = "dwcli";

/// Subcommands for handling authentication of the data.world CLI
#[derive(Subcommand, Debug)]
pub enum AuthSubCommand {
    /// Store an authentication profile in the system keyring
    Set {
        /// Name to identify this authentication profile
        #[arg(short, long, default_value = "default")]
        name: String,

        /// Base URL of the API host, only needed for non-default deployments
        #[arg(long)]
        host: Option<String>,

        /// API token, from https://data.world/settings/advanced
        #[arg(short, long)]
        token: String,
    },

    /// Show a stored authentication profile
    Get {
        /// Name of the profile to show
        #[arg(default_value = "default")]
        name: String,
    },

    /// Remove a stored authentication profile
    Delete {
        /// Name of the profile to remove
        #[arg(default_value = "default")]
        name: String,
    },
}

impl Matcher for AuthSubCommand {
    /// Process the authentication subcommand against the system keyring
    ///
    /// # Arguments
    /// * `_client` - Unused; authentication commands never talk to the API
    fn process(self, _client: &Client) {
        match self {
            AuthSubCommand::Set { name, host, token } => {
                let profile = match AuthProfile::new(name.clone(), host, token) {
                    Ok(profile) => profile,
                    Err(e) => {
                        println!("{} Failed to create profile: {}", "❌".bold(), e.red());
                        return;
                    }
                };

                match profile.set_to_keyring() {
                    Ok(_) => {
                        println!(
                            "{} Profile '{}' saved successfully!",
                            "✅".bold(),
                            name.bold().green()
                        );
                        println!(
                            "   You can now use it with: {}",
                            format!("--profile {}", name).dimmed().italic()
                        );
                    }
                    Err(e) => {
                        println!(
                            "{} Failed to save profile to keyring: {}",
                            "❌".bold(),
                            e.to_string().red()
                        );
                    }
                }
            }
            AuthSubCommand::Get { name } => match AuthProfile::get_from_keyring(&name) {
                Ok(profile) => {
                    println!("Profile: {}", profile.get_name().bold());
                    println!(
                        "Host:    {}",
                        profile.get_host().unwrap_or("(default, api.data.world)")
                    );
                    println!("Token:   {}", mask_token(profile.get_token()));
                }
                Err(e) => {
                    println!(
                        "{} Failed to read profile '{}': {}",
                        "❌".bold(),
                        name,
                        e.to_string().red()
                    );
                }
            },
            AuthSubCommand::Delete { name } => match AuthProfile::delete_from_keyring(&name) {
                Ok(_) => {
                    println!("{} Profile '{}' removed.", "✅".bold(), name.bold());
                }
                Err(e) => {
                    println!(
                        "{} Failed to remove profile '{}': {}",
                        "❌".bold(),
                        name,
                        e.to_string().red()
                    );
                }
            },
        }
    }
}

/// A named authentication profile for the data.world CLI.
///
/// A profile carries the API token and, for deployments other than the
/// public one, the base URL of the API host. Profiles are stored in the
/// system keyring so tokens never land in shell history or config files.
#[derive(Debug)]
pub struct AuthProfile {
    /// Name identifier for the profile
    name: String,
    /// Base URL of the API host, when overridden
    host: Option<String>,
    /// API token for authentication
    token: String,
}

impl AuthProfile {
    /// Creates a new AuthProfile instance with validation of inputs.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A host is given but is not a valid URL
    /// - The token is empty
    pub fn new(
        name: String,
        host: Option<String>,
        token: String,
    ) -> std::result::Result<Self, String> {
        if let Some(host) = &host {
            reqwest::Url::parse(host).map_err(|_| "Invalid host URL format".to_string())?;
        }

        if token.trim().is_empty() {
            return Err("Token must not be empty".to_string());
        }

        Ok(AuthProfile { name, host, token })
    }

    /// Stores the profile credentials securely in the system keyring.
    ///
    /// The credentials are stored as a combined string in the format
    /// "host--token" under the profile name as the key.
    pub fn set_to_keyring(&self) -> keyring::Result<()> {
        let entry = Entry::new(KEYRING_SERVICE, self.name.as_str())?;
        let combined = Self::combine_host_and_token(self.host.as_deref(), &self.token);
        entry.set_password(combined.as_str())?;
        Ok(())
    }

    /// Retrieves profile credentials from the system keyring.
    ///
    /// # Errors
    /// Returns an error if the keyring is not accessible or holds no entry
    /// under the given name.
    pub fn get_from_keyring(name: &str) -> keyring::Result<Self> {
        let entry = Entry::new(KEYRING_SERVICE, name)?;
        let combined = entry.get_password()?;
        let (host, token) = Self::split_host_and_token(&combined);
        Ok(Self {
            name: name.to_string(),
            host,
            token,
        })
    }

    /// Removes the profile from the system keyring.
    pub fn delete_from_keyring(name: &str) -> keyring::Result<()> {
        let entry = Entry::new(KEYRING_SERVICE, name)?;
        entry.delete_password()
    }

    /// Combines the host and token into a single string for storage.
    ///
    /// Uses "--" as the delimiter since host URLs do not contain "--". An
    /// absent host leaves the part before the delimiter empty.
    fn combine_host_and_token(host: Option<&str>, token: &str) -> String {
        format!("{}--{}", host.unwrap_or_default(), token)
    }

    /// Splits a combined "host--token" string back into its components.
    ///
    /// Splits at the first "--" so a token containing that sequence
    /// survives the round trip.
    fn split_host_and_token(combined: &str) -> (Option<String>, String) {
        match combined.split_once("--") {
            Some(("", token)) => (None, token.to_string()),
            Some((host, token)) => (Some(host.to_string()), token.to_string()),
            None => (None, combined.to_string()),
        }
    }

    /// Returns the name of the authentication profile.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the API host override, if the profile carries one.
    pub fn get_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the API token for authentication.
    pub fn get_token(&self) -> &str {
        &self.token
    }
}

/// Shortens a token for display so `auth get` never echoes the secret.
fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    format!("{}…", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_credentials_round_trip() {
        // Arrange
        let combined = AuthProfile::combine_host_and_token(
            Some("https://api.example.data.world"),
            "eyJhbGciOi.token.body",
        );

        // Act
        let (host, token) = AuthProfile::split_host_and_token(&combined);

        // Assert
        assert_eq!(host.as_deref(), Some("https://api.example.data.world"));
        assert_eq!(token, "eyJhbGciOi.token.body");
    }

    #[test]
    fn test_absent_host_round_trips_as_none() {
        // Arrange
        let combined = AuthProfile::combine_host_and_token(None, "eyJhbGciOi.token.body");

        // Act
        let (host, token) = AuthProfile::split_host_and_token(&combined);

        // Assert
        assert_eq!(host, None);
        assert_eq!(token, "eyJhbGciOi.token.body");
    }

    #[test]
    fn test_token_containing_the_delimiter_survives() {
        // Arrange
        let combined = AuthProfile::combine_host_and_token(None, "eyJh--bGciOi");

        // Act
        let (host, token) = AuthProfile::split_host_and_token(&combined);

        // Assert
        assert_eq!(host, None);
        assert_eq!(token, "eyJh--bGciOi");
    }

    #[test]
    fn test_profile_rejects_an_invalid_host() {
        let profile = AuthProfile::new(
            "default".to_string(),
            Some("not a url".to_string()),
            "token".to_string(),
        );

        assert!(profile.is_err());
    }

    #[test]
    fn test_profile_rejects_an_empty_token() {
        let profile = AuthProfile::new("default".to_string(), None, "  ".to_string());

        assert!(profile.is_err());
    }

    #[test]
    fn test_mask_token_keeps_only_a_prefix() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9"), "eyJh…");
    }
}
