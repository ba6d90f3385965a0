//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Show the settings the credential helper would use for a remote
#[derive(Parser, Debug)]
#[command(name = "gcm-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remote URL to resolve URL-scoped settings for
    #[arg(long, global = true)]
    pub remote: Option<String>,

    /// Repository whose local configuration is consulted
    /// (discovered from the working directory when omitted)
    #[arg(long, global = true)]
    pub repo: Option<PathBuf>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show debug, prompt, trace and provider settings
    Flags,

    /// Show the effective proxy and where it was configured
    Proxy,

    /// Resolve a single URL-scoped setting
    ///
    /// Exits with status 1 when the setting is not configured.
    ///
    /// Examples:
    ///   gcm-settings --remote https://example.com/org/repo.git get credential helper
    ///   gcm-settings get --envar GCM_PROVIDER credential provider
    Get {
        /// Environment variable that overrides the configuration
        #[arg(long)]
        envar: Option<String>,

        /// Configuration section, e.g. `credential`
        section: String,

        /// Configuration property, e.g. `provider`
        property: String,
    },

    /// List every value of a URL-scoped setting, highest precedence first
    Values {
        /// Environment variable that overrides the configuration
        #[arg(long)]
        envar: Option<String>,

        /// Configuration section
        section: String,

        /// Configuration property
        property: String,
    },

    /// List the URL scopes consulted for the remote, most specific first
    Scopes,
}
