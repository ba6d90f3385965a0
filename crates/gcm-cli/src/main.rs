//! Credential helper settings CLI
//!
//! Resolves the settings the credential helper would use for a remote URL and
//! repository, from the process environment and git configuration.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use gcm_core::trace::{self, TraceTarget};
use gcm_core::{EnvironmentView, ResolutionContext, Settings};
use gcm_git::GitConfiguration;

use cli::{Cli, Commands};
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let context = build_context(&cli, &cwd)?;
    let environment = EnvironmentView::capture();
    let config = GitConfiguration::new();
    let settings = Settings::new(&environment, &config, &context);

    start_tracing(cli.verbose, &settings)?;
    tracing::debug!(
        remote = ?context.remote_url().map(trace::redact_url),
        repository = ?context.repository_path(),
        "Resolving settings"
    );

    let found = match &cli.command {
        Commands::Flags => {
            commands::run_flags(&settings, cli.json)?;
            true
        }
        Commands::Proxy => {
            commands::run_proxy(&settings, cli.json)?;
            true
        }
        Commands::Get {
            envar,
            section,
            property,
        } => commands::run_get(&settings, envar.as_deref(), section, property, cli.json)?,
        Commands::Values {
            envar,
            section,
            property,
        } => {
            commands::run_values(&settings, envar.as_deref(), section, property, cli.json)?;
            true
        }
        Commands::Scopes => {
            commands::run_scopes(&context, cli.json)?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Install trace output: `-v` always traces to stderr, otherwise `GCM_TRACE`
/// decides.
///
/// A trace target that cannot be set up only produces a warning; settings are
/// still resolved.
fn start_tracing(verbose: bool, settings: &Settings<'_>) -> Result<()> {
    let result = if verbose {
        trace::set_secret_tracing(settings.is_secret_tracing_enabled()?);
        trace::install(&TraceTarget::Stderr).map(|()| tracing::debug!("Verbose mode enabled"))
    } else {
        trace::init(settings).map(|_| ())
    };

    match result {
        Ok(()) => Ok(()),
        Err(e @ (gcm_core::Error::TraceTarget { .. } | gcm_core::Error::TraceInit { .. })) => {
            eprintln!("{}: {}; continuing without tracing", "warning".yellow().bold(), e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn build_context(cli: &Cli, cwd: &Path) -> Result<ResolutionContext> {
    let mut context = ResolutionContext::new();
    if let Some(remote) = &cli.remote {
        context.set_remote_url_str(remote)?;
    }
    context.set_repository_path(cli.repo.clone().or_else(|| discover_repository(cwd)));
    Ok(context)
}

/// The git directory of the repository containing `cwd`, if any.
fn discover_repository(cwd: &Path) -> Option<PathBuf> {
    git2::Repository::discover(cwd)
        .ok()
        .map(|repo| repo.path().to_path_buf())
}
