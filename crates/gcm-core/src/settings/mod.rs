//! Effective settings for one credential helper invocation
//!
//! [`Settings`] binds a [`ResolutionContext`] to an environment and a
//! configuration source and answers typed queries over them. Nothing is
//! cached and the sources are never modified, so repeating a query against
//! unchanged sources returns the same answer.
//!
//! # Precedence
//!
//! - A non-empty environment variable always beats configuration.
//! - Among configuration entries, a more specific URL scope beats a less
//!   specific one; within a scope the repository tier beats global, which
//!   beats system; within a tier the first declaration wins.
//! - The proxy is resolved by its own chain; see [`ProxySourceKind`].
//!
//! # Example
//!
//! ```
//! use gcm_core::{EnvironmentView, ResolutionContext, Settings};
//! use gcm_git::InMemoryConfiguration;
//!
//! let env = EnvironmentView::new().with("GCM_PROVIDER", "github");
//! let config = InMemoryConfiguration::new();
//! let mut context = ResolutionContext::new();
//! context.set_remote_url_str("https://example.com/org/repo.git").unwrap();
//!
//! let settings = Settings::new(&env, &config, &context);
//! assert_eq!(settings.provider_override().unwrap().as_deref(), Some("github"));
//! ```

mod proxy;
mod resolver;
mod values;

pub use proxy::{ProxyConfiguration, ProxySourceKind};
pub use values::{is_truthy_word, parse_boolean, parse_proxy_url};

use gcm_git::ConfigSource;
use serde::Serialize;

use crate::Result;
use crate::constants::{envars, git_config::credential};
use crate::context::ResolutionContext;
use crate::environment::EnvironmentSource;

/// The trace-enable setting: whether tracing is on, and the raw value that
/// may name where trace output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TraceSetting {
    pub enabled: bool,
    pub value: Option<String>,
}

/// Settings resolver bound to one context and its two sources.
pub struct Settings<'a> {
    environment: &'a dyn EnvironmentSource,
    config: &'a dyn ConfigSource,
    context: &'a ResolutionContext,
}

impl<'a> Settings<'a> {
    pub fn new(
        environment: &'a dyn EnvironmentSource,
        config: &'a dyn ConfigSource,
        context: &'a ResolutionContext,
    ) -> Self {
        Self {
            environment,
            config,
            context,
        }
    }

    pub fn context(&self) -> &ResolutionContext {
        self.context
    }

    /// `GCM_DEBUG` or `credential.debug`; off by default.
    pub fn is_debugging_enabled(&self) -> Result<bool> {
        self.get_boolean(envars::GCM_DEBUG, credential::SECTION, credential::DEBUG, false)
    }

    /// `GIT_TERMINAL_PROMPT`; on unless explicitly disabled.
    pub fn is_terminal_prompts_enabled(&self) -> bool {
        self.environment_value(Some(envars::GIT_TERMINAL_PROMPT))
            .and_then(parse_boolean)
            .unwrap_or(true)
    }

    /// `GCM_TRACE`, read from the environment only.
    ///
    /// Falsey values disable tracing; any other non-empty value, a file path
    /// included, enables it. The raw value is kept verbatim.
    pub fn tracing_enabled(&self) -> TraceSetting {
        match self.environment_value(Some(envars::GCM_TRACE)) {
            Some(value) => TraceSetting {
                enabled: parse_boolean(value).unwrap_or(false),
                value: Some(value.to_string()),
            },
            None => TraceSetting::default(),
        }
    }

    /// `GCM_TRACE_SECRETS` or `credential.traceSecrets`; off by default.
    pub fn is_secret_tracing_enabled(&self) -> Result<bool> {
        self.get_boolean(
            envars::GCM_TRACE_SECRETS,
            credential::SECTION,
            credential::TRACE_SECRETS,
            false,
        )
    }

    /// `GCM_PROVIDER` or `credential.provider`.
    pub fn provider_override(&self) -> Result<Option<String>> {
        self.get_string_override(envars::GCM_PROVIDER, credential::SECTION, credential::PROVIDER)
    }

    /// `GCM_AUTHORITY` or `credential.authority`.
    pub fn legacy_authority_override(&self) -> Result<Option<String>> {
        self.get_string_override(envars::GCM_AUTHORITY, credential::SECTION, credential::AUTHORITY)
    }
}
