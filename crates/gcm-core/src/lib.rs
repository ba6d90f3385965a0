//! Settings resolution engine for the git credential helper
//!
//! Computes the effective value of every tunable behaviour (proxy, provider
//! override, trace flags, arbitrary extension settings) by merging three
//! sources under one precedence algorithm:
//!
//! - process environment variables ([`EnvironmentSource`])
//! - tiered git configuration: repository, global, system ([`gcm_git::ConfigSource`])
//! - URL-scoped configuration keys, matched against the remote URL ([`scope`])
//!
//! # Architecture
//!
//! ```text
//!                 gcm-cli
//!                    |
//!                gcm-core
//!   Settings -- scope_candidates -- ResolutionContext
//!      |                 \
//!  EnvironmentSource    ConfigSource (gcm-git)
//! ```
//!
//! A caller builds a [`ResolutionContext`] once per invocation, binds it and
//! the two sources into [`Settings`], and issues queries. Queries are pure
//! reads: the engine keeps no state between them.

pub mod constants;
pub mod context;
pub mod environment;
pub mod error;
pub mod scope;
pub mod settings;
pub mod trace;

pub use context::ResolutionContext;
pub use environment::{EnvironmentSource, EnvironmentView};
pub use error::{Error, Result};
pub use scope::{ScopeCandidate, scope_candidates};
pub use settings::{ProxyConfiguration, ProxySourceKind, Settings, TraceSetting};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_distinct_from_absence() {
        let err = Error::from(gcm_git::Error::RepositoryNotFound {
            path: "/tmp/missing".into(),
        });

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("/tmp/missing"));
    }
}
