//! Proxy resolution across legacy and standard settings

use std::fmt;

use serde::Serialize;
use url::Url;

use super::Settings;
use super::values::parse_proxy_url;
use crate::Result;
use crate::constants::envars;
use crate::constants::git_config::{credential, http};
use crate::trace::{Secret, redact_url};

/// Where an effective proxy setting came from, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProxySourceKind {
    /// `credential.httpProxy` / `credential.httpsProxy`
    DeprecatedCredentialConfig,
    /// `http.proxy`
    StandardHttpConfig,
    /// `HTTPS_PROXY` / `HTTP_PROXY`, then `ALL_PROXY`
    CurlEnvironment,
    /// `GCM_HTTP_PROXY`
    DeprecatedEnvironment,
}

impl ProxySourceKind {
    /// Precedence rank; 1 wins over everything else.
    pub fn rank(self) -> u8 {
        match self {
            ProxySourceKind::DeprecatedCredentialConfig => 1,
            ProxySourceKind::StandardHttpConfig => 2,
            ProxySourceKind::CurlEnvironment => 3,
            ProxySourceKind::DeprecatedEnvironment => 4,
        }
    }

    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            ProxySourceKind::DeprecatedCredentialConfig | ProxySourceKind::DeprecatedEnvironment
        )
    }
}

/// The effective proxy and the setting it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfiguration {
    pub url: Url,
    pub source: ProxySourceKind,
    /// The configuration key or environment variable that supplied the value.
    pub origin: String,
}

impl ProxyConfiguration {
    /// Whether the winning setting uses a deprecated name.
    pub fn is_deprecated(&self) -> bool {
        self.source.is_deprecated()
    }
}

#[derive(Debug, Clone, Copy)]
enum Lookup {
    Config {
        section: &'static str,
        property: &'static str,
    },
    Environment(&'static str),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Config { section, property } => write!(f, "{section}.{property}"),
            Lookup::Environment(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ProxySource {
    kind: ProxySourceKind,
    lookup: Lookup,
}

impl ProxySource {
    const fn config(kind: ProxySourceKind, section: &'static str, property: &'static str) -> Self {
        Self {
            kind,
            lookup: Lookup::Config { section, property },
        }
    }

    const fn env(kind: ProxySourceKind, name: &'static str) -> Self {
        Self {
            kind,
            lookup: Lookup::Environment(name),
        }
    }
}

/// Every place a proxy may be configured, first match wins.
fn proxy_sources(is_https: bool) -> [ProxySource; 7] {
    use ProxySourceKind::*;

    let (credential_property, curl_name, curl_name_lower) = if is_https {
        (
            credential::HTTPS_PROXY,
            envars::CURL_HTTPS_PROXY,
            envars::CURL_HTTPS_PROXY_LOWER,
        )
    } else {
        (
            credential::HTTP_PROXY,
            envars::CURL_HTTP_PROXY,
            envars::CURL_HTTP_PROXY_LOWER,
        )
    };

    [
        ProxySource::config(DeprecatedCredentialConfig, credential::SECTION, credential_property),
        ProxySource::config(StandardHttpConfig, http::SECTION, http::PROXY),
        ProxySource::env(CurlEnvironment, curl_name),
        ProxySource::env(CurlEnvironment, curl_name_lower),
        ProxySource::env(CurlEnvironment, envars::CURL_ALL_PROXY),
        ProxySource::env(CurlEnvironment, envars::CURL_ALL_PROXY_LOWER),
        ProxySource::env(DeprecatedEnvironment, envars::GCM_HTTP_PROXY),
    ]
}

impl Settings<'_> {
    /// The effective proxy for the remote, if any.
    ///
    /// Sources are consulted in this order, and the first one holding a
    /// usable URL wins:
    ///
    /// 1. `credential.httpsProxy` for HTTPS remotes, `credential.httpProxy`
    ///    otherwise (deprecated)
    /// 2. `http.proxy`
    /// 3. `HTTPS_PROXY` for HTTPS remotes, `HTTP_PROXY` otherwise, then
    ///    `ALL_PROXY` (each also in curl's lower-case spelling)
    /// 4. `GCM_HTTP_PROXY` (deprecated)
    ///
    /// Configuration keys honour URL scopes like any other setting. A value
    /// that is not a valid URL is skipped and the next source is tried.
    pub fn proxy_configuration(&self) -> Result<Option<ProxyConfiguration>> {
        for source in proxy_sources(self.context.is_https()) {
            let value = match source.lookup {
                Lookup::Config { section, property } => {
                    self.try_get_setting(None, section, property)?
                }
                Lookup::Environment(name) => self.environment_value(Some(name)).map(str::to_string),
            };
            let Some(value) = value else {
                continue;
            };

            match parse_proxy_url(&value) {
                Some(url) => {
                    tracing::debug!(
                        origin = %source.lookup,
                        source = ?source.kind,
                        rank = source.kind.rank(),
                        url = %redact_url(&url),
                        "Resolved proxy configuration"
                    );
                    return Ok(Some(ProxyConfiguration {
                        url,
                        source: source.kind,
                        origin: source.lookup.to_string(),
                    }));
                }
                None => {
                    tracing::debug!(
                        origin = %source.lookup,
                        value = %Secret::new(&value),
                        "Ignoring malformed proxy value"
                    );
                }
            }
        }

        Ok(None)
    }
}
