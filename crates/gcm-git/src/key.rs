//! Configuration keys, tiers and entries

use std::fmt;

use crate::{Error, Result};

/// A configuration name split into its three parts.
///
/// `credential.https://example.com.provider` has section `credential`, scope
/// `https://example.com` and property `provider`. A key without a scope applies
/// to every remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    pub section: String,
    pub scope: Option<String>,
    pub property: String,
}

impl ConfigKey {
    /// Create a key, optionally narrowed to a URL scope.
    pub fn new(section: impl Into<String>, scope: Option<&str>, property: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            scope: scope.map(str::to_string),
            property: property.into(),
        }
    }

    /// Create a key that applies to every remote.
    pub fn unscoped(section: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(section, None, property)
    }

    /// Create a key narrowed to `scope`.
    pub fn scoped(
        section: impl Into<String>,
        scope: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            scope: Some(scope.into()),
            property: property.into(),
        }
    }

    /// Split a dotted configuration name.
    ///
    /// The section ends at the first dot and the property starts after the
    /// last one; everything in between is the scope, dots included, so
    /// `http.example.com/foo.proxy` scopes `proxy` to `example.com/foo`.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || Error::InvalidKey {
            name: name.to_string(),
        };

        let (section, rest) = name.split_once('.').ok_or_else(invalid)?;
        let (scope, property) = match rest.rsplit_once('.') {
            Some((scope, property)) => (Some(scope), property),
            None => (None, rest),
        };

        if section.is_empty() || property.is_empty() || scope.is_some_and(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self::new(section, scope, property))
    }

    /// Whether this key names `section.*.property`.
    ///
    /// Git treats section and property names case-insensitively; scopes are
    /// compared elsewhere and always exactly.
    pub fn matches(&self, section: &str, property: &str) -> bool {
        self.section.eq_ignore_ascii_case(section) && self.property.eq_ignore_ascii_case(property)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}.{}.{}", self.section, scope, self.property),
            None => write!(f, "{}.{}", self.section, self.property),
        }
    }
}

/// A configuration precedence level, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigTier {
    /// Repository-local (and worktree) configuration
    Repository,
    /// User-wide configuration
    Global,
    /// Machine-wide configuration
    System,
}

impl ConfigTier {
    /// Ordering rank; lower is more specific.
    pub fn rank(self) -> u8 {
        match self {
            ConfigTier::Repository => 0,
            ConfigTier::Global => 1,
            ConfigTier::System => 2,
        }
    }
}

impl From<git2::ConfigLevel> for ConfigTier {
    fn from(level: git2::ConfigLevel) -> Self {
        match level {
            git2::ConfigLevel::ProgramData | git2::ConfigLevel::System => ConfigTier::System,
            git2::ConfigLevel::XDG | git2::ConfigLevel::Global => ConfigTier::Global,
            _ => ConfigTier::Repository,
        }
    }
}

/// One configured value, as reported by a [`ConfigSource`](crate::ConfigSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: ConfigKey,
    pub value: String,
    pub tier: ConfigTier,
}

impl ConfigEntry {
    pub fn new(key: ConfigKey, value: impl Into<String>, tier: ConfigTier) -> Self {
        Self {
            key,
            value: value.into(),
            tier,
        }
    }

    /// The entry's scope, if it is URL-scoped.
    pub fn scope(&self) -> Option<&str> {
        self.key.scope.as_deref()
    }
}
