//! In-memory configuration source

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::key::{ConfigEntry, ConfigKey, ConfigTier};
use crate::source::ConfigSource;

/// A deterministic configuration source for tests and embedding.
///
/// Entries are seeded per tier. Repository-tier entries are registered
/// against a repository path and only returned when a query names that exact
/// path.
///
/// # Example
///
/// ```
/// use gcm_git::{ConfigKey, ConfigSource, InMemoryConfiguration};
///
/// let mut config = InMemoryConfiguration::from_pairs([("http.proxy", "http://proxy")]).unwrap();
/// config.add_repository("/tmp/repo/.git", ConfigKey::unscoped("http", "proxy"), "http://local");
///
/// let entries = config.query(Some("/tmp/repo/.git".as_ref()), "http", "proxy").unwrap();
/// assert_eq!(entries[0].value, "http://local");
/// assert_eq!(entries[1].value, "http://proxy");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfiguration {
    system: Vec<(ConfigKey, String)>,
    global: Vec<(ConfigKey, String)>,
    repositories: HashMap<PathBuf, Vec<(ConfigKey, String)>>,
}

impl InMemoryConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the global tier from dotted `section.[scope.]property` names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::new();
        for (name, value) in pairs {
            config.add_global(ConfigKey::parse(name.as_ref())?, value);
        }
        Ok(config)
    }

    pub fn add_system(&mut self, key: ConfigKey, value: impl Into<String>) -> &mut Self {
        self.system.push((key, value.into()));
        self
    }

    pub fn add_global(&mut self, key: ConfigKey, value: impl Into<String>) -> &mut Self {
        self.global.push((key, value.into()));
        self
    }

    /// Add an entry to the repository tier of `repository`.
    pub fn add_repository(
        &mut self,
        repository: impl Into<PathBuf>,
        key: ConfigKey,
        value: impl Into<String>,
    ) -> &mut Self {
        self.repositories
            .entry(repository.into())
            .or_default()
            .push((key, value.into()));
        self
    }

    /// Add dotted `section.[scope.]property` pairs to the repository tier of
    /// `repository`.
    pub fn add_repository_pairs<I, K, V>(
        &mut self,
        repository: impl Into<PathBuf>,
        pairs: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let repository = repository.into();
        for (name, value) in pairs {
            self.add_repository(repository.clone(), ConfigKey::parse(name.as_ref())?, value);
        }
        Ok(self)
    }
}

impl ConfigSource for InMemoryConfiguration {
    fn query(
        &self,
        repository: Option<&Path>,
        section: &str,
        property: &str,
    ) -> Result<Vec<ConfigEntry>> {
        let local = repository
            .and_then(|path| self.repositories.get(path))
            .map(Vec::as_slice)
            .unwrap_or_default();

        let tiers = [
            (ConfigTier::Repository, local),
            (ConfigTier::Global, self.global.as_slice()),
            (ConfigTier::System, self.system.as_slice()),
        ];

        Ok(tiers
            .into_iter()
            .flat_map(|(tier, entries)| {
                entries
                    .iter()
                    .filter(|(key, _)| key.matches(section, property))
                    .map(move |(key, value)| ConfigEntry::new(key.clone(), value.clone(), tier))
            })
            .collect())
    }
}
