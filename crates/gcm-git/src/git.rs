//! Configuration source backed by libgit2

use std::path::Path;

use git2::{Config, ErrorCode, Repository};

use crate::key::{ConfigEntry, ConfigKey, ConfigTier};
use crate::source::ConfigSource;
use crate::{Error, Result};

/// Reads system, global and repository-local configuration through `git2`.
///
/// Each query opens the configuration afresh, so edits made between queries
/// are visible. With a repository path the repository's own configuration
/// stack is used (local and worktree files on top of the global and system
/// files); without one only the default global and system files are read.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitConfiguration;

impl GitConfiguration {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, repository: Option<&Path>) -> Result<Config> {
        match repository {
            Some(path) => {
                let repo = Repository::open(path).map_err(|e| match e.code() {
                    ErrorCode::NotFound => Error::RepositoryNotFound {
                        path: path.to_path_buf(),
                    },
                    _ => Error::Git(e),
                })?;
                Ok(repo.config()?)
            }
            None => Ok(Config::open_default()?),
        }
    }
}

impl ConfigSource for GitConfiguration {
    fn query(
        &self,
        repository: Option<&Path>,
        section: &str,
        property: &str,
    ) -> Result<Vec<ConfigEntry>> {
        let config = self.open(repository)?;
        let mut entries = Vec::new();

        let mut iter = config.entries(None)?;
        while let Some(entry) = iter.next() {
            let entry = entry?;
            let Some(name) = entry.name() else {
                continue;
            };
            let Ok(key) = ConfigKey::parse(name) else {
                tracing::trace!(%name, "Skipping unparseable configuration name");
                continue;
            };
            if !key.matches(section, property) {
                continue;
            }

            // A bare `key` line with no `=` is an implicit boolean true.
            let value = if entry.has_value() {
                String::from_utf8_lossy(entry.value_bytes()).into_owned()
            } else {
                "true".to_string()
            };

            entries.push(ConfigEntry::new(key, value, ConfigTier::from(entry.level())));
        }

        // Stable: declaration order survives within a tier.
        entries.sort_by_key(|entry| entry.tier.rank());

        tracing::trace!(
            %section,
            %property,
            repository = ?repository,
            count = entries.len(),
            "Queried git configuration"
        );

        Ok(entries)
    }
}
