//! Configuration source trait

use std::path::Path;

use crate::Result;
use crate::key::{ConfigEntry, ConfigKey};

/// A read-only view over layered git configuration.
///
/// Implementations return every entry whose section and property match,
/// whatever its scope, each tagged with its scope and tier. Entries must be
/// ordered by tier (repository first, system last) and keep their declaration
/// order within a tier.
///
/// `repository` selects which repository-local tier applies. It is passed
/// explicitly because the repository being operated on need not be the
/// current working directory.
///
/// Failing to read the backing store is an error; a setting that is simply not
/// configured is an empty result.
pub trait ConfigSource {
    /// All entries for `section.*.property` across every tier.
    fn query(
        &self,
        repository: Option<&Path>,
        section: &str,
        property: &str,
    ) -> Result<Vec<ConfigEntry>>;

    /// Entries for exactly `key`: same section and property, and the same
    /// scope (or none).
    fn get(&self, repository: Option<&Path>, key: &ConfigKey) -> Result<Vec<ConfigEntry>> {
        Ok(self
            .query(repository, &key.section, &key.property)?
            .into_iter()
            .filter(|entry| entry.scope() == key.scope.as_deref())
            .collect())
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn query(
        &self,
        repository: Option<&Path>,
        section: &str,
        property: &str,
    ) -> Result<Vec<ConfigEntry>> {
        (**self).query(repository, section, property)
    }
}
