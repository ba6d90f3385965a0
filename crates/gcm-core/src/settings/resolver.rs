//! Generic setting queries

use gcm_git::ConfigEntry;

use super::Settings;
use super::values::parse_boolean;
use crate::Result;
use crate::scope::scope_candidates;

impl Settings<'_> {
    /// A boolean flag: the environment variable if set, otherwise the most
    /// specific configuration value, otherwise `default`.
    ///
    /// Values are parsed loosely (see [`parse_boolean`]); a blank value falls
    /// back to `default`.
    pub fn get_boolean(
        &self,
        envar: &str,
        section: &str,
        property: &str,
        default: bool,
    ) -> Result<bool> {
        let value = match self.environment_value(Some(envar)) {
            Some(value) => Some(value.to_string()),
            None => self.best_match(section, property)?,
        };
        Ok(value.as_deref().and_then(parse_boolean).unwrap_or(default))
    }

    /// A single override value: the environment variable if set, otherwise
    /// the unscoped configuration value from the most specific tier.
    pub fn get_string_override(
        &self,
        envar: &str,
        section: &str,
        property: &str,
    ) -> Result<Option<String>> {
        if let Some(value) = self.environment_value(Some(envar)) {
            tracing::trace!(%envar, "Override taken from environment");
            return Ok(Some(value.to_string()));
        }

        Ok(self
            .entries(section, property)?
            .into_iter()
            .find(|entry| entry.scope().is_none())
            .map(|entry| entry.value))
    }

    /// A single URL-scoped value: the environment variable if set, otherwise
    /// the value from the most specific matching scope.
    ///
    /// `None` means the setting is not configured anywhere. A value that is
    /// configured as the empty string is returned as `Some("")`.
    pub fn try_get_setting(
        &self,
        envar: Option<&str>,
        section: &str,
        property: &str,
    ) -> Result<Option<String>> {
        if let Some(value) = self.environment_value(envar) {
            return Ok(Some(value.to_string()));
        }
        self.best_match(section, property)
    }

    /// Every value of a URL-scoped setting, highest precedence first.
    ///
    /// The environment variable (if set) comes first, then configuration
    /// entries from the most to the least specific scope, ending with the
    /// unscoped ones. Within a scope entries follow tier then declaration
    /// order. Repeated values are kept.
    pub fn get_setting_values(
        &self,
        envar: Option<&str>,
        section: &str,
        property: &str,
    ) -> Result<Vec<String>> {
        let mut values: Vec<String> = self
            .environment_value(envar)
            .map(str::to_string)
            .into_iter()
            .collect();

        values.extend(
            self.scoped_entries(section, property)?
                .into_iter()
                .map(|entry| entry.value),
        );

        Ok(values)
    }

    /// An environment variable value that is not blank.
    ///
    /// Empty and whitespace-only values count as unset, so they never shadow
    /// configuration.
    pub(super) fn environment_value(&self, envar: Option<&str>) -> Option<&str> {
        envar
            .and_then(|name| self.environment.lookup(name))
            .filter(|value| !value.trim().is_empty())
    }

    fn entries(&self, section: &str, property: &str) -> Result<Vec<ConfigEntry>> {
        Ok(self
            .config
            .query(self.context.repository_path(), section, property)?)
    }

    fn best_match(&self, section: &str, property: &str) -> Result<Option<String>> {
        Ok(self
            .scoped_entries(section, property)?
            .into_iter()
            .next()
            .map(|entry| entry.value))
    }

    /// Entries whose scope matches the remote, ordered by scope specificity.
    ///
    /// The source already orders entries by tier, so collecting per candidate
    /// keeps tier and declaration order within each scope.
    fn scoped_entries(&self, section: &str, property: &str) -> Result<Vec<ConfigEntry>> {
        let entries = self.entries(section, property)?;
        if entries.is_empty() {
            return Ok(entries);
        }

        let candidates = scope_candidates(self.context.remote_url());
        let mut ordered = Vec::with_capacity(entries.len());
        for candidate in &candidates {
            ordered.extend(
                entries
                    .iter()
                    .filter(|entry| candidate.matches(entry.scope()))
                    .cloned(),
            );
        }

        tracing::trace!(
            %section,
            %property,
            candidates = candidates.len(),
            configured = entries.len(),
            matched = ordered.len(),
            "Matched scoped configuration"
        );

        Ok(ordered)
    }
}
