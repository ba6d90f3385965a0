//! Environment variable source

use std::collections::HashMap;

/// Read-only lookup of environment variables.
///
/// Names are case-sensitive. An unset variable (`None`) is distinct from one
/// set to the empty string (`Some("")`).
pub trait EnvironmentSource {
    fn lookup(&self, name: &str) -> Option<&str>;
}

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentView {
    variables: HashMap<String, String>,
}

impl EnvironmentView {
    /// An empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are left out.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Return a copy with `name` set to `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentSource for EnvironmentView {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

impl EnvironmentSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentView
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for EnvironmentView {
    fn from(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }
}
