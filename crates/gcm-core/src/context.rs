//! Per-invocation resolution context

use std::path::{Path, PathBuf};

use url::Url;

use crate::{Error, Result};

/// The remote and repository a batch of settings queries is resolved for.
///
/// Either part may be unknown when the context is first created; both can be
/// filled in later, before queries are issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    remote_url: Option<Url>,
    repository_path: Option<PathBuf>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_url(mut self, url: Url) -> Self {
        self.remote_url = Some(url);
        self
    }

    pub fn with_repository_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.repository_path = Some(path.into());
        self
    }

    /// Parse and set the remote URL.
    ///
    /// The URL must be absolute; relative references are rejected.
    pub fn set_remote_url_str(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidRemoteUrl {
            url: url.to_string(),
            source,
        })?;
        self.remote_url = Some(parsed);
        Ok(())
    }

    pub fn set_repository_path(&mut self, path: Option<PathBuf>) {
        self.repository_path = path;
    }

    pub fn remote_url(&self) -> Option<&Url> {
        self.remote_url.as_ref()
    }

    pub fn repository_path(&self) -> Option<&Path> {
        self.repository_path.as_deref()
    }

    /// Whether the remote is reached over HTTPS.
    pub fn is_https(&self) -> bool {
        self.remote_url
            .as_ref()
            .is_some_and(|url| url.scheme().eq_ignore_ascii_case("https"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_remote_url_str_rejects_relative_urls() {
        let mut context = ResolutionContext::new();

        let err = context.set_remote_url_str("example.com/foo.git").unwrap_err();

        assert!(matches!(err, Error::InvalidRemoteUrl { .. }));
        assert!(context.remote_url().is_none());
    }

    #[test]
    fn parts_are_settable_after_construction() {
        let mut context = ResolutionContext::new();
        assert!(!context.is_https());

        context.set_remote_url_str("https://example.com/foo.git").unwrap();
        context.set_repository_path(Some(PathBuf::from("/tmp/repos/foo/.git")));

        assert!(context.is_https());
        assert_eq!(context.repository_path(), Some(Path::new("/tmp/repos/foo/.git")));
    }
}
