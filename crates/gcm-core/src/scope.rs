//! URL scope candidates
//!
//! A URL-scoped configuration key such as `credential.example.com/foo.provider`
//! applies when its scope matches the remote URL. For a remote
//! `https://example.com/foo/bar.git` the candidate scopes, most specific
//! first, are:
//!
//! ```text
//! https://example.com/foo/bar.git
//! https://example.com/foo
//! https://example.com
//! example.com/foo/bar.git
//! example.com/foo
//! example.com
//! (unscoped)
//! ```
//!
//! Every scheme-qualified candidate ranks above every scheme-less one, and the
//! sequence always ends with the unscoped key. Configured scopes are compared
//! to candidates with exact, case-sensitive string equality.

use serde::Serialize;
use url::Url;

/// One scope to look up, with its position in the specificity order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeCandidate {
    /// The scope string, or `None` for the unscoped key.
    pub scope: Option<String>,
    /// 0 is the most specific candidate.
    pub rank: usize,
}

impl ScopeCandidate {
    /// Whether a configured scope matches this candidate.
    pub fn matches(&self, scope: Option<&str>) -> bool {
        self.scope.as_deref() == scope
    }
}

/// Generate the scope candidates for `url`, most specific first.
///
/// The path is used as supplied, last segment included; only empty segments
/// (leading, trailing or doubled slashes) are dropped. The port, user info,
/// query and fragment never take part. A missing URL, or one without a host,
/// yields only the unscoped candidate.
pub fn scope_candidates(url: Option<&Url>) -> Vec<ScopeCandidate> {
    let mut scopes: Vec<Option<String>> = Vec::new();

    if let Some(url) = url
        && let Some(host) = url.host_str().filter(|host| !host.is_empty())
    {
        let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
        let with_scheme = format!("{}://{}", url.scheme(), host);

        for base in [with_scheme.as_str(), host] {
            for depth in (0..=segments.len()).rev() {
                let mut scope = base.to_string();
                for segment in &segments[..depth] {
                    scope.push('/');
                    scope.push_str(segment);
                }
                scopes.push(Some(scope));
            }
        }
    }

    scopes.push(None);

    scopes
        .into_iter()
        .enumerate()
        .map(|(rank, scope)| ScopeCandidate { scope, rank })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scopes_of(url: &str) -> Vec<Option<String>> {
        let url = Url::parse(url).unwrap();
        scope_candidates(Some(&url))
            .into_iter()
            .map(|c| c.scope)
            .collect()
    }

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| Some(v.to_string()))
            .chain(std::iter::once(None))
            .collect()
    }

    #[test]
    fn no_url_yields_only_unscoped() {
        let candidates = scope_candidates(None);
        assert_eq!(candidates, vec![ScopeCandidate { scope: None, rank: 0 }]);
    }

    #[rstest]
    #[case("http://example.com", &["http://example.com", "example.com"])]
    #[case("http://example.com/", &["http://example.com", "example.com"])]
    #[case(
        "http://example.com/foo.git",
        &["http://example.com/foo.git", "http://example.com", "example.com/foo.git", "example.com"]
    )]
    #[case(
        "https://example.com/foo/bar/bazz.git",
        &[
            "https://example.com/foo/bar/bazz.git",
            "https://example.com/foo/bar",
            "https://example.com/foo",
            "https://example.com",
            "example.com/foo/bar/bazz.git",
            "example.com/foo/bar",
            "example.com/foo",
            "example.com",
        ]
    )]
    #[case(
        "https://john@example.com:8443/org/repo/?x=1#frag",
        &["https://example.com/org/repo", "https://example.com/org", "https://example.com",
          "example.com/org/repo", "example.com/org", "example.com"]
    )]
    #[case("HTTPS://Example.COM/Org", &["https://example.com/Org", "https://example.com", "example.com/Org", "example.com"])]
    fn candidates_follow_specificity_order(#[case] url: &str, #[case] expected: &[&str]) {
        assert_eq!(scopes_of(url), some(expected));
    }

    #[test]
    fn url_without_host_yields_only_unscoped() {
        assert_eq!(scopes_of("file:///srv/git/repo.git"), vec![None]);
    }

    #[test]
    fn ranks_are_sequential() {
        let url = Url::parse("http://example.com/a/b").unwrap();
        let ranks: Vec<_> = scope_candidates(Some(&url)).iter().map(|c| c.rank).collect();
        assert_eq!(ranks, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn matches_compares_exactly() {
        let candidate = ScopeCandidate {
            scope: Some("example.com/Foo".to_string()),
            rank: 0,
        };
        assert!(candidate.matches(Some("example.com/Foo")));
        assert!(!candidate.matches(Some("example.com/foo")));
        assert!(!candidate.matches(None));
    }
}
