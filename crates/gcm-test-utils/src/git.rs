//! Git repository fixtures with seeded configuration.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary git repository whose local configuration can be seeded.
///
/// # Example
///
/// ```rust,no_run
/// use gcm_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.set_config("http.proxy", "http://proxy.example.com");
/// repo.append_config(r#"[credential "https://example.com"]
///     provider = github
/// "#);
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Initialise a real git repository in a fresh temporary directory.
    ///
    /// # Panics
    /// Panics if the directory or repository cannot be created.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestRepo::new: failed to create temp dir");
        git2::Repository::init(temp_dir.path()).unwrap_or_else(|e| {
            panic!(
                "TestRepo::new: failed to init repository at {}: {e}",
                temp_dir.path().display()
            )
        });
        Self { temp_dir }
    }

    /// The working tree root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `.git` directory.
    pub fn git_dir(&self) -> PathBuf {
        self.root().join(".git")
    }

    /// Set a single-valued key in the repository-local configuration.
    ///
    /// # Panics
    /// Panics if the configuration cannot be written.
    pub fn set_config(&self, name: &str, value: &str) {
        let repo = git2::Repository::open(self.root())
            .unwrap_or_else(|e| panic!("TestRepo::set_config: failed to open repository: {e}"));
        let mut config = repo
            .config()
            .and_then(|config| config.open_level(git2::ConfigLevel::Local))
            .unwrap_or_else(|e| panic!("TestRepo::set_config: failed to open local config: {e}"));
        config
            .set_str(name, value)
            .unwrap_or_else(|e| panic!("TestRepo::set_config: failed to set {name}: {e}"));
    }

    /// Append raw text to `.git/config`.
    ///
    /// Use this for scoped sections (`[section "scope"]`) and repeated keys,
    /// which keep their declaration order.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn append_config(&self, text: &str) {
        let path = self.git_dir().join("config");
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap_or_else(|e| panic!("TestRepo::append_config: failed to open {}: {e}", path.display()));
        writeln!(file, "{text}")
            .unwrap_or_else(|e| panic!("TestRepo::append_config: failed to write: {e}"));
    }

    /// Read back `.git/config`, for assertion messages.
    pub fn config_text(&self) -> String {
        fs::read_to_string(self.git_dir().join("config")).unwrap_or_default()
    }
}
