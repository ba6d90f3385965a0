//! Git configuration sources for the credential settings engine
//!
//! A configuration source answers one question: which values are defined for a
//! `section.[scope.]property` name, across every configuration tier, ordered from
//! the most specific tier (repository-local) to the least specific (system-wide).
//!
//! Two sources ship with this crate:
//!
//! - [`GitConfiguration`] reads the real system, global and repository-local
//!   configuration through `git2`.
//! - [`InMemoryConfiguration`] is a deterministic fake seeded with entries and
//!   per-repository overlays.

pub mod error;
pub mod git;
pub mod key;
pub mod memory;
pub mod source;

pub use error::{Error, Result};
pub use git::GitConfiguration;
pub use key::{ConfigEntry, ConfigKey, ConfigTier};
pub use memory::InMemoryConfiguration;
pub use source::ConfigSource;
