//! Shared test utilities for the credential settings workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`git`]: real git repositories with seeded local configuration

pub mod git;

pub use git::TestRepo;
