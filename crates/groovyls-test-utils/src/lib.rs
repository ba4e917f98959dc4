//! Shared test utilities for the groovyls workspace.
//!
//! - [`workspace`] - [`TestWorkspace`] builder for scratch workspaces with
//!   settings files, library folders and Groovy sources.

pub mod workspace;

pub use workspace::TestWorkspace;
