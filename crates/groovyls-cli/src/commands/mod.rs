//! Command implementations for groovyls-cli

pub mod check;
pub mod classpath;
pub mod resolve;
pub mod sources;

pub use check::run_check;
pub use classpath::run_classpath;
pub use resolve::run_resolve;
pub use sources::run_sources;
