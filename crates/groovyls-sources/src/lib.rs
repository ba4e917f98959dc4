//! Workspace source discovery and incremental compilation units
//!
//! A [`CompilationUnit`] pairs the compiler configuration with the set of
//! Groovy sources to compile: files found under the workspace root plus any
//! buffers open in the editor. [`CompilationUnitFactory`] keeps the unit
//! between requests and only rebuilds the sources that changed.

pub mod discovery;
pub mod error;
pub mod factory;
pub mod tracker;
pub mod unit;

pub use discovery::{GROOVY_EXTENSION, collect_groovy_files, normalize_lexically};
pub use error::{Error, Result};
pub use factory::CompilationUnitFactory;
pub use tracker::FileContentsTracker;
pub use unit::{CompilationUnit, SourceOrigin, SourceUnit};
