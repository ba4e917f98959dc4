//! Additional libraries folder resolution and classpath assembly
//!
//! Reads `groovy.additional.libraries` from an injected settings store,
//! checks that it names a directory, and turns that directory into the
//! `.jar` classpath and compiler configuration used by the language server.

pub mod config;
pub mod error;
pub mod library;
pub mod resolver;

pub use config::{CompilerConfig, ImportCustomizer};
pub use error::{Error, Result};
pub use library::{Classpath, LibraryFolder};
pub use resolver::{
    ADDITIONAL_LIBRARIES_KEY, FolderCheck, check_folder, inspect_additional_classpath_folder,
    resolve_additional_classpath_folder,
};
