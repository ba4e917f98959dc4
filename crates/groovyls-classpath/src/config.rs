//! Compiler configuration handed to the language server's compilation unit

use crate::{Classpath, LibraryFolder, Result};
use serde::Serialize;

/// Imports added to every compiled script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportCustomizer {
    /// Fully qualified class imports.
    pub imports: Vec<String>,
    /// Package star imports, without the trailing `.*`.
    pub star_imports: Vec<String>,
}

impl ImportCustomizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_import(mut self, class_name: impl Into<String>) -> Self {
        self.imports.push(class_name.into());
        self
    }

    pub fn add_star_import(mut self, package: impl Into<String>) -> Self {
        self.star_imports.push(package.into());
        self
    }

    /// Imports for Camel K integration scripts.
    pub fn camel_k() -> Self {
        Self::new()
            .add_import("org.apache.camel.k.loader.groovy.dsl.IntegrationConfiguration")
            .add_star_import("org.apache.camel")
            .add_star_import("org.apache.camel.spi")
    }
}

/// Settings for one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerConfig {
    pub debug: bool,
    pub verbose: bool,
    pub classpath: Classpath,
    pub import_customizers: Vec<ImportCustomizer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_base_class: Option<String>,
}

impl CompilerConfig {
    /// Debug and verbose output on, no customizers, no script base class.
    pub fn new(classpath: Classpath) -> Self {
        Self {
            debug: true,
            verbose: true,
            classpath,
            import_customizers: Vec::new(),
            script_base_class: None,
        }
    }

    /// Configuration for workspace scripts: the library folder's jars on the
    /// classpath plus the Camel K imports.
    pub fn customizable(library: Option<&LibraryFolder>) -> Result<Self> {
        let classpath = Classpath::from_folder(library)?;
        Ok(Self::new(classpath).with_import_customizer(ImportCustomizer::camel_k()))
    }

    pub fn with_import_customizer(mut self, customizer: ImportCustomizer) -> Self {
        self.import_customizers.push(customizer);
        self
    }

    pub fn with_script_base_class(mut self, class_name: impl Into<String>) -> Self {
        self.script_base_class = Some(class_name.into());
        self
    }

    /// Every class import across all customizers, in order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.import_customizers
            .iter()
            .flat_map(|c| c.imports.iter().map(String::as_str))
    }

    /// Every star import across all customizers, in order.
    pub fn star_imports(&self) -> impl Iterator<Item = &str> {
        self.import_customizers
            .iter()
            .flat_map(|c| c.star_imports.iter().map(String::as_str))
    }
}
