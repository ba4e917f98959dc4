//! Sources command implementation

use colored::Colorize;
use groovyls_classpath::CompilerConfig;
use groovyls_sources::{CompilationUnitFactory, FileContentsTracker, SourceUnit};
use serde::Serialize;

use crate::context::Context;
use crate::error::Result;

#[derive(Serialize)]
struct SourcesReport<'a> {
    config: &'a CompilerConfig,
    sources: Vec<&'a SourceUnit>,
}

/// Build the workspace compilation unit and print it.
pub fn run_sources(ctx: &Context, json: bool) -> Result<()> {
    let mut factory = CompilationUnitFactory::new();
    factory.apply_settings(&ctx.settings);

    let tracker = FileContentsTracker::new();
    let unit = factory.create(Some(&ctx.workspace), &tracker)?;

    if json {
        let report = SourcesReport {
            config: unit.config(),
            sources: unit.sources().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}:", "Classpath".bold());
    if unit.config().classpath.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for entry in &unit.config().classpath {
            println!("  {} {}", "+".green(), entry.display());
        }
    }
    println!();

    println!("{}:", "Sources".bold());
    if unit.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for source in unit.sources() {
            let shown = source
                .path
                .strip_prefix(&ctx.workspace)
                .unwrap_or(&source.path);
            println!("  {} {}", "+".green(), shown.display());
        }
    }

    Ok(())
}
