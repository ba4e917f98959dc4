//! Check command implementation

use colored::Colorize;
use groovyls_classpath::{
    ADDITIONAL_LIBRARIES_KEY, FolderCheck, LibraryFolder, inspect_additional_classpath_folder,
};

use crate::context::Context;
use crate::error::Result;

/// Explain how `groovy.additional.libraries` resolves for this workspace.
pub fn run_check(ctx: &Context) -> Result<()> {
    let check = inspect_additional_classpath_folder(&ctx.settings);

    println!("{}", "Additional Classpath Folder".bold());
    println!();
    println!("{}:  {}", "Setting".dimmed(), ADDITIONAL_LIBRARIES_KEY);
    match ctx.settings.scope_of(ADDITIONAL_LIBRARIES_KEY) {
        Some(scope) => println!("{}:   {}", "Scope".dimmed(), scope.to_string().cyan()),
        None => println!("{}:   {}", "Scope".dimmed(), "none".dimmed()),
    }
    if let Some(path) = check.configured_path() {
        println!("{}:    {}", "Path".dimmed(), path.display());
    }
    println!();

    match &check {
        FolderCheck::Resolved(path) => {
            println!("  {} {}", "ok".green().bold(), check);
            match LibraryFolder::open(path) {
                Some(folder) => {
                    let jars = folder.jars()?;
                    println!("  {} jar(s) will be added to the classpath", jars.len());
                }
                None => println!("  {} folder is not readable", "warn".yellow().bold()),
            }
        }
        FolderCheck::NotConfigured => {
            println!("  {} {}", "-".dimmed(), check);
            println!("  No additional classpath folder is contributed.");
        }
        _ => {
            println!("  {} {}", "x".red().bold(), check);
            println!("  No additional classpath folder is contributed.");
        }
    }

    Ok(())
}
