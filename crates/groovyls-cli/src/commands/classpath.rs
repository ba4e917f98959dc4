//! Classpath command implementation

use groovyls_classpath::{Classpath, LibraryFolder};

use crate::context::Context;
use crate::error::Result;

/// Print the jars of the additional classpath folder.
pub fn run_classpath(ctx: &Context, json: bool, lines: bool) -> Result<()> {
    let folder = LibraryFolder::from_settings(&ctx.settings);
    let classpath = Classpath::from_folder(folder.as_ref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&classpath)?);
    } else if lines {
        for entry in &classpath {
            println!("{}", entry.display());
        }
    } else if !classpath.is_empty() {
        println!("{}", classpath.to_os_string()?.to_string_lossy());
    }

    Ok(())
}
