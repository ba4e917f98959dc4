//! Resolve command implementation

use groovyls_classpath::resolve_additional_classpath_folder;
use serde_json::json;

use crate::context::Context;
use crate::error::Result;

/// Print the resolved folder. Absence prints nothing (or `null` with `--json`).
pub fn run_resolve(ctx: &Context, json: bool) -> Result<()> {
    let folder = resolve_additional_classpath_folder(&ctx.settings);

    if json {
        let output = json!({ "folder": folder });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let Some(folder) = folder {
        println!("{}", folder.display());
    }

    Ok(())
}
