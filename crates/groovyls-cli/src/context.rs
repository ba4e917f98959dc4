//! Settings and workspace resolution for a CLI invocation

use std::path::PathBuf;

use groovyls_classpath::ADDITIONAL_LIBRARIES_KEY;
use groovyls_settings::{LayeredSettings, Settings, SettingsScope, default_user_settings_path};

use crate::cli::Cli;
use crate::error::Result;

/// Everything a command needs: the workspace root and merged settings.
#[derive(Debug)]
pub struct Context {
    pub workspace: PathBuf,
    pub settings: LayeredSettings,
}

impl Context {
    /// Load user and workspace settings and apply the command-line override.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let workspace = match &cli.workspace {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let user_settings = cli.user_settings.clone().or_else(default_user_settings_path);
        tracing::debug!(?workspace, ?user_settings, "Resolving settings");

        let mut settings = LayeredSettings::discover(user_settings.as_deref(), Some(&workspace))?;

        // An empty override would mask the files' value, so it counts as unset.
        if let Some(folder) = cli.additional_libraries.as_deref().filter(|f| !f.is_empty()) {
            tracing::debug!(folder, "Applying command-line override");
            settings.push(
                SettingsScope::Override,
                Settings::empty().with(ADDITIONAL_LIBRARIES_KEY, folder),
            );
        }

        Ok(Self {
            workspace,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use groovyls_settings::ConfigurationStore;
    use groovyls_test_utils::TestWorkspace;

    fn parse(ws: &TestWorkspace, extra: &[&str]) -> Cli {
        let root = ws.root().to_string_lossy().into_owned();
        let user = ws.path("user.json").to_string_lossy().into_owned();
        let mut args = vec![
            "groovy-classpath",
            "--workspace",
            root.as_str(),
            "--user-settings",
            user.as_str(),
        ];
        args.extend_from_slice(extra);
        args.push("check");
        Cli::parse_from(args)
    }

    #[test]
    fn override_beats_workspace_settings() {
        let ws = TestWorkspace::new();
        let libs = ws.create_dir("libs");
        ws.write_workspace_settings(&libs);

        let cli = parse(&ws, &["--additional-libraries", "/cli/libs"]);
        let ctx = Context::from_cli(&cli).unwrap();
        assert_eq!(ctx.settings.get_str(ADDITIONAL_LIBRARIES_KEY), Some("/cli/libs"));
        assert_eq!(
            ctx.settings.scope_of(ADDITIONAL_LIBRARIES_KEY),
            Some(SettingsScope::Override)
        );
    }

    #[test]
    fn empty_override_is_ignored() {
        let ws = TestWorkspace::new();
        let libs = ws.create_dir("libs");
        ws.write_workspace_settings(&libs);

        let cli = parse(&ws, &["--additional-libraries", ""]);
        let ctx = Context::from_cli(&cli).unwrap();
        assert_eq!(
            ctx.settings.scope_of(ADDITIONAL_LIBRARIES_KEY),
            Some(SettingsScope::Workspace)
        );
    }

    #[test]
    fn workspace_flag_sets_root() {
        let ws = TestWorkspace::new();
        let ctx = Context::from_cli(&parse(&ws, &[])).unwrap();
        assert_eq!(ctx.workspace, ws.root());
    }
}
