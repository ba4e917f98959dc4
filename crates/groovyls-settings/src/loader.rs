//! Format-agnostic settings loading

use crate::{Error, Result, Settings};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Workspace settings file, relative to the workspace root.
pub const WORKSPACE_SETTINGS_PATH: &str = ".vscode/settings.json";

/// Platform location of the editor's user `settings.json`.
///
/// - Linux: `~/.config/Code/User/settings.json`
/// - macOS: `~/Library/Application Support/Code/User/settings.json`
/// - Windows: `%APPDATA%\Code\User\settings.json`
pub fn default_user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("Code").join("User").join("settings.json"))
}

impl Settings {
    /// Load a settings document from a file.
    ///
    /// Format is detected from file extension:
    /// - `.json` -> JSON, with `//` and `/* */` comments and trailing commas allowed
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    ///
    /// A blank file is an empty document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Like [`Settings::load`] but a missing file yields `Ok(None)`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(?path, "No settings file found, skipping");
                Ok(None)
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parse_error = |format: &str, message: String| Error::Parse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let value: Value = match extension.as_str() {
            "json" => serde_json::from_str(&strip_jsonc(content))
                .map_err(|e| parse_error("JSON", e.to_string()))?,
            "toml" => toml::from_str(content).map_err(|e| parse_error("TOML", e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(content).map_err(|e| parse_error("YAML", e.to_string()))?
            }
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        tracing::debug!(?path, format = %extension, "Loaded settings file");

        Self::from_value(value).ok_or_else(|| Error::NotAnObject {
            path: path.to_path_buf(),
        })
    }
}

/// Remove comments and trailing commas so editor settings parse as JSON.
///
/// String literals are copied untouched. A comma is dropped only when it
/// follows a value and precedes `}` or `]`, so `[,]`, `{,}` and `[1,,]`
/// are left for `serde_json` to reject.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                out.push(c);
                while let Some(s) = chars.next() {
                    out.push(s);
                    match s {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                out.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for s in chars.by_ref() {
                    if s == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for s in chars.by_ref() {
                    if prev == '*' && s == '/' {
                        break;
                    }
                    prev = s;
                }
            }
            '}' | ']' => {
                // Only a comma after a value is trailing; `[,]` stays invalid.
                let keep = out
                    .trim_end()
                    .strip_suffix(',')
                    .filter(|before| !before.trim_end().ends_with(['[', '{', ',']))
                    .map(str::len);
                if let Some(len) = keep {
                    out.truncate(len);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn strip_jsonc_removes_comments_outside_strings() {
        let input = r#"{
            // line comment
            "a": "http://example.com", /* block */
            "b": "/* not a comment */"
        }"#;
        let value: Value = serde_json::from_str(&strip_jsonc(input)).unwrap();
        assert_eq!(
            value,
            json!({"a": "http://example.com", "b": "/* not a comment */"})
        );
    }

    #[test]
    fn strip_jsonc_drops_trailing_commas() {
        let input = "{\"a\": [1, 2,], \"b\": 3, // last\n}";
        let value: Value = serde_json::from_str(&strip_jsonc(input)).unwrap();
        assert_eq!(value, json!({"a": [1, 2], "b": 3}));
    }

    #[rstest]
    #[case("[,]")]
    #[case("{,}")]
    #[case("[1,,]")]
    #[case("{\"a\": 1,, }")]
    fn strip_jsonc_leaves_stray_commas_invalid(#[case] input: &str) {
        assert!(serde_json::from_str::<Value>(&strip_jsonc(input)).is_err());
    }

    #[test]
    fn strip_jsonc_keeps_escaped_quotes() {
        let value: Value =
            serde_json::from_str(&strip_jsonc(r#"{"a": "say \"hi\" // there"}"#)).unwrap();
        assert_eq!(value, json!({"a": "say \"hi\" // there"}));
    }
}
