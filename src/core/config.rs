use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// YAML rendering of the effective configuration.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Opens `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// or the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if Self::launch(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }

        if editor_to_use != default_editor {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            if Self::launch(&default_editor, path) {
                success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                ));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "Failed to edit configuration file {}",
            path.display()
        )))
    }

    fn launch(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }
}
