use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (defaults included).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open the configuration file in `editor`, falling back to
    /// $EDITOR / $VISUAL / the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            Ok(_) | Err(_) => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
            }
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "failed to edit configuration file using fallback '{}'",
                default_editor
            )));
        }

        success(format!(
            "Configuration file edited successfully using fallback '{}'",
            default_editor
        ));
        Ok(())
    }
}
