use crate::config::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Keys from [`CONFIG_KEYS`] absent from the YAML document.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = Self::missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Configuration file is missing: {} (defaults will be used)",
                missing.join(", ")
            ));
        }
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file with `editor`, falling back to the default one.
    pub fn edit(path: &Path, editor: Option<&String>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let requested = editor.cloned().unwrap_or_else(|| fallback.clone());

        let ok = |ed: &str| {
            Command::new(ed)
                .arg(path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false)
        };

        if ok(&requested) {
            success(format!("Configuration file edited using '{}'", requested));
            return Ok(());
        }

        if requested != fallback {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, fallback
            ));
            if ok(&fallback) {
                success(format!("Configuration file edited using '{}'", fallback));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit configuration file with '{}'",
            requested
        )))
    }
}
