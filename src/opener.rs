// file: src/opener.rs
// description: hands a resolved document to the platform's default viewer
// reference: https://doc.rust-lang.org/std/process/struct.Command.html

use crate::config::OpenerConfig;
use crate::error::{DocrefError, Result};
use crate::utils::Validator;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DocumentOpener {
    command: Option<String>,
}

impl DocumentOpener {
    pub fn new(config: &OpenerConfig) -> Self {
        let command = config
            .command
            .as_ref()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Self { command }
    }

    /// Spawns the viewer and returns without waiting for it.
    pub fn open(&self, path: &Path) -> Result<()> {
        Validator::validate_file_path(path)?;

        let mut command = self.command_for(path);
        debug!("Running {:?}", command);

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DocrefError::Open {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    pub fn command_for(&self, path: &Path) -> Command {
        let mut command = match &self.command {
            Some(custom) => {
                let mut parts = custom.split_whitespace();
                // non-empty by construction
                let mut command = Command::new(parts.next().unwrap_or_default());
                command.args(parts);
                command
            }
            None => Self::platform_command(),
        };

        command.arg(path);
        command
    }

    #[cfg(target_os = "macos")]
    fn platform_command() -> Command {
        Command::new("open")
    }

    #[cfg(target_os = "windows")]
    fn platform_command() -> Command {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn platform_command() -> Command {
        Command::new("xdg-open")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_custom_command_with_args() {
        let opener = DocumentOpener::new(&OpenerConfig {
            command: Some("code --reuse-window".to_string()),
        });

        let command = opener.command_for(Path::new("/refs/array.md"));
        let args: Vec<&OsStr> = command.get_args().collect();

        assert_eq!(command.get_program(), "code");
        assert_eq!(
            args,
            vec![OsStr::new("--reuse-window"), OsStr::new("/refs/array.md")]
        );
    }

    #[test]
    fn test_blank_command_uses_platform_default() {
        let opener = DocumentOpener::new(&OpenerConfig {
            command: Some("   ".to_string()),
        });

        let command = opener.command_for(Path::new("a.md"));
        assert_eq!(command.get_args().last(), Some(OsStr::new("a.md")));
        assert_ne!(command.get_program(), "");
    }

    #[test]
    fn test_missing_file_is_not_opened() {
        let temp = TempDir::new().unwrap();
        let opener = DocumentOpener::new(&OpenerConfig::default());

        assert!(matches!(
            opener.open(&temp.path().join("gone.md")),
            Err(DocrefError::Validation(_))
        ));
    }
}
