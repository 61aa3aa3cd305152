use std::io;
use std::path::Path;
use std::process::Command;

use spdlog::{debug, info, warn};

use crate::error::{Result, ScaffoldError};

/// Opens a freshly created post for the author.
pub trait EditorLauncher {
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Editor program plus any arguments it was configured with, e.g. `code --wait`.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace().map(|s| s.to_string());
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// Picks the editor from, in order: command line, config file, `$VISUAL`, `$EDITOR`.
/// Blank values are skipped.
pub fn resolve_editor<F>(cli: Option<&str>, config: Option<&str>, env_var: F) -> Option<EditorCommand>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(editor) = cli.and_then(EditorCommand::parse) {
        return Some(editor);
    }

    if let Some(editor) = config.and_then(EditorCommand::parse) {
        return Some(editor);
    }

    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|name| env_var(*name))
        .find_map(|value| EditorCommand::parse(&value))
}

/// Runs the editor in the foreground and waits for it to exit.
/// Built without an editor, every launch fails with `EditorNotConfigured`.
pub struct CommandLauncher {
    editor: Option<EditorCommand>,
}

impl CommandLauncher {
    pub fn new(editor: Option<EditorCommand>) -> Self {
        Self { editor }
    }
}

impl EditorLauncher for CommandLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        let editor = self.editor.as_ref().ok_or(ScaffoldError::EditorNotConfigured)?;
        let launch_error = |source: io::Error| ScaffoldError::EditorLaunch {
            editor: editor.program.clone(),
            source,
        };

        let program = which::which(&editor.program)
            .map_err(|e| launch_error(io::Error::new(io::ErrorKind::NotFound, e.to_string())))?;
        debug!("Resolved editor {} to {}", editor.program, program.display());

        info!("Opening {} with {}", path.display(), editor.program);
        let status = Command::new(program)
            .args(&editor.args)
            .arg(path)
            .status()
            .map_err(launch_error)?;

        if !status.success() {
            warn!("Editor {} exited with {}", editor.program, status);
        }

        Ok(())
    }
}
