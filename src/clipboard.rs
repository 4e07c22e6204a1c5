//! Copying a selected command to the system clipboard.
//!
//! Copies are fire-and-forget: failures are logged and never reach the
//! search session.

use std::process::Stdio;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, warn};

/// Destination for selected entries.
pub trait Clipboard {
    fn copy(&self, text: &str);
}

/// Which clipboard backend to use, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum ClipboardConfig {
    /// Pipe the text into an external program such as `pbcopy`.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Talk to the OS clipboard in-process.
    System,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            ClipboardConfig::Command {
                program: "pbcopy".to_string(),
                args: Vec::new(),
            }
        } else {
            ClipboardConfig::Command {
                program: "xclip".to_string(),
                args: vec!["-selection".to_string(), "clipboard".to_string()],
            }
        }
    }
}

impl ClipboardConfig {
    pub fn build(&self) -> Box<dyn Clipboard> {
        match self {
            ClipboardConfig::Command { program, args } => {
                Box::new(CommandClipboard::new(program.clone(), args.clone()))
            }
            ClipboardConfig::System => Box::new(SystemClipboard),
        }
    }
}

/// Spawns a clipboard program and writes the text to its stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                error!("No runtime available to run {}: {}", self.program, e);
                return;
            }
        };

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                error!("Failed to spawn clipboard command {}: {}", self.program, e);
                return;
            }
        };

        let program = self.program.clone();
        let text = text.to_string();
        let stdin = child.stdin.take();

        handle.spawn(async move {
            if let Some(mut stdin) = stdin {
                if let Err(e) = stdin.write_all(text.as_bytes()).await {
                    error!("Failed to write to {}: {}", program, e);
                }
                // Dropping stdin closes the pipe so the program sees EOF
            }

            match child.wait_with_output().await {
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    if !stderr.trim().is_empty() {
                        warn!("{} stderr: {}", program, stderr.trim());
                    }
                    if output.status.success() {
                        debug!("Copied {} bytes via {}", text.len(), program);
                    } else {
                        error!("Failed to copy text to clipboard: {} exited with {}", program, output.status);
                    }
                }
                Err(e) => error!("Failed to wait for {}: {}", program, e),
            }
        });
    }
}

/// In-process clipboard through `arboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    error!("Failed to copy to clipboard: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to access clipboard: {}", e);
            }
        }
    }
}
