//! Clipboard backends for the "copy field" action.

use std::io::ErrorKind;
use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use profiles::errors::ClipboardError;

/// Destination for copied field text.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last copied text in process memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self.contents.lock().map_err(|_| ClipboardError::Unavailable)?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// A host without any clipboard.
#[derive(Debug, Default)]
pub struct NoClipboard;

#[async_trait]
impl Clipboard for NoClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// Pipes copied text into an external program such as `pbcopy` or
/// `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Splits a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ClipboardError::Unavailable,
                ErrorKind::PermissionDenied => ClipboardError::Denied,
                _ => ClipboardError::Io(e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits without reading is judged by its exit status.
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
            // Closing stdin lets the program see end of input.
            drop(stdin);
        }

        let status = child.wait().await?;
        debug!("Clipboard command {} exited with {status}", self.program);

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Command(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}
