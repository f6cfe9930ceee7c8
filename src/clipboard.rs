//! System clipboard access.
//!
//! Shells out to the platform's clipboard utility and pipes the text on stdin:
//! - macOS: pbcopy
//! - Windows: clip
//! - Linux: clip.exe under WSL, wl-copy under Wayland, xclip otherwise
//!
//! A command configured by the user replaces detection entirely.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::platform::{self, LinuxSession, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        ClipboardCommand {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build from a user-supplied argv; the first element is the program.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(ClipboardCommand {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

/// Pick the clipboard command for the current machine.
pub fn detect(override_argv: Option<&[String]>) -> Result<ClipboardCommand> {
    let platform = platform::detect();
    let session = match platform {
        Platform::Linux => Some(platform::linux_session()),
        _ => None,
    };
    let wl_copy = session == Some(LinuxSession::Wayland) && platform::command_available("wl-copy");

    resolve(platform, session, wl_copy, override_argv)
}

pub fn resolve(
    platform: Platform,
    session: Option<LinuxSession>,
    wl_copy_available: bool,
    override_argv: Option<&[String]>,
) -> Result<ClipboardCommand> {
    if let Some(cmd) = override_argv.and_then(ClipboardCommand::from_argv) {
        return Ok(cmd);
    }

    match platform {
        Platform::MacOS => Ok(ClipboardCommand::new("pbcopy", &[])),
        Platform::Windows => Ok(ClipboardCommand::new("clip", &[])),
        Platform::Linux => match session {
            Some(LinuxSession::Wsl) => Ok(ClipboardCommand::new("clip.exe", &[])),
            Some(LinuxSession::Wayland) if wl_copy_available => {
                Ok(ClipboardCommand::new("wl-copy", &[]))
            }
            _ => Ok(ClipboardCommand::new("xclip", &["-selection", "clipboard"])),
        },
        Platform::Unknown => Err(Error::UnsupportedPlatform(platform.as_str().to_string())),
    }
}

pub fn copy_to_clipboard(command: &ClipboardCommand, text: &str) -> Result<()> {
    log::debug!("copying {} bytes via {}", text.len(), command.program);

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::ExecutionFailure(format!("failed to run {}: {e}", command.program)))?;

    // stdin must be closed before waiting or the child never sees EOF
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            Error::ExecutionFailure(format!("failed to write to {}: {e}", command.program))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| Error::ExecutionFailure(format!("{} did not finish: {e}", command.program)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::ExecutionFailure(format!(
            "{} exited with {}: {}",
            command.program,
            output.status,
            stderr.trim()
        )))
    }
}
