use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Unknown => std::env::consts::OS,
        }
    }
}

/// Desktop session flavour on Linux, which decides the clipboard tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinuxSession {
    Wsl,
    Wayland,
    X11,
}

pub fn detect() -> Platform {
    match std::env::consts::OS {
        "macos" => Platform::MacOS,
        "linux" => Platform::Linux,
        "windows" => Platform::Windows,
        _ => Platform::Unknown,
    }
}

pub fn linux_session() -> LinuxSession {
    if is_wsl() {
        LinuxSession::Wsl
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        LinuxSession::Wayland
    } else {
        LinuxSession::X11
    }
}

/// Returns true when running inside a WSL2 environment.
/// WSL_INTEROP is set exclusively by WSL2 (not WSL1) and points to the
/// interop socket.
pub fn is_wsl() -> bool {
    std::env::var_os("WSL_INTEROP").is_some()
}

/// True if `program --version` can be spawned and exits successfully.
pub fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
