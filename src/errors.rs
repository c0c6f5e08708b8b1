//! Error mapping guide:
//! - Map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - Unknown module/surface ids given on the command line exit with 2, like clap usage errors.
//! - URL resolution itself never fails; only the CLI and server surfaces produce errors.
use std::io;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    /// Command-line input named something the registry does not know.
    Usage(String),
}

impl From<std::io::Error> for ShellError {
    fn from(e: std::io::Error) -> Self {
        ShellError::Io(e)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&display_for_shell_error(self))
    }
}

impl std::error::Error for ShellError {}

pub fn exit_code_for_shell_error(e: &ShellError) -> u8 {
    match e {
        ShellError::Io(ioe) => exit_code_for_io_error(ioe),
        ShellError::Usage(_) => 2,
    }
}

/// Render a user-facing string for ShellError.
pub fn display_for_shell_error(e: &ShellError) -> String {
    match e {
        ShellError::Io(ioe) => ioe.to_string(),
        ShellError::Usage(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let nf = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(exit_code_for_io_error(&nf), 127);
        let in_use = ShellError::from(io::Error::new(io::ErrorKind::AddrInUse, "taken"));
        assert_eq!(exit_code_for_shell_error(&in_use), 1);
        let usage = ShellError::Usage("unknown module 'x'".to_string());
        assert_eq!(exit_code_for_shell_error(&usage), 2);
        assert_eq!(usage.to_string(), "unknown module 'x'");
    }
}
