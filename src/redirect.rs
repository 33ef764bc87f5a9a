use crate::error::ShellError;
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::process::{Command, Stdio};

/// Permission bits for files created by a redirection.
const REDIRECT_MODE: u32 = 0o644;

/// Opens the redirection target, creating it if needed and truncating it to zero length.
pub fn open_target(target: &str) -> Result<File, ShellError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .mode(REDIRECT_MODE)
        .open(target)
        .map_err(|source| ShellError::Redirect {
            target: target.to_string(),
            source,
        })
}

/// Sends both standard output and standard error of `cmd` to `target`.
///
/// Only the child's streams are replaced; the shell keeps its own.
pub fn apply(cmd: &mut Command, target: &str) -> Result<(), ShellError> {
    let stdout = open_target(target)?;
    let stderr = stdout.try_clone().map_err(|source| ShellError::Redirect {
        target: target.to_string(),
        source,
    })?;
    cmd.stdout(Stdio::from(stdout)).stderr(Stdio::from(stderr));
    Ok(())
}
