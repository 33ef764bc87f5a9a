use crate::command::Command;
use crate::env::Environment;
use crate::error::ShellError;
use crate::redirect;
use nix::unistd::{AccessFlags, access};
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Child;

/// Command that is not a builtin, with its program already located.
#[derive(Debug)]
pub struct ExternalCommand {
    program: PathBuf,
    name: String,
    args: Vec<String>,
    redirect: Option<String>,
}

impl ExternalCommand {
    /// Locates the program of `command` in the session's search path.
    ///
    /// Returns `None` for a command without tokens.
    pub fn resolve(command: Command, env: &Environment) -> Option<Result<Self, ShellError>> {
        let Command { mut argv, redirect } = command;
        if argv.is_empty() {
            return None;
        }
        let args = argv.split_off(1);
        let name = argv.remove(0);
        Some(match find_command_path(&env.search_path, &name) {
            Some(program) => Ok(Self {
                program,
                name,
                args,
                redirect,
            }),
            None => Err(ShellError::NotFound(name)),
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Starts the program without waiting for it.
    ///
    /// The redirection target, if any, is opened and truncated first, so a failure
    /// there prevents the program from starting at all. The child sees the name as
    /// typed in `argv[0]`, not the resolved path.
    pub fn spawn(self) -> Result<Child, ShellError> {
        let mut cmd = std::process::Command::new(&self.program);
        cmd.arg0(&self.name).args(&self.args);
        if let Some(target) = &self.redirect {
            redirect::apply(&mut cmd, target)?;
        }
        let child = cmd.spawn().map_err(|source| ShellError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;
        tracing::debug!(
            pid = child.id(),
            program = %self.program().display(),
            redirect = ?self.redirect,
            "spawned"
        );
        Ok(child)
    }
}

/// Finds the first directory in `search_path` holding an executable called `name`.
///
/// The candidate for each directory is literally `dir + "/" + name`, so names that
/// contain slashes are looked up below the search directories too. Order decides:
/// the first hit wins.
pub fn find_command_path(search_path: &[String], name: &str) -> Option<PathBuf> {
    search_path
        .iter()
        .map(|dir| PathBuf::from(format!("{dir}/{name}")))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    access(path, AccessFlags::X_OK).is_ok()
}
