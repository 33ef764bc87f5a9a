use crate::env::Environment;
use crate::error::ShellError;
use std::env;

/// Built-in commands known to the shell at compile time.
///
/// Builtins run directly in the shell process without spawning a child, so their
/// effects are visible to every command that follows them, including later commands
/// of the same line.
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the command, e.g. "cd".
    fn name() -> &'static str;

    /// Validates the arguments (everything after the name).
    ///
    /// A usage error here aborts the rest of the line.
    fn from_args(args: &[String]) -> Result<Self, ShellError>;

    /// Runs the command. A failure here only affects this command.
    fn execute(self, env: &mut Environment) -> Result<(), ShellError>;
}

fn try_create<T: BuiltinCommand>(name: &str, args: &[String]) -> Option<Result<T, ShellError>> {
    (name == T::name()).then(|| T::from_args(args))
}

/// Replace the search path with the given directories, in order.
#[derive(Debug, PartialEq, Eq)]
pub struct SetPath {
    pub dirs: Vec<String>,
}

impl BuiltinCommand for SetPath {
    fn name() -> &'static str {
        "path"
    }

    fn from_args(args: &[String]) -> Result<Self, ShellError> {
        Ok(Self {
            dirs: args.to_vec(),
        })
    }

    fn execute(self, env: &mut Environment) -> Result<(), ShellError> {
        tracing::debug!(dirs = ?self.dirs, "search path replaced");
        env.set_search_path(self.dirs);
        Ok(())
    }
}

/// Change the working directory of the shell.
#[derive(Debug, PartialEq, Eq)]
pub struct Cd {
    pub target: String,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn from_args(args: &[String]) -> Result<Self, ShellError> {
        match args {
            [target] => Ok(Self {
                target: target.clone(),
            }),
            _ => Err(ShellError::CdUsage(args.len())),
        }
    }

    fn execute(self, _env: &mut Environment) -> Result<(), ShellError> {
        env::set_current_dir(&self.target).map_err(|source| ShellError::ChangeDir {
            target: self.target.clone(),
            source,
        })?;
        tracing::debug!(dir = %self.target, "working directory changed");
        Ok(())
    }
}

/// A recognized built-in invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Builtin {
    SetPath(SetPath),
    Cd(Cd),
}

impl Builtin {
    /// Recognizes a built-in by exact, case-sensitive name.
    ///
    /// Returns `None` if `name` is not a built-in, otherwise the validated command or
    /// its usage error.
    pub fn try_create(name: &str, args: &[String]) -> Option<Result<Self, ShellError>> {
        try_create::<SetPath>(name, args)
            .map(|r| r.map(Builtin::SetPath))
            .or_else(|| try_create::<Cd>(name, args).map(|r| r.map(Builtin::Cd)))
    }

    pub fn execute(self, env: &mut Environment) -> Result<(), ShellError> {
        match self {
            Builtin::SetPath(cmd) => cmd.execute(env),
            Builtin::Cd(cmd) => cmd.execute(env),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;

    pub(crate) fn lock_current_dir() -> MutexGuard<'static, ()> {
        static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_name_is_not_builtin() {
        assert!(Builtin::try_create("ls", &[]).is_none());
        assert!(Builtin::try_create("PATH", &[]).is_none());
        assert!(Builtin::try_create("CD", &strings(&["/"])).is_none());
        assert!(Builtin::try_create("exit", &[]).is_none());
    }

    #[test]
    fn test_path_accepts_any_number_of_dirs() {
        let none = Builtin::try_create("path", &[]).unwrap().unwrap();
        assert_eq!(none, Builtin::SetPath(SetPath { dirs: Vec::new() }));

        let many = Builtin::try_create("path", &strings(&["/a", "/b", "/c"]))
            .unwrap()
            .unwrap();
        assert_eq!(
            many,
            Builtin::SetPath(SetPath {
                dirs: strings(&["/a", "/b", "/c"])
            })
        );
    }

    #[test]
    fn test_path_replaces_search_path() {
        let mut env = Environment::new();
        SetPath {
            dirs: strings(&["/usr/bin", "/bin"]),
        }
        .execute(&mut env)
        .unwrap();
        assert_eq!(env.search_path, strings(&["/usr/bin", "/bin"]));

        SetPath { dirs: Vec::new() }.execute(&mut env).unwrap();
        assert!(env.search_path.is_empty());
    }

    #[test]
    fn test_cd_requires_exactly_one_argument() {
        assert!(matches!(
            Builtin::try_create("cd", &[]),
            Some(Err(ShellError::CdUsage(0)))
        ));
        assert!(matches!(
            Builtin::try_create("cd", &strings(&["a", "b"])),
            Some(Err(ShellError::CdUsage(2)))
        ));
        assert!(matches!(
            Builtin::try_create("cd", &strings(&["a"])),
            Some(Ok(Builtin::Cd(_)))
        ));
    }

    #[test]
    fn test_cd_to_absolute_path() {
        let _lock = lock_current_dir();
        let temp = TempDir::new().expect("failed to create temp dir");
        let canonical_temp = fs::canonicalize(temp.path()).expect("canonicalize failed");
        let orig = env::current_dir().unwrap();

        let mut shell_env = Environment::new();
        let cmd = Cd {
            target: canonical_temp.to_string_lossy().to_string(),
        };
        let res = cmd.execute(&mut shell_env);

        let new_cwd = fs::canonicalize(env::current_dir().unwrap()).unwrap();
        env::set_current_dir(orig).expect("failed to restore cwd");

        assert!(res.is_ok());
        assert_eq!(new_cwd, canonical_temp);
    }

    #[test]
    fn test_cd_nonexistent_path_errors() {
        let _lock = lock_current_dir();
        let orig = env::current_dir().unwrap();

        let mut shell_env = Environment::new();
        let name = format!("nonexistent_dir_for_wish_test_{}", std::process::id());
        let res = Cd { target: name }.execute(&mut shell_env);

        assert!(matches!(res, Err(ShellError::ChangeDir { .. })));
        assert_eq!(env::current_dir().unwrap(), orig);
    }
}
