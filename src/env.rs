/// Directory searched for programs when the session starts.
pub const DEFAULT_SEARCH_PATH: &str = "/bin";

/// Mutable state of a shell session that survives from one line to the next.
///
/// The working directory is not stored here: `cd` changes the directory of the shell
/// process itself, so that every program started afterwards inherits it.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Directories consulted, in order, to resolve a program name.
    pub search_path: Vec<String>,
    /// Set by `exit`; the input loop stops once it is true.
    pub should_exit: bool,
}

impl Environment {
    pub fn new() -> Self {
        Self::with_search_path(vec![DEFAULT_SEARCH_PATH.to_string()])
    }

    pub fn with_search_path(search_path: Vec<String>) -> Self {
        Self {
            search_path,
            should_exit: false,
        }
    }

    /// Replaces the search path wholesale.
    pub fn set_search_path(&mut self, dirs: Vec<String>) {
        self.search_path = dirs;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
