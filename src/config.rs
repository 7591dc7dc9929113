use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Maximum number of `PATH` directories kept.
pub const MAX_PATHS: usize = 64;
/// Maximum number of argv slots per command line.
pub const MAX_ARGS: usize = 64;
/// Number of background job slots.
pub const MAX_JOBS: usize = 10;
pub const PROMPT: &str = "> ";
pub const PATH_DELIM: char = ':';
/// `cd` target when no home directory can be found.
pub const DEFAULT_HOME: &str = "/home";
/// Filter directive for diagnostics, e.g. `BSHELL_LOG=debug`.
pub const LOG_ENV: &str = "BSHELL_LOG";

/// Settings for one interactive session, read once from the environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub path: Option<String>,
    pub home_dir: PathBuf,
    pub max_paths: usize,
    pub max_args: usize,
    pub job_capacity: usize,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            path: None,
            home_dir: PathBuf::from(DEFAULT_HOME),
            max_paths: MAX_PATHS,
            max_args: MAX_ARGS,
            job_capacity: MAX_JOBS,
            color: false,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from(DEFAULT_HOME));
        let color = env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();

        Self {
            path: env::var("PATH").ok(),
            home_dir,
            color,
            ..Self::default()
        }
    }

    pub fn with_path(mut self, raw: impl Into<String>) -> Self {
        self.path = Some(raw.into());
        self
    }

    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = home.into();
        self
    }

    pub fn with_job_capacity(mut self, capacity: usize) -> Self {
        self.job_capacity = capacity;
        self
    }
}
