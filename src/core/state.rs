use std::env;

use crate::config::{ShellConfig, PROMPT};
use crate::path::SearchPath;
use crate::process::JobTable;

/// Everything the read-eval loop owns for the life of the session.
pub struct ShellState {
    config: ShellConfig,
    search_path: SearchPath,
    jobs: JobTable,
    running: bool,
}

impl ShellState {
    pub fn new(config: ShellConfig) -> Self {
        let search_path = SearchPath::from_raw(config.path.as_deref(), config.max_paths);
        let jobs = JobTable::with_capacity(config.job_capacity);

        Self {
            config,
            search_path,
            jobs,
            running: true,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn jobs(&self) -> &JobTable {
        &self.jobs
    }

    pub fn jobs_mut(&mut self) -> &mut JobTable {
        &mut self.jobs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// `<cwd>> `, with the directory read fresh from the OS each time.
    pub fn prompt(&self) -> String {
        let cwd = env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "?".to_string());
        format!("{}{}", cwd, PROMPT)
    }
}
