mod cd;
mod jobs;
mod kill;

pub use cd::change_directory;
pub use jobs::{list_jobs, report_finished};
pub use kill::{kill_job, parse_pid, PID_PROMPT};

/// Commands run inside the shell process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Exit,
    Jobs,
    Kill,
}

impl Builtin {
    pub const NAMES: [&'static str; 4] = ["cd", "exit", "jobs", "kill"];

    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            "jobs" => Some(Builtin::Jobs),
            "kill" => Some(Builtin::Kill),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Exit => "exit",
            Builtin::Jobs => "jobs",
            Builtin::Kill => "kill",
        }
    }
}
