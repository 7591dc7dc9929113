use std::fmt;
use std::io;

use tracing::{debug, warn};

pub type Pid = libc::pid_t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Running,
    /// Signalled by `kill`. The slot can be reused; the pid is still collected.
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: usize,
    pub pid: Pid,
    pub name: String,
    pub state: JobState,
}

#[derive(Debug)]
pub enum JobError {
    CapacityExceeded(usize),
    NotFound(Pid),
    Signal { pid: Pid, source: io::Error },
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::CapacityExceeded(cap) => {
                write!(f, "too many background jobs (max {}); job not tracked", cap)
            }
            JobError::NotFound(pid) => write!(f, "kill: no background job with pid {}", pid),
            JobError::Signal { pid, source } => write!(f, "kill: {}: {}", pid, source),
        }
    }
}

impl std::error::Error for JobError {}

/// OS operations the job table needs.
pub trait ProcessControl {
    fn terminate(&self, pid: Pid) -> io::Result<()>;

    /// Collects `pid` without blocking. `Ok(true)` once it has exited.
    fn reap(&self, pid: Pid) -> io::Result<bool>;
}

/// [`ProcessControl`] backed by `kill(2)` and `waitpid(2)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProcesses;

impl ProcessControl for SystemProcesses {
    fn terminate(&self, pid: Pid) -> io::Result<()> {
        if unsafe { libc::kill(pid, libc::SIGTERM) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn reap(&self, pid: Pid) -> io::Result<bool> {
        let mut status = 0;
        match unsafe { libc::waitpid(pid, &mut status, libc::WNOHANG) } {
            0 => Ok(false),
            -1 => {
                let err = io::Error::last_os_error();
                // Already collected elsewhere, or never our child: nothing to wait for.
                if err.raw_os_error() == Some(libc::ECHILD) {
                    Ok(true)
                } else {
                    Err(err)
                }
            }
            _ => Ok(true),
        }
    }
}

/// Fixed-capacity registry of background jobs.
///
/// Every slot starts empty. A slot is reusable when empty or when its job
/// has been terminated; ids keep counting up and are never reused.
///
/// Children that lose their slot before exiting (a terminated job whose slot
/// was reused, or a job refused for lack of room) stay in `detached` until
/// [`JobTable::reap`] collects them, so none is left a zombie.
#[derive(Debug)]
pub struct JobTable {
    slots: Vec<Option<Job>>,
    detached: Vec<Pid>,
    next_id: usize,
}

impl JobTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            detached: Vec::new(),
            next_id: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of running jobs.
    pub fn len(&self) -> usize {
        self.list().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of children waiting to be collected without a slot.
    pub fn detached(&self) -> usize {
        self.detached.len()
    }

    /// Registers a background child. When the table is full the child is
    /// still remembered for collection, only not listed.
    pub fn add(&mut self, pid: Pid, name: &str) -> Result<usize, JobError> {
        debug_assert!(
            self.list().all(|job| job.pid != pid),
            "pid {} is already tracked",
            pid
        );

        let capacity = self.capacity();
        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| !matches!(slot, Some(job) if job.state == JobState::Running))
        else {
            self.detached.push(pid);
            return Err(JobError::CapacityExceeded(capacity));
        };

        if let Some(previous) = slot.take() {
            debug!(job = previous.id, pid = previous.pid, "slot reused before reaping");
            self.detached.push(previous.pid);
        }

        let id = self.next_id;
        self.next_id += 1;
        *slot = Some(Job {
            id,
            pid,
            name: name.to_string(),
            state: JobState::Running,
        });

        debug!(job = id, pid, name, "job registered");
        Ok(id)
    }

    /// Running jobs in slot order.
    pub fn list(&self) -> impl Iterator<Item = &Job> {
        self.slots
            .iter()
            .flatten()
            .filter(|job| job.state == JobState::Running)
    }

    /// Signals the first running job with `pid` and frees its slot.
    pub fn terminate<P: ProcessControl>(&mut self, pid: Pid, control: &P) -> Result<Job, JobError> {
        let job = self
            .slots
            .iter_mut()
            .flatten()
            .find(|job| job.pid == pid && job.state == JobState::Running)
            .ok_or(JobError::NotFound(pid))?;

        control
            .terminate(pid)
            .map_err(|source| JobError::Signal { pid, source })?;
        job.state = JobState::Terminated;

        debug!(job = job.id, pid, "job terminated");
        Ok(job.clone())
    }

    /// Polls every tracked process and clears the slots of those that exited.
    ///
    /// Returns the jobs that finished on their own; terminated jobs and
    /// detached children are collected silently.
    pub fn reap<P: ProcessControl>(&mut self, control: &P) -> Vec<Job> {
        let mut finished = Vec::new();

        for slot in self.slots.iter_mut() {
            let Some(pid) = slot.as_ref().map(|job| job.pid) else {
                continue;
            };

            match control.reap(pid) {
                Ok(true) => {
                    if let Some(job) = slot.take().filter(|job| job.state == JobState::Running) {
                        debug!(job = job.id, pid, "job finished");
                        finished.push(job);
                    }
                }
                Ok(false) => {}
                Err(e) => warn!(pid, error = %e, "could not poll background job"),
            }
        }

        self.detached.retain(|&pid| match control.reap(pid) {
            Ok(exited) => !exited,
            Err(e) => {
                warn!(pid, error = %e, "could not poll detached child");
                true
            }
        });

        finished
    }
}
