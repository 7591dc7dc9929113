use std::io::Write;

use crate::error::ShellError;
use crate::process::{JobTable, ProcessControl};

/// Collects exited background jobs, printing `[id] Done name` for each.
pub fn report_finished<P: ProcessControl, W: Write>(
    table: &mut JobTable,
    control: &P,
    out: &mut W,
) -> Result<(), ShellError> {
    for job in table.reap(control) {
        writeln!(out, "[{}] Done\t{}", job.id, job.name)?;
    }
    Ok(())
}

/// Prints `[id] pid name` for each running job.
pub fn list_jobs<W: Write>(table: &JobTable, out: &mut W) -> Result<(), ShellError> {
    for job in table.list() {
        writeln!(out, "[{}] {}\t{}", job.id, job.pid, job.name)?;
    }
    Ok(())
}
