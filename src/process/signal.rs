use std::io;

use libc::{sighandler_t, signal, SIGINT, SIG_DFL, SIG_ERR, SIG_IGN};
use tracing::debug;

/// Keeps SIGINT from terminating the shell itself.
///
/// A handler (rather than `SIG_IGN`) is installed so the disposition is not
/// inherited across exec by children.
pub fn ignore_interrupts() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| debug!("interrupt delivered to shell"))
}

/// Sets the SIGINT disposition a child runs with. Called between fork and exec,
/// so it must stay async-signal-safe.
///
/// Foreground children get the default action; background children ignore
/// interrupts typed at the terminal, as a shell without job control does.
pub fn set_child_interrupts(background: bool) -> io::Result<()> {
    let handler: sighandler_t = if background { SIG_IGN } else { SIG_DFL };
    if unsafe { signal(SIGINT, handler) } == SIG_ERR {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
