use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn buffer() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Enable or disable `log_info!` output (the `--verbose` flag).
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Start holding log lines in memory. Used while the TUI owns the terminal.
pub fn activate() {
    *buffer() = Some(Vec::new());
}

/// Stop buffering and return everything collected since `activate`.
pub fn drain() -> Vec<String> {
    buffer().take().unwrap_or_default()
}

/// Emit one line to stderr, or into the buffer while it is active.
pub fn write_line(line: String) {
    let mut guard = buffer();
    if let Some(buf) = guard.as_mut() {
        buf.push(line);
    } else {
        drop(guard);
        eprintln!("{}", line);
    }
}

/// Diagnostic line, shown only with `--verbose`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if $crate::stderr_log::is_verbose() {
            $crate::stderr_log::write_line(format!($($arg)*))
        }
    };
}

/// Warning line, always shown.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::stderr_log::write_line(format!("Warning: {}", format_args!($($arg)*)))
    };
}
