//! Opt-in timing scopes and a render debug log.
//!
//! `--perf` prints scope timings to stderr when the terminal is restored;
//! `--render-debug-log` appends frame and event records to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static TIMINGS: LazyLock<Mutex<Vec<(&'static str, f64)>>> = LazyLock::new(|| Mutex::new(Vec::new()));
static DEBUG_LOG: LazyLock<Mutex<DebugLog>> = LazyLock::new(|| Mutex::new(DebugLog::default()));

/// Records its lifetime when dropped, if timing is enabled.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(scope = self.name, elapsed_ms, "perf scope");
        lock(&TIMINGS).push((self.name, elapsed_ms));
    }
}

#[derive(Debug)]
struct DebugLog {
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            writer: None,
        }
    }
}

// A poisoned lock only means a panic mid-write; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Drain the recorded scope timings, oldest first.
pub fn take_timings() -> Vec<(&'static str, f64)> {
    std::mem::take(&mut *lock(&TIMINGS))
}

/// Start (or with `None`, stop) writing the debug log.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = lock(&DEBUG_LOG);
    log.writer = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "termpad debug log start")?;
        writer.flush()?;
        log.start = Instant::now();
        log.writer = Some(writer);
    }
    Ok(())
}

/// Append `name: detail` to the debug log, if one is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut log = lock(&DEBUG_LOG);
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    let Some(writer) = log.writer.as_mut() else {
        return;
    };
    let _ = writeln!(writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
    let _ = writer.flush();
}
