//! termpad - a minimalist notepad in the style of a computer terminal.
//!
//! # Usage
//!
//! ```bash
//! termpad
//! termpad --data-dir ~/notes
//! termpad --no-welcome --save
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termpad::app::App;
use termpad::config::{
    ConfigFlags, clear_config_flags, default_data_dir, default_log_path, global_config_path,
    load_config_flags, local_override_path, parse_flag_tokens, save_config_flags,
};
use termpad::perf;

/// A minimalist notepad styled as a computer terminal
#[derive(Parser, Debug)]
#[command(name = "termpad", version, about, long_about = None)]
struct Cli {
    /// Directory holding the notes file
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Start without the welcome note when no notes are saved
    #[arg(long)]
    no_welcome: bool,

    /// Write diagnostics to this file instead of <data-dir>/termpad.log
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print timing scopes to stderr on exit
    #[arg(long)]
    perf: bool,

    /// Write detailed event and frame records to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Send tracing output to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .with_env_var("TERMPAD_LOG")
                .from_env_lossy(),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_timings() {
    let timings = perf::take_timings();
    if timings.is_empty() {
        return;
    }
    eprintln!("[perf] scope timings:");
    for (name, elapsed_ms) in timings {
        eprintln!("[perf] {name:<28} {elapsed_ms:>10.3} ms");
    }
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let data_dir = effective.data_dir.clone().unwrap_or_else(default_data_dir);
    let log_path = effective
        .log_file
        .clone()
        .unwrap_or_else(|| default_log_path(&data_dir));
    if let Err(err) = init_logging(&log_path) {
        eprintln!("[warn] Logging disabled: {err:#}");
    }
    tracing::info!(data_dir = %data_dir.display(), "starting termpad");

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("TERMPAD_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize render debug log {}: {}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    // Run the application
    let mut app = App::new(data_dir)
        .with_welcome(!effective.no_welcome)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    let result = app.run().context("Application error");
    if effective.perf {
        print_timings();
    }
    result
}
