//! Saved defaults for command-line flags.
//!
//! Defaults live in a global config file and an optional `.termpadrc` in
//! the working directory. Both hold flags exactly as typed on the command
//! line, one or more per line, with `#` comments. Flags given on the
//! command line win.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "termpad";
const LOCAL_RC: &str = ".termpadrc";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub data_dir: Option<PathBuf>,
    pub no_welcome: bool,
    pub perf: bool,
    pub log_file: Option<PathBuf>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches combine, paths from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            data_dir: other.data_dir.clone().or_else(|| self.data_dir.clone()),
            no_welcome: self.no_welcome || other.no_welcome,
            perf: self.perf || other.perf,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

fn config_home() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
    }
}

fn data_home() -> Option<PathBuf> {
    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        config_home()
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from).or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
    }
}

pub fn global_config_path() -> PathBuf {
    config_home().map_or_else(
        || PathBuf::from(LOCAL_RC),
        |dir| dir.join(APP_DIR).join("config"),
    )
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_RC)
}

/// Where notes are stored unless `--data-dir` says otherwise.
pub fn default_data_dir() -> PathBuf {
    data_home().map_or_else(|| PathBuf::from(".termpad"), |dir| dir.join(APP_DIR))
}

/// Log file used when `--log-file` is not given.
pub fn default_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("termpad.log")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# termpad defaults (saved with --save)".to_string()];
    if let Some(dir) = &flags.data_dir {
        lines.push(format!("--data-dir {}", dir.display()));
    }
    if flags.no_welcome {
        lines.push("--no-welcome".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick recognised flags out of raw argument tokens, ignoring the rest.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        match name {
            "--no-welcome" => flags.no_welcome = true,
            "--perf" => flags.perf = true,
            "--data-dir" | "--log-file" | "--render-debug-log" => {
                let value = inline_value.map(ToOwned::to_owned).or_else(|| {
                    let next = tokens.get(i + 1).cloned();
                    if next.is_some() {
                        i += 1;
                    }
                    next
                });
                if let Some(value) = value {
                    let path = Some(PathBuf::from(value));
                    match name {
                        "--data-dir" => flags.data_dir = path,
                        "--log-file" => flags.log_file = path,
                        _ => flags.render_debug_log = path,
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }
    flags
}
