use std::path::PathBuf;

use termpad::config::{
    ConfigFlags, clear_config_flags, load_config_flags, parse_flag_tokens, save_config_flags,
};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".termpadrc");
    let content = r"
# comment
--no-welcome

--data-dir notes
   
--render-debug-log=render.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_welcome);
    assert_eq!(flags.data_dir, Some(PathBuf::from("notes")));
    assert_eq!(flags.render_debug_log, Some(PathBuf::from("render.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".termpadrc");
    let content = "--no-welcome\n--data-dir file-notes\n--render-debug-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "termpad".to_string(),
        "--data-dir".to_string(),
        "cli-notes".to_string(),
        "--perf".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_welcome, "file flags should remain enabled");
    assert!(effective.perf, "cli flags should be applied");
    assert_eq!(
        effective.data_dir,
        Some(PathBuf::from("cli-notes")),
        "cli should override data dir"
    );
    assert_eq!(
        effective.render_debug_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "termpad".to_string(),
        "--data-dir=notes".to_string(),
        "--log-file=pad.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.data_dir, Some(PathBuf::from("notes")));
    assert_eq!(flags.log_file, Some(PathBuf::from("pad.log")));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        no_welcome: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        perf: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.no_welcome);
    assert!(merged.perf);
}

#[test]
fn test_saved_defaults_survive_reload_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("termpad").join("config");
    let flags = ConfigFlags {
        data_dir: Some(PathBuf::from("/srv/notes")),
        no_welcome: true,
        ..ConfigFlags::default()
    };

    save_config_flags(&path, &flags).unwrap();
    assert_eq!(load_config_flags(&path).unwrap(), flags);

    clear_config_flags(&path).unwrap();
    assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
}
