//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_resdir_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("resdir") && path_str.ends_with("config.toml"),
        "Path should contain 'resdir' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "resdir_test_config.toml",
        r#"
screen = "extended"
show_help = true
log_file_path = "/tmp/resdir-test/app.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.screen, Some(ScreenKind::Extended));
    assert_eq!(config.show_help, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/resdir-test/app.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp_config(
        "resdir_test_partial.toml",
        r#"
screen = "directory"
# Other fields omitted
"#,
    );

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.screen, Some(ScreenKind::Directory));
    assert_eq!(config.show_help, None);
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("resdir_test_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_screen() {
    let config_path = write_temp_config("resdir_test_bad_screen.toml", "screen = \"lobby\"\n");

    let result = load_config_file(&config_path);
    match &result {
        Err(ConfigError::ParseError { reason, .. }) => assert!(
            reason.contains("Unknown screen 'lobby'"),
            "Reason should come from the screen name parser: {}",
            reason
        ),
        other => panic!("Unknown screen name should be a parse error, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_screen_accepts_same_spellings_as_cli() {
    for (idx, value) in ["Extended", "EXTENDED", " extended "].iter().enumerate() {
        let config_path = write_temp_config(
            &format!("resdir_test_screen_spelling_{}.toml", idx),
            &format!("screen = {:?}\n", value),
        );

        let config = load_config_file(&config_path).unwrap().unwrap();
        assert_eq!(
            config.screen,
            Some(ScreenKind::Extended),
            "{:?} should parse like --screen does",
            value
        );

        fs::remove_file(config_path).ok();
    }
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = write_temp_config("resdir_test_unknown_field.toml", "theme = \"dark\"\n");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(resdir_env)]
fn explicit_path_takes_precedence_over_env_var() {
    let explicit = write_temp_config("resdir_test_explicit.toml", "screen = \"extended\"\n");
    let from_env = write_temp_config("resdir_test_env.toml", "screen = \"directory\"\n");

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.screen, Some(ScreenKind::Extended));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(resdir_env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = write_temp_config("resdir_test_env_only.toml", "show_help = true\n");

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV_VAR);

    let config = config.unwrap().unwrap();
    assert_eq!(config.show_help, Some(true));

    fs::remove_file(from_env).ok();
}

#[test]
fn merge_config_without_file_uses_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_file_values_override_defaults() {
    let config_file = ConfigFile {
        screen: Some(ScreenKind::Extended),
        log_file_path: None,
        show_help: Some(true),
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.screen, ScreenKind::Extended);
    assert!(resolved.show_help);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
#[serial(resdir_env)]
fn env_override_changes_screen() {
    env::set_var(SCREEN_ENV_VAR, "extended");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(SCREEN_ENV_VAR);

    assert_eq!(result.map(|c| c.screen), Ok(ScreenKind::Extended));
}

#[test]
#[serial(resdir_env)]
fn env_override_rejects_unknown_screen() {
    env::set_var(SCREEN_ENV_VAR, "lobby");
    let result = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(SCREEN_ENV_VAR);

    match result {
        Err(ConfigError::InvalidEnv { var, reason }) => {
            assert_eq!(var, SCREEN_ENV_VAR);
            assert!(reason.contains("lobby"), "Reason should name the value: {}", reason);
        }
        other => panic!("Expected InvalidEnv, got {:?}", other),
    }
}

#[test]
#[serial(resdir_env)]
fn env_override_absent_keeps_config() {
    env::remove_var(SCREEN_ENV_VAR);
    let base = ResolvedConfig {
        screen: ScreenKind::Extended,
        ..ResolvedConfig::default()
    };
    assert_eq!(apply_env_overrides(base.clone()), Ok(base));
}

#[test]
fn cli_overrides_win_when_set() {
    let base = ResolvedConfig::default();
    let resolved = apply_cli_overrides(base, Some(ScreenKind::Extended), Some(true));
    assert_eq!(resolved.screen, ScreenKind::Extended);
    assert!(resolved.show_help);
}

#[test]
fn cli_overrides_absent_keep_config() {
    let base = ResolvedConfig {
        screen: ScreenKind::Extended,
        show_help: true,
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(base.clone(), None, None);
    assert_eq!(resolved, base);
}

#[test]
fn default_log_path_ends_with_resdir_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("resdir.log"),
        "Default log path should end with 'resdir.log', got: {:?}",
        path
    );
}
