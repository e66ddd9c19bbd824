use super::*;
use serial_test::serial;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.style.format, OutputFormat::Pretty);
    assert_eq!(config.style.color, ColorChoice::Auto);
    assert_eq!(config.date.granularity, 2);
    assert_eq!(config.date.unfriendly_format, "j F Y");
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[style]"));
    assert!(toml_str.contains("[date]"));
    assert!(toml_str.contains("granularity = 2"));
    assert!(toml_str.contains("month_format = \"full\""));
}

#[test]
fn test_config_deserialization() {
    let toml_str = r#"
[style]
format = "json"
color = "never"

[date]
granularity = 3
month_format = "abbreviated"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.style.format, OutputFormat::Json);
    assert_eq!(config.style.color, ColorChoice::Never);
    assert_eq!(config.date.granularity, 3);
    assert_eq!(config.date.month_format, MonthFormat::Abbreviated);
    assert_eq!(config.date.max_friendly_seconds, 604_800);
}

#[test]
fn test_config_load_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config::default();
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_nonexistent_file() {
    let config_path = PathBuf::from("/tmp/nonexistent_humane_config.toml");
    let result = Config::load(&config_path);
    assert!(result.is_err());
}

#[test]
fn test_config_save_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");

    Config::default().save(&config_path).unwrap();
    assert!(config_path.exists());
}

#[test]
#[serial]
fn test_get_config_path_uses_env_var() {
    unsafe {
        env::set_var("HUMANE_CONFIG", "/custom/path/config.toml");
    }
    let path = get_config_path();
    unsafe {
        env::remove_var("HUMANE_CONFIG");
    }
    assert_eq!(path, PathBuf::from("/custom/path/config.toml"));
}

#[test]
#[serial]
fn test_get_config_path_default() {
    unsafe {
        env::remove_var("HUMANE_CONFIG");
    }
    let path = get_config_path();
    assert!(path.ends_with("config.toml"));
}

#[test]
fn test_init_config_creates_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    init_config(&config_path).unwrap();
    assert!(config_path.exists());
    assert_eq!(Config::load(&config_path).unwrap(), Config::default());
}

#[test]
fn test_init_config_fails_if_exists() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    init_config(&config_path).unwrap();
    let result = init_config(&config_path);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("already exists"));
}

#[test]
fn test_get_config_value_nested() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    init_config(&config_path).unwrap();

    assert_eq!(get_config_value(&config_path, "style.format").unwrap(), "pretty");
    assert_eq!(get_config_value(&config_path, "date.granularity").unwrap(), "2");
    assert_eq!(get_config_value(&config_path, "date.month_format").unwrap(), "full");
}

#[test]
fn test_get_config_value_nonexistent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    init_config(&config_path).unwrap();

    let result = get_config_value(&config_path, "date.timezone");
    assert!(result.unwrap_err().contains("Unknown config key"));
}

#[test]
fn test_set_config_value_nested() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    init_config(&config_path).unwrap();

    set_config_value(&config_path, "date.granularity", "4").unwrap();
    set_config_value(&config_path, "date.unfriendly_format", "jS M Y").unwrap();
    set_config_value(&config_path, "style.color", "never").unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.date.granularity, 4);
    assert_eq!(config.date.unfriendly_format, "jS M Y");
    assert_eq!(config.style.color, ColorChoice::Never);
}

#[test]
fn test_set_config_value_rejects_bad_number() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let result = set_config_value(&config_path, "date.max_friendly_seconds", "a week");
    assert!(result.unwrap_err().contains("must be an integer"));
    assert!(!config_path.exists());
}

#[test]
fn test_set_config_value_creates_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    set_config_value(&config_path, "date.month_format", "abbreviated").unwrap();
    assert!(config_path.exists());
    assert_eq!(
        get_config_value(&config_path, "date.month_format").unwrap(),
        "abbreviated"
    );
}

#[test]
fn test_display_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    init_config(&config_path).unwrap();

    let config = display_config(&config_path).unwrap();
    let pretty = config.format_pretty();
    assert!(pretty.contains("[date]"));
    assert!(pretty.contains("granularity = 2"));
    assert!(pretty.contains("unfriendly_format = \"j F Y\""));
}
