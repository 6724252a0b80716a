//! Integration tests for the taskboard-config crate.

use std::fs;
use std::path::PathBuf;

use taskboard_config::{BoardConfig, Config, ConfigError, ExportConfig, ReminderConfig};
use taskboard_protocol::Priority;
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for taskboard
            board: {
                default_priority: "high",
                date_format: "%Y-%m-%d",
            },
            reminders: {
                enabled: true,
                desktop_notifications: true,
            },
            export: {
                directory: "/srv/boards",
                file_name: "weekly.pdf",
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.board.default_priority, Priority::High);
    assert_eq!(config.board.date_format, "%Y-%m-%d");
    assert!(config.reminders.enabled);
    assert!(config.reminders.desktop_notifications);
    assert_eq!(
        config.export.default_path(),
        PathBuf::from("/srv/boards/weekly.pdf")
    );
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        board: BoardConfig {
            default_priority: Priority::Low,
            date_format: "%b %d".to_string(),
        },
        reminders: ReminderConfig {
            enabled: false,
            desktop_notifications: true,
        },
        export: ExportConfig {
            directory: Some(PathBuf::from("/tmp/exports")),
            file_name: "board.pdf".to_string(),
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn config_load_nonexistent_file_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.export.default_path(), PathBuf::from("kanban.pdf"));
}

#[test]
fn unknown_priority_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, r#"{ board: { default_priority: "urgent" } }"#).unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn date_format_with_time_fields_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, r#"{ board: { date_format: "%d.%m.%Y %H:%M" } }"#).unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDateFormat { .. }));
}

#[test]
fn config_validation() {
    assert!(Config::default().validate().is_ok());

    let bad_format = Config {
        board: BoardConfig {
            date_format: "   ".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        bad_format.validate(),
        Err(ConfigError::InvalidDateFormat { .. })
    ));

    let nested_name = Config {
        export: ExportConfig {
            file_name: "sub/board.pdf".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        nested_name.validate(),
        Err(ConfigError::InvalidExportFileName { .. })
    ));
}

#[test]
fn serialized_config_is_plain_json() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["board"]["date_format"], "%d.%m.%Y");
    assert_eq!(value["reminders"]["enabled"], true);
    assert_eq!(value["export"]["file_name"], "kanban.pdf");
}
