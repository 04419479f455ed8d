mod common;

use achievement_tracker::config::enums::configuration_error::ConfigurationError;
use achievement_tracker::config::structs::configuration::Configuration;
use achievement_tracker::database::enums::database_drivers::DatabaseDrivers;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default_is_valid() {
    let config = Configuration::init();
    assert!(config.validate().is_ok());
    assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
    assert_eq!(config.engine.connection_check_delay, 5000);
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut content = toml::to_string(&Configuration::init()).unwrap();
    content.push_str(r#"
[achievements.multiple.Kills."zombie|husk".25]
name = "Undertaker"
message = "You killed 25 zombies."

[achievements.multiple.Kills."zombie|husk".25.reward]
experience = 100
commands = ["give PLAYER diamond 1"]
"#);
    fs::write(&config_path, content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    let kills = &config.achievements.multiple["Kills"]["zombie|husk"]["25"];
    assert_eq!(kills.name, "Undertaker");
    let reward = kills.reward.as_ref().unwrap();
    assert_eq!(reward.experience, Some(100));
    assert_eq!(reward.commands, vec![String::from("give PLAYER diamond 1")]);
}

#[test]
fn test_config_missing_file_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, false).is_err());
    assert!(!config_path.exists());

    assert!(Configuration::load_from_file(path, true).is_err(), "Creating the file still stops the boot");
    assert!(config_path.exists());
    assert!(Configuration::load_from_file(path, false).is_ok());
}

#[test]
fn test_config_rejects_unknown_category() {
    let mut config = Configuration::init();
    config.achievements.normal.insert(String::from("Jumps"), BTreeMap::from([
        (String::from("1"), common::achievement("Jumper")),
    ]));
    assert!(matches!(config.validate(), Err(ConfigurationError::UnknownCategory(_))));
}

#[test]
fn test_config_rejects_bad_threshold() {
    let mut config = Configuration::init();
    config.achievements.normal.get_mut("Connections").unwrap()
        .insert(String::from("0"), common::achievement("Nobody"));
    assert!(matches!(config.validate(), Err(ConfigurationError::InvalidThreshold { .. })));
}

#[test]
fn test_config_rejects_duplicate_award() {
    let mut config = Configuration::init();
    config.achievements.normal.get_mut("Connections").unwrap()
        .insert(String::from("20"), common::achievement("Mason"));
    assert!(matches!(config.validate(), Err(ConfigurationError::DuplicateAward(_))));
}

#[test]
fn test_config_rejects_bad_table_name() {
    let mut config = Configuration::init();
    config.database_structure.statistics.table_name = String::from("stats; DROP TABLE x");
    assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_, _))));
}
