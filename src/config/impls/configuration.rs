use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::achievement_config::AchievementConfig;
use crate::config::structs::achievements_config::AchievementsConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_achievements::DatabaseStructureConfigAchievements;
use crate::config::structs::database_structure_config_connections::DatabaseStructureConfigConnections;
use crate::config::structs::database_structure_config_statistics::DatabaseStructureConfigStatistics;
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::reward_config::RewardConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::thresholds::structs::threshold_table::ThresholdTable;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

const IDENTIFIER_PATTERN: &str = r"^[a-z_][a-z0-9_]{0,30}$";
const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

fn achievement(name: &str, message: &str, reward: Option<RewardConfig>) -> AchievementConfig {
    AchievementConfig {
        name: name.to_string(),
        display_name: name.to_string(),
        message: message.to_string(),
        goal: String::new(),
        reward,
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        let mut normal = BTreeMap::new();
        normal.insert(String::from("Connections"), BTreeMap::from([
            (String::from("1"), achievement("First Login", "Welcome to the server!", Some(RewardConfig {
                money: Some(10),
                ..Default::default()
            }))),
            (String::from("5"), achievement("Regular", "You connected on 5 different days.", None)),
        ]));
        let mut multiple = BTreeMap::new();
        multiple.insert(String::from("Places"), BTreeMap::from([
            (String::from("stone"), BTreeMap::from([
                (String::from("10"), achievement("Mason", "You placed 10 stone blocks.", None)),
            ])),
        ]));

        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            engine: EngineConfig::default(),
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
                persistent: true,
                persistent_interval: 60,
            },
            database_structure: DatabaseStructureConfig {
                statistics: DatabaseStructureConfigStatistics {
                    table_name: String::from("statistics"),
                    column_subject: String::from("subject"),
                    column_category: String::from("category"),
                    column_sub_key: String::from("sub_key"),
                    column_value: String::from("value"),
                },
                achievements: DatabaseStructureConfigAchievements {
                    table_name: String::from("achievements"),
                    column_subject: String::from("subject"),
                    column_award: String::from("achievement"),
                    column_date: String::from("date"),
                },
                connections: DatabaseStructureConfigConnections {
                    table_name: String::from("connections"),
                    column_subject: String::from("subject"),
                    column_date: String::from("date"),
                },
            },
            sentry_config: SentryConfig::default(),
            achievements: AchievementsConfig {
                disabled_categories: vec![],
                normal,
                multiple,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&format!("could not serialize the default config: {e}")))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(CustomError::new("created the config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create the config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(error.into());
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(String::from("log_level"), self.log_level.clone()));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval"), String::from("0")));
        }
        if self.database.persistent && self.database.persistent_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("database.persistent_interval"), String::from("0")));
        }

        let pattern = Regex::new(IDENTIFIER_PATTERN)
            .map_err(|e| ConfigurationError::ValidationError(String::from("identifier pattern"), e.to_string()))?;
        let statistics = &self.database_structure.statistics;
        let achievements = &self.database_structure.achievements;
        let connections = &self.database_structure.connections;
        let check_map = [
            ("[DB: statistics]", &statistics.table_name),
            ("[DB: statistics] Column: subject", &statistics.column_subject),
            ("[DB: statistics] Column: category", &statistics.column_category),
            ("[DB: statistics] Column: sub_key", &statistics.column_sub_key),
            ("[DB: statistics] Column: value", &statistics.column_value),
            ("[DB: achievements]", &achievements.table_name),
            ("[DB: achievements] Column: subject", &achievements.column_subject),
            ("[DB: achievements] Column: award", &achievements.column_award),
            ("[DB: achievements] Column: date", &achievements.column_date),
            ("[DB: connections]", &connections.table_name),
            ("[DB: connections] Column: subject", &connections.column_subject),
            ("[DB: connections] Column: date", &connections.column_date),
        ];
        for (name, value) in check_map {
            if !pattern.is_match(value) {
                return Err(ConfigurationError::ValidationError(name.to_string(), value.clone()));
            }
        }

        ThresholdTable::build(&self.achievements)?;
        Ok(())
    }
}
