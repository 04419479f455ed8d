#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::database::enums::database_drivers::DatabaseDrivers;

        #[test]
        fn test_default_configuration_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
            assert_eq!(config.engine.connection_check_delay, 5000);
        }

        #[test]
        fn test_configuration_toml_round_trip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.log_level, config.log_level);
            assert_eq!(parsed.achievements.normal, config.achievements.normal);
            assert_eq!(parsed.achievements.multiple, config.achievements.multiple);
        }

        #[test]
        fn test_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_, _))));
        }

        #[test]
        fn test_rejects_invalid_table_name() {
            let mut config = Configuration::init();
            config.database_structure.statistics.table_name = String::from("Robert'); DROP TABLE");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_, _))));
        }

        #[test]
        fn test_rejects_unknown_category() {
            let mut config = Configuration::init();
            config.achievements.normal.insert(String::from("Jumps"), Default::default());
            assert!(matches!(config.validate(), Err(ConfigurationError::UnknownCategory(_))));
        }

        #[test]
        fn test_load_file_missing() {
            let result = Configuration::load_file("/nonexistent/config.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_parse_thresholds_from_toml() {
            let data = r#"
                log_level = "debug"
                log_console_interval = 30

                [engine]
                connection_check_delay = 100

                [database]
                engine = "sqlite3"
                path = "sqlite::memory:"
                persistent = false
                persistent_interval = 60

                [database_structure.statistics]
                table_name = "statistics"
                column_subject = "subject"
                column_category = "category"
                column_sub_key = "sub_key"
                column_value = "value"

                [database_structure.achievements]
                table_name = "achievements"
                column_subject = "subject"
                column_award = "achievement"
                column_date = "date"

                [database_structure.connections]
                table_name = "connections"
                column_subject = "subject"
                column_date = "date"

                [sentry_config]
                enabled = false
                dsn = ""
                debug = false
                sample_rate = 1.0
                max_breadcrumbs = 100
                attach_stacktrace = true
                send_default_pii = false
                traces_sample_rate = 1.0

                [achievements]
                disabled_categories = ["Deaths"]

                [achievements.normal.Connections.1]
                name = "First Login"
                message = "Welcome!"

                [achievements.multiple.Places."stone|granite".10]
                name = "Mason"
                message = "Placed 10 blocks"
                reward = { money = 5, commands = ["say hi"] }
            "#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert!(config.validate().is_ok());
            assert_eq!(config.achievements.disabled_categories, vec![String::from("Deaths")]);
            let mason = &config.achievements.multiple["Places"]["stone|granite"]["10"];
            assert_eq!(mason.name, "Mason");
            assert_eq!(mason.reward.as_ref().unwrap().money, Some(5));
            assert_eq!(mason.reward.as_ref().unwrap().commands, vec![String::from("say hi")]);
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_duplicate_award_display() {
            let error = ConfigurationError::DuplicateAward(String::from("Mason"));
            assert_eq!(format!("{}", error), "Duplicate achievement name: Mason");
        }

        #[test]
        fn test_invalid_threshold_display() {
            let error = ConfigurationError::InvalidThreshold {
                key: String::from("Places.stone"),
                threshold: String::from("ten"),
            };
            assert_eq!(format!("{}", error), "Invalid threshold 'ten' in Places.stone");
        }
    }
}
