#[cfg(test)]
mod common_tests {
    use crate::common::common::connection_date;
    use crate::common::structs::custom_error::CustomError;
    use crate::config::enums::configuration_error::ConfigurationError;
    use chrono::NaiveDate;

    #[test]
    fn test_connection_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(connection_date(date), "07/03/2024");
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("something broke");
        assert_eq!(format!("{}", error), "something broke");
    }

    #[test]
    fn test_custom_error_from_configuration_error() {
        let error: CustomError = ConfigurationError::UnknownCategory(String::from("Jumps")).into();
        assert_eq!(error.message(), "Unknown category: Jumps");
    }
}
