#[cfg(test)]
mod statistics_tests {
    mod category_tests {
        use crate::statistics::enums::category::Category;
        use crate::statistics::enums::multiple_category::MultipleCategory;
        use crate::statistics::enums::normal_category::NormalCategory;
        use std::str::FromStr;

        #[test]
        fn test_category_from_str() {
            assert_eq!(Category::from_str("Connections").unwrap(), Category::Normal(NormalCategory::Connections));
            assert_eq!(Category::from_str("Places").unwrap(), Category::Multiple(MultipleCategory::Places));
            assert!(Category::from_str("connections").is_err());
            assert!(Category::from_str("Unknown").is_err());
        }

        #[test]
        fn test_category_display_matches_as_str() {
            for category in NormalCategory::ALL {
                assert_eq!(format!("{}", Category::from(category)), category.as_str());
            }
            for category in MultipleCategory::ALL {
                assert_eq!(format!("{}", Category::from(category)), category.as_str());
            }
        }

        #[test]
        fn test_category_is_multiple() {
            assert!(Category::Multiple(MultipleCategory::Breaks).is_multiple());
            assert!(!Category::Normal(NormalCategory::Deaths).is_multiple());
        }

        #[test]
        fn test_category_serialization() {
            let serialized = serde_json::to_string(&Category::Multiple(MultipleCategory::Kills)).unwrap();
            assert_eq!(serialized, "\"Kills\"");
            let category: Category = serde_json::from_str("\"Fish\"").unwrap();
            assert_eq!(category, Category::Normal(NormalCategory::Fish));
        }
    }

    mod statistic_key_tests {
        use crate::statistics::enums::multiple_category::MultipleCategory;
        use crate::statistics::enums::normal_category::NormalCategory;
        use crate::statistics::structs::statistic_key::StatisticKey;

        #[test]
        fn test_statistic_key_display() {
            assert_eq!(StatisticKey::normal(NormalCategory::Connections).to_string(), "Connections");
            assert_eq!(StatisticKey::multiple(MultipleCategory::Places, "stone").to_string(), "Places.stone");
        }

        #[test]
        fn test_statistic_key_from_parts() {
            let key = StatisticKey::from_parts("Places", "stone|granite").unwrap();
            assert_eq!(key, StatisticKey::multiple(MultipleCategory::Places, "stone|granite"));
            assert_eq!(key.sub_key_column(), "stone|granite");

            let key = StatisticKey::from_parts("Deaths", "").unwrap();
            assert_eq!(key.sub_key(), None);
            assert_eq!(key.sub_key_column(), "");
        }

        #[test]
        fn test_statistic_key_from_parts_rejects_mismatched_sub_key() {
            assert!(StatisticKey::from_parts("Deaths", "stone").is_err());
            assert!(StatisticKey::from_parts("Places", "").is_err());
            assert!(StatisticKey::from_parts("Nope", "").is_err());
        }
    }

    mod subject_id_tests {
        use crate::statistics::structs::subject_id::SubjectId;
        use std::str::FromStr;

        #[test]
        fn test_subject_id_round_trip_through_string() {
            let subject = SubjectId::new_random();
            let parsed = SubjectId::from_str(&subject.to_string()).unwrap();
            assert_eq!(subject, parsed);
        }

        #[test]
        fn test_subject_id_shard_is_first_byte() {
            let subject = SubjectId::from_str("ab000000-0000-4000-8000-000000000000").unwrap();
            assert_eq!(subject.shard(), 0xab);
        }

        #[test]
        fn test_subject_id_rejects_garbage() {
            assert!(SubjectId::from_str("not-a-uuid").is_err());
        }
    }
}
