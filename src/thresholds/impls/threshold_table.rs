use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::achievement_config::AchievementConfig;
use crate::config::structs::achievements_config::AchievementsConfig;
use crate::statistics::enums::category::Category;
use crate::statistics::enums::multiple_category::MultipleCategory;
use crate::statistics::enums::normal_category::NormalCategory;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::thresholds::structs::threshold::Threshold;
use crate::thresholds::structs::threshold_table::ThresholdTable;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

const GROUP_SEPARATOR: char = '|';

impl ThresholdTable {
    pub fn build(config: &AchievementsConfig) -> Result<ThresholdTable, ConfigurationError> {
        let mut table = ThresholdTable::default();

        for name in &config.disabled_categories {
            let category = Category::from_str(name)
                .map_err(|_| ConfigurationError::UnknownCategory(name.clone()))?;
            table.disabled.insert(category);
        }

        for (name, thresholds) in &config.normal {
            let category = NormalCategory::from_str(name)
                .map_err(|_| ConfigurationError::UnknownCategory(name.clone()))?;
            table.insert_group(StatisticKey::normal(category), thresholds)?;
        }

        for (name, groups) in &config.multiple {
            let category = MultipleCategory::from_str(name)
                .map_err(|_| ConfigurationError::UnknownCategory(name.clone()))?;
            for (group, thresholds) in groups {
                if group.split(GROUP_SEPARATOR).any(|part| part.is_empty()) {
                    return Err(ConfigurationError::ValidationError(format!("achievements.multiple.{name}"), group.clone()));
                }
                table.insert_group(StatisticKey::multiple(category, group.as_str()), thresholds)?;
                table.sub_keys.entry(category).or_default().push(group.clone());
            }
        }

        Ok(table)
    }

    fn insert_group(&mut self, key: StatisticKey, thresholds: &BTreeMap<String, AchievementConfig>) -> Result<(), ConfigurationError> {
        let mut parsed = Vec::with_capacity(thresholds.len());
        for (raw, definition) in thresholds {
            let value = match raw.trim().parse::<u64>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigurationError::InvalidThreshold { key: key.to_string(), threshold: raw.clone() }),
            };
            if definition.name.trim().is_empty() {
                return Err(ConfigurationError::MissingAwardName(format!("{key}.{raw}")));
            }
            let award = AwardId::from(definition.name.as_str());
            if self.definitions.contains_key(&award) {
                return Err(ConfigurationError::DuplicateAward(definition.name.clone()));
            }
            let definition = Arc::new(definition.clone());
            self.definitions.insert(award.clone(), definition.clone());
            parsed.push(Threshold { value, award, definition });
        }

        // Keys are strings, so "10" and "010" sort apart but parse to the same value.
        parsed.sort_by_key(|threshold| threshold.value);
        if let Some(pair) = parsed.windows(2).find(|pair| pair[0].value == pair[1].value) {
            return Err(ConfigurationError::DuplicateThreshold { key: key.to_string(), threshold: pair[0].value });
        }

        self.groups.insert(key, parsed);
        Ok(())
    }

    /// Every threshold `t` with `old < t <= new`, ascending.
    pub fn resolve_crossed(&self, key: &StatisticKey, old: u64, new: u64) -> Vec<Threshold> {
        if new <= old {
            return vec![];
        }
        let Some(thresholds) = self.groups.get(key) else {
            return vec![];
        };
        let start = thresholds.partition_point(|threshold| threshold.value <= old);
        let end = thresholds.partition_point(|threshold| threshold.value <= new);
        thresholds[start..end].to_vec()
    }

    /// Configured sub-key groups of `category` containing `name` as one of their parts.
    pub fn find_sub_keys(&self, category: MultipleCategory, name: &str) -> Vec<String> {
        match self.sub_keys.get(&category) {
            None => vec![],
            Some(groups) => groups
                .iter()
                .filter(|group| group.split(GROUP_SEPARATOR).any(|part| part == name))
                .cloned()
                .collect(),
        }
    }

    pub fn thresholds(&self, key: &StatisticKey) -> &[Threshold] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        !self.disabled.contains(&category)
    }

    pub fn definition(&self, award: &AwardId) -> Option<Arc<AchievementConfig>> {
        self.definitions.get(award).cloned()
    }

    pub fn awards_amount(&self) -> usize {
        self.definitions.len()
    }
}
