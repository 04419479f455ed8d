use crate::statistics::enums::category::Category;
use crate::statistics::enums::multiple_category::MultipleCategory;
use crate::statistics::enums::normal_category::NormalCategory;
use crate::statistics::structs::statistic_key::StatisticKey;
use std::fmt;
use std::str::FromStr;

impl StatisticKey {
    pub fn normal(category: NormalCategory) -> StatisticKey {
        StatisticKey {
            category: Category::Normal(category),
            sub_key: None,
        }
    }

    pub fn multiple(category: MultipleCategory, sub_key: impl Into<String>) -> StatisticKey {
        StatisticKey {
            category: Category::Multiple(category),
            sub_key: Some(sub_key.into()),
        }
    }

    /// Rebuilds a key from its stored columns; the sub-key column is empty for
    /// normal categories.
    pub fn from_parts(category: &str, sub_key: &str) -> Result<StatisticKey, String> {
        match Category::from_str(category)? {
            Category::Normal(category) if sub_key.is_empty() => Ok(StatisticKey::normal(category)),
            Category::Multiple(category) if !sub_key.is_empty() => Ok(StatisticKey::multiple(category, sub_key)),
            _ => Err(format!("{category}.{sub_key}")),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sub_key(&self) -> Option<&str> {
        self.sub_key.as_deref()
    }

    /// Sub-key as stored in the database.
    pub fn sub_key_column(&self) -> &str {
        self.sub_key.as_deref().unwrap_or("")
    }
}

impl From<NormalCategory> for StatisticKey {
    fn from(category: NormalCategory) -> Self {
        StatisticKey::normal(category)
    }
}

impl fmt::Display for StatisticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_key {
            None => write!(f, "{}", self.category),
            Some(sub_key) => write!(f, "{}.{}", self.category, sub_key),
        }
    }
}
