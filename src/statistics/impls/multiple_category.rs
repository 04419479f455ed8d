use crate::statistics::enums::multiple_category::MultipleCategory;
use std::fmt;
use std::str::FromStr;

impl MultipleCategory {
    pub const ALL: [MultipleCategory; 7] = [
        MultipleCategory::Places,
        MultipleCategory::Breaks,
        MultipleCategory::Kills,
        MultipleCategory::Crafts,
        MultipleCategory::Breeding,
        MultipleCategory::PlayerCommands,
        MultipleCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MultipleCategory::Places => "Places",
            MultipleCategory::Breaks => "Breaks",
            MultipleCategory::Kills => "Kills",
            MultipleCategory::Crafts => "Crafts",
            MultipleCategory::Breeding => "Breeding",
            MultipleCategory::PlayerCommands => "PlayerCommands",
            MultipleCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for MultipleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MultipleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MultipleCategory::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}
