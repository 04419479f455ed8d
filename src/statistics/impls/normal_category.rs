use crate::statistics::enums::normal_category::NormalCategory;
use std::fmt;
use std::str::FromStr;

impl NormalCategory {
    pub const ALL: [NormalCategory; 21] = [
        NormalCategory::Connections,
        NormalCategory::Deaths,
        NormalCategory::Arrows,
        NormalCategory::Snowballs,
        NormalCategory::Eggs,
        NormalCategory::Fish,
        NormalCategory::ItemBreaks,
        NormalCategory::EatenItems,
        NormalCategory::Shear,
        NormalCategory::Milk,
        NormalCategory::LavaBuckets,
        NormalCategory::WaterBuckets,
        NormalCategory::Trades,
        NormalCategory::AnvilsUsed,
        NormalCategory::Enchantments,
        NormalCategory::Beds,
        NormalCategory::ConsumedPotions,
        NormalCategory::Fireworks,
        NormalCategory::MusicDiscs,
        NormalCategory::EnderPearls,
        NormalCategory::Smelting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NormalCategory::Connections => "Connections",
            NormalCategory::Deaths => "Deaths",
            NormalCategory::Arrows => "Arrows",
            NormalCategory::Snowballs => "Snowballs",
            NormalCategory::Eggs => "Eggs",
            NormalCategory::Fish => "Fish",
            NormalCategory::ItemBreaks => "ItemBreaks",
            NormalCategory::EatenItems => "EatenItems",
            NormalCategory::Shear => "Shear",
            NormalCategory::Milk => "Milk",
            NormalCategory::LavaBuckets => "LavaBuckets",
            NormalCategory::WaterBuckets => "WaterBuckets",
            NormalCategory::Trades => "Trades",
            NormalCategory::AnvilsUsed => "AnvilsUsed",
            NormalCategory::Enchantments => "Enchantments",
            NormalCategory::Beds => "Beds",
            NormalCategory::ConsumedPotions => "ConsumedPotions",
            NormalCategory::Fireworks => "Fireworks",
            NormalCategory::MusicDiscs => "MusicDiscs",
            NormalCategory::EnderPearls => "EnderPearls",
            NormalCategory::Smelting => "Smelting",
        }
    }
}

impl fmt::Display for NormalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NormalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalCategory::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}
