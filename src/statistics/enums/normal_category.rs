use serde::{Deserialize, Serialize};

/// Categories tracked with a single counter per subject.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NormalCategory {
    Connections,
    Deaths,
    Arrows,
    Snowballs,
    Eggs,
    Fish,
    ItemBreaks,
    EatenItems,
    Shear,
    Milk,
    LavaBuckets,
    WaterBuckets,
    Trades,
    AnvilsUsed,
    Enchantments,
    Beds,
    ConsumedPotions,
    Fireworks,
    MusicDiscs,
    EnderPearls,
    Smelting,
}
