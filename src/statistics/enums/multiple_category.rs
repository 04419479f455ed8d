use serde::{Deserialize, Serialize};

/// Categories tracked per configured sub-key group (block type, entity, command...).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MultipleCategory {
    Places,
    Breaks,
    Kills,
    Crafts,
    Breeding,
    PlayerCommands,
    Custom,
}
