use crate::statistics::enums::multiple_category::MultipleCategory;
use crate::statistics::enums::normal_category::NormalCategory;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub enum Category {
    Normal(NormalCategory),
    Multiple(MultipleCategory),
}
