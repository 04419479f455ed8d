use crate::statistics::enums::category::Category;

/// Composite key of a counter: a category plus, for multiple categories, the
/// configured sub-key group.
///
/// Fields are private so the normal/multiple invariant holds for every key:
/// normal categories never carry a sub-key, multiple categories always do.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct StatisticKey {
    pub(crate) category: Category,
    pub(crate) sub_key: Option<String>,
}
