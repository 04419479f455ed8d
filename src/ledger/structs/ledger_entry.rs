use crate::statistics::structs::award_id::AwardId;
use ahash::AHashSet;

#[derive(Debug, Default)]
pub struct LedgerEntry {
    /// `None` until loaded from storage.
    pub(crate) granted: Option<AHashSet<AwardId>>,
    pub(crate) retired: bool,
}
