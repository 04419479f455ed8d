use crate::statistics::structs::subject_id::SubjectId;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

impl SubjectId {
    pub fn new_random() -> SubjectId {
        SubjectId(Uuid::new_v4())
    }

    /// Shard index used by the cache and the ledger.
    #[inline]
    pub fn shard(&self) -> u8 {
        self.0.as_bytes()[0]
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for SubjectId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SubjectId)
    }
}

impl From<Uuid> for SubjectId {
    fn from(uuid: Uuid) -> Self {
        SubjectId(uuid)
    }
}
