use crate::statistics::structs::award_id::AwardId;
use std::fmt;

impl AwardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AwardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AwardId {
    fn from(name: &str) -> Self {
        AwardId(name.to_string())
    }
}

impl From<String> for AwardId {
    fn from(name: String) -> Self {
        AwardId(name)
    }
}

impl PartialEq<&str> for AwardId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
