use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a tracked subject (a player UUID).
///
/// Never reused across different players. The first byte of the UUID selects the
/// cache and ledger shard, see [`SubjectId::shard`].
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[serde(transparent)]
pub struct SubjectId(pub Uuid);
