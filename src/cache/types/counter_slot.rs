use crate::cache::structs::counter_entry::CounterEntry;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type CounterSlot = Arc<Mutex<CounterEntry>>;

pub type CounterShard = Arc<RwLock<AHashMap<(SubjectId, StatisticKey), CounterSlot>>>;
