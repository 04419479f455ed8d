use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::thresholds::structs::threshold_table::ThresholdTable;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
pub struct ThresholdRegistry {
    pub(crate) table: RwLock<Arc<ThresholdTable>>,
    pub(crate) stats: Arc<StatsAtomics>,
}
