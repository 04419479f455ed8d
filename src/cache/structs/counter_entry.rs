/// Cached counter.
///
/// `value` is authoritative once `loaded` is set; the entry is dirty while it differs
/// from `persisted`. A `retired` entry has been evicted and must not be used, the
/// caller looks up a fresh slot instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct CounterEntry {
    pub(crate) value: u64,
    pub(crate) persisted: u64,
    pub(crate) loaded: bool,
    pub(crate) retired: bool,
}
