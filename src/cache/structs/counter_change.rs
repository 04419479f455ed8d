#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterChange {
    pub old: u64,
    pub new: u64,
}
