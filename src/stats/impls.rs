//! Implementation blocks for statistics.

pub mod stats_atomics;
