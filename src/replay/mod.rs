//! Event replay.
//!
//! Feeds a JSON lines file into the engine, one event per line, the way a host would
//! call it from its event listeners. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"event":"join","subject":"8f2f6d1c-4d5e-4f6a-9b7c-0d1e2f3a4b5c"}
//! {"event":"statistic","subject":"8f2f6d1c-4d5e-4f6a-9b7c-0d1e2f3a4b5c","category":"Places","names":["stone"],"delta":4}
//! {"event":"wait","millis":6000}
//! {"event":"disconnect","subject":"8f2f6d1c-4d5e-4f6a-9b7c-0d1e2f3a4b5c"}
//! ```

pub mod enums;

#[allow(clippy::module_inception)]
pub mod replay;
