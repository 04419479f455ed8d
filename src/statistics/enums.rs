//! Category enumerations.

/// Categories without sub-keys (one counter per subject).
pub mod normal_category;

/// Categories with sub-keys (one counter per subject and configured group).
pub mod multiple_category;

/// Union of normal and multiple categories.
pub mod category;
