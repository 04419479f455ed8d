//! Storage traits.

pub mod storage_backend;
