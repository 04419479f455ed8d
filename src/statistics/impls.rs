//! Implementation blocks for the data model types.

pub mod normal_category;
pub mod multiple_category;
pub mod category;
pub mod subject_id;
pub mod statistic_key;
pub mod award_id;
