use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL engine behind `database.path`.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DatabaseDrivers {
    sqlite3,
    mysql,
    pgsql,
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "SQLite"),
            DatabaseDrivers::mysql => write!(f, "MySQL"),
            DatabaseDrivers::pgsql => write!(f, "PgSQL"),
        }
    }
}
