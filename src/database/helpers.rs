use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::storage_error::StorageError;

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => identifier.to_string(),
    }
}

/// Bind marker for the `index`-th parameter, starting at 1.
pub fn placeholder(engine: DatabaseDrivers, index: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::from("?"),
        DatabaseDrivers::pgsql => format!("${}", index),
    }
}

fn placeholders(engine: DatabaseDrivers, amount: usize) -> String {
    (1..=amount).map(|index| placeholder(engine, index)).collect::<Vec<String>>().join(", ")
}

fn quote_list(engine: DatabaseDrivers, columns: &[&str]) -> String {
    columns.iter().map(|column| quote_identifier(engine, column)).collect::<Vec<String>>().join(", ")
}

fn where_equals(engine: DatabaseDrivers, columns: &[&str]) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| format!("{}={}", quote_identifier(engine, column), placeholder(engine, index + 1)))
        .collect::<Vec<String>>()
        .join(" AND ")
}

pub fn insert_ignore_prefix(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "INSERT OR IGNORE INTO",
        DatabaseDrivers::mysql => "INSERT IGNORE INTO",
        DatabaseDrivers::pgsql => "INSERT INTO",
    }
}

pub fn insert_ignore_suffix(engine: DatabaseDrivers, conflict_columns: &[&str]) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::new(),
        DatabaseDrivers::pgsql => format!(" ON CONFLICT ({}) DO NOTHING", quote_list(engine, conflict_columns)),
    }
}

pub fn upsert_conflict_clause(engine: DatabaseDrivers, conflict_columns: &[&str], update_columns: &[&str]) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=excluded.{}", quoted, quoted)
                })
                .collect();
            format!(
                "ON CONFLICT ({}) DO UPDATE SET {}",
                quote_list(engine, conflict_columns),
                updates.join(", ")
            )
        }
        DatabaseDrivers::mysql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=VALUES({})", quoted, quoted)
                })
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
        }
    }
}

pub fn build_select_counter_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let s = &structure.statistics;
    format!(
        "SELECT {} FROM {} WHERE {}",
        quote_identifier(engine, &s.column_value),
        quote_identifier(engine, &s.table_name),
        where_equals(engine, &[s.column_subject.as_str(), s.column_category.as_str(), s.column_sub_key.as_str()])
    )
}

pub fn build_upsert_counter_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let s = &structure.statistics;
    let columns = [s.column_subject.as_str(), s.column_category.as_str(), s.column_sub_key.as_str(), s.column_value.as_str()];
    format!(
        "INSERT INTO {} ({}) VALUES ({}) {}",
        quote_identifier(engine, &s.table_name),
        quote_list(engine, &columns),
        placeholders(engine, columns.len()),
        upsert_conflict_clause(engine, &columns[..3], &columns[3..])
    )
}

pub fn build_select_awards_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let a = &structure.achievements;
    format!(
        "SELECT {} FROM {} WHERE {}",
        quote_identifier(engine, &a.column_award),
        quote_identifier(engine, &a.table_name),
        where_equals(engine, &[a.column_subject.as_str()])
    )
}

pub fn build_select_award_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let a = &structure.achievements;
    format!(
        "SELECT COUNT(*) FROM {} WHERE {}",
        quote_identifier(engine, &a.table_name),
        where_equals(engine, &[a.column_subject.as_str(), a.column_award.as_str()])
    )
}

pub fn build_insert_award_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let a = &structure.achievements;
    let columns = [a.column_subject.as_str(), a.column_award.as_str(), a.column_date.as_str()];
    format!(
        "{} {} ({}) VALUES ({}){}",
        insert_ignore_prefix(engine),
        quote_identifier(engine, &a.table_name),
        quote_list(engine, &columns),
        placeholders(engine, columns.len()),
        insert_ignore_suffix(engine, &columns[..2])
    )
}

pub fn build_select_connection_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let c = &structure.connections;
    format!(
        "SELECT {} FROM {} WHERE {}",
        quote_identifier(engine, &c.column_date),
        quote_identifier(engine, &c.table_name),
        where_equals(engine, &[c.column_subject.as_str()])
    )
}

pub fn build_upsert_connection_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let c = &structure.connections;
    let columns = [c.column_subject.as_str(), c.column_date.as_str()];
    format!(
        "INSERT INTO {} ({}) VALUES ({}) {}",
        quote_identifier(engine, &c.table_name),
        quote_list(engine, &columns),
        placeholders(engine, columns.len()),
        upsert_conflict_clause(engine, &columns[..1], &columns[1..])
    )
}

/// `CREATE TABLE` statements for the statistics, achievements and connections tables.
pub fn build_create_table_queries(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> Vec<String> {
    let (text_id, text_key, text_name, integer, text_date) = match engine {
        DatabaseDrivers::sqlite3 => ("TEXT", "TEXT", "TEXT", "INTEGER", "TEXT"),
        DatabaseDrivers::mysql => ("VARCHAR(36)", "VARCHAR(32)", "VARCHAR(191)", "BIGINT", "VARCHAR(10)"),
        DatabaseDrivers::pgsql => ("varchar(36)", "varchar(32)", "varchar(255)", "bigint", "varchar(10)"),
    };
    let q = |identifier: &str| quote_identifier(engine, identifier);
    let s = &structure.statistics;
    let a = &structure.achievements;
    let c = &structure.connections;
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {} NOT NULL, {} {} NOT NULL, {} {} NOT NULL DEFAULT '', {} {} NOT NULL DEFAULT 0, PRIMARY KEY ({}, {}, {}))",
            q(&s.table_name),
            q(&s.column_subject), text_id,
            q(&s.column_category), text_key,
            q(&s.column_sub_key), text_name,
            q(&s.column_value), integer,
            q(&s.column_subject), q(&s.column_category), q(&s.column_sub_key)
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {} NOT NULL, {} {} NOT NULL, {} {} NOT NULL DEFAULT 0, PRIMARY KEY ({}, {}))",
            q(&a.table_name),
            q(&a.column_subject), text_id,
            q(&a.column_award), text_name,
            q(&a.column_date), integer,
            q(&a.column_subject), q(&a.column_award)
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {} NOT NULL, {} {} NOT NULL, PRIMARY KEY ({}))",
            q(&c.table_name),
            q(&c.column_subject), text_id,
            q(&c.column_date), text_date,
            q(&c.column_subject)
        ),
    ]
}

pub fn to_stored_value(value: u64) -> Result<i64, StorageError> {
    i64::try_from(value).map_err(|_| StorageError::InvalidData(format!("counter value {value} out of range")))
}

pub fn from_stored_value(value: i64) -> Result<u64, StorageError> {
    u64::try_from(value).map_err(|_| StorageError::InvalidData(format!("negative counter value {value}")))
}
