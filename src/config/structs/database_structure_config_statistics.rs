use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigStatistics {
    pub table_name: String,
    pub column_subject: String,
    pub column_category: String,
    pub column_sub_key: String,
    pub column_value: String,
}
