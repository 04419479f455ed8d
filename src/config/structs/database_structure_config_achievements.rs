use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigAchievements {
    pub table_name: String,
    pub column_subject: String,
    pub column_award: String,
    pub column_date: String,
}
