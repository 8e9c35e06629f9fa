//! Header names used to locate the report columns in the uploaded sheet.

use serde::{Deserialize, Serialize};

pub const CENTER_COLUMN: &str = "CENTRO";
pub const TICKET_COLUMN: &str = "RAL/INC CADASTRADOS";
pub const ALARM_TIME_COLUMN: &str = "HORÁRIO ALARME";
pub const NORMALIZATION_TIME_COLUMN: &str = "HORÁRIO NORMALIZAÇÃO";

/// Header names for the four columns the report reads. `center` is optional in
/// the sheet; the other three are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub center: String,
    pub ticket: String,
    pub alarm_time: String,
    pub normalization_time: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            center: CENTER_COLUMN.to_string(),
            ticket: TICKET_COLUMN.to_string(),
            alarm_time: ALARM_TIME_COLUMN.to_string(),
            normalization_time: NORMALIZATION_TIME_COLUMN.to_string(),
        }
    }
}
