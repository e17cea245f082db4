use serde::{Deserialize, Serialize};

use crate::types::Row;

/// Query output together with its column labels, in requested-field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}
