use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Two-series line chart data: daily sales vs. daily expenses.
///
/// The core generates these; the frontend just renders them.
/// `labels`, `sales` and `expenses` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendChart {
    /// One label per day, oldest first
    pub labels: Vec<NaiveDate>,

    /// Sum of sale amounts per day
    pub sales: Vec<f64>,

    /// Sum of purchase amounts per day
    pub expenses: Vec<f64>,
}

impl TrendChart {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
