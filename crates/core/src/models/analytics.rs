use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chart::TrendChart;
use super::transaction::Transaction;

/// Overall sales, expenses and profit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all sale amounts
    pub total_sales: f64,

    /// Sum of all purchase amounts
    pub total_expenses: f64,

    /// total_sales - total_expenses
    pub profit: f64,
}

/// Signed profit accumulated for one crop label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfit {
    pub crop: String,
    pub profit: f64,
}

/// Everything the dashboard shows, computed in one pass over the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Day the trend window ends on
    pub as_of: NaiveDate,

    /// Number of records in the ledger (not just the recent slice)
    pub transaction_count: usize,

    pub totals: Totals,

    /// Best-performing crop; `None` when the ledger is empty
    pub top_crop: Option<CropProfit>,

    /// Per-crop profit, first-encountered order, rounded for the bar chart
    pub crop_profits: Vec<CropProfit>,

    /// Trailing sales vs. expenses
    pub trend: TrendChart,

    /// Newest records, capped at the configured table size
    pub recent: Vec<Transaction>,
}
