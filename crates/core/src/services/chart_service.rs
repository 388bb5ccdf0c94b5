use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::analytics::CropProfit;
use crate::models::chart::TrendChart;
use crate::models::ledger::Ledger;
use crate::models::transaction::TransactionKind;
use crate::models::window::DateWindow;
use crate::services::format_service::round2;

/// Generates chart-ready data sets from the ledger.
///
/// The core computes all the numbers — the frontend only renders:
/// - a bar per crop with its profit
/// - daily sales and expenses over a trailing window
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// The `days`-long window ending on `today`.
    pub fn trailing_window(&self, today: NaiveDate, days: u32) -> Result<DateWindow, CoreError> {
        DateWindow::trailing(today, days)
    }

    /// Per-day sums of `kind` amounts across `window`, oldest first.
    ///
    /// Always returns exactly `window.len()` values; days without matching
    /// records are `0.0`. Runs in O(days + transactions).
    pub fn daily_series(&self, ledger: &Ledger, kind: TransactionKind, window: &DateWindow) -> Vec<f64> {
        let mut by_date: HashMap<NaiveDate, f64> = HashMap::new();
        for transaction in ledger {
            if transaction.kind == kind && window.contains(transaction.date) {
                *by_date.entry(transaction.date).or_insert(0.0) += transaction.amount;
            }
        }

        window
            .days()
            .map(|day| by_date.get(&day).copied().unwrap_or(0.0))
            .collect()
    }

    /// Sales and expenses over the same window.
    pub fn trend(&self, ledger: &Ledger, window: &DateWindow) -> TrendChart {
        TrendChart {
            labels: window.days().collect(),
            sales: self.daily_series(ledger, TransactionKind::Sale, window),
            expenses: self.daily_series(ledger, TransactionKind::Purchase, window),
        }
    }

    /// Bar values for the profit chart, rounded to cents. Order is preserved.
    pub fn profit_bars(&self, crop_profits: &[CropProfit]) -> Vec<CropProfit> {
        crop_profits
            .iter()
            .map(|cp| CropProfit {
                crop: cp.crop.clone(),
                profit: round2(cp.profit),
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
