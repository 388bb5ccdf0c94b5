use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::analytics::{CropProfit, DashboardSummary, Totals};
use crate::models::ledger::Ledger;
use crate::models::settings::Settings;
use crate::models::transaction::TransactionKind;
use crate::services::chart_service::ChartService;

/// Computes ledger metrics: totals, per-crop profit and crop ranking.
///
/// Sums are accumulated in full precision; nothing is rounded here, so
/// repeated calls on the same ledger return identical values.
pub struct AnalyticsService {
    chart_service: ChartService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            chart_service: ChartService::new(),
        }
    }

    /// Total sales, total expenses and their difference. All zero for an empty ledger.
    pub fn totals(&self, ledger: &Ledger) -> Totals {
        let mut total_sales = 0.0;
        let mut total_expenses = 0.0;

        for transaction in ledger {
            match transaction.kind {
                TransactionKind::Sale => total_sales += transaction.amount,
                TransactionKind::Purchase => total_expenses += transaction.amount,
            }
        }

        Totals {
            total_sales,
            total_expenses,
            profit: total_sales - total_expenses,
        }
    }

    /// Signed profit per crop, in the order each crop first appears in the ledger.
    pub fn crop_profits(&self, ledger: &Ledger) -> Vec<CropProfit> {
        let mut profits: Vec<CropProfit> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for transaction in ledger {
            let slot = *index.entry(transaction.crop.as_str()).or_insert_with(|| {
                profits.push(CropProfit {
                    crop: transaction.crop.clone(),
                    profit: 0.0,
                });
                profits.len() - 1
            });
            profits[slot].profit += transaction.signed_amount();
        }

        profits
    }

    /// Signed profit per crop, keyed by exact crop label.
    pub fn profit_by_crop(&self, ledger: &Ledger) -> HashMap<String, f64> {
        self.crop_profits(ledger)
            .into_iter()
            .map(|cp| (cp.crop, cp.profit))
            .collect()
    }

    /// Crops sorted by profit, highest first. Ties keep first-encountered order.
    pub fn ranked_crops(&self, ledger: &Ledger) -> Vec<CropProfit> {
        rank(self.crop_profits(ledger))
    }

    /// The most profitable crop, or `None` for an empty ledger.
    pub fn top_crop(&self, ledger: &Ledger) -> Option<CropProfit> {
        self.ranked_crops(ledger).into_iter().next()
    }

    /// Build everything the dashboard displays for the trailing window ending `today`.
    pub fn dashboard(
        &self,
        ledger: &Ledger,
        settings: &Settings,
        today: NaiveDate,
    ) -> Result<DashboardSummary, CoreError> {
        let window = self.chart_service.trailing_window(today, settings.trend_days)?;
        let crop_profits = self.crop_profits(ledger);
        let top_crop = rank(crop_profits.clone()).into_iter().next();

        let summary = DashboardSummary {
            as_of: today,
            transaction_count: ledger.len(),
            totals: self.totals(ledger),
            top_crop,
            crop_profits: self.chart_service.profit_bars(&crop_profits),
            trend: self.chart_service.trend(ledger, &window),
            recent: ledger
                .recent_view(settings.recent_limit)
                .into_iter()
                .cloned()
                .collect(),
        };

        tracing::debug!(
            transactions = summary.transaction_count,
            crops = summary.crop_profits.len(),
            profit = summary.totals.profit,
            "dashboard refreshed"
        );

        Ok(summary)
    }
}

/// Stable descending sort by profit.
fn rank(mut crops: Vec<CropProfit>) -> Vec<CropProfit> {
    crops.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    crops
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
