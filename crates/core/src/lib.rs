pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    analytics::{CropProfit, DashboardSummary, Totals},
    chart::TrendChart,
    ledger::Ledger,
    settings::Settings,
    transaction::{Transaction, TransactionInput, TransactionKind, TransactionSortOrder},
    window::DateWindow,
};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    format_service::FormatService, ledger_service::LedgerService,
};
use std::collections::HashMap;

use errors::CoreError;

/// Main entry point for the Green Sense core library.
/// Owns the ledger, the display settings and all services needed to operate on them.
#[must_use]
pub struct GreenSense {
    ledger: Ledger,
    settings: Settings,
    ledger_service: LedgerService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
    format_service: FormatService,
}

impl std::fmt::Debug for GreenSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreenSense")
            .field("transactions", &self.ledger.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for GreenSense {
    fn default() -> Self {
        Self::create_new()
    }
}

impl GreenSense {
    /// Empty ledger, default settings.
    pub fn create_new() -> Self {
        Self::build(Ledger::new(), Settings::default())
    }

    /// Ledger pre-seeded with the demo records, dated relative to `today`.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        Self::build(Ledger::sample(today), Settings::default())
    }

    /// Empty ledger with custom settings. Fails if the settings don't validate.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(Ledger::new(), settings))
    }

    // ── Ledger Mutation ─────────────────────────────────────────────

    /// Prepend a record. Blank crop and invalid amount are normalised, never rejected.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.ledger_service.add(&mut self.ledger, transaction);
    }

    /// Prepend a record built from raw form input; a missing date becomes today (UTC).
    /// Returns the record as stored.
    pub fn add_input(&mut self, input: &TransactionInput) -> Transaction {
        let today = chrono::Utc::now().date_naive();
        self.add_input_on(input, today)
    }

    /// Same as [`GreenSense::add_input`] with an explicit "today".
    pub fn add_input_on(&mut self, input: &TransactionInput, today: NaiveDate) -> Transaction {
        self.ledger_service.add_input(&mut self.ledger, input, today)
    }

    /// Remove every record. Asking the user first is the caller's job.
    pub fn clear(&mut self) {
        self.ledger_service.clear(&mut self.ledger);
    }

    // ── Metrics ─────────────────────────────────────────────────────

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.analytics_service.totals(&self.ledger)
    }

    /// Signed profit per crop label (unordered).
    #[must_use]
    pub fn profit_by_crop(&self) -> HashMap<String, f64> {
        self.analytics_service.profit_by_crop(&self.ledger)
    }

    /// Signed profit per crop in first-encountered order.
    #[must_use]
    pub fn crop_profits(&self) -> Vec<CropProfit> {
        self.analytics_service.crop_profits(&self.ledger)
    }

    /// Crops from most to least profitable.
    #[must_use]
    pub fn ranked_crops(&self) -> Vec<CropProfit> {
        self.analytics_service.ranked_crops(&self.ledger)
    }

    /// Most profitable crop; `None` when the ledger is empty.
    #[must_use]
    pub fn top_crop(&self) -> Option<CropProfit> {
        self.analytics_service.top_crop(&self.ledger)
    }

    /// Per-day sums of `kind` amounts over `window`.
    #[must_use]
    pub fn daily_series(&self, kind: TransactionKind, window: &DateWindow) -> Vec<f64> {
        self.chart_service.daily_series(&self.ledger, kind, window)
    }

    /// The first `limit` records, newest first.
    #[must_use]
    pub fn recent_view(&self, limit: usize) -> Vec<&Transaction> {
        self.ledger.recent_view(limit)
    }

    // ── Charts & Dashboard ──────────────────────────────────────────

    /// Sales vs. expenses over the configured trailing window ending `today`.
    pub fn trend_chart(&self, today: NaiveDate) -> Result<TrendChart, CoreError> {
        let window = self
            .chart_service
            .trailing_window(today, self.settings.trend_days)?;
        Ok(self.chart_service.trend(&self.ledger, &window))
    }

    /// One bar per crop, values rounded to cents.
    #[must_use]
    pub fn profit_bars(&self) -> Vec<CropProfit> {
        let crop_profits = self.analytics_service.crop_profits(&self.ledger);
        self.chart_service.profit_bars(&crop_profits)
    }

    /// Everything the dashboard shows after a mutation.
    pub fn dashboard(&self, today: NaiveDate) -> Result<DashboardSummary, CoreError> {
        self.analytics_service
            .dashboard(&self.ledger, &self.settings, today)
    }

    /// Top crop formatted for the headline card, e.g. `"Tomato (₱1200.00)"`.
    #[must_use]
    pub fn top_crop_label(&self) -> String {
        self.format_service
            .format_top_crop(self.top_crop().as_ref(), &self.settings.currency_symbol)
    }

    /// Money amount formatted with the configured currency symbol.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        self.format_service
            .format_currency(amount, &self.settings.currency_symbol)
    }

    // ── Listing ─────────────────────────────────────────────────────

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }

    #[must_use]
    pub fn get_transactions_by_kind(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.ledger_service.by_kind(&self.ledger, kind)
    }

    /// Exact, case-sensitive crop match.
    #[must_use]
    pub fn get_transactions_for_crop(&self, crop: &str) -> Vec<&Transaction> {
        self.ledger_service.for_crop(&self.ledger, crop)
    }

    /// Records dated `from..=to`, ledger order.
    #[must_use]
    pub fn get_transactions_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Transaction> {
        self.ledger_service.in_range(&self.ledger, from, to)
    }

    #[must_use]
    pub fn get_transactions_sorted(&self, order: TransactionSortOrder) -> Vec<&Transaction> {
        self.ledger_service.sorted(&self.ledger, order)
    }

    /// Distinct crop labels, first-encountered order.
    #[must_use]
    pub fn unique_crops(&self) -> Vec<&str> {
        self.ledger_service.unique_crops(&self.ledger)
    }

    #[must_use]
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.ledger_service.earliest_date(&self.ledger)
    }

    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.ledger_service.latest_date(&self.ledger)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the currency prefix used by the formatting helpers.
    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<(), CoreError> {
        self.update_settings(Settings {
            currency_symbol: symbol.trim().to_string(),
            ..self.settings.clone()
        })
    }

    /// Set how many table rows the dashboard includes.
    pub fn set_recent_limit(&mut self, limit: usize) -> Result<(), CoreError> {
        self.update_settings(Settings {
            recent_limit: limit,
            ..self.settings.clone()
        })
    }

    /// Set the trend window length (1..=366 days).
    pub fn set_trend_days(&mut self, days: u32) -> Result<(), CoreError> {
        self.update_settings(Settings {
            trend_days: days,
            ..self.settings.clone()
        })
    }

    /// Replace the settings only if the candidate validates.
    fn update_settings(&mut self, candidate: Settings) -> Result<(), CoreError> {
        candidate.validate()?;
        self.settings = candidate;
        Ok(())
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// All records as a pretty JSON array, newest first.
    pub fn export_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}")))
    }

    /// All records as CSV, newest first.
    /// Columns: date, type, crop, amount
    #[must_use]
    pub fn export_to_csv(&self) -> String {
        let mut csv = String::from("date,type,crop,amount\n");
        for transaction in &self.ledger {
            let crop = &transaction.crop;
            let escaped_crop = if crop.contains(',') || crop.contains('"') || crop.contains('\n') {
                format!("\"{}\"", crop.replace('"', "\"\""))
            } else {
                crop.clone()
            };
            csv.push_str(&format!(
                "{},{},{},{:.2}\n",
                transaction.date,
                transaction.kind.as_str(),
                escaped_crop,
                transaction.amount,
            ));
        }
        csv
    }

    /// Import a newest-first JSON array of records in front of the existing ones.
    /// Nothing is added if the JSON is malformed. Returns the number imported.
    pub fn import_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let batch: Vec<Transaction> = serde_json::from_str(json)?;
        let count = batch.len();
        tracing::debug!(count, "importing transactions");
        self.ledger.add_batch(batch);
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger, settings: Settings) -> Self {
        Self {
            ledger,
            settings,
            ledger_service: LedgerService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
            format_service: FormatService::new(),
        }
    }
}
