use chrono::NaiveDate;
use std::collections::HashSet;

use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionInput, TransactionKind, TransactionSortOrder};

/// Adds, clears and lists ledger records.
///
/// Pure business logic — no I/O. Nothing here fails: bad input is normalised.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Prepend a record to the ledger.
    pub fn add(&self, ledger: &mut Ledger, transaction: Transaction) {
        tracing::debug!(
            kind = %transaction.kind,
            crop = %transaction.crop,
            amount = transaction.amount,
            date = %transaction.date,
            "adding transaction"
        );
        ledger.add(transaction);
    }

    /// Normalise raw form input and prepend it. Returns the stored record.
    pub fn add_input(&self, ledger: &mut Ledger, input: &TransactionInput, today: NaiveDate) -> Transaction {
        let transaction = input.normalize(today);
        self.add(ledger, transaction.clone());
        transaction
    }

    pub fn clear(&self, ledger: &mut Ledger) {
        tracing::debug!(removed = ledger.len(), "clearing ledger");
        ledger.clear();
    }

    /// Records of one kind, ledger order.
    pub fn by_kind<'a>(&self, ledger: &'a Ledger, kind: TransactionKind) -> Vec<&'a Transaction> {
        ledger.iter().filter(|t| t.kind == kind).collect()
    }

    /// Records for an exact (case-sensitive) crop label, ledger order.
    pub fn for_crop<'a>(&self, ledger: &'a Ledger, crop: &str) -> Vec<&'a Transaction> {
        ledger.iter().filter(|t| t.crop == crop).collect()
    }

    /// Records dated within `from..=to`, ledger order.
    pub fn in_range<'a>(&self, ledger: &'a Ledger, from: NaiveDate, to: NaiveDate) -> Vec<&'a Transaction> {
        ledger
            .iter()
            .filter(|t| t.date >= from && t.date <= to)
            .collect()
    }

    /// All records in the requested order. Sorts are stable, so equal keys keep ledger order.
    pub fn sorted<'a>(&self, ledger: &'a Ledger, order: TransactionSortOrder) -> Vec<&'a Transaction> {
        let mut transactions: Vec<&Transaction> = ledger.iter().collect();
        match order {
            TransactionSortOrder::Newest => {}
            TransactionSortOrder::DateDesc => transactions.sort_by(|a, b| b.date.cmp(&a.date)),
            TransactionSortOrder::DateAsc => transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSortOrder::AmountDesc => transactions.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
            TransactionSortOrder::AmountAsc => transactions.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
            TransactionSortOrder::CropAsc => transactions.sort_by(|a, b| a.crop.cmp(&b.crop)),
            TransactionSortOrder::CropDesc => transactions.sort_by(|a, b| b.crop.cmp(&a.crop)),
        }
        transactions
    }

    /// Distinct crop labels in first-encountered (ledger) order.
    pub fn unique_crops<'a>(&self, ledger: &'a Ledger) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        ledger
            .iter()
            .map(|t| t.crop.as_str())
            .filter(|crop| seen.insert(*crop))
            .collect()
    }

    pub fn earliest_date(&self, ledger: &Ledger) -> Option<NaiveDate> {
        ledger.iter().map(|t| t.date).min()
    }

    pub fn latest_date(&self, ledger: &Ledger) -> Option<NaiveDate> {
        ledger.iter().map(|t| t.date).max()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
