use std::collections::VecDeque;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::transaction::Transaction;

/// The in-memory list of transactions, newest first.
///
/// Records are only ever prepended or cleared; there is no key beyond
/// position and duplicates are allowed. Every inserted record passes through
/// [`Transaction::normalized`], so stored amounts are never negative and crop
/// labels are never blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: VecDeque<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the three demo records shown on first load.
    pub fn sample(today: NaiveDate) -> Self {
        let days_ago = |n: i64| today.checked_sub_signed(Duration::days(n)).unwrap_or(today);
        let mut ledger = Self::new();
        // Pushed oldest first so the tomato sale ends up on top.
        ledger.add(Transaction::sale("Basil", 600.00, days_ago(2)));
        ledger.add(Transaction::purchase("Fertilizer", 450.00, days_ago(1)));
        ledger.add(Transaction::sale("Tomato", 1200.00, today));
        ledger
    }

    /// Insert at the front.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push_front(transaction.normalized());
    }

    /// Insert a newest-first batch in front of the existing records,
    /// keeping the batch's own order.
    pub fn add_batch(&mut self, batch: Vec<Transaction>) {
        for transaction in batch.into_iter().rev() {
            self.add(transaction);
        }
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All records in ledger order (newest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.transactions.iter()
    }

    /// The first `limit` records in ledger order.
    pub fn recent_view(&self, limit: usize) -> Vec<&Transaction> {
        self.transactions.iter().take(limit).collect()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::collections::vec_deque::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
