use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Label substituted for a blank crop name.
pub const UNKNOWN_CROP: &str = "Unknown";

/// Whether money came in (sale) or went out (purchase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Produce sold; contributes positively to profit
    Sale,
    /// Inputs bought (seed, fertilizer, ...); contributes negatively to profit
    Purchase,
}

impl TransactionKind {
    /// Lowercase wire name, same as the JSON form.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Purchase => "purchase",
        }
    }

    /// `+1.0` for sales, `-1.0` for purchases.
    pub fn sign(self) -> f64 {
        match self {
            TransactionKind::Sale => 1.0,
            TransactionKind::Purchase => -1.0,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Sale => write!(f, "Sale"),
            TransactionKind::Purchase => write!(f, "Purchase"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sale" => Ok(TransactionKind::Sale),
            "purchase" => Ok(TransactionKind::Purchase),
            _ => Err(CoreError::InvalidKind(s.to_string())),
        }
    }
}

/// Sort order for transaction listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionSortOrder {
    /// Ledger order: most recently added first
    Newest,
    /// Newest date first
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Alphabetical by crop
    CropAsc,
    /// Reverse alphabetical by crop
    CropDesc,
}

/// A single sale or purchase record.
///
/// The sign of the contribution to profit comes from `kind`; `amount` is
/// always non-negative once the record is inside a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar day of the transaction (ISO `YYYY-MM-DD` on the wire)
    pub date: NaiveDate,

    /// Sale or Purchase
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Crop or item label, matched case-sensitively
    pub crop: String,

    /// Money amount, never negative
    pub amount: f64,
}

impl Transaction {
    /// Build a record, substituting defaults for a blank crop or an invalid amount.
    pub fn new(kind: TransactionKind, crop: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            date,
            kind,
            crop: crop.into(),
            amount,
        }
        .normalized()
    }

    /// Shorthand for a sale.
    pub fn sale(crop: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Sale, crop, amount, date)
    }

    /// Shorthand for a purchase.
    pub fn purchase(crop: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Purchase, crop, amount, date)
    }

    /// Signed contribution to profit.
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }

    /// Re-apply the storage invariants: trimmed non-empty crop, finite non-negative amount.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.crop.trim();
        if trimmed.is_empty() {
            self.crop = UNKNOWN_CROP.to_string();
        } else if trimmed.len() != self.crop.len() {
            self.crop = trimmed.to_string();
        }
        self.amount = sanitize_amount(self.amount);
        self
    }
}

/// Raw form values, as typed by the user.
///
/// Nothing here is trusted; [`TransactionInput::normalize`] turns it into a
/// [`Transaction`] without ever failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub crop: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub date: Option<String>,
}

impl TransactionInput {
    pub fn new(
        kind: TransactionKind,
        crop: impl Into<String>,
        amount: impl Into<String>,
        date: Option<String>,
    ) -> Self {
        Self {
            kind,
            crop: crop.into(),
            amount: amount.into(),
            date,
        }
    }

    /// Convert to a record.
    ///
    /// - blank crop → `"Unknown"`
    /// - amount that is not a finite non-negative number → `0`
    /// - missing, blank or unparsable date → `today`
    pub fn normalize(&self, today: NaiveDate) -> Transaction {
        let amount = match self.amount.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                if !self.amount.trim().is_empty() {
                    tracing::warn!(amount = %self.amount, "unparsable amount, defaulting to 0");
                }
                0.0
            }
        };

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| {
                tracing::warn!(date = raw, "unparsable date, defaulting to today");
                today
            }),
        };

        Transaction::new(self.kind, self.crop.as_str(), amount, date)
    }
}

fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
