use crate::models::analytics::CropProfit;
use crate::models::transaction::TransactionKind;

/// Shown in place of a top crop when there is nothing to rank.
pub const NO_TOP_CROP: &str = "—";

/// Round to two fraction digits, never producing `-0.0`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Display helpers for the presentation layer.
///
/// Not part of the ledger contract: the ledger hands out raw numbers and
/// labels, and the adapter decides how to show them.
pub struct FormatService;

impl FormatService {
    pub fn new() -> Self {
        Self
    }

    /// `1350.0` with `"₱"` → `"₱1350.00"`; negatives put the sign before the symbol.
    pub fn format_currency(&self, amount: f64, symbol: &str) -> String {
        let rounded = round2(amount);
        if rounded < 0.0 {
            format!("-{symbol}{:.2}", -rounded)
        } else {
            format!("{symbol}{rounded:.2}")
        }
    }

    /// `"Tomato (₱1200.00)"`, or `"—"` when there is no top crop.
    pub fn format_top_crop(&self, top: Option<&CropProfit>, symbol: &str) -> String {
        match top {
            Some(cp) => format!("{} ({})", cp.crop, self.format_currency(cp.profit, symbol)),
            None => NO_TOP_CROP.to_string(),
        }
    }

    /// Capitalised kind label for table cells.
    pub fn kind_label(&self, kind: TransactionKind) -> String {
        kind.to_string()
    }

    /// Escape text for safe insertion into HTML.
    pub fn escape_html(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}
