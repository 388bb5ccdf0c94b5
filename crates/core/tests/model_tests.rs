use chrono::NaiveDate;
use green_sense_core::errors::CoreError;
use green_sense_core::models::chart::TrendChart;
use green_sense_core::models::ledger::Ledger;
use green_sense_core::models::settings::{Settings, MAX_TREND_DAYS};
use green_sense_core::models::transaction::{
    Transaction, TransactionInput, TransactionKind, UNKNOWN_CROP,
};
use green_sense_core::models::window::{DateWindow, MAX_WINDOW_DAYS};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionKind
// ═══════════════════════════════════════════════════════════════════

mod transaction_kind {
    use super::*;

    #[test]
    fn display_is_capitalised() {
        assert_eq!(TransactionKind::Sale.to_string(), "Sale");
        assert_eq!(TransactionKind::Purchase.to_string(), "Purchase");
    }

    #[test]
    fn as_str_is_lowercase() {
        assert_eq!(TransactionKind::Sale.as_str(), "sale");
        assert_eq!(TransactionKind::Purchase.as_str(), "purchase");
    }

    #[test]
    fn sign() {
        assert_eq!(TransactionKind::Sale.sign(), 1.0);
        assert_eq!(TransactionKind::Purchase.sign(), -1.0);
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!("sale".parse::<TransactionKind>().unwrap(), TransactionKind::Sale);
        assert_eq!(" PURCHASE ".parse::<TransactionKind>().unwrap(), TransactionKind::Purchase);
        assert_eq!("Sale".parse::<TransactionKind>().unwrap(), TransactionKind::Sale);
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("refund".parse::<TransactionKind>().is_err());
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TransactionKind::Sale).unwrap(), "\"sale\"");
        let back: TransactionKind = serde_json::from_str("\"purchase\"").unwrap();
        assert_eq!(back, TransactionKind::Purchase);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn new_keeps_valid_values() {
        let t = Transaction::sale("Tomato", 1200.0, d(2025, 3, 1));
        assert_eq!(t.kind, TransactionKind::Sale);
        assert_eq!(t.crop, "Tomato");
        assert_eq!(t.amount, 1200.0);
        assert_eq!(t.date, d(2025, 3, 1));
    }

    #[test]
    fn blank_crop_becomes_unknown() {
        assert_eq!(Transaction::sale("", 1.0, d(2025, 3, 1)).crop, UNKNOWN_CROP);
        assert_eq!(Transaction::sale("   ", 1.0, d(2025, 3, 1)).crop, "Unknown");
    }

    #[test]
    fn crop_is_trimmed_but_case_is_kept() {
        assert_eq!(Transaction::sale("  basil ", 1.0, d(2025, 3, 1)).crop, "basil");
    }

    #[test]
    fn invalid_amounts_become_zero() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -5.0] {
            assert_eq!(Transaction::purchase("Seed", bad, d(2025, 3, 1)).amount, 0.0);
        }
    }

    #[test]
    fn signed_amount_follows_kind() {
        assert_eq!(Transaction::sale("A", 10.0, d(2025, 3, 1)).signed_amount(), 10.0);
        assert_eq!(Transaction::purchase("A", 10.0, d(2025, 3, 1)).signed_amount(), -10.0);
    }

    #[test]
    fn json_uses_type_key_and_iso_date() {
        let t = Transaction::purchase("Fertilizer", 450.0, d(2025, 3, 2));
        let value: serde_json::Value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["type"], "purchase");
        assert_eq!(value["date"], "2025-03-02");
        assert_eq!(value["crop"], "Fertilizer");
        assert_eq!(value["amount"], 450.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionInput
// ═══════════════════════════════════════════════════════════════════

mod transaction_input {
    use super::*;

    #[test]
    fn well_formed_input() {
        let input = TransactionInput::new(
            TransactionKind::Sale,
            "Tomato",
            "1200.50",
            Some("2025-03-01".into()),
        );
        let t = input.normalize(d(2025, 3, 10));
        assert_eq!(t, Transaction::sale("Tomato", 1200.5, d(2025, 3, 1)));
    }

    #[test]
    fn everything_missing_is_defaulted() {
        let input = TransactionInput::new(TransactionKind::Purchase, "", "NaN", None);
        let today = d(2025, 3, 10);
        let t = input.normalize(today);
        assert_eq!(t.kind, TransactionKind::Purchase);
        assert_eq!(t.crop, "Unknown");
        assert_eq!(t.amount, 0.0);
        assert_eq!(t.date, today);
    }

    #[test]
    fn non_numeric_amount_is_zero() {
        for raw in ["", "abc", "12abc", "inf", "-3"] {
            let input = TransactionInput::new(TransactionKind::Sale, "Basil", raw, None);
            assert_eq!(input.normalize(d(2025, 3, 10)).amount, 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn thousands_separator_is_not_a_number() {
        let input = TransactionInput::new(TransactionKind::Sale, "Basil", "1,200", None);
        assert_eq!(input.normalize(d(2025, 3, 10)).amount, 0.0);
    }

    #[test]
    fn amount_is_trimmed() {
        let input = TransactionInput::new(TransactionKind::Sale, "Basil", " 42.5 ", None);
        assert_eq!(input.normalize(d(2025, 3, 10)).amount, 42.5);
    }

    #[test]
    fn blank_or_bad_date_is_today() {
        let today = d(2025, 3, 10);
        for raw in ["", "  ", "03/01/2025", "2025-13-01"] {
            let input = TransactionInput::new(TransactionKind::Sale, "Basil", "1", Some(raw.into()));
            assert_eq!(input.normalize(today).date, today, "input {raw:?}");
        }
    }

    #[test]
    fn deserializes_from_partial_form_json() {
        let input: TransactionInput = serde_json::from_str(r#"{"type":"sale"}"#).unwrap();
        let t = input.normalize(d(2025, 3, 10));
        assert_eq!(t.crop, "Unknown");
        assert_eq!(t.amount, 0.0);
        assert_eq!(t.date, d(2025, 3, 10));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ledger
// ═══════════════════════════════════════════════════════════════════

mod ledger {
    use super::*;

    #[test]
    fn new_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.recent_view(10).is_empty());
    }

    #[test]
    fn add_prepends() {
        let mut ledger = Ledger::new();
        ledger.add(Transaction::sale("A", 1.0, d(2025, 1, 1)));
        ledger.add(Transaction::sale("B", 2.0, d(2025, 1, 1)));
        let crops: Vec<&str> = ledger.iter().map(|t| t.crop.as_str()).collect();
        assert_eq!(crops, vec!["B", "A"]);
    }

    #[test]
    fn add_normalizes_hand_built_records() {
        let mut ledger = Ledger::new();
        ledger.add(Transaction {
            date: d(2025, 1, 1),
            kind: TransactionKind::Sale,
            crop: " ".into(),
            amount: -10.0,
        });
        let stored = ledger.recent_view(1)[0];
        assert_eq!(stored.crop, "Unknown");
        assert_eq!(stored.amount, 0.0);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut ledger = Ledger::new();
        let t = Transaction::sale("A", 1.0, d(2025, 1, 1));
        ledger.add(t.clone());
        ledger.add(t);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn add_batch_keeps_batch_order_in_front() {
        let mut ledger = Ledger::new();
        ledger.add(Transaction::sale("Old", 1.0, d(2025, 1, 1)));
        ledger.add_batch(vec![
            Transaction::sale("First", 1.0, d(2025, 1, 3)),
            Transaction::sale("Second", 1.0, d(2025, 1, 2)),
        ]);
        let crops: Vec<&str> = ledger.iter().map(|t| t.crop.as_str()).collect();
        assert_eq!(crops, vec!["First", "Second", "Old"]);
    }

    #[test]
    fn clear_empties() {
        let mut ledger = Ledger::sample(d(2025, 3, 10));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger, Ledger::new());
    }

    #[test]
    fn recent_view_caps_and_keeps_order() {
        let mut ledger = Ledger::new();
        for i in 0..5 {
            ledger.add(Transaction::sale(format!("C{i}"), 1.0, d(2025, 1, 1)));
        }
        let recent: Vec<&str> = ledger.recent_view(3).iter().map(|t| t.crop.as_str()).collect();
        assert_eq!(recent, vec!["C4", "C3", "C2"]);
        assert_eq!(ledger.recent_view(100).len(), 5);
        assert!(ledger.recent_view(0).is_empty());
    }

    #[test]
    fn sample_data() {
        let today = d(2025, 3, 10);
        let ledger = Ledger::sample(today);
        let records: Vec<&Transaction> = ledger.iter().collect();
        assert_eq!(records.len(), 3);
        assert_eq!(*records[0], Transaction::sale("Tomato", 1200.0, today));
        assert_eq!(*records[1], Transaction::purchase("Fertilizer", 450.0, d(2025, 3, 9)));
        assert_eq!(*records[2], Transaction::sale("Basil", 600.0, d(2025, 3, 8)));
    }

    #[test]
    fn serializes_as_plain_array() {
        let ledger = Ledger::sample(d(2025, 3, 10));
        let value = serde_json::to_value(&ledger).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["crop"], "Tomato");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DateWindow
// ═══════════════════════════════════════════════════════════════════

mod date_window {
    use super::*;

    #[test]
    fn single_day() {
        let w = DateWindow::new(d(2025, 3, 1), d(2025, 3, 1)).unwrap();
        assert_eq!(w.len(), 1);
        assert_eq!(w.days().collect::<Vec<_>>(), vec![d(2025, 3, 1)]);
    }

    #[test]
    fn days_are_oldest_first_and_inclusive() {
        let w = DateWindow::new(d(2025, 2, 27), d(2025, 3, 2)).unwrap();
        assert_eq!(
            w.days().collect::<Vec<_>>(),
            vec![d(2025, 2, 27), d(2025, 2, 28), d(2025, 3, 1), d(2025, 3, 2)]
        );
        assert_eq!(w.len(), 4);
        assert!(w.contains(d(2025, 2, 27)));
        assert!(w.contains(d(2025, 3, 2)));
        assert!(!w.contains(d(2025, 3, 3)));
    }

    #[test]
    fn reversed_range_fails() {
        assert!(DateWindow::new(d(2025, 3, 2), d(2025, 3, 1)).is_err());
    }

    #[test]
    fn too_long_fails() {
        let start = d(2000, 1, 1);
        let end = start + chrono::Duration::days(MAX_WINDOW_DAYS);
        assert!(DateWindow::new(start, end).is_err());
        let end_ok = start + chrono::Duration::days(MAX_WINDOW_DAYS - 1);
        assert!(DateWindow::new(start, end_ok).is_ok());
    }

    #[test]
    fn trailing_seven_days() {
        let w = DateWindow::trailing(d(2025, 3, 10), 7).unwrap();
        assert_eq!(w.start(), d(2025, 3, 4));
        assert_eq!(w.end(), d(2025, 3, 10));
        assert_eq!(w.len(), 7);
    }

    #[test]
    fn deserializes_valid_window() {
        let w: DateWindow =
            serde_json::from_str(r#"{"start":"2025-03-05","end":"2025-03-10"}"#).unwrap();
        assert_eq!(w, DateWindow::new(d(2025, 3, 5), d(2025, 3, 10)).unwrap());
        assert_eq!(w.len(), 6);
    }

    #[test]
    fn reversed_window_fails_to_deserialize() {
        let result =
            serde_json::from_str::<DateWindow>(r#"{"start":"2025-03-10","end":"2025-03-05"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn oversized_window_fails_to_deserialize() {
        let result =
            serde_json::from_str::<DateWindow>(r#"{"start":"2000-01-01","end":"2025-01-01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_then_deserialize() {
        let w = DateWindow::trailing(d(2025, 3, 10), 7).unwrap();
        let back: DateWindow = serde_json::from_str(&serde_json::to_string(&w).unwrap()).unwrap();
        assert_eq!(back, w);
        assert!(!back.is_empty());
    }

    #[test]
    fn trailing_zero_days_fails() {
        assert!(DateWindow::trailing(d(2025, 3, 10), 0).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings & Chart DTOs
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "₱");
        assert_eq!(s.recent_limit, 50);
        assert_eq!(s.trend_days, 7);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.recent_limit, 50);
        assert_eq!(s.trend_days, 7);
    }

    #[test]
    fn json_roundtrip() {
        let s = Settings {
            currency_symbol: "€".into(),
            recent_limit: 10,
            trend_days: 30,
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_json_fails() {
        for json in [
            r#"{"trend_days":0}"#,
            r#"{"trend_days":367}"#,
            r#"{"recent_limit":0}"#,
            r#"{"currency_symbol":""}"#,
            r#"{"trend_days":0,"recent_limit":0,"currency_symbol":""}"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(CoreError::ValidationError(_))),
                "json {json}"
            );
        }
    }

    #[test]
    fn boundary_trend_days_accepted() {
        assert_eq!(Settings::from_json(r#"{"trend_days":366}"#).unwrap().trend_days, MAX_TREND_DAYS);
        assert_eq!(Settings::from_json(r#"{"trend_days":1}"#).unwrap().trend_days, 1);
    }

    #[test]
    fn malformed_json_fails() {
        assert!(Settings::from_json("{not json").is_err());
    }
}

mod trend_chart {
    use super::*;

    #[test]
    fn default_is_empty() {
        let chart = TrendChart::default();
        assert!(chart.is_empty());
        assert_eq!(chart.len(), 0);
    }
}
