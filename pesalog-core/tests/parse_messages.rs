//! End-to-end walk of every notification template through `MessageParser::parse`.

use chrono::NaiveDate;
use pesalog_core::{
    MessageParser, ParseError, TransactionKind, TransactionRecord, TransactionStatus,
};
use rust_decimal::Decimal;

fn parser() -> MessageParser {
    MessageParser::new().expect("built-in patterns compile")
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn received_scenario() {
    let text = "QCF4XS8VL0 Confirmed. You have received Ksh500.00 from JOHN DOE 254712345678 on 12/3/24 at 2:15 PM. New balance is Ksh1,500.00.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::Received);
    assert_eq!(rec.transaction_id.as_deref(), Some("QCF4XS8VL0"));
    assert_eq!(rec.amount, Some(dec("500.00")));
    assert_eq!(rec.counterparty_name.as_deref(), Some("JOHN DOE"));
    assert_eq!(rec.counterparty_identifier.as_deref(), Some("254712345678"));
    assert_eq!(rec.balance, Some(dec("1500.00")));
    assert_eq!(rec.status, TransactionStatus::Success);
    assert_eq!(
        rec.timestamp,
        Some(
            NaiveDate::from_ymd_opt(2024, 3, 12)
                .unwrap()
                .and_hms_opt(14, 15, 0)
                .unwrap()
        )
    );
}

#[test]
fn received_without_reference_code_still_parses() {
    let text = "You have received Ksh500.00 from JOHN DOE 254712345678 on 12/3/24 at 2:15 PM. New balance is Ksh1,500.00.";
    let rec = parser().parse(text).unwrap();
    assert_eq!(rec.kind, TransactionKind::Received);
    assert_eq!(rec.transaction_id, None);
    assert_eq!(rec.status, TransactionStatus::Success);
}

#[test]
fn sent_scenario() {
    let text = "HIJ234KLM5 Confirmed. Ksh500.00 sent to JANE WANJIKU 254722000111 on 12/3/24 at 2:15 PM. New M-PESA balance is Ksh1,000.00. Transaction cost, Ksh7.00. Amount you can transact within the day is 299,500.00.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::Sent);
    assert_eq!(rec.counterparty_name.as_deref(), Some("JANE WANJIKU"));
    assert_eq!(rec.counterparty_identifier.as_deref(), Some("254722000111"));
    assert_eq!(rec.amount, Some(dec("500.00")));
    assert_eq!(rec.balance, Some(dec("1000.00")));
    assert_eq!(rec.transaction_cost, Some(dec("7.00")));
    assert_eq!(rec.daily_limit, Some(dec("299500.00")));
}

#[test]
fn merchant_payment_scenario() {
    let text = "DEF456GHI7 Confirmed. Ksh300.00 paid to NAIVAS SUPERMARKET on 5/6/24 at 1:20 PM. New M-PESA balance is Ksh700.00.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::MerchantPayment);
    assert_eq!(rec.counterparty_name.as_deref(), Some("NAIVAS SUPERMARKET"));
    assert_eq!(rec.counterparty_identifier, None);
    assert_eq!(rec.amount, Some(dec("300.00")));
}

#[test]
fn paybill_payment_scenario() {
    let text = "BCD901EFG2 Confirmed. Ksh1,200.00 sent to KPLC PREPAID for account 54401234567 on 3/7/24 at 6:45 PM. New M-PESA balance is Ksh2,800.00. Transaction cost, Ksh23.00.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::PaybillPayment);
    assert_eq!(rec.counterparty_name.as_deref(), Some("KPLC PREPAID"));
    assert_eq!(rec.counterparty_identifier.as_deref(), Some("54401234567"));
    assert_eq!(rec.amount, Some(dec("1200.00")));
    assert_eq!(rec.transaction_cost, Some(dec("23.00")));
}

#[test]
fn airtime_purchase_has_no_counterparty() {
    let text = "VWX678YZA9 Confirmed. You bought Ksh100.00 of airtime on 7/7/24 at 8:30 AM. New M-PESA balance is Ksh900.00. Transaction cost, Ksh0.00.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::AirtimePurchase);
    assert_eq!(rec.amount, Some(dec("100.00")));
    assert_eq!(rec.counterparty_name, None);
    assert_eq!(rec.counterparty_identifier, None);
    assert_eq!(rec.transaction_cost, Some(dec("0.00")));
}

#[test]
fn withdrawal_scenario() {
    let text = "JKL012MNO3 Confirmed. on 15/6/24 at 10:05 AM Withdraw Ksh2,000.00 from 482910 - KAMAU AGENCIES. New M-PESA balance is Ksh3,250.00. Transaction cost, Ksh29.00.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::Withdrawal);
    assert_eq!(rec.amount, Some(dec("2000.00")));
    assert_eq!(rec.counterparty_name, None);
    assert_eq!(rec.balance, Some(dec("3250.00")));
    assert_eq!(
        rec.timestamp,
        Some(
            NaiveDate::from_ymd_opt(2024, 6, 15)
                .unwrap()
                .and_hms_opt(10, 5, 0)
                .unwrap()
        )
    );
}

#[test]
fn balance_check_has_balance_but_no_amount() {
    let text = "PQR345STU6 Confirmed. Your account balance was: M-PESA Account : Ksh1,500.00 on 20/6/24 at 9:00 AM.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::BalanceCheck);
    assert_eq!(rec.amount, None);
    assert_eq!(rec.balance, Some(dec("1500.00")));
}

#[test]
fn failed_scenario() {
    let text = "NOP567QRS8 Failed. Insufficient balance in your M-PESA account to send Ksh500.00 to JANE WANJIKU.";
    let rec = parser().parse(text).unwrap();

    assert_eq!(rec.kind, TransactionKind::Failed);
    assert_eq!(rec.status, TransactionStatus::Failed);
    assert_eq!(rec.amount, None);
    let reason = rec.failure_reason.unwrap();
    assert!(reason.contains("Insufficient balance"), "reason: {reason}");
}

#[test]
fn unrecognized_message() {
    let text = "Hello, this is not a transaction message.";
    match parser().parse(text) {
        Err(ParseError::UnrecognizedMessage(t)) => assert_eq!(t, text),
        other => panic!("expected UnrecognizedMessage, got {other:?}"),
    }
}

#[test]
fn parse_is_deterministic() {
    let text = "QCF4XS8VL0 Confirmed. You have received Ksh500.00 from JOHN DOE 254712345678 on 12/3/24 at 2:15 PM. New balance is Ksh1,500.00.";
    let p = parser();
    let first = p.parse(text).unwrap();
    for _ in 0..3 {
        assert_eq!(p.parse(text).unwrap(), first);
    }
}

#[test]
fn raw_message_round_trips_byte_for_byte() {
    let texts = [
        "QCF4XS8VL0 Confirmed. You have received Ksh500.00 from JOHN DOE 254712345678 on 12/3/24 at 2:15 PM. New balance is Ksh1,500.00.",
        "NOP567QRS8 Failed. Insufficient funds in your M-PESA account to send Ksh500.00 to JANE WANJIKU.",
    ];
    let p = parser();
    for text in texts {
        assert_eq!(p.parse(text).unwrap().raw_message, text);
    }
}

#[test]
fn unreal_timestamp_rejects_the_record() {
    let text = "QCF4XS8VL0 Confirmed. You have received Ksh500.00 from JOHN DOE on 31/6/24 at 2:15 PM.";
    assert!(matches!(
        parser().parse(text),
        Err(ParseError::Normalization(_))
    ));
}

#[test]
fn record_survives_serde_round_trip() {
    let text = "BCD901EFG2 Confirmed. Ksh1,200.00 sent to KPLC PREPAID for account 54401234567 on 3/7/24 at 6:45 PM. New M-PESA balance is Ksh2,800.00. Transaction cost, Ksh23.00.";
    let rec = parser().parse(text).unwrap();
    let json = serde_json::to_string(&rec).unwrap();
    let back: TransactionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}
