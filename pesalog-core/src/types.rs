//! Record types shared by every stage of the parser.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction category a notification represents.
///
/// `ALL` is in declaration order; the extractor indexes its rule tables with
/// `kind as usize`, so the two must stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Received,
    Sent,
    MerchantPayment,
    PaybillPayment,
    AirtimePurchase,
    Withdrawal,
    BalanceCheck,
    Failed,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 8] = [
        TransactionKind::Received,
        TransactionKind::Sent,
        TransactionKind::MerchantPayment,
        TransactionKind::PaybillPayment,
        TransactionKind::AirtimePurchase,
        TransactionKind::Withdrawal,
        TransactionKind::BalanceCheck,
        TransactionKind::Failed,
    ];
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Received => "received",
            TransactionKind::Sent => "sent",
            TransactionKind::MerchantPayment => "merchant_payment",
            TransactionKind::PaybillPayment => "paybill_payment",
            TransactionKind::AirtimePurchase => "airtime_purchase",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::BalanceCheck => "balance_check",
            TransactionKind::Failed => "failed",
        })
    }
}

/// Whether the notification reports a completed or a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
        })
    }
}

/// Structured output of a successful parse (one per notification).
///
/// Constructed fresh per input line; the caller owns it afterwards. Amounts
/// and balances carry two decimal places and are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    /// Reference code prefixing the notification (`QCF4XS8VL0 Confirmed. ...`).
    pub transaction_id: Option<String>,
    /// Transacted amount; absent for a pure balance check and for failed operations.
    pub amount: Option<Decimal>,
    /// Other party named by the message (sender, recipient, merchant, paybill).
    pub counterparty_name: Option<String>,
    /// Phone number or paybill account associated with the counterparty.
    pub counterparty_identifier: Option<String>,
    /// Resulting account balance, if the message reports one.
    pub balance: Option<Decimal>,
    /// Fee charged for the operation, if the message reports one.
    pub transaction_cost: Option<Decimal>,
    /// Remaining same-day transaction allowance, if the message reports one.
    pub daily_limit: Option<Decimal>,
    /// Calendar date and time quoted by the message.
    pub timestamp: Option<NaiveDateTime>,
    pub status: TransactionStatus,
    /// Cause text for failed operations ("Insufficient funds in ...").
    pub failure_reason: Option<String>,
    /// Original input text, byte for byte.
    pub raw_message: String,
}
