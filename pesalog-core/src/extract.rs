//! Kind-specific field extraction.
//!
//! Each kind owns a declarative table of `FieldRule`s: one locating regex
//! (single capture group) per expected field, flagged mandatory or optional.
//! Extraction pulls raw substrings only; typing them is the normalizer's job.

use regex::Regex;

use crate::error::ParseError;
use crate::types::TransactionKind;

/// Fields a notification template can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TransactionId,
    Amount,
    CounterpartyName,
    CounterpartyIdentifier,
    Balance,
    TransactionCost,
    DailyLimit,
    Date,
    Time,
    FailureReason,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::TransactionId => "transaction_id",
            Field::Amount => "amount",
            Field::CounterpartyName => "counterparty_name",
            Field::CounterpartyIdentifier => "counterparty_identifier",
            Field::Balance => "balance",
            Field::TransactionCost => "transaction_cost",
            Field::DailyLimit => "daily_limit",
            Field::Date => "date",
            Field::Time => "time",
            Field::FailureReason => "failure_reason",
        }
    }
}

/// One locating rule: where `field` sits in this kind's template.
struct FieldRule {
    field: Field,
    pattern: &'static str,
    required: bool,
}

// Anchors shared across templates.
const P_TRANSACTION_ID: &str = r"^\s*([A-Z0-9]{10})\s+(?i:Confirmed|Failed)";
const P_DATE: &str = r"(?i)\bon\s+(\d{1,2}/\d{1,2}/\d{2,4})\b";
const P_TIME: &str = r"(?i)\bat\s+(\d{1,2}:\d{2}(?:\s*[AP]M)?)\b";
const P_BALANCE: &str = r"(?i)\bbalance\s+is\s+Ksh\s*([\d,]+(?:\.\d+)?)";
const P_COST: &str = r"(?i)\btransaction\s+cost,?\s*Ksh\s*([\d,]+(?:\.\d+)?)";
const P_DAILY_LIMIT: &str =
    r"(?i)\bamount you can transact within the day is\s*(?:Ksh\s*)?([\d,]+(?:\.\d+)?)";

const RECEIVED_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Amount,
        pattern: r"(?i)\byou have received\s+Ksh\s*([\d,]+(?:\.\d+)?)",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyName,
        pattern: r"(?i)\bfrom\s+([^0-9]+?)(?:\s+\d|\s+on\b)",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyIdentifier,
        pattern: r"(?i)\bfrom\s+[^0-9]+?\s+(\d{9,12})\b",
        required: false,
    },
    FieldRule { field: Field::Balance, pattern: P_BALANCE, required: false },
    FieldRule { field: Field::TransactionCost, pattern: P_COST, required: false },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const SENT_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Amount,
        pattern: r"(?i)\bKsh\s*([\d,]+(?:\.\d+)?)\s+sent to\b",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyName,
        pattern: r"(?i)\bsent to\s+([^0-9]+?)(?:\s+\d|\s+on\b)",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyIdentifier,
        pattern: r"(?i)\bsent to\s+[^0-9]+?\s+(\d{9,12})\b",
        required: false,
    },
    FieldRule { field: Field::Balance, pattern: P_BALANCE, required: false },
    FieldRule { field: Field::TransactionCost, pattern: P_COST, required: false },
    FieldRule { field: Field::DailyLimit, pattern: P_DAILY_LIMIT, required: false },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const MERCHANT_PAYMENT_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Amount,
        pattern: r"(?i)\bKsh\s*([\d,]+(?:\.\d+)?)\s+paid to\b",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyName,
        pattern: r"(?i)\bpaid to\s+(.+?)(?:\s+on\b|\.)",
        required: true,
    },
    FieldRule { field: Field::Balance, pattern: P_BALANCE, required: false },
    FieldRule { field: Field::TransactionCost, pattern: P_COST, required: false },
    FieldRule { field: Field::DailyLimit, pattern: P_DAILY_LIMIT, required: false },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const PAYBILL_PAYMENT_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Amount,
        pattern: r"(?i)\bKsh\s*([\d,]+(?:\.\d+)?)\s+sent to\b",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyName,
        pattern: r"(?i)\bsent to\s+(.+?)\s+for account\b",
        required: true,
    },
    FieldRule {
        field: Field::CounterpartyIdentifier,
        pattern: r"(?i)\bfor account\s+([\w-]+)",
        required: true,
    },
    FieldRule { field: Field::Balance, pattern: P_BALANCE, required: false },
    FieldRule { field: Field::TransactionCost, pattern: P_COST, required: false },
    FieldRule { field: Field::DailyLimit, pattern: P_DAILY_LIMIT, required: false },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const AIRTIME_PURCHASE_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Amount,
        pattern: r"(?i)\bbought\s+Ksh\s*([\d,]+(?:\.\d+)?)\s+of airtime\b",
        required: true,
    },
    FieldRule { field: Field::Balance, pattern: P_BALANCE, required: false },
    FieldRule { field: Field::TransactionCost, pattern: P_COST, required: false },
    FieldRule { field: Field::DailyLimit, pattern: P_DAILY_LIMIT, required: false },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const WITHDRAWAL_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Amount,
        pattern: r"(?i)\bwithdraw\s*Ksh\s*([\d,]+(?:\.\d+)?)",
        required: true,
    },
    FieldRule { field: Field::Balance, pattern: P_BALANCE, required: false },
    FieldRule { field: Field::TransactionCost, pattern: P_COST, required: false },
    FieldRule { field: Field::DailyLimit, pattern: P_DAILY_LIMIT, required: false },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const BALANCE_CHECK_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::Balance,
        pattern: r"(?i)\bM-PESA Account\s*:\s*Ksh\s*([\d,]+(?:\.\d+)?)",
        required: true,
    },
    FieldRule { field: Field::Date, pattern: P_DATE, required: true },
    FieldRule { field: Field::Time, pattern: P_TIME, required: true },
];

const FAILED_RULES: &[FieldRule] = &[
    FieldRule { field: Field::TransactionId, pattern: P_TRANSACTION_ID, required: false },
    FieldRule {
        field: Field::FailureReason,
        pattern: r"(?i)\b((?:insufficient (?:funds|balance)|you do not have enough money|you have insufficient funds|you have reached your [a-z -]*limit)[^.]*)",
        required: true,
    },
    FieldRule { field: Field::Date, pattern: P_DATE, required: false },
    FieldRule { field: Field::Time, pattern: P_TIME, required: false },
];

fn rules_for(kind: TransactionKind) -> &'static [FieldRule] {
    match kind {
        TransactionKind::Received => RECEIVED_RULES,
        TransactionKind::Sent => SENT_RULES,
        TransactionKind::MerchantPayment => MERCHANT_PAYMENT_RULES,
        TransactionKind::PaybillPayment => PAYBILL_PAYMENT_RULES,
        TransactionKind::AirtimePurchase => AIRTIME_PURCHASE_RULES,
        TransactionKind::Withdrawal => WITHDRAWAL_RULES,
        TransactionKind::BalanceCheck => BALANCE_CHECK_RULES,
        TransactionKind::Failed => FAILED_RULES,
    }
}

/// Raw substrings located in the message, untyped and untrimmed of meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFields {
    pub transaction_id: Option<String>,
    pub amount: Option<String>,
    pub counterparty_name: Option<String>,
    pub counterparty_identifier: Option<String>,
    pub balance: Option<String>,
    pub transaction_cost: Option<String>,
    pub daily_limit: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub failure_reason: Option<String>,
}

impl RawFields {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::TransactionId => self.transaction_id = Some(value),
            Field::Amount => self.amount = Some(value),
            Field::CounterpartyName => self.counterparty_name = Some(value),
            Field::CounterpartyIdentifier => self.counterparty_identifier = Some(value),
            Field::Balance => self.balance = Some(value),
            Field::TransactionCost => self.transaction_cost = Some(value),
            Field::DailyLimit => self.daily_limit = Some(value),
            Field::Date => self.date = Some(value),
            Field::Time => self.time = Some(value),
            Field::FailureReason => self.failure_reason = Some(value),
        }
    }
}

#[derive(Debug)]
struct CompiledFieldRule {
    field: Field,
    pattern: Regex,
    required: bool,
}

/// Table-driven extractor, one compiled rule set per kind.
#[derive(Debug)]
pub struct Extractor {
    // Indexed by `kind as usize`; built over `TransactionKind::ALL` in order.
    tables: Vec<Vec<CompiledFieldRule>>,
}

impl Extractor {
    /// Compile every kind's rule table. Fails only if a built-in pattern is invalid.
    pub fn new() -> Result<Self, regex::Error> {
        let mut tables = Vec::with_capacity(TransactionKind::ALL.len());
        for kind in TransactionKind::ALL {
            let rules = rules_for(kind);
            let mut compiled = Vec::with_capacity(rules.len());
            for rule in rules {
                compiled.push(CompiledFieldRule {
                    field: rule.field,
                    pattern: Regex::new(rule.pattern)?,
                    required: rule.required,
                });
            }
            tables.push(compiled);
        }
        Ok(Self { tables })
    }

    /// Apply `kind`'s rule set to `text`, pulling one raw substring per field.
    ///
    /// A mandatory field whose anchor is absent fails with `MissingField`;
    /// optional fields are simply left unset.
    pub fn extract(&self, text: &str, kind: TransactionKind) -> Result<RawFields, ParseError> {
        let mut raw = RawFields::default();
        for rule in &self.tables[kind as usize] {
            match rule.pattern.captures(text).and_then(|caps| caps.get(1)) {
                Some(m) => raw.set(rule.field, m.as_str().trim().to_string()),
                None if rule.required => {
                    return Err(ParseError::MissingField { kind, field: rule.field });
                }
                None => {}
            }
        }
        Ok(raw)
    }
}
